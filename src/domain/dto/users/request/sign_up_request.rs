//! 회원가입 요청 DTO

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 로컬 회원가입 요청
///
/// JSON 필드는 프론트엔드와의 계약에 따라 camelCase를 사용합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(
        min = 1,
        max = 50,
        message = "이름은 1-50자 사이여야 합니다"
    ))]
    pub name: String,

    #[validate(length(
        min = 2,
        max = 20,
        message = "닉네임은 2-20자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_nickname"))]
    pub nickname: String,

    #[validate(length(
        min = 8,
        message = "비밀번호는 최소 8자 이상이어야 합니다"
    ))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,

    #[serde(default)]
    pub profile_img_url: Option<String>,
}

fn validate_nickname(nickname: &str) -> Result<(), ValidationError> {
    // 한글 닉네임 허용, 공백/특수문자 금지
    if !nickname.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(ValidationError::new("invalid_nickname")
            .with_message("닉네임은 한글, 알파벳, 숫자, 언더스코어만 사용 가능합니다".into()));
    }
    Ok(())
}

fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_alpha = password.chars().any(|c| c.is_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(has_alpha && has_digit) {
        return Err(ValidationError::new("weak_password")
            .with_message("비밀번호는 영문자와 숫자를 모두 포함해야 합니다".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> SignUpRequest {
        SignUpRequest {
            email: "alice@example.com".to_string(),
            name: "앨리스".to_string(),
            nickname: "alice_01".to_string(),
            password: "password1234".to_string(),
            profile_img_url: None,
        }
    }

    #[test]
    fn test_valid_sign_up_request() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut request = valid_request();
        request.email = "not-an-email".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_short_password_rejected() {
        let mut request = valid_request();
        request.password = "pw1".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_digitless_password_rejected() {
        let mut request = valid_request();
        request.password = "passwordonly".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_nickname_with_space_rejected() {
        let mut request = valid_request();
        request.nickname = "al ice".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_hangul_nickname_allowed() {
        let mut request = valid_request();
        request.nickname = "홍길동".to_string();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_camel_case_deserialization() {
        let json = r#"{
            "email": "alice@example.com",
            "name": "앨리스",
            "nickname": "alice",
            "password": "password1234",
            "profileImgUrl": "https://img.ustory.com/profile.png"
        }"#;

        let request: SignUpRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.profile_img_url,
            Some("https://img.ustory.com/profile.png".to_string())
        );
    }
}
