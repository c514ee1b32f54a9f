//! 이메일 인증코드 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 인증코드 발송 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuthCodeCreateRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub to_email: String,
}

/// 인증코드 검증 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuthCodeVerifyRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub to_email: String,

    #[validate(length(equal = 6, message = "인증코드는 6자리여야 합니다"))]
    pub auth_code: String,
}

/// 이메일 중복 확인 쿼리
#[derive(Debug, Clone, Deserialize)]
pub struct EmailValidateQuery {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_request_code_length() {
        let request = AuthCodeVerifyRequest {
            to_email: "alice@example.com".to_string(),
            auth_code: "aB3xY9".to_string(),
        };
        assert!(request.validate().is_ok());

        let short = AuthCodeVerifyRequest {
            to_email: "alice@example.com".to_string(),
            auth_code: "aB3".to_string(),
        };
        assert!(short.validate().is_err());
    }
}
