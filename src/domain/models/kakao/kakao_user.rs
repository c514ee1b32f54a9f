//! 카카오 API 응답 타입
//!
//! 토큰 엔드포인트(`kauth.kakao.com/oauth/token`)와 사용자 정보
//! 엔드포인트(`kapi.kakao.com/v2/user/me`)의 응답 형식을 정의합니다.

use serde::{Deserialize, Serialize};

/// 카카오 로그인 URL 응답
///
/// 기존 로그인 템플릿이 자바스크립트로 조립하던 인가 URL을
/// 백엔드에서 완성하여 내려줍니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KakaoLoginUrlResponse {
    pub login_url: String,
}

/// 카카오 토큰 교환 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KakaoTokenResponse {
    pub access_token: String,
    pub token_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub expires_in: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token_expires_in: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// 카카오 사용자 정보 응답
///
/// `id`는 카카오 회원번호이며, 닉네임과 프로필 이미지는
/// `properties` 객체 아래에 내려옵니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KakaoUserInfo {
    pub id: i64,
    #[serde(default)]
    pub properties: Option<KakaoProperties>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KakaoProperties {
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub thumbnail_image: Option<String>,
}

impl KakaoUserInfo {
    /// 카카오 회원번호를 문자열로 반환합니다.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// 닉네임. 내려오지 않은 경우 회원번호를 대신 사용합니다.
    pub fn nickname(&self) -> String {
        self.properties
            .as_ref()
            .and_then(|p| p.nickname.clone())
            .unwrap_or_else(|| self.id_string())
    }

    pub fn profile_image(&self) -> Option<String> {
        self.properties
            .as_ref()
            .and_then(|p| p.profile_image.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_info_payload() {
        let json = r#"{
            "id": 123456789,
            "connected_at": "2024-05-23T09:00:00Z",
            "properties": {
                "nickname": "홍길동",
                "profile_image": "http://k.kakaocdn.net/img/profile.jpg",
                "thumbnail_image": "http://k.kakaocdn.net/img/thumb.jpg"
            }
        }"#;

        let info: KakaoUserInfo = serde_json::from_str(json).unwrap();

        assert_eq!(info.id, 123456789);
        assert_eq!(info.id_string(), "123456789");
        assert_eq!(info.nickname(), "홍길동");
        assert_eq!(
            info.profile_image(),
            Some("http://k.kakaocdn.net/img/profile.jpg".to_string())
        );
    }

    #[test]
    fn test_parse_user_info_without_properties() {
        let json = r#"{ "id": 42 }"#;

        let info: KakaoUserInfo = serde_json::from_str(json).unwrap();

        // 닉네임 동의 항목이 없는 계정은 회원번호로 대체
        assert_eq!(info.nickname(), "42");
        assert_eq!(info.profile_image(), None);
    }

    #[test]
    fn test_parse_token_response() {
        let json = r#"{
            "access_token": "kakao-access-token",
            "token_type": "bearer",
            "refresh_token": "kakao-refresh-token",
            "expires_in": 21599,
            "refresh_token_expires_in": 5183999
        }"#;

        let token: KakaoTokenResponse = serde_json::from_str(json).unwrap();

        assert_eq!(token.access_token, "kakao-access-token");
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.expires_in, 21599);
        assert_eq!(token.scope, None);
    }
}
