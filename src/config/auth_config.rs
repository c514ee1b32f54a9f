//! 인증 관련 설정
//!
//! 카카오 OAuth와 JWT 토큰 발급에 필요한 설정값들을 환경 변수에서 읽어옵니다.
//! 클라이언트 키 등 민감한 값은 기본값 없이 필수로 요구합니다.

use std::env;

/// 카카오 OAuth 설정
///
/// 카카오 개발자 콘솔에서 발급받은 REST API 키와 등록된 Redirect URI를
/// 환경 변수로 주입받습니다. 인가/토큰/사용자 정보 엔드포인트는
/// 카카오 공식 주소를 기본값으로 사용합니다.
pub struct KakaoOAuthConfig;

impl KakaoOAuthConfig {
    /// 카카오 REST API 키 (OAuth client_id로 사용)
    pub fn rest_api_key() -> String {
        env::var("KAKAO_REST_API_KEY")
            .expect("KAKAO_REST_API_KEY must be set")
    }

    /// 카카오 client_secret (콘솔에서 활성화한 경우에만 설정)
    pub fn client_secret() -> Option<String> {
        env::var("KAKAO_CLIENT_SECRET").ok()
    }

    /// 로그인 완료 후 인가 코드를 수신할 Redirect URI
    pub fn login_redirect_uri() -> String {
        env::var("KAKAO_LOGIN_REDIRECT_URI")
            .expect("KAKAO_LOGIN_REDIRECT_URI must be set")
    }

    /// 카카오 계정 로그아웃 후 돌아올 Redirect URI
    pub fn logout_redirect_uri() -> String {
        env::var("KAKAO_LOGOUT_REDIRECT_URI")
            .expect("KAKAO_LOGOUT_REDIRECT_URI must be set")
    }

    pub fn auth_uri() -> String {
        env::var("KAKAO_AUTH_URI")
            .unwrap_or_else(|_| "https://kauth.kakao.com/oauth/authorize".to_string())
    }

    pub fn token_uri() -> String {
        env::var("KAKAO_TOKEN_URI")
            .unwrap_or_else(|_| "https://kauth.kakao.com/oauth/token".to_string())
    }

    pub fn user_info_uri() -> String {
        env::var("KAKAO_USER_INFO_URI")
            .unwrap_or_else(|_| "https://kapi.kakao.com/v2/user/me".to_string())
    }
}

/// JWT 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }

    pub fn refresh_expiration_days() -> i64 {
        env::var("JWT_REFRESH_EXPIRATION_DAYS")
            .unwrap_or_else(|_| "7".to_string())
            .parse()
            .unwrap_or(7)
    }
}

/// 계정 인증 방식
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum AuthProvider {
    /// 이메일/비밀번호 기반 로컬 계정
    Local,

    /// 카카오 OAuth 계정
    Kakao,
}

impl AuthProvider {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "local" => Ok(AuthProvider::Local),
            "kakao" => Ok(AuthProvider::Kakao),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Kakao => "kakao",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_provider_from_string() {
        assert_eq!(AuthProvider::from_str("local").unwrap(), AuthProvider::Local);
        assert_eq!(AuthProvider::from_str("kakao").unwrap(), AuthProvider::Kakao);

        assert_eq!(AuthProvider::from_str("KAKAO").unwrap(), AuthProvider::Kakao);
        assert_eq!(AuthProvider::from_str("Local").unwrap(), AuthProvider::Local);

        assert!(AuthProvider::from_str("google").is_err());
        assert!(AuthProvider::from_str("unknown").is_err());
    }

    #[test]
    fn test_auth_provider_as_string() {
        assert_eq!(AuthProvider::Local.as_str(), "local");
        assert_eq!(AuthProvider::Kakao.as_str(), "kakao");
    }

    #[test]
    fn test_auth_provider_roundtrip() {
        for &provider_str in &["local", "kakao"] {
            let provider = AuthProvider::from_str(provider_str).unwrap();
            assert_eq!(provider.as_str(), provider_str);
        }
    }

    #[test]
    fn test_auth_provider_serialization() {
        let provider = AuthProvider::Kakao;
        let json = serde_json::to_string(&provider).unwrap();
        let deserialized: AuthProvider = serde_json::from_str(&json).unwrap();
        assert_eq!(provider, deserialized);
    }

    #[test]
    fn test_kakao_default_endpoints() {
        if env::var("KAKAO_AUTH_URI").is_err() {
            assert_eq!(
                KakaoOAuthConfig::auth_uri(),
                "https://kauth.kakao.com/oauth/authorize"
            );
        }
        if env::var("KAKAO_TOKEN_URI").is_err() {
            assert_eq!(
                KakaoOAuthConfig::token_uri(),
                "https://kauth.kakao.com/oauth/token"
            );
        }
        if env::var("KAKAO_USER_INFO_URI").is_err() {
            assert_eq!(
                KakaoOAuthConfig::user_info_uri(),
                "https://kapi.kakao.com/v2/user/me"
            );
        }
    }
}
