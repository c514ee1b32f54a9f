//! 사용자 응답 DTO

use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::domain::entities::users::user::User;
use crate::config::AuthProvider;

/// 민감 정보(비밀번호 해시)를 제거한 사용자 표현
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub nickname: String,

    pub auth_provider: AuthProvider,

    pub is_kakao_user: bool,

    pub is_active: bool,
    pub is_email_verified: bool,
    pub profile_image_url: Option<String>,
    pub last_login_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            name,
            nickname,
            auth_provider,
            is_active,
            is_email_verified,
            profile_image_url,
            last_login_at,
            created_at,
            updated_at,
            ..
        } = user;

        let is_kakao_user = matches!(auth_provider, AuthProvider::Kakao);

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            email,
            name,
            nickname,
            auth_provider,
            is_kakao_user,
            is_active,
            is_email_verified,
            profile_image_url,
            last_login_at,
            created_at,
            updated_at,
        }
    }
}

/// 회원가입 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub user: UserResponse,
    pub message: String,
}

/// 로그인 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl LoginResponse {
    pub fn new(user: User, access_token: String, expires_in: i64) -> Self {
        Self {
            user: UserResponse::from(user),
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            refresh_token: None,
        }
    }

    pub fn with_refresh_token(
        user: User,
        access_token: String,
        expires_in: i64,
        refresh_token: String,
    ) -> Self {
        Self {
            user: UserResponse::from(user),
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            refresh_token: Some(refresh_token),
        }
    }
}

/// 로그아웃 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_hides_password_hash() {
        let user = User::new_local(
            "alice@example.com".to_string(),
            "앨리스".to_string(),
            "alice".to_string(),
            "$2b$04$hash".to_string(),
            None,
        );

        let response = UserResponse::from(user);
        let json = serde_json::to_string(&response).unwrap();

        assert!(!json.contains("$2b$04$hash"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_kakao_user_flag() {
        let user = User::new_kakao("12345678", "홍길동".to_string(), None);
        let response = UserResponse::from(user);

        assert!(response.is_kakao_user);
        assert_eq!(response.email, "12345678@ustory.com");
    }
}
