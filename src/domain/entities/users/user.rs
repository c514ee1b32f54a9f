//! 사용자 엔티티
//!
//! 로컬(이메일/비밀번호) 계정과 카카오 OAuth 계정을 하나의 엔티티로 표현합니다.
//! 카카오 계정은 비밀번호 해시를 가지지 않으며, `{카카오 id}@ustory.com`
//! 형태의 합성 이메일로 식별됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub name: String,
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    pub auth_provider: AuthProvider,
    pub is_active: bool,
    pub is_email_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 이메일/비밀번호 기반 로컬 계정을 생성합니다.
    pub fn new_local(
        email: String,
        name: String,
        nickname: String,
        password_hash: String,
        profile_image_url: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            name,
            nickname,
            password_hash: Some(password_hash),
            auth_provider: AuthProvider::Local,
            is_active: true,
            is_email_verified: false, // 로컬 사용자는 이메일 인증 필요
            profile_image_url,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 카카오 OAuth 계정을 생성합니다.
    ///
    /// 이메일은 카카오 회원번호로부터 합성하며, 비밀번호 해시는 없습니다.
    pub fn new_kakao(
        kakao_id: &str,
        nickname: String,
        profile_image_url: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email: format!("{}@ustory.com", kakao_id),
            name: nickname.clone(),
            nickname,
            password_hash: None, // OAuth 사용자는 비밀번호 없음
            auth_provider: AuthProvider::Kakao,
            is_active: true,
            is_email_verified: true, // 카카오 사용자는 이미 인증됨
            profile_image_url,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn is_local_auth(&self) -> bool {
        matches!(self.auth_provider, AuthProvider::Local)
    }

    pub fn is_kakao_auth(&self) -> bool {
        matches!(self.auth_provider, AuthProvider::Kakao)
    }

    pub fn can_authenticate_with_password(&self) -> bool {
        self.is_local_auth() && self.password_hash.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_local_user() {
        let user = User::new_local(
            "alice@example.com".to_string(),
            "앨리스".to_string(),
            "alice".to_string(),
            "$2b$04$hash".to_string(),
            None,
        );

        assert!(user.id.is_none());
        assert_eq!(user.auth_provider, AuthProvider::Local);
        assert!(user.can_authenticate_with_password());
        assert!(!user.is_email_verified);
        assert!(user.is_active);
    }

    #[test]
    fn test_new_kakao_user() {
        let user = User::new_kakao("12345678", "홍길동".to_string(), None);

        assert_eq!(user.email, "12345678@ustory.com");
        assert_eq!(user.auth_provider, AuthProvider::Kakao);
        assert!(user.is_kakao_auth());
        assert!(user.password_hash.is_none());
        assert!(!user.can_authenticate_with_password());
        assert!(user.is_email_verified);
    }
}
