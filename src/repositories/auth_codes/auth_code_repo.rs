//! 인증코드 리포지토리
//!
//! 회원가입 인증코드를 Redis에 이메일 키로 저장합니다.
//! TTL이 지나면 키가 사라지므로 만료 처리가 저장소 레벨에서 끝납니다.

use std::sync::Arc;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use singleton_macro::repository;
use crate::caching::redis::RedisClient;
use crate::core::registry::Repository;
use crate::errors::AppError;

/// Redis에 저장되는 인증코드 레코드
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthCode {
    pub to_email: String,
    pub auth_code: String,
    pub created_at: i64,
}

impl AuthCode {
    pub fn new(to_email: String, auth_code: String) -> Self {
        Self {
            to_email,
            auth_code,
            created_at: Utc::now().timestamp(),
        }
    }
}

#[repository(name = "authcode", collection = "auth_codes")]
pub struct AuthCodeRepository {
    redis: Arc<RedisClient>,
}

impl AuthCodeRepository {
    fn key(email: &str) -> String {
        format!("auth_code:{}", email)
    }

    /// 인증코드를 저장합니다. 같은 이메일로 재요청하면 기존 코드를 덮어씁니다.
    pub async fn save(&self, auth_code: &AuthCode, ttl_seconds: u64) -> Result<(), AppError> {
        self.redis
            .set_with_expiry(&Self::key(&auth_code.to_email), auth_code, ttl_seconds)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        log::info!(
            "인증코드 저장 완료 - 수신자: {}, TTL: {}초",
            auth_code.to_email,
            ttl_seconds
        );

        Ok(())
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<AuthCode>, AppError> {
        self.redis
            .get::<AuthCode>(&Self::key(email))
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }

    pub async fn delete(&self, email: &str) -> Result<(), AppError> {
        self.redis
            .del(&Self::key(email))
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_code_key_format() {
        assert_eq!(
            AuthCodeRepository::key("alice@example.com"),
            "auth_code:alice@example.com"
        );
    }

    #[test]
    fn test_auth_code_roundtrip_serialization() {
        let code = AuthCode::new("alice@example.com".to_string(), "aB3xY9".to_string());
        let json = serde_json::to_string(&code).unwrap();
        let parsed: AuthCode = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.to_email, "alice@example.com");
        assert_eq!(parsed.auth_code, "aB3xY9");
    }
}
