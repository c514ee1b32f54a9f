//! 토큰 리포지토리
//!
//! 로그인 시 발급한 리프레시 토큰과 로그아웃된 액세스 토큰 블랙리스트를
//! Redis에 저장합니다. 두 키 모두 TTL로 수명이 관리됩니다.
//!
//! - `refresh_token:{user_id}` - 사용자당 하나의 리프레시 토큰
//! - `blacklist_token:{hash}` - 로그아웃 처리된 액세스 토큰

use std::sync::Arc;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use singleton_macro::repository;
use crate::caching::redis::RedisClient;
use crate::core::registry::Repository;
use crate::errors::AppError;

/// Redis에 저장되는 리프레시 토큰 레코드
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenInfo {
    pub user_id: String,
    pub auth_provider: String,
    pub login_at: i64,
    pub refresh_token: String,
    pub expires_at: i64,
}

#[repository(name = "token", collection = "tokens")]
pub struct TokenRepository {
    redis: Arc<RedisClient>,
}

impl TokenRepository {
    fn refresh_key(user_id: &str) -> String {
        format!("refresh_token:{}", user_id)
    }

    fn blacklist_key(token: &str) -> String {
        format!("blacklist_token:{}", Self::hash_token(token))
    }

    /// 토큰 원문 대신 해시를 키로 사용합니다.
    fn hash_token(token: &str) -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        token.hash(&mut hasher);
        format!("{:016x}", hasher.finish())
    }

    pub async fn store_refresh_token(
        &self,
        user_id: &str,
        auth_provider: &str,
        refresh_token: &str,
        ttl_seconds: u64,
    ) -> Result<(), AppError> {
        if ttl_seconds == 0 {
            return Err(AppError::InternalError("리프레시 토큰 TTL이 0입니다".to_string()));
        }

        // Redis 키가 즉시 만료되는 것을 막기 위한 하한
        let safe_ttl = ttl_seconds.max(60);

        let now = Utc::now().timestamp();
        let token_info = RefreshTokenInfo {
            user_id: user_id.to_string(),
            auth_provider: auth_provider.to_string(),
            login_at: now,
            refresh_token: refresh_token.to_string(),
            expires_at: now + safe_ttl as i64,
        };

        self.redis
            .set_with_expiry(&Self::refresh_key(user_id), &token_info, safe_ttl)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        log::info!("리프레시 토큰 저장 완료 - user_id: {}, ttl: {}초", user_id, safe_ttl);
        Ok(())
    }

    pub async fn delete_refresh_token(&self, user_id: &str) -> Result<(), AppError> {
        self.redis
            .del(&Self::refresh_key(user_id))
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }

    /// 액세스 토큰을 남은 수명 동안 블랙리스트에 등록합니다.
    pub async fn blacklist_access_token(
        &self,
        access_token: &str,
        ttl_seconds: u64,
    ) -> Result<(), AppError> {
        let blacklisted_at = Utc::now().timestamp();

        self.redis
            .set_with_expiry(
                &Self::blacklist_key(access_token),
                &blacklisted_at,
                ttl_seconds.max(1),
            )
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        log::info!(
            "액세스 토큰 블랙리스트 등록 - 토큰 해시: {}, TTL: {}초",
            Self::hash_token(access_token),
            ttl_seconds
        );

        Ok(())
    }

    pub async fn is_blacklisted(&self, access_token: &str) -> Result<bool, AppError> {
        self.redis
            .exists(&Self::blacklist_key(access_token))
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_token_is_stable() {
        let first = TokenRepository::hash_token("some-access-token");
        let second = TokenRepository::hash_token("some-access-token");

        assert_eq!(first, second);
        assert_eq!(first.len(), 16);
    }

    #[test]
    fn test_hash_token_differs_per_token() {
        assert_ne!(
            TokenRepository::hash_token("token-a"),
            TokenRepository::hash_token("token-b")
        );
    }

    #[test]
    fn test_key_formats() {
        assert_eq!(
            TokenRepository::refresh_key("665f1c2e8b3e4a0012345678"),
            "refresh_token:665f1c2e8b3e4a0012345678"
        );
        assert!(TokenRepository::blacklist_key("jwt").starts_with("blacklist_token:"));
    }
}
