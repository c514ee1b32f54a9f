//! # 토큰 서비스
//!
//! JWT 액세스/리프레시 토큰의 발급과 검증, 로그인/로그아웃 시의
//! Redis 토큰 상태 관리를 담당합니다.
//!
//! - 로그인: 토큰 쌍 발급 + 리프레시 토큰을 Redis에 저장
//! - 로그아웃: 액세스 토큰을 남은 수명 동안 블랙리스트에 등록하고
//!   리프레시 토큰을 삭제

use std::sync::Arc;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use singleton_macro::service;
use crate::{
    config::JwtConfig,
    domain::entities::users::user::User,
    domain::models::token::{TokenClaims, TokenPair},
    repositories::tokens::token_repo::TokenRepository,
    errors::AppError,
};

#[service(name = "token")]
pub struct TokenService {
    token_repo: Arc<TokenRepository>,
}

impl TokenService {
    pub fn generate_access_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(JwtConfig::expiration_hours());

        let claims = TokenClaims {
            sub: user.id_string().ok_or_else(|| {
                AppError::InternalError("사용자 ID가 없습니다".to_string())
            })?,
            auth_provider: user.auth_provider.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let secret = JwtConfig::secret();
        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    pub fn generate_refresh_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::days(JwtConfig::refresh_expiration_days());

        let claims = TokenClaims {
            sub: user.id_string().ok_or_else(|| {
                AppError::InternalError("사용자 ID가 없습니다".to_string())
            })?,
            auth_provider: user.auth_provider.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let secret = JwtConfig::secret();
        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("리프레시 토큰 생성 실패: {}", e)))
    }

    /// 로그인 처리: 토큰 쌍을 발급하고 리프레시 토큰을 Redis에 저장합니다.
    pub async fn login(&self, user: &User) -> Result<TokenPair, AppError> {
        let access_token = self.generate_access_token(user)?;
        let refresh_token = self.generate_refresh_token(user)?;

        let user_id = user.id_string().ok_or_else(|| {
            AppError::InternalError("사용자 ID가 없습니다".to_string())
        })?;

        let refresh_ttl = (JwtConfig::refresh_expiration_days() * 24 * 60 * 60) as u64;

        self.token_repo
            .store_refresh_token(
                &user_id,
                user.auth_provider.as_str(),
                &refresh_token,
                refresh_ttl,
            )
            .await?;

        Ok(TokenPair {
            access_token,
            refresh_token: Some(refresh_token),
            expires_in: JwtConfig::expiration_hours() * 60 * 60,
        })
    }

    /// 로그아웃 처리: 액세스 토큰을 블랙리스트에 등록하고
    /// 리프레시 토큰을 삭제합니다. 이미 로그아웃된 토큰이면 거부합니다.
    pub async fn logout(&self, access_token: &str) -> Result<String, AppError> {
        let claims = self.verify_access_token(access_token).await?;

        // 토큰이 자연 만료될 때까지만 블랙리스트에 유지
        let remaining = (claims.exp - Utc::now().timestamp()).max(1) as u64;

        self.token_repo
            .blacklist_access_token(access_token, remaining)
            .await?;

        self.token_repo.delete_refresh_token(&claims.sub).await?;

        Ok(claims.sub)
    }

    /// 서명/만료를 검증하고 클레임을 반환합니다.
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let secret = JwtConfig::secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::AuthenticationError(format!("유효하지 않은 토큰입니다: {}", e)))
    }

    /// 블랙리스트 확인까지 포함한 액세스 토큰 검증
    pub async fn verify_access_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        if self.token_repo.is_blacklisted(token).await? {
            return Err(AppError::AuthenticationError("로그아웃된 토큰입니다".to_string()));
        }

        self.verify_token(token)
    }

    /// `Authorization: Bearer <token>` 헤더에서 토큰을 추출합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                AppError::AuthenticationError("유효하지 않은 토큰 형식입니다".to_string())
            })
    }
}
