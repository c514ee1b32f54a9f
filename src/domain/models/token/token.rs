//! JWT 토큰 모델

use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

/// JWT 클레임
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 ID (ObjectId hex)
    pub sub: String,
    pub auth_provider: AuthProvider,
    pub iat: i64,
    pub exp: i64,
}

/// 액세스/리프레시 토큰 쌍
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// 액세스 토큰 수명 (초)
    pub expires_in: i64,
}
