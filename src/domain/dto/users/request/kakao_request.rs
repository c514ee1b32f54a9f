//! 카카오 OAuth 콜백 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 카카오 인가 콜백 쿼리 (`/login/oauth2/code/kakao?code=...`)
///
/// 사용자가 동의를 거부하면 `code` 대신 `error`가 내려옵니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct KakaoCallbackQuery {
    #[serde(default)]
    #[validate(length(min = 1, message = "인가 코드가 비어 있습니다"))]
    pub code: String,

    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub error_description: Option<String>,
}
