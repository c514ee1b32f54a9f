//! 카카오 OAuth 인증 핸들러
//!
//! 로그인 URL 제공, 인가 콜백 처리, 로그아웃을 담당합니다.
//! 콜백과 로그아웃은 기존 클라이언트 호환을 위해 GET/POST 둘 다 허용합니다.

use actix_web::{web, HttpRequest, HttpResponse, get, route};
use validator::Validate;
use crate::domain::dto::users::request::KakaoCallbackQuery;
use crate::domain::dto::users::response::{LoginResponse, LogoutResponse};
use crate::errors::AppError;
use crate::services::auth::{KakaoAuthService, TokenService};

/// 카카오 로그인 URL을 내려줍니다.
///
/// 기존에는 로그인 템플릿이 API 키와 Redirect URI로 URL을 조립했으나,
/// 이 백엔드는 완성된 인가 URL을 JSON으로 제공합니다.
#[get("/login")]
pub async fn show_login() -> Result<HttpResponse, AppError> {
    let kakao_service = KakaoAuthService::instance();
    let url_response = kakao_service.get_login_url();

    Ok(HttpResponse::Ok().json(url_response))
}

/// 카카오 로그인 콜백
///
/// 인가 코드를 토큰으로 교환하고 사용자 정보를 조회한 뒤,
/// 미가입 사용자는 자동 가입시키고 JWT 토큰 쌍을 발급합니다.
#[route("/login/oauth2/code/kakao", method = "GET", method = "POST")]
pub async fn kakao_login(
    query: web::Query<KakaoCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    if let Some(error) = &query.error {
        let error_msg = query.error_description
            .as_deref()
            .unwrap_or("카카오 인증이 취소되었거나 실패했습니다");
        log::warn!("카카오 OAuth 에러: {} - {}", error, error_msg);
        return Err(AppError::AuthenticationError(error_msg.to_string()));
    }

    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let kakao_service = KakaoAuthService::instance();
    let token_service = TokenService::instance();

    let user = kakao_service.authenticate_with_code(&query.code).await?;

    let token_pair = token_service.login(&user).await.map_err(|e| {
        log::error!("토큰 생성 실패 - 사용자: {}, 에러: {}", user.email, e);
        e
    })?;

    log::info!("카카오 로그인 성공 - 닉네임: {}", user.nickname);

    let refresh_token = token_pair.refresh_token.unwrap_or_default();
    let response = LoginResponse::with_refresh_token(
        user,
        token_pair.access_token,
        token_pair.expires_in,
        refresh_token,
    );

    Ok(HttpResponse::Ok().json(response))
}

/// 로그아웃
///
/// Bearer 액세스 토큰을 블랙리스트에 등록하고 리프레시 토큰을 폐기합니다.
#[route("/auth/logout", method = "GET", method = "POST")]
pub async fn kakao_logout(
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let token_service = TokenService::instance();

    let auth_header = req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    let access_token = token_service.extract_bearer_token(auth_header)?;

    let user_id = token_service.logout(access_token).await?;

    log::info!("로그아웃 성공 - user_id: {}", user_id);

    Ok(HttpResponse::Ok().json(LogoutResponse {
        success: true,
        message: "로그아웃이 성공적으로 처리되었습니다".to_string(),
    }))
}
