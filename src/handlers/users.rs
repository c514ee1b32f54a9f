//! 사용자 API 핸들러
//!
//! 회원가입, 이메일 중복 확인, 인증코드 발송/검증, 프로필 조회/탈퇴를
//! 처리합니다. 모든 경로는 `/api/users` 스코프 아래에 등록됩니다.

use actix_web::{web, HttpResponse, get, post, delete};
use validator::Validate;
use crate::domain::dto::users::request::{
    AuthCodeCreateRequest, AuthCodeVerifyRequest, EmailValidateQuery, SignUpRequest,
};
use crate::errors::AppError;
use crate::services::users::{EmailService, UserService};

#[post("/sign-up")]
pub async fn sign_up(
    payload: web::Json<SignUpRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let response = service.sign_up(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 가입 가능한 이메일인지 확인합니다.
///
/// 응답은 에러가 아닌 상태 문자열(`SUCCESS` / `EMAIL_DUPLICATE`)로 내려갑니다.
#[get("/validate-email")]
pub async fn validate_email(
    query: web::Query<EmailValidateQuery>,
) -> Result<HttpResponse, AppError> {
    let service = EmailService::instance();
    let response = service.validate_email(&query.email).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 회원가입 인증코드를 생성해 메일로 발송합니다.
#[post("/auth-code")]
pub async fn send_auth_code(
    payload: web::Json<AuthCodeCreateRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = EmailService::instance();
    let response = service.send_signup_auth_code(&payload.to_email).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 제출된 인증코드를 검증합니다.
#[post("/auth-code/verify")]
pub async fn verify_auth_code(
    payload: web::Json<AuthCodeVerifyRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = EmailService::instance();
    let response = service.verify_signup_auth_code(&payload).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[get("/{user_id}")]
pub async fn get_user(
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let user = service.get_user_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

#[delete("/{user_id}")]
pub async fn delete_user(
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    service.delete_user(&user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
