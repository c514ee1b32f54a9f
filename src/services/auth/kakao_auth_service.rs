//! # 카카오 OAuth 인증 서비스
//!
//! 카카오 인가 코드 플로우를 처리합니다:
//!
//! 1. 인가 URL 생성 (`get_login_url`)
//! 2. 인가 코드 → 액세스 토큰 교환 (`kauth.kakao.com/oauth/token`)
//! 3. 액세스 토큰 → 사용자 정보 조회 (`kapi.kakao.com/v2/user/me`)
//! 4. `{회원번호}@ustory.com` 이메일로 기존 회원 판별, 없으면 자동 가입
//!
//! 교환/조회는 각각 1회 호출이며 재시도하지 않습니다.

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    config::{AuthProvider, KakaoOAuthConfig},
    domain::entities::users::user::User,
    domain::models::kakao::{KakaoLoginUrlResponse, KakaoTokenResponse, KakaoUserInfo},
    repositories::users::user_repo::UserRepository,
    services::users::user_service::UserService,
    errors::AppError,
};

#[service(name = "kakaoauth")]
pub struct KakaoAuthService {
    user_repo: Arc<UserRepository>,

    user_service: Arc<UserService>,
}

impl KakaoAuthService {
    /// 카카오 인가 URL을 생성합니다.
    pub fn get_login_url(&self) -> KakaoLoginUrlResponse {
        let params = [
            ("client_id", KakaoOAuthConfig::rest_api_key()),
            ("redirect_uri", KakaoOAuthConfig::login_redirect_uri()),
            ("response_type", "code".to_string()),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let login_url = format!("{}?{}", KakaoOAuthConfig::auth_uri(), query_string);

        KakaoLoginUrlResponse { login_url }
    }

    /// 인가 코드로 카카오 사용자를 인증합니다.
    ///
    /// 기존 회원이면 해당 계정을, 처음이면 자동 가입된 계정을 반환합니다.
    pub async fn authenticate_with_code(&self, auth_code: &str) -> Result<User, AppError> {
        let token_response = self.exchange_code_for_token(auth_code).await?;

        let kakao_user = self.get_user_info(&token_response.access_token).await?;

        let kakao_id = kakao_user.id_string();
        let email = format!("{}@ustory.com", kakao_id);

        let user = if self.user_service.check_exists_by_email(&email).await? {
            let existing_user = self.user_repo
                .find_by_email(&email)
                .await?
                .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

            if existing_user.auth_provider != AuthProvider::Kakao {
                return Err(AppError::ConflictError(
                    "이미 해당 이메일로 등록된 로컬 계정이 있습니다".to_string(),
                ));
            }

            log::info!("카카오 사용자 로그인 - 이메일: {}", email);
            existing_user
        } else {
            log::info!("신규 카카오 사용자 가입 - 이메일: {}", email);
            self.user_service
                .kakao_sign_up(&kakao_id, kakao_user.nickname(), kakao_user.profile_image())
                .await?
        };

        if let Some(user_id) = user.id_string() {
            self.user_repo.update_last_login(&user_id).await?;
        }

        Ok(user)
    }

    async fn exchange_code_for_token(&self, auth_code: &str) -> Result<KakaoTokenResponse, AppError> {
        let client = reqwest::Client::new();

        let mut params = vec![
            ("grant_type", "authorization_code".to_string()),
            ("client_id", KakaoOAuthConfig::rest_api_key()),
            ("redirect_uri", KakaoOAuthConfig::login_redirect_uri()),
            ("code", auth_code.to_string()),
        ];

        // client_secret은 콘솔에서 활성화한 앱에만 필요
        if let Some(secret) = KakaoOAuthConfig::client_secret() {
            params.push(("client_secret", secret));
        }

        let response = client
            .post(KakaoOAuthConfig::token_uri())
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("카카오 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "카카오 토큰 교환 실패: {}", error_text
            )));
        }

        response
            .json::<KakaoTokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("카카오 토큰 응답 파싱 실패: {}", e)))
    }

    async fn get_user_info(&self, access_token: &str) -> Result<KakaoUserInfo, AppError> {
        let client = reqwest::Client::new();

        let response = client
            .get(KakaoOAuthConfig::user_info_uri())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("카카오 사용자 정보 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "카카오 사용자 정보 조회 실패: {}", error_text
            )));
        }

        response
            .json::<KakaoUserInfo>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("카카오 사용자 정보 파싱 실패: {}", e)))
    }
}
