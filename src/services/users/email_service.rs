//! # 이메일 인증 서비스
//!
//! 회원가입 인증코드의 생성, 발송, 검증을 담당합니다.
//!
//! ## 인증 플로우
//!
//! ```text
//! 1. POST /api/users/auth-code
//!    ├─ 이메일 중복 확인 (가입된 이메일이면 ValidationError)
//!    ├─ 6자리 영숫자 인증코드 생성
//!    ├─ Redis에 저장 (TTL = AUTH_CODE_TTL_SECONDS)
//!    └─ SMTP로 인증 메일 발송
//!
//! 2. POST /api/users/auth-code/verify
//!    └─ 저장된 코드와 비교 → {isValid, message}
//! ```
//!
//! 검증은 코드를 소모하지 않으며(기존 API와 동일), 유효 기간은 Redis TTL이
//! 결정합니다.

use std::sync::Arc;
use lettre::{
    message::header::ContentType,
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use rand::Rng;
use singleton_macro::service;
use crate::{
    config::EmailConfig,
    domain::dto::users::{
        request::AuthCodeVerifyRequest,
        response::{AuthCodeCreateResponse, AuthCodeVerifyResponse, EmailVerifyResponse},
    },
    repositories::{
        auth_codes::auth_code_repo::{AuthCode, AuthCodeRepository},
        users::user_repo::UserRepository,
    },
    errors::AppError,
};

/// 인증코드 길이
const AUTH_CODE_LENGTH: usize = 6;

/// 인증 메일 제목
const AUTH_MAIL_TITLE: &str = "UStory 회원가입 인증코드입니다.";

#[service(name = "email")]
pub struct EmailService {
    user_repo: Arc<UserRepository>,

    auth_code_repo: Arc<AuthCodeRepository>,
}

impl EmailService {
    /// 6자리 영숫자 인증코드를 생성합니다.
    ///
    /// ASCII 48(`'0'`)~122(`'z'`) 범위에서 난수를 뽑고
    /// 숫자/대문자/소문자만 통과시키는 방식입니다.
    pub fn generate_auth_code() -> String {
        let mut rng = rand::rng();
        let mut code = String::with_capacity(AUTH_CODE_LENGTH);

        while code.len() < AUTH_CODE_LENGTH {
            let candidate = rng.random_range(48u8..=122u8);
            if candidate.is_ascii_alphanumeric() {
                code.push(candidate as char);
            }
        }

        code
    }

    /// 인증 메일을 발송합니다.
    pub async fn send_mail(
        &self,
        to_email: &str,
        title: &str,
        content: &str,
    ) -> Result<(), AppError> {
        let from_email = EmailConfig::username();

        let message = Message::builder()
            .from(from_email.parse().map_err(|e| {
                AppError::InternalError(format!("발신자 주소 파싱 실패: {}", e))
            })?)
            .to(to_email.parse().map_err(|e| {
                AppError::ValidationError(format!("수신자 주소 파싱 실패: {}", e))
            })?)
            .subject(title)
            .header(ContentType::TEXT_HTML)
            .body(content.to_string())
            .map_err(|e| AppError::InternalError(format!("메일 생성 실패: {}", e)))?;

        let credentials = Credentials::new(EmailConfig::username(), EmailConfig::password());

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&EmailConfig::smtp_host())
            .map_err(|e| AppError::ExternalServiceError(format!("SMTP 연결 설정 실패: {}", e)))?
            .port(EmailConfig::smtp_port())
            .credentials(credentials)
            .build();

        mailer
            .send(message)
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("메일 발송 실패: {}", e)))?;

        Ok(())
    }

    /// 회원가입 인증코드를 생성하여 메일로 발송합니다.
    pub async fn send_signup_auth_code(
        &self,
        to_email: &str,
    ) -> Result<AuthCodeCreateResponse, AppError> {
        // 0. 이메일 중복 체크
        if !self.validate_email(to_email).await?.is_success {
            return Err(AppError::ValidationError("이메일이 유효하지 않습니다".to_string()));
        }

        // 1. 메일 내용 생성
        let auth_code = Self::generate_auth_code();
        let content = format!(
            "UStory에 방문해주셔서 감사합니다.<br><br>\
             인증 코드는 <code>{}</code>입니다.<br>\
             인증 코드를 바르게 입력해주세요.",
            auth_code
        );

        // 2. 인증코드를 Redis에 저장
        let auth_code_record = AuthCode::new(to_email.to_string(), auth_code.clone());
        self.auth_code_repo
            .save(&auth_code_record, EmailConfig::auth_code_ttl_seconds())
            .await?;

        // 3. 메일 발송
        self.send_mail(to_email, AUTH_MAIL_TITLE, &content).await?;

        log::info!("인증코드 메일이 발송됨 - 수신자: {}", to_email);

        Ok(AuthCodeCreateResponse {
            from_mail: EmailConfig::username(),
            to_mail: to_email.to_string(),
            title: AUTH_MAIL_TITLE.to_string(),
            auth_code,
        })
    }

    /// 제출된 인증코드를 저장된 코드와 비교합니다.
    ///
    /// 세 가지 결과가 있습니다: 요청 이력이 없는 이메일 / 코드 불일치 / 일치.
    pub async fn verify_signup_auth_code(
        &self,
        request: &AuthCodeVerifyRequest,
    ) -> Result<AuthCodeVerifyResponse, AppError> {
        let found = self.auth_code_repo.find_by_email(&request.to_email).await?;

        let response = match found {
            Some(stored) => {
                if stored.auth_code == request.auth_code {
                    AuthCodeVerifyResponse {
                        is_valid: true,
                        message: "이메일과 인증 코드가 일치하여, 유효한 인증 코드로 검증되었습니다"
                            .to_string(),
                    }
                } else {
                    AuthCodeVerifyResponse {
                        is_valid: false,
                        message: "인증 코드 요청이 주어진 이메일이지만, 인증 코드가 일치하지 않습니다"
                            .to_string(),
                    }
                }
            }
            None => AuthCodeVerifyResponse {
                is_valid: false,
                message: "인증 코드 요청이 오지 않은 이메일입니다".to_string(),
            },
        };

        Ok(response)
    }

    /// 가입 가능한 이메일인지 확인합니다.
    pub async fn validate_email(&self, email: &str) -> Result<EmailVerifyResponse, AppError> {
        if self.user_repo.exists_by_email(email).await? {
            return Ok(EmailVerifyResponse::duplicate());
        }

        Ok(EmailVerifyResponse::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_code_length() {
        for _ in 0..100 {
            let code = EmailService::generate_auth_code();
            assert_eq!(code.len(), AUTH_CODE_LENGTH);
        }
    }

    #[test]
    fn test_auth_code_charset() {
        for _ in 0..100 {
            let code = EmailService::generate_auth_code();
            assert!(
                code.chars().all(|c| c.is_ascii_alphanumeric()),
                "인증코드에 허용되지 않은 문자가 포함됨: {}",
                code
            );
        }
    }

    #[test]
    fn test_auth_codes_vary() {
        // 동일한 코드 100개가 나올 확률은 무시 가능
        let codes: std::collections::HashSet<String> =
            (0..100).map(|_| EmailService::generate_auth_code()).collect();
        assert!(codes.len() > 1);
    }
}
