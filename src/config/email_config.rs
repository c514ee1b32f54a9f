//! 이메일 발송 설정
//!
//! 회원가입 인증코드 메일 발송에 사용하는 SMTP 설정과
//! 인증코드 유효시간을 관리합니다.

use std::env;

pub struct EmailConfig;

impl EmailConfig {
    pub fn smtp_host() -> String {
        env::var("SMTP_HOST")
            .unwrap_or_else(|_| "smtp.gmail.com".to_string())
    }

    pub fn smtp_port() -> u16 {
        env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse()
            .unwrap_or(587)
    }

    /// SMTP 계정 (발신자 주소로도 사용)
    pub fn username() -> String {
        env::var("SMTP_USERNAME")
            .expect("SMTP_USERNAME must be set")
    }

    pub fn password() -> String {
        env::var("SMTP_PASSWORD")
            .expect("SMTP_PASSWORD must be set")
    }

    /// 인증코드 유효시간 (초)
    ///
    /// Redis에 저장되는 인증코드 키의 TTL로 사용됩니다.
    pub fn auth_code_ttl_seconds() -> u64 {
        env::var("AUTH_CODE_TTL_SECONDS")
            .unwrap_or_else(|_| "300".to_string())
            .parse()
            .unwrap_or(300)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_config_defaults() {
        if env::var("SMTP_HOST").is_err() {
            assert_eq!(EmailConfig::smtp_host(), "smtp.gmail.com");
        }

        if env::var("SMTP_PORT").is_err() {
            assert_eq!(EmailConfig::smtp_port(), 587);
        }

        if env::var("AUTH_CODE_TTL_SECONDS").is_err() {
            assert_eq!(EmailConfig::auth_code_ttl_seconds(), 300);
        }
    }
}
