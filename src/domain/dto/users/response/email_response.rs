//! 이메일 인증 응답 DTO
//!
//! 이메일/인증코드 플로우는 구조화된 에러 대신 불리언/상태 문자열을
//! 응답 본문으로 돌려주는 기존 API 계약을 유지합니다.

use serde::{Deserialize, Serialize};

/// 이메일 중복 확인 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailVerifyResponse {
    pub is_success: bool,
    /// `"SUCCESS"` 또는 `"EMAIL_DUPLICATE"`
    pub status: String,
}

impl EmailVerifyResponse {
    pub fn success() -> Self {
        Self {
            is_success: true,
            status: "SUCCESS".to_string(),
        }
    }

    pub fn duplicate() -> Self {
        Self {
            is_success: false,
            status: "EMAIL_DUPLICATE".to_string(),
        }
    }
}

/// 인증코드 발송 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthCodeCreateResponse {
    pub from_mail: String,
    pub to_mail: String,
    pub title: String,
    pub auth_code: String,
}

/// 인증코드 검증 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthCodeVerifyResponse {
    pub is_valid: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_verify_response_states() {
        let ok = EmailVerifyResponse::success();
        assert!(ok.is_success);
        assert_eq!(ok.status, "SUCCESS");

        let dup = EmailVerifyResponse::duplicate();
        assert!(!dup.is_success);
        assert_eq!(dup.status, "EMAIL_DUPLICATE");
    }

    #[test]
    fn test_camel_case_serialization() {
        let response = AuthCodeVerifyResponse {
            is_valid: true,
            message: "인증되었습니다".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"isValid\":true"));
    }
}
