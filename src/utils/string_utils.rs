//! 문자열 처리 유틸리티
//!
//! 요청 DTO에서 넘어온 문자열 필드를 엔티티로 옮기기 전에 사용하는
//! 정리/검증 헬퍼들입니다.

use crate::errors::AppError;

/// 필수 문자열 필드를 검증합니다.
///
/// 공백을 제거한 뒤 비어 있으면 `ValidationError`를 반환합니다.
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!(
            "{}은(는) 필수 입력값입니다",
            field_name
        )));
    }

    Ok(trimmed.to_string())
}

/// 선택 문자열 필드를 정리합니다.
///
/// 값이 있지만 공백뿐이면 `None`으로 변환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert_eq!(
            validate_required_string("  합정역 맛집  ", "타이틀").unwrap(),
            "합정역 맛집"
        );

        assert!(validate_required_string("", "타이틀").is_err());
        assert!(validate_required_string("   ", "타이틀").is_err());
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(
            clean_optional_string(Some("  https://img.ustory.com/1.png ".to_string())),
            Some("https://img.ustory.com/1.png".to_string())
        );
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }
}
