//! 페이퍼 요청 DTO
//!
//! 기존 API와 동일하게 주소 필드(도로명 주소, 상호명, 좌표)는
//! 요청 본문에 평탄화되어 들어오고, 저장 시 Address 엔티티로 분리됩니다.

use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::papers::address::Address;
use crate::domain::entities::papers::paper::Paper;

/// 페이퍼 생성 요청
///
/// ```json
/// {
///   "title": "합정역 맛집 우규",
///   "thumbnailImage": "https://img.ustory.com/thumb.png",
///   "images": ["https://img.ustory.com/1.png"],
///   "visitedAt": "2024-05-23",
///   "diaryId": 12345678,
///   "memberId": "665f1c2e8b3e4a0012345678",
///   "city": "서울특별시 마포구 독막로3길 21",
///   "store": "우규",
///   "coordinateX": 37.5494,
///   "coordinateY": 126.9169
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddPaperRequest {
    #[validate(length(min = 1, max = 100, message = "타이틀은 1-100자 사이여야 합니다"))]
    pub title: String,

    #[validate(url(message = "썸네일은 유효한 URL이어야 합니다"))]
    pub thumbnail_image: String,

    #[validate(custom(function = "validate_image_urls"))]
    #[serde(default)]
    pub images: Vec<String>,

    /// 방문 날짜 (`YYYY-MM-DD`)
    pub visited_at: NaiveDate,

    pub diary_id: i64,

    /// 작성자 Id (토큰 사용할 때 사라질 예정)
    #[validate(length(equal = 24, message = "유효하지 않은 사용자 ID 형식입니다"))]
    pub member_id: String,

    /// 도로 주소
    #[validate(length(min = 1, message = "도로 주소는 필수 입력값입니다"))]
    pub city: String,

    /// 상호명
    #[validate(length(min = 1, message = "상호명은 필수 입력값입니다"))]
    pub store: String,

    pub coordinate_x: f64,
    pub coordinate_y: f64,
}

impl AddPaperRequest {
    pub fn to_paper_entity(&self, writer_id: ObjectId, address_id: ObjectId) -> Paper {
        Paper::new(
            self.title.clone(),
            self.thumbnail_image.clone(),
            self.visited_at,
            self.diary_id,
            writer_id,
            address_id,
        )
    }

    pub fn to_address_entity(&self) -> Address {
        Address::new(
            self.city.clone(),
            self.store.clone(),
            self.coordinate_x,
            self.coordinate_y,
        )
    }
}

/// 페이퍼 수정 요청
///
/// 생성 요청과 동일한 본문에서 다이어리/작성자 Id만 제외됩니다.
/// 이미지 목록은 전체 교체 의미를 가지며, 기존 목록과의 차이만 반영됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaperRequest {
    #[validate(length(min = 1, max = 100, message = "타이틀은 1-100자 사이여야 합니다"))]
    pub title: String,

    #[validate(url(message = "썸네일은 유효한 URL이어야 합니다"))]
    pub thumbnail_image: String,

    #[validate(custom(function = "validate_image_urls"))]
    #[serde(default)]
    pub images: Vec<String>,

    pub visited_at: NaiveDate,

    #[validate(length(min = 1, message = "도로 주소는 필수 입력값입니다"))]
    pub city: String,

    #[validate(length(min = 1, message = "상호명은 필수 입력값입니다"))]
    pub store: String,

    pub coordinate_x: f64,
    pub coordinate_y: f64,
}

impl UpdatePaperRequest {
    pub fn to_address_entity(&self) -> Address {
        Address::new(
            self.city.clone(),
            self.store.clone(),
            self.coordinate_x,
            self.coordinate_y,
        )
    }
}

fn validate_image_urls(images: &Vec<String>) -> Result<(), ValidationError> {
    if images.iter().any(|url| url.trim().is_empty()) {
        return Err(ValidationError::new("empty_image_url")
            .with_message("이미지 URL은 비어 있을 수 없습니다".into()));
    }
    Ok(())
}

fn default_page() -> i64 {
    1
}

fn default_size() -> i64 {
    20
}

/// 페이지네이션 쿼리 (`?page=1&size=20`)
#[derive(Debug, Clone, Deserialize)]
pub struct PageableQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_size")]
    pub size: i64,
}

/// 작성자 기준 목록 쿼리 (`?userId=...&page=1&size=20`)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPapersQuery {
    pub user_id: String,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_size")]
    pub size: i64,
}

/// 다이어리 기준 목록 쿼리
///
/// `startDate`/`endDate`는 방문 날짜 범위 필터이며 둘 다 선택값입니다.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryPapersQuery {
    pub diary_id: i64,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_size")]
    pub size: i64,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// 사용자 식별 쿼리 (`?userId=...`)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdQuery {
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> AddPaperRequest {
        AddPaperRequest {
            title: "합정역 맛집 우규".to_string(),
            thumbnail_image: "https://img.ustory.com/thumb.png".to_string(),
            images: vec!["https://img.ustory.com/1.png".to_string()],
            visited_at: NaiveDate::from_ymd_opt(2024, 5, 23).unwrap(),
            diary_id: 12345678,
            member_id: "665f1c2e8b3e4a0012345678".to_string(),
            city: "서울특별시 마포구 독막로3길 21".to_string(),
            store: "우규".to_string(),
            coordinate_x: 37.5494,
            coordinate_y: 126.9169,
        }
    }

    #[test]
    fn test_valid_add_paper_request() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut request = valid_request();
        request.title = String::new();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_invalid_thumbnail_url_rejected() {
        let mut request = valid_request();
        request.thumbnail_image = "not a url".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_blank_image_url_rejected() {
        let mut request = valid_request();
        request.images.push("   ".to_string());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_to_address_entity() {
        let request = valid_request();
        let address = request.to_address_entity();

        assert_eq!(address.city, "서울특별시 마포구 독막로3길 21");
        assert_eq!(address.store, "우규");
        assert_eq!(address.coordinate_x, 37.5494);
        assert_eq!(address.coordinate_y, 126.9169);
    }

    #[test]
    fn test_camel_case_body() {
        let json = r#"{
            "title": "합정역 맛집 우규",
            "thumbnailImage": "https://img.ustory.com/thumb.png",
            "images": [],
            "visitedAt": "2024-05-23",
            "diaryId": 12345678,
            "memberId": "665f1c2e8b3e4a0012345678",
            "city": "서울특별시 마포구 독막로3길 21",
            "store": "우규",
            "coordinateX": 37.5494,
            "coordinateY": 126.9169
        }"#;

        let request: AddPaperRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.visited_at,
            NaiveDate::from_ymd_opt(2024, 5, 23).unwrap()
        );
    }

    #[test]
    fn test_pageable_query_defaults() {
        let query: PageableQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.size, 20);
    }
}
