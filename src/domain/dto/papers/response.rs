//! 페이퍼 응답 DTO

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::papers::address::Address;
use crate::domain::entities::papers::image::Image;
use crate::domain::entities::papers::paper::Paper;

/// 페이퍼 생성 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPaperResponse {
    pub id: String,
}

/// 페이퍼 수정 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaperResponse {
    pub id: String,
}

/// 페이퍼 단건 조회 응답
///
/// 페이퍼와 연결된 주소, 이미지 목록을 하나의 응답으로 조립합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperResponse {
    pub id: String,
    pub title: String,
    pub thumbnail_image: String,
    pub visited_at: NaiveDate,
    pub diary_id: i64,
    pub writer_id: String,

    pub city: String,
    pub store: String,
    pub coordinate_x: f64,
    pub coordinate_y: f64,

    pub images: Vec<String>,
}

impl PaperResponse {
    pub fn new(paper: Paper, address: Address, images: Vec<Image>) -> Self {
        Self {
            id: paper.id_string().unwrap_or_default(),
            title: paper.title,
            thumbnail_image: paper.thumbnail_image_url,
            visited_at: paper.visited_at,
            diary_id: paper.diary_id,
            writer_id: paper.writer_id.to_hex(),
            city: address.city,
            store: address.store,
            coordinate_x: address.coordinate_x,
            coordinate_y: address.coordinate_y,
            images: images.into_iter().map(|image| image.url).collect(),
        }
    }
}

/// 페이퍼 목록 조회 응답 한 건
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperListResponse {
    pub id: String,
    pub title: String,
    pub thumbnail_image: String,
    pub visited_at: NaiveDate,
    pub diary_id: i64,
}

impl From<Paper> for PaperListResponse {
    fn from(paper: Paper) -> Self {
        Self {
            id: paper.id_string().unwrap_or_default(),
            title: paper.title,
            thumbnail_image: paper.thumbnail_image_url,
            visited_at: paper.visited_at,
            diary_id: paper.diary_id,
        }
    }
}

/// 지도 표시용 페이퍼 응답 한 건
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapPaperResponse {
    pub id: String,
    pub title: String,
    pub store: String,
    pub city: String,
    pub coordinate_x: f64,
    pub coordinate_y: f64,
}

impl MapPaperResponse {
    pub fn new(paper: &Paper, address: &Address) -> Self {
        Self {
            id: paper.id_string().unwrap_or_default(),
            title: paper.title.clone(),
            store: address.store.clone(),
            city: address.city.clone(),
            coordinate_x: address.coordinate_x,
            coordinate_y: address.coordinate_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_paper_response_assembly() {
        let writer_id = ObjectId::new();
        let address_id = ObjectId::new();

        let mut paper = Paper::new(
            "합정역 맛집 우규".to_string(),
            "https://img.ustory.com/thumb.png".to_string(),
            NaiveDate::from_ymd_opt(2024, 5, 23).unwrap(),
            12345678,
            writer_id,
            address_id,
        );
        let paper_id = ObjectId::new();
        paper.id = Some(paper_id);

        let mut address = Address::new(
            "서울특별시 마포구 독막로3길 21".to_string(),
            "우규".to_string(),
            37.5494,
            126.9169,
        );
        address.id = Some(address_id);

        let images = vec![
            Image::new("https://img.ustory.com/1.png".to_string(), paper_id, 0),
            Image::new("https://img.ustory.com/2.png".to_string(), paper_id, 1),
        ];

        let response = PaperResponse::new(paper, address, images);

        assert_eq!(response.id, paper_id.to_hex());
        assert_eq!(response.writer_id, writer_id.to_hex());
        assert_eq!(response.store, "우규");
        assert_eq!(
            response.images,
            vec![
                "https://img.ustory.com/1.png".to_string(),
                "https://img.ustory.com/2.png".to_string()
            ]
        );
    }

    #[test]
    fn test_list_response_from_paper() {
        let paper = Paper::new(
            "제주 바다".to_string(),
            "https://img.ustory.com/sea.png".to_string(),
            NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            1,
            ObjectId::new(),
            ObjectId::new(),
        );

        let response = PaperListResponse::from(paper);
        assert_eq!(response.title, "제주 바다");
        assert_eq!(response.diary_id, 1);
    }
}
