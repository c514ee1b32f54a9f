//! 페이퍼 엔티티
//!
//! 다이어리 한 편의 기록입니다. 주소는 `addresses` 컬렉션의 문서를,
//! 이미지들은 `images` 컬렉션의 문서들을 참조합니다.
//! 다이어리는 외부에서 참조만 하므로 id만 보관하고 검증하지 않습니다.

use chrono::NaiveDate;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paper {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub thumbnail_image_url: String,
    /// 방문 날짜 (ISO-8601 날짜 문자열로 저장됨)
    pub visited_at: NaiveDate,
    pub diary_id: i64,
    pub writer_id: ObjectId,
    pub address_id: ObjectId,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Paper {
    pub fn new(
        title: String,
        thumbnail_image_url: String,
        visited_at: NaiveDate,
        diary_id: i64,
        writer_id: ObjectId,
        address_id: ObjectId,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            title,
            thumbnail_image_url,
            visited_at,
            diary_id,
            writer_id,
            address_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
