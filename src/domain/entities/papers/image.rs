//! 이미지 엔티티
//!
//! 페이퍼에 첨부된 이미지 한 장입니다. `sequence`는 첨부 순서를 보존합니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub url: String,
    pub paper_id: ObjectId,
    pub sequence: i32,
}

impl Image {
    pub fn new(url: String, paper_id: ObjectId, sequence: i32) -> Self {
        Self {
            id: None,
            url,
            paper_id,
            sequence,
        }
    }
}
