//! 북마크 엔티티
//!
//! 사용자 ↔ 페이퍼 북마크 관계 한 건입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmark {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub paper_id: ObjectId,
    pub created_at: DateTime,
}

impl Bookmark {
    pub fn new(user_id: ObjectId, paper_id: ObjectId) -> Self {
        Self {
            id: None,
            user_id,
            paper_id,
            created_at: DateTime::now(),
        }
    }
}
