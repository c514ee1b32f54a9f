//! 주소 엔티티
//!
//! 페이퍼가 기록한 장소의 도로명 주소, 상호명, 좌표를 담습니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 도로명 주소
    pub city: String,
    /// 상호명
    pub store: String,
    pub coordinate_x: f64,
    pub coordinate_y: f64,
}

impl Address {
    pub fn new(city: String, store: String, coordinate_x: f64, coordinate_y: f64) -> Self {
        Self {
            id: None,
            city,
            store,
            coordinate_x,
            coordinate_y,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
