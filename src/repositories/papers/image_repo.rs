//! 이미지 리포지토리
//!
//! 페이퍼 단위로 이미지 목록을 관리합니다. `sequence` 오름차순이
//! 첨부 순서입니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use singleton_macro::repository;
use crate::{
    core::registry::Repository,
    db::Database,
    domain::entities::papers::image::Image,
    errors::AppError,
};

#[repository(name = "image", collection = "images")]
pub struct ImageRepository {
    db: Arc<Database>,
}

impl ImageRepository {
    pub async fn create_many(&self, mut images: Vec<Image>) -> Result<Vec<Image>, AppError> {
        if images.is_empty() {
            return Ok(images);
        }

        let result = self.collection::<Image>()
            .insert_many(&images)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        for (index, image) in images.iter_mut().enumerate() {
            image.id = result
                .inserted_ids
                .get(&index)
                .and_then(|id| id.as_object_id());
        }

        Ok(images)
    }

    pub async fn find_by_paper(&self, paper_id: ObjectId) -> Result<Vec<Image>, AppError> {
        let cursor = self.collection::<Image>()
            .find(doc! { "paper_id": paper_id })
            .sort(doc! { "sequence": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn delete_by_ids(&self, ids: &[ObjectId]) -> Result<u64, AppError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = self.collection::<Image>()
            .delete_many(doc! { "_id": { "$in": ids.to_vec() } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }

    pub async fn delete_by_paper(&self, paper_id: ObjectId) -> Result<u64, AppError> {
        let result = self.collection::<Image>()
            .delete_many(doc! { "paper_id": paper_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }

    /// 시퀀스 값을 일괄 갱신합니다. (이미지 차등 반영 후 순서 재정렬용)
    pub async fn update_sequence(&self, id: ObjectId, sequence: i32) -> Result<(), AppError> {
        self.collection::<Image>()
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "sequence": sequence } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
