//! 북마크 리포지토리

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use singleton_macro::repository;
use crate::{
    core::registry::Repository,
    db::Database,
    domain::entities::papers::bookmark::Bookmark,
    errors::AppError,
};

#[repository(name = "bookmark", collection = "bookmarks")]
pub struct BookmarkRepository {
    db: Arc<Database>,
}

impl BookmarkRepository {
    pub async fn exists(&self, user_id: ObjectId, paper_id: ObjectId) -> Result<bool, AppError> {
        let found = self.collection::<Bookmark>()
            .find_one(doc! { "user_id": user_id, "paper_id": paper_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(found.is_some())
    }

    pub async fn create(&self, mut bookmark: Bookmark) -> Result<Bookmark, AppError> {
        if self.exists(bookmark.user_id, bookmark.paper_id).await? {
            return Err(AppError::ConflictError("이미 북마크한 페이퍼입니다".to_string()));
        }

        let result = self.collection::<Bookmark>()
            .insert_one(&bookmark)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        bookmark.id = result.inserted_id.as_object_id();

        Ok(bookmark)
    }

    pub async fn delete(&self, user_id: ObjectId, paper_id: ObjectId) -> Result<bool, AppError> {
        let result = self.collection::<Bookmark>()
            .delete_one(doc! { "user_id": user_id, "paper_id": paper_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 사용자가 북마크한 페이퍼 ID 목록 (최근 북마크 순)
    pub async fn find_paper_ids_by_user(
        &self,
        user_id: ObjectId,
        page: i64,
        size: i64,
    ) -> Result<Vec<ObjectId>, AppError> {
        let page = page.max(1);
        let size = size.clamp(1, 100);
        let skip = ((page - 1) * size) as u64;

        let cursor = self.collection::<Bookmark>()
            .find(doc! { "user_id": user_id })
            .sort(doc! { "created_at": -1 })
            .skip(skip)
            .limit(size)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let bookmarks: Vec<Bookmark> = cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(bookmarks.into_iter().map(|bookmark| bookmark.paper_id).collect())
    }

    /// 페이퍼 삭제 시 연관 북마크를 함께 정리합니다.
    pub async fn delete_by_paper(&self, paper_id: ObjectId) -> Result<u64, AppError> {
        let result = self.collection::<Bookmark>()
            .delete_many(doc! { "paper_id": paper_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }
}
