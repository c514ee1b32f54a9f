//! 페이퍼 리포지토리
//!
//! `papers` 컬렉션에 대한 CRUD와 작성자/다이어리 기준 페이지네이션 조회를
//! 담당합니다. 목록은 방문 날짜 내림차순(동일 날짜는 생성 시각 내림차순)으로
//! 정렬됩니다.

use std::sync::Arc;
use chrono::NaiveDate;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId, DateTime, Document}, options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    core::registry::Repository,
    db::Database,
    domain::entities::papers::paper::Paper,
    errors::AppError,
};

#[repository(name = "paper", collection = "papers")]
pub struct PaperRepository {
    db: Arc<Database>,
}

impl PaperRepository {
    pub async fn create(&self, mut paper: Paper) -> Result<Paper, AppError> {
        let result = self.collection::<Paper>()
            .insert_one(&paper)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        paper.id = result.inserted_id.as_object_id();

        Ok(paper)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Paper>, AppError> {
        let object_id = Self::parse_id(id)?;

        self.collection::<Paper>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 수정된 문서를 반환합니다. 대상이 없으면 `None`.
    pub async fn update(&self, id: &str, update_doc: Document) -> Result<Option<Paper>, AppError> {
        let object_id = Self::parse_id(id)?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection::<Paper>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = Self::parse_id(id)?;

        let result = self.collection::<Paper>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    pub async fn find_all(&self, page: i64, size: i64) -> Result<Vec<Paper>, AppError> {
        self.find_page(doc! {}, page, size).await
    }

    pub async fn find_by_writer(
        &self,
        writer_id: ObjectId,
        page: i64,
        size: i64,
    ) -> Result<Vec<Paper>, AppError> {
        self.find_page(doc! { "writer_id": writer_id }, page, size).await
    }

    /// 다이어리에 포함된 페이퍼 목록
    ///
    /// `start_date`/`end_date`가 주어지면 방문 날짜를 포함 범위로 필터링합니다.
    /// 방문 날짜는 ISO-8601 문자열로 저장되므로 사전순 비교가 날짜 비교와 일치합니다.
    pub async fn find_by_diary(
        &self,
        diary_id: i64,
        page: i64,
        size: i64,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<Paper>, AppError> {
        let mut filter = doc! { "diary_id": diary_id };

        let mut range = Document::new();
        if let Some(start) = start_date {
            range.insert("$gte", start.format("%Y-%m-%d").to_string());
        }
        if let Some(end) = end_date {
            range.insert("$lte", end.format("%Y-%m-%d").to_string());
        }
        if !range.is_empty() {
            filter.insert("visited_at", range);
        }

        self.find_page(filter, page, size).await
    }

    /// 작성자의 모든 페이퍼 (지도 표시용, 페이지네이션 없음)
    pub async fn find_all_by_writer(&self, writer_id: ObjectId) -> Result<Vec<Paper>, AppError> {
        let cursor = self.collection::<Paper>()
            .find(doc! { "writer_id": writer_id })
            .sort(doc! { "visited_at": -1, "created_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Paper>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self.collection::<Paper>()
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .sort(doc! { "visited_at": -1, "created_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_page(&self, filter: Document, page: i64, size: i64) -> Result<Vec<Paper>, AppError> {
        let page = page.max(1);
        let size = size.clamp(1, 100);
        let skip = ((page - 1) * size) as u64;

        let cursor = self.collection::<Paper>()
            .find(filter)
            .sort(doc! { "visited_at": -1, "created_at": -1 })
            .skip(skip)
            .limit(size)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    fn parse_id(id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
    }

    /// 수정 요청을 `$set` 문서로 변환합니다.
    pub fn build_update_doc(
        title: &str,
        thumbnail_image_url: &str,
        visited_at: NaiveDate,
        address_id: ObjectId,
    ) -> Document {
        doc! {
            "title": title,
            "thumbnail_image_url": thumbnail_image_url,
            "visited_at": visited_at.format("%Y-%m-%d").to_string(),
            "address_id": address_id,
            "updated_at": DateTime::now(),
        }
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Paper>();

        let writer_index = IndexModel::builder()
            .keys(doc! { "writer_id": 1, "visited_at": -1 })
            .options(IndexOptions::builder()
                .name("writer_visited_desc".to_string())
                .build())
            .build();

        let diary_index = IndexModel::builder()
            .keys(doc! { "diary_id": 1, "visited_at": -1 })
            .options(IndexOptions::builder()
                .name("diary_visited_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([writer_index, diary_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_update_doc_formats_date() {
        let address_id = ObjectId::new();
        let update_doc = PaperRepository::build_update_doc(
            "새 타이틀",
            "https://img.ustory.com/new.png",
            NaiveDate::from_ymd_opt(2024, 5, 23).unwrap(),
            address_id,
        );

        assert_eq!(update_doc.get_str("title").unwrap(), "새 타이틀");
        assert_eq!(update_doc.get_str("visited_at").unwrap(), "2024-05-23");
        assert_eq!(update_doc.get_object_id("address_id").unwrap(), address_id);
        assert!(update_doc.get_datetime("updated_at").is_ok());
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        assert!(PaperRepository::parse_id("not-an-object-id").is_err());
        assert!(PaperRepository::parse_id("665f1c2e8b3e4a0012345678").is_ok());
    }
}
