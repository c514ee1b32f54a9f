//! # 페이퍼 서비스
//!
//! 페이퍼 생명주기와 목록 조회, 북마크 관리를 담당합니다.
//! 작성자 존재 여부는 생성/목록 조회 시 검증하지만, 다이어리는
//! 외부 도메인이므로 id를 검증 없이 보관합니다.

use std::sync::Arc;
use chrono::NaiveDate;
use mongodb::bson::{oid::ObjectId, Document};
use singleton_macro::service;
use crate::{
    domain::entities::papers::{bookmark::Bookmark, paper::Paper},
    repositories::{
        papers::{bookmark_repo::BookmarkRepository, paper_repo::PaperRepository},
        users::user_repo::UserRepository,
    },
    errors::AppError,
};

#[service(name = "paper")]
pub struct PaperService {
    paper_repo: Arc<PaperRepository>,

    bookmark_repo: Arc<BookmarkRepository>,

    user_repo: Arc<UserRepository>,
}

impl PaperService {
    /// 작성자가 존재하는지 확인합니다.
    pub async fn validate_writer(&self, writer_id: &str) -> Result<ObjectId, AppError> {
        let user = self.user_repo
            .find_by_id(writer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        // find_by_id가 반환한 사용자이므로 id는 항상 존재
        user.id
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))
    }

    pub async fn create_paper(&self, paper: Paper) -> Result<Paper, AppError> {
        let created = self.paper_repo.create(paper).await?;

        log::info!(
            "페이퍼 생성 완료 - id: {}, 타이틀: {}",
            created.id_string().unwrap_or_default(),
            created.title
        );

        Ok(created)
    }

    pub async fn get_paper_by_id(&self, id: &str) -> Result<Paper, AppError> {
        self.paper_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("페이퍼를 찾을 수 없습니다".to_string()))
    }

    pub async fn update_paper(&self, id: &str, update_doc: Document) -> Result<Paper, AppError> {
        self.paper_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("페이퍼를 찾을 수 없습니다".to_string()))
    }

    /// 페이퍼와 연관 북마크를 삭제합니다.
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        let deleted = self.paper_repo.delete(id).await?;

        if deleted {
            if let Ok(object_id) = ObjectId::parse_str(id) {
                let removed = self.bookmark_repo.delete_by_paper(object_id).await?;
                if removed > 0 {
                    log::info!("페이퍼 삭제로 북마크 {}건 정리됨 - paper: {}", removed, id);
                }
            }
        }

        Ok(deleted)
    }

    pub async fn get_all_papers(&self, page: i64, size: i64) -> Result<Vec<Paper>, AppError> {
        self.paper_repo.find_all(page, size).await
    }

    pub async fn get_papers_by_writer(
        &self,
        user_id: &str,
        page: i64,
        size: i64,
    ) -> Result<Vec<Paper>, AppError> {
        let writer_id = self.validate_writer(user_id).await?;

        self.paper_repo.find_by_writer(writer_id, page, size).await
    }

    pub async fn get_papers_by_diary(
        &self,
        diary_id: i64,
        page: i64,
        size: i64,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<Paper>, AppError> {
        self.paper_repo
            .find_by_diary(diary_id, page, size, start_date, end_date)
            .await
    }

    /// 사용자가 북마크한 페이퍼 목록
    pub async fn get_papers_by_bookmark(
        &self,
        user_id: &str,
        page: i64,
        size: i64,
    ) -> Result<Vec<Paper>, AppError> {
        let owner_id = self.validate_writer(user_id).await?;

        let paper_ids = self.bookmark_repo
            .find_paper_ids_by_user(owner_id, page, size)
            .await?;

        self.paper_repo.find_by_ids(&paper_ids).await
    }

    /// 지도 표시용: 사용자의 모든 페이퍼
    pub async fn get_papers_for_map(&self, user_id: &str) -> Result<Vec<Paper>, AppError> {
        let writer_id = self.validate_writer(user_id).await?;

        self.paper_repo.find_all_by_writer(writer_id).await
    }

    pub async fn add_bookmark(&self, user_id: &str, paper_id: &str) -> Result<(), AppError> {
        let owner_id = self.validate_writer(user_id).await?;

        let paper = self.get_paper_by_id(paper_id).await?;
        let paper_object_id = paper
            .id
            .ok_or_else(|| AppError::InternalError("페이퍼 ID가 없습니다".to_string()))?;

        self.bookmark_repo
            .create(Bookmark::new(owner_id, paper_object_id))
            .await?;

        Ok(())
    }

    pub async fn remove_bookmark(&self, user_id: &str, paper_id: &str) -> Result<(), AppError> {
        let owner_id = self.validate_writer(user_id).await?;

        let paper_object_id = ObjectId::parse_str(paper_id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let removed = self.bookmark_repo.delete(owner_id, paper_object_id).await?;

        if !removed {
            return Err(AppError::NotFound("북마크를 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }
}
