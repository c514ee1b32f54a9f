//! 페이지 API 핸들러 (구 명칭)
//!
//! 페이지는 페이퍼로 이름이 바뀌는 중인 개념으로, 클라이언트 호환을 위해
//! `/api/page*` 경로를 유지합니다. 저장소는 페이퍼 도메인을 그대로 사용하며,
//! 모든 핸들러는 [`super::papers`]의 흐름에 위임합니다.

use actix_web::{web, HttpResponse, get, post, put, delete};
use validator::Validate;
use crate::domain::dto::papers::{
    AddPaperRequest, DiaryPapersQuery, PageableQuery, PaperListResponse,
    UpdatePaperRequest, UserPapersQuery,
};
use crate::errors::AppError;
use crate::handlers::papers::{create_flow, delete_flow, read_flow, update_flow};
use crate::services::papers::PaperService;

#[post("/page")]
pub async fn create(
    payload: web::Json<AddPaperRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = create_flow(&payload).await?;

    Ok(HttpResponse::Created().json(response))
}

#[put("/page/{page_id}")]
pub async fn update(
    page_id: web::Path<String>,
    payload: web::Json<UpdatePaperRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = update_flow(&page_id, &payload).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[get("/page/{page_id}")]
pub async fn read(
    page_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = read_flow(&page_id).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 모든 페이지 목록 (관리자 용도로만 사용될 예정)
#[get("/pages")]
pub async fn get_all_pages(
    query: web::Query<PageableQuery>,
) -> Result<HttpResponse, AppError> {
    let service = PaperService::instance();

    let papers = service.get_all_papers(query.page, query.size).await?;

    let result: Vec<PaperListResponse> = papers.into_iter().map(PaperListResponse::from).collect();

    Ok(HttpResponse::Ok().json(result))
}

#[get("/pages/user")]
pub async fn get_all_pages_by_user(
    query: web::Query<UserPapersQuery>,
) -> Result<HttpResponse, AppError> {
    let service = PaperService::instance();

    let papers = service
        .get_papers_by_writer(&query.user_id, query.page, query.size)
        .await?;

    let result: Vec<PaperListResponse> = papers.into_iter().map(PaperListResponse::from).collect();

    Ok(HttpResponse::Ok().json(result))
}

#[get("/pages/diary")]
pub async fn get_all_pages_by_diary(
    query: web::Query<DiaryPapersQuery>,
) -> Result<HttpResponse, AppError> {
    let service = PaperService::instance();

    let papers = service
        .get_papers_by_diary(
            query.diary_id,
            query.page,
            query.size,
            query.start_date,
            query.end_date,
        )
        .await?;

    let result: Vec<PaperListResponse> = papers.into_iter().map(PaperListResponse::from).collect();

    Ok(HttpResponse::Ok().json(result))
}

#[delete("/page/{page_id}")]
pub async fn delete(
    page_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    delete_flow(&page_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
