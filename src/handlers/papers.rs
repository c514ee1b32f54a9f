//! 페이퍼 API 핸들러
//!
//! `/api/paper*` 엔드포인트를 처리합니다. 생성/수정/조회/삭제의 실제
//! 흐름은 `*_flow` 함수로 분리되어 있으며, 이관 중인 구 페이지 API
//! ([`super::pages`])가 같은 흐름을 재사용합니다.

use actix_web::{web, HttpResponse, get, post, put, delete};
use validator::Validate;
use crate::domain::dto::papers::{
    AddPaperRequest, AddPaperResponse, DiaryPapersQuery, MapPaperResponse,
    PaperListResponse, PaperResponse, UpdatePaperRequest, UpdatePaperResponse,
    UserIdQuery, UserPapersQuery,
};
use crate::errors::AppError;
use crate::repositories::papers::paper_repo::PaperRepository;
use crate::services::papers::{AddressService, ImageService, PaperService};

/// 페이퍼 생성 흐름: 작성자 검증 → 주소 생성 → 페이퍼 생성 → 이미지 생성
pub(crate) async fn create_flow(request: &AddPaperRequest) -> Result<AddPaperResponse, AppError> {
    let paper_service = PaperService::instance();
    let address_service = AddressService::instance();
    let image_service = ImageService::instance();

    // 사용자 검증 (다이어리는 외부 도메인이므로 id만 보관)
    let writer_id = paper_service.validate_writer(&request.member_id).await?;

    let address = address_service
        .create_address(request.to_address_entity())
        .await?;
    let address_id = address
        .id
        .ok_or_else(|| AppError::InternalError("주소 ID가 없습니다".to_string()))?;

    let paper = paper_service
        .create_paper(request.to_paper_entity(writer_id, address_id))
        .await?;
    let paper_id = paper
        .id
        .ok_or_else(|| AppError::InternalError("페이퍼 ID가 없습니다".to_string()))?;

    image_service.create_images(paper_id, &request.images).await?;

    Ok(AddPaperResponse {
        id: paper.id_string().unwrap_or_default(),
    })
}

/// 페이퍼 수정 흐름: 주소 갱신 → 이미지 차등 반영 → 페이퍼 필드 갱신
pub(crate) async fn update_flow(
    paper_id: &str,
    request: &UpdatePaperRequest,
) -> Result<UpdatePaperResponse, AppError> {
    let paper_service = PaperService::instance();
    let address_service = AddressService::instance();
    let image_service = ImageService::instance();

    let paper = paper_service.get_paper_by_id(paper_id).await?;

    address_service
        .update_address(paper.address_id, request.to_address_entity())
        .await?;

    let paper_object_id = paper
        .id
        .ok_or_else(|| AppError::InternalError("페이퍼 ID가 없습니다".to_string()))?;

    image_service
        .update_images(paper_object_id, &request.images)
        .await?;

    let updated = paper_service
        .update_paper(
            paper_id,
            PaperRepository::build_update_doc(
                &request.title,
                &request.thumbnail_image,
                request.visited_at,
                paper.address_id,
            ),
        )
        .await?;

    Ok(UpdatePaperResponse {
        id: updated.id_string().unwrap_or_default(),
    })
}

/// 페이퍼 단건 조회 흐름: 페이퍼 + 주소 + 이미지 조립
pub(crate) async fn read_flow(paper_id: &str) -> Result<PaperResponse, AppError> {
    let paper_service = PaperService::instance();
    let address_service = AddressService::instance();
    let image_service = ImageService::instance();

    let paper = paper_service.get_paper_by_id(paper_id).await?;

    let address = address_service.get_address(paper.address_id).await?;

    let paper_object_id = paper
        .id
        .ok_or_else(|| AppError::InternalError("페이퍼 ID가 없습니다".to_string()))?;
    let images = image_service.find_by_paper(paper_object_id).await?;

    Ok(PaperResponse::new(paper, address, images))
}

/// 페이퍼 삭제 흐름: 이미지/주소/북마크까지 함께 정리
pub(crate) async fn delete_flow(paper_id: &str) -> Result<(), AppError> {
    let paper_service = PaperService::instance();
    let address_service = AddressService::instance();
    let image_service = ImageService::instance();

    let paper = paper_service.get_paper_by_id(paper_id).await?;

    if let Some(paper_object_id) = paper.id {
        image_service.delete_by_paper(paper_object_id).await?;
    }
    address_service.delete_address(paper.address_id).await?;

    paper_service.delete_by_id(paper_id).await?;

    Ok(())
}

#[post("/paper")]
pub async fn create(
    payload: web::Json<AddPaperRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = create_flow(&payload).await?;

    Ok(HttpResponse::Created().json(response))
}

#[put("/paper/{paper_id}")]
pub async fn update(
    paper_id: web::Path<String>,
    payload: web::Json<UpdatePaperRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = update_flow(&paper_id, &payload).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[get("/paper/{paper_id}")]
pub async fn get_paper(
    paper_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = read_flow(&paper_id).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 유저가 작성한 페이퍼 리스트
#[get("/papers/user")]
pub async fn get_all_papers_by_user(
    query: web::Query<UserPapersQuery>,
) -> Result<HttpResponse, AppError> {
    let service = PaperService::instance();

    let papers = service
        .get_papers_by_writer(&query.user_id, query.page, query.size)
        .await?;

    let result: Vec<PaperListResponse> = papers.into_iter().map(PaperListResponse::from).collect();

    Ok(HttpResponse::Ok().json(result))
}

/// 다이어리에 포함된 페이퍼 리스트 (방문 날짜 범위 필터 지원)
#[get("/papers/diary")]
pub async fn get_all_papers_by_diary(
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

/// 유저가 북마크한 페이퍼 리스트
#[get("/papers/bookmark")]
pub async fn get_all_papers_by_bookmark(
    query: web::Query<UserPapersQuery>,
) -> Result<HttpResponse, AppError> {
    let service = PaperService::instance();

    let papers = service
        .get_papers_by_bookmark(&query.user_id, query.page, query.size)
        .await?;

    let result: Vec<PaperListResponse> = papers.into_iter().map(PaperListResponse::from).collect();

    Ok(HttpResponse::Ok().json(result))
}

/// 지도 표시용: 유저와 관련된 모든 페이퍼 (좌표 포함)
#[get("/papers/map")]
pub async fn get_all_papers_for_map(
    query: web::Query<UserIdQuery>,
) -> Result<HttpResponse, AppError> {
    let paper_service = PaperService::instance();
    let address_service = AddressService::instance();

    let papers = paper_service.get_papers_for_map(&query.user_id).await?;

    let mut result = Vec::with_capacity(papers.len());
    for paper in &papers {
        let address = address_service.get_address(paper.address_id).await?;
        result.push(MapPaperResponse::new(paper, &address));
    }

    Ok(HttpResponse::Ok().json(result))
}

#[post("/paper/{paper_id}/bookmark")]
pub async fn add_bookmark(
    paper_id: web::Path<String>,
    query: web::Query<UserIdQuery>,
) -> Result<HttpResponse, AppError> {
    let service = PaperService::instance();

    service.add_bookmark(&query.user_id, &paper_id).await?;

    Ok(HttpResponse::Created().finish())
}

#[delete("/paper/{paper_id}/bookmark")]
pub async fn remove_bookmark(
    paper_id: web::Path<String>,
    query: web::Query<UserIdQuery>,
) -> Result<HttpResponse, AppError> {
    let service = PaperService::instance();

    service.remove_bookmark(&query.user_id, &paper_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[delete("/paper/{paper_id}")]
pub async fn delete(
    paper_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    delete_flow(&paper_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
