//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 등록합니다.
//!
//! ## 엔드포인트 요약
//!
//! ### 페이퍼 API (`/api`)
//! - `POST /api/paper` - 페이퍼 생성
//! - `PUT /api/paper/{paperId}` - 페이퍼 수정
//! - `GET /api/paper/{paperId}` - 페이퍼 조회
//! - `GET /api/papers/user?userId=` - 유저가 작성한 페이퍼 리스트
//! - `GET /api/papers/diary?diaryId=` - 다이어리에 포함된 페이퍼 리스트
//! - `GET /api/papers/bookmark?userId=` - 유저가 북마크한 페이퍼 리스트
//! - `GET /api/papers/map?userId=` - 지도 표시용 페이퍼 리스트
//! - `POST|DELETE /api/paper/{paperId}/bookmark?userId=` - 북마크 등록/해제
//! - `DELETE /api/paper/{paperId}` - 페이퍼 삭제
//!
//! ### 페이지 API (`/api`, 구 명칭 - 페이퍼로 이관 중)
//! - `POST /api/page`, `PUT|GET|DELETE /api/page/{pageId}`
//! - `GET /api/pages`, `GET /api/pages/user`, `GET /api/pages/diary`
//!
//! ### 사용자 API (`/api/users`)
//! - `POST /api/users/sign-up` - 회원가입
//! - `GET /api/users/validate-email?email=` - 이메일 중복 확인
//! - `POST /api/users/auth-code` - 인증코드 메일 발송
//! - `POST /api/users/auth-code/verify` - 인증코드 검증
//! - `GET|DELETE /api/users/{userId}` - 프로필 조회 / 탈퇴
//!
//! ### 카카오 OAuth
//! - `GET /login` - 카카오 로그인 URL
//! - `GET|POST /login/oauth2/code/kakao` - 카카오 로그인 콜백
//! - `GET|POST /auth/logout` - 로그아웃

use crate::handlers;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_paper_routes(cfg);
    configure_user_routes(cfg);
    configure_auth_routes(cfg);
}

/// 페이퍼/페이지 관련 라우트를 설정합니다
///
/// 구 페이지 API와 신 페이퍼 API가 같은 `/api` 스코프를 공유합니다.
fn configure_paper_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Paper API
            .service(handlers::papers::create)
            .service(handlers::papers::update)
            .service(handlers::papers::get_all_papers_by_user)
            .service(handlers::papers::get_all_papers_by_diary)
            .service(handlers::papers::get_all_papers_by_bookmark)
            .service(handlers::papers::get_all_papers_for_map)
            .service(handlers::papers::add_bookmark)
            .service(handlers::papers::remove_bookmark)
            .service(handlers::papers::get_paper)
            .service(handlers::papers::delete)
            // Page API (구 명칭)
            .service(handlers::pages::create)
            .service(handlers::pages::update)
            .service(handlers::pages::get_all_pages)
            .service(handlers::pages::get_all_pages_by_user)
            .service(handlers::pages::get_all_pages_by_diary)
            .service(handlers::pages::read)
            .service(handlers::pages::delete)
    );
}

/// 사용자 관련 라우트를 설정합니다
///
/// `/{user_id}` 경로가 고정 경로를 가리지 않도록
/// 구체적인 경로를 먼저 등록합니다.
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::sign_up)
            .service(handlers::users::validate_email)
            .service(handlers::users::send_auth_code)
            .service(handlers::users::verify_auth_code)
            .service(handlers::users::get_user)
            .service(handlers::users::delete_user)
    );
}

/// 카카오 OAuth 라우트를 설정합니다
///
/// 경로가 스코프를 공유하지 않으므로 루트에 직접 등록합니다.
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::show_login);
    cfg.service(handlers::auth::kakao_login);
    cfg.service(handlers::auth::kakao_logout);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "ustory_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "oauth": "Kakao"
        }
    }))
}
