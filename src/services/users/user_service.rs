//! # 사용자 관리 서비스
//!
//! 회원가입, 조회, 탈퇴와 카카오 자동 가입을 담당하는 비즈니스 로직입니다.
//!
//! ## 주요 책임
//!
//! 1. **회원가입**: 중복 검사(리포지토리 레벨), bcrypt 해싱, 엔티티 생성
//! 2. **조회**: ID/이메일 기반 검색, 엔티티 → DTO 변환 (민감 정보 제거)
//! 3. **카카오 가입**: 카카오 회원번호 기반 합성 이메일 계정 자동 생성
//! 4. **탈퇴**: 계정 삭제
//!
//! `#[service]` 매크로를 통해 싱글톤으로 관리되며 UserRepository가
//! 자동 주입됩니다.

use std::sync::Arc;
use bcrypt::hash;
use singleton_macro::service;
use crate::{
    domain::{
        entities::users::user::User,
        dto::users::{
            request::SignUpRequest,
            response::{SignUpResponse, UserResponse},
        },
    },
    repositories::users::user_repo::UserRepository,
    errors::AppError,
};
use crate::config::PasswordConfig;
use crate::utils::string_utils::clean_optional_string;

#[service(name = "user")]
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리 (자동 주입)
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// 새 로컬 계정을 생성합니다.
    ///
    /// # 처리 과정
    ///
    /// 1. 환경별 cost로 비밀번호 bcrypt 해싱
    /// 2. `User::new_local`로 엔티티 생성
    /// 3. 리포지토리 저장 (이메일/닉네임 중복 시 `ConflictError`)
    /// 4. 민감 정보를 제거한 응답 DTO 반환
    pub async fn sign_up(&self, request: SignUpRequest) -> Result<SignUpResponse, AppError> {
        let start_time = std::time::Instant::now();

        // 환경별 bcrypt cost 사용
        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new_local(
            request.email,
            request.name,
            request.nickname,
            password_hash,
            clean_optional_string(request.profile_img_url),
        );

        let created_user = self.user_repo.create(user).await?;

        log::info!(
            "회원가입 완료 - 이메일: {}, 소요 시간: {:?}",
            created_user.email,
            start_time.elapsed()
        );

        Ok(SignUpResponse {
            user: UserResponse::from(created_user),
            message: "회원가입이 완료되었습니다".to_string(),
        })
    }

    pub async fn get_user_by_id(&self, id: &str) -> Result<UserResponse, AppError> {
        let user = self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 이메일 존재 여부 확인 (카카오 로그인의 기존 회원 판별에 사용)
    pub async fn check_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        self.user_repo.exists_by_email(email).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        let deleted = self.user_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }

    /// 카카오 회원번호로 계정을 자동 생성합니다.
    ///
    /// 이메일은 `{카카오 id}@ustory.com`으로 합성되며 비밀번호는 없습니다.
    /// 닉네임이 이미 사용 중이면 회원번호를 붙여 유일하게 만듭니다.
    pub async fn kakao_sign_up(
        &self,
        kakao_id: &str,
        nickname: String,
        profile_image_url: Option<String>,
    ) -> Result<User, AppError> {
        let unique_nickname = self.resolve_unique_nickname(kakao_id, nickname).await?;

        let user = User::new_kakao(kakao_id, unique_nickname, profile_image_url);

        let created_user = self.user_repo.create(user).await?;

        log::info!("카카오 회원가입 완료 - 이메일: {}", created_user.email);

        Ok(created_user)
    }

    async fn resolve_unique_nickname(
        &self,
        kakao_id: &str,
        nickname: String,
    ) -> Result<String, AppError> {
        if self.user_repo.find_by_nickname(&nickname).await?.is_none() {
            return Ok(nickname);
        }

        let suffixed = format!("{}_{}", nickname, kakao_id);
        if self.user_repo.find_by_nickname(&suffixed).await?.is_none() {
            return Ok(suffixed);
        }

        Err(AppError::ConflictError("사용 가능한 닉네임을 만들 수 없습니다".to_string()))
    }
}
