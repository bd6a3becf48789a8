//! # 로그인 서비스
//!
//! 이메일/비밀번호를 확인하고 액세스 토큰을 발급합니다.
//!
//! 존재하지 않는 이메일과 틀린 비밀번호는 동일한
//! [`AppError::InvalidCredentials`]로 응답하여 계정 존재 여부를 노출하지 않습니다.

use std::sync::Arc;

use crate::{
    domain::dto::users::{request::LoginRequest, response::LoginResponse},
    errors::{AppError, AppResult, ErrorContext},
    repositories::users::UserStore,
    services::auth::{PasswordHasher, TokenIssuer},
};

pub struct AuthenticationService {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
    issuer: Arc<dyn TokenIssuer>,
}

impl AuthenticationService {
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHasher>,
        issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self { store, hasher, issuer }
    }

    /// 자격 증명을 확인하고 토큰과 사용자 정보를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::MissingFields` - 이메일 또는 비밀번호가 비어 있음
    /// * `AppError::InvalidCredentials` - 사용자가 없거나 비밀번호 불일치
    /// * `AppError::InternalError` - 저장소/해셔/토큰 발급 실패
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let start_time = std::time::Instant::now();

        if request.has_missing_fields() {
            log::warn!("로그인 입력 누락 (email: {})", request.email);
            return Err(AppError::MissingFields);
        }

        let user = self.store
            .find_by_email(&request.email)
            .await
            .context("사용자 조회 실패")?;

        let Some(user) = user else {
            log::warn!("로그인 실패: 등록되지 않은 이메일 ({})", request.email);
            return Err(AppError::InvalidCredentials);
        };

        if !self.hasher.verify(&request.password, &user.password_hash)? {
            log::warn!("로그인 실패: 비밀번호 불일치 ({})", request.email);
            return Err(AppError::InvalidCredentials);
        }

        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;
        let token = self.issuer.issue(&user_id)?;

        log::info!("✅ 로그인 성공 (id: {}) in {:?}", user_id, start_time.elapsed());

        Ok(LoginResponse::new(user, token))
    }
}
