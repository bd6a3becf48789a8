//! # 회원가입 서비스
//!
//! 검증 → 중복 확인 → 비밀번호 해싱 → 저장 순서로 새 사용자를 등록합니다.
//!
//! ## 유일성 보장
//!
//! 사전 중복 조회는 빠른 실패를 위한 것이며, 최종 판단은 저장소의 유니크 제약입니다.
//! 동시에 같은 이메일로 가입하면 조회는 모두 통과할 수 있지만
//! 저장 단계에서 하나만 성공하고 나머지는 [`AppError::DuplicateUser`]를 받습니다.

use std::sync::Arc;

use crate::{
    domain::{
        dto::users::{request::RegisterRequest, response::RegisterResponse},
        entities::users::user::User,
    },
    errors::{AppError, AppResult, ErrorContext},
    repositories::users::{StoreError, UserStore},
    services::{auth::PasswordHasher, users::input_validator::validate_registration},
};

pub struct RegistrationService {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl RegistrationService {
    pub fn new(store: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    /// 새 사용자를 등록합니다.
    ///
    /// 검증에 실패하면 저장소와 해셔에 전혀 접근하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::MissingFields` / `InvalidEmailFormat` / `PasswordTooShort` / `InvalidNick` - 입력 검증 실패
    /// * `AppError::DuplicateUser` - 이메일 또는 닉네임이 이미 사용 중
    /// * `AppError::InternalError` - 해싱 또는 저장소 실패
    pub async fn register(&self, request: RegisterRequest) -> AppResult<RegisterResponse> {
        let start_time = std::time::Instant::now();

        if let Err(e) = validate_registration(&request) {
            log::warn!("회원가입 입력 검증 실패 (email: {}): {}", request.email, e);
            return Err(e);
        }

        let existing = self.store
            .find_by_email_or_nick(&request.email, &request.nick)
            .await
            .context("사용자 중복 조회 실패")?;

        if existing.is_some() {
            log::warn!("중복 사용자 가입 시도 (email: {}, nick: {})", request.email, request.nick);
            return Err(AppError::DuplicateUser);
        }

        let password_hash = self.hasher.hash(&request.password)?;
        let user = User::new(request.email, request.nick, password_hash);

        let created = self.store.create(user).await.map_err(|e| match e {
            StoreError::Duplicate(detail) => {
                log::warn!("저장 단계에서 중복 사용자 감지: {}", detail);
                AppError::DuplicateUser
            }
            other => AppError::InternalError(format!("사용자 저장 실패: {}", other)),
        })?;

        log::info!(
            "✅ 사용자 등록 완료 (id: {}, email: {}) in {:?}",
            created.id_string().unwrap_or_default(),
            created.email,
            start_time.elapsed()
        );

        Ok(RegisterResponse::success())
    }
}
