//! # 사용자 저장소 추상화
//!
//! 서비스 계층은 이 trait에만 의존하며, 실제 구현은 생성 시점에 주입됩니다.
//!
//! - [`MongoUserStore`](super::user_repo::MongoUserStore) - 운영용 MongoDB 구현
//! - [`InMemoryUserStore`](super::memory_user_repo::InMemoryUserStore) - 테스트/로컬 실행용 구현
//!
//! ## 유일성 보장
//!
//! 이메일과 닉네임의 유일성은 저장소가 최종적으로 보장합니다.
//! 서비스의 사전 중복 조회를 통과했더라도 `create`가
//! [`StoreError::Duplicate`]를 반환할 수 있으며, 호출자는 이를 중복 사용자로 처리해야 합니다.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::users::user::User;

/// 저장소 연산 실패 유형
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// 유니크 제약 조건 위반 (이메일 또는 닉네임)
    #[error("unique constraint violated: {0}")]
    Duplicate(String),

    /// 연결 실패, 타임아웃 등 저장소 내부 오류
    ///
    /// 이 에러가 발생한 쓰기는 커밋되지 않은 것으로 간주합니다.
    #[error("store backend failure: {0}")]
    Backend(String),
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 사용자를 저장하고 ID가 할당된 엔티티를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `StoreError::Duplicate` - 이메일 또는 닉네임이 이미 존재
    /// * `StoreError::Backend` - 저장 실패 (부분 저장 없음)
    async fn create(&self, user: User) -> Result<User, StoreError>;

    /// 이메일 또는 닉네임이 일치하는 사용자를 조회합니다.
    async fn find_by_email_or_nick(&self, email: &str, nick: &str) -> Result<Option<User>, StoreError>;

    /// 이메일로 사용자를 조회합니다.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}
