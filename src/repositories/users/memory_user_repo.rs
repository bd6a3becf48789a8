//! # 인메모리 사용자 저장소
//!
//! 테스트와 MongoDB 없는 로컬 실행(`USER_STORE=memory`)에 사용합니다.
//! 중복 검사와 삽입이 하나의 잠금 안에서 수행되므로
//! 동시 회원가입 중 하나만 성공합니다.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::{
    domain::entities::users::user::User,
    repositories::users::user_store::{StoreError, UserStore},
};

#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 사용자 수
    pub fn len(&self) -> usize {
        self.lock().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<User>>, StoreError> {
        self.users
            .lock()
            .map_err(|e| StoreError::Backend(format!("저장소 잠금 실패: {}", e)))
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, mut user: User) -> Result<User, StoreError> {
        let mut users = self.lock()?;

        if let Some(existing) = users.iter().find(|u| u.email == user.email || u.nick == user.nick) {
            let field = if existing.email == user.email { "email" } else { "nick" };
            return Err(StoreError::Duplicate(format!("{} already exists", field)));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());

        Ok(user)
    }

    async fn find_by_email_or_nick(&self, email: &str, nick: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .lock()?
            .iter()
            .find(|u| u.email == email || u.nick == nick)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.lock()?.iter().find(|u| u.email == email).cloned())
    }
}
