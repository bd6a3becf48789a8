//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserStore`] trait과 두 가지 구현을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserStore, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
//! let user = store.find_by_email("user@example.com").await?;
//! ```

pub mod user_store;
pub mod user_repo;
pub mod memory_user_repo;

pub use user_store::{StoreError, UserStore};
pub use user_repo::MongoUserStore;
pub use memory_user_repo::InMemoryUserStore;
