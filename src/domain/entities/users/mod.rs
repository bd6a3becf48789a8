//! Users Entity Module
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new(
//!     "a@b.com".to_string(),
//!     "abc123".to_string(),
//!     hashed_password,
//! );
//! ```

pub mod user;

pub use user::User;
