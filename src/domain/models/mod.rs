//! # Domain Models
//!
//! 영속되지 않는 인증 관련 모델입니다.
//!
//! - [`auth`] - 요청 단위로 검증된 사용자 신원
//! - [`token`] - JWT 클레임

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
