//! 인증 관련 서비스 모듈
//!
//! 비밀번호 해싱, JWT 발급/검증, 로그인 절차를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::auth::{AuthenticationService, BcryptPasswordHasher, JwtTokenIssuer};
//!
//! let service = AuthenticationService::new(
//!     store,
//!     Arc::new(BcryptPasswordHasher::from_config()),
//!     Arc::new(JwtTokenIssuer::from_config()),
//! );
//! let response = service.login(request).await?;
//! ```

pub mod authentication_service;
pub mod password_service;
pub mod token_service;

pub use authentication_service::*;
pub use password_service::*;
pub use token_service::*;
