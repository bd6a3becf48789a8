//! 사용자 등록 서비스 모듈
//!
//! 입력 검증과 회원가입 절차를 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::RegistrationService;
//! use crate::domain::dto::users::request::RegisterRequest;
//!
//! let service = RegistrationService::new(store, hasher);
//! let response = service.register(RegisterRequest::new("a@b.com", "longenough", "abc123")).await?;
//! ```

pub mod input_validator;
pub mod registration_service;

pub use input_validator::validate_registration;
pub use registration_service::RegistrationService;
