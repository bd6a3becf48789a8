//! 미들웨어 모듈
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <token>` 헤더 추출 및 검증
//! - 검증된 사용자 정보를 request extension에 저장
//! - 토큰이 없거나 유효하지 않으면 `401 {"error": "..."}`로 즉시 응답
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::AuthMiddleware;
//!
//! App::new()
//!     .service(
//!         web::scope("/protected")
//!             .wrap(AuthMiddleware::new(token_issuer.clone()))
//!             .service(protected)
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
