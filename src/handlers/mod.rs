//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청 본문을 DTO로 받아 서비스에 위임하고,
//! 서비스가 반환한 [`AppError`](crate::errors::AppError)는 `ResponseError` 구현을 통해 응답으로 변환됩니다.
//!
//! ## 엔드포인트
//!
//! | Method | Path | Handler | 성공 응답 |
//! |--------|------|---------|-----------|
//! | `POST` | `/register` | [`auth::register`] | `201 {"message"}` |
//! | `POST` | `/login` | [`auth::login`] | `200 {"token", "user"}` |
//! | `GET` | `/protected` | [`protected::protected`] | `200 {"message", "user_id"}` |
//!
//! ## 서비스 주입
//!
//! ```rust,ignore
//! #[post("/register")]
//! pub async fn register(
//!     services: web::Data<AppServices>,
//!     payload: web::Json<RegisterRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     let response = services.registration.register(payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(response))
//! }
//! ```

pub mod auth;
pub mod protected;
