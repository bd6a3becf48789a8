//! 이메일/비밀번호 기반 회원가입·로그인 서비스
//!
//! 사용자를 등록하고, 자격 증명을 확인한 뒤 JWT 액세스 토큰을 발급합니다.
//!
//! # Features
//!
//! - **회원가입**: 입력 검증, 이메일/닉네임 중복 방지, bcrypt 해싱
//! - **로그인**: 계정 존재 여부를 드러내지 않는 단일 실패 응답
//! - **JWT 인증**: HS256 서명 토큰과 보호 엔드포인트용 미들웨어
//! - **저장소 교체**: MongoDB 또는 인메모리 저장소를 trait 객체로 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 해싱, 토큰 발급
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore trait
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB / 메모리 │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use credential_auth_service::core::AppServices;
//! use credential_auth_service::repositories::users::InMemoryUserStore;
//!
//! let services = AppServices::from_config(Arc::new(InMemoryUserStore::new()));
//!
//! services.registration.register(register_request).await?;
//! let response = services.authentication.login(login_request).await?;
//! println!("token: {}", response.token);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
