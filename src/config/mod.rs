//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 타입이 있는 접근자로 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, 비밀번호 해싱 설정
//! - [`auth_config`] - JWT, CORS 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # 저장소 설정
//! export USER_STORE="mongo"        # mongo, memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="credential_auth_dev"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_HOURS="24"
//!
//! # 보안 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! export CORS_ALLOWED_ORIGIN="https://your-frontend.example.com"
//! ```
//!
//! 실행 시 `PROFILE` 값에 따라 `.env.dev` / `.env.prod` 파일이 먼저 로드됩니다.

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
