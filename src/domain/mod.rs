//! # Domain Layer
//!
//! 사용자 엔티티, 요청/응답 DTO, 인증 모델을 정의하는 도메인 계층입니다.
//!
//! ```text
//! domain/
//! ├── entities/   # 저장소에 영속되는 엔티티 (User)
//! ├── dto/        # HTTP 요청/응답 데이터 구조
//! └── models/     # 토큰 클레임, 인증된 사용자
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::User;
pub use dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserResponse};
pub use models::{AuthenticatedUser, TokenClaims};
