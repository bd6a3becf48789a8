//! # 사용자 관련 응답 DTO 모듈
//!
//! 비즈니스 로직 처리 결과를 클라이언트에게 전달하는 응답 구조체들입니다.
//! 비밀번호 해시 등 민감한 정보는 어떤 응답에도 포함되지 않습니다.
//!
//! ## JSON 응답 예제
//!
//! ### 회원가입 응답
//! ```json
//! { "message": "사용자가 성공적으로 등록되었습니다" }
//! ```
//!
//! ### 로그인 응답
//! ```json
//! {
//!   "token": "eyJhbGciOiJIUzI1NiIs...",
//!   "user": {
//!     "id": "507f1f77bcf86cd799439011",
//!     "email": "a@b.com",
//!     "nick": "abc123"
//!   }
//! }
//! ```

pub mod user_response;

pub use user_response::{UserResponse, RegisterResponse, LoginResponse};
