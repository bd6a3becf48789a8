//! # User Data Transfer Objects Module
//!
//! 회원가입/로그인 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── register_request.rs    # 회원가입 요청
//! │   └── login_request.rs       # 로그인 요청
//! └── response/
//!     └── user_response.rs       # 사용자/회원가입/로그인 응답
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
