//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 타입이 있는 Rust 구조체로 변환합니다.
//! 알 수 없는 필드나 잘못된 타입은 역직렬화 단계에서 거부되어
//! 비즈니스 로직에 도달하지 않습니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`)
//! 2. **형식 검증**: 이메일, 길이, 닉네임 규칙 (`validator`)
//! 3. **비즈니스 검증**: 중복 확인 (서비스 계층)

pub mod register_request;
pub mod login_request;

pub use register_request::RegisterRequest;
pub use login_request::LoginRequest;
