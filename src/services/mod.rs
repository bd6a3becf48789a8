//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스는 저장소, 해셔, 토큰 발급기를 trait 객체로 주입받습니다.
//! 실제 구현의 조립은 [`crate::core::AppServices`]가 담당합니다.

pub mod users;
pub mod auth;
