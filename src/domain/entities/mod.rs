//! # Domain Entities Module
//!
//! 저장소에 영속되는 엔티티들을 정의합니다.
//! MongoDB 문서와 직접 매핑되며, 인메모리 저장소도 같은 구조를 사용합니다.

pub mod users;

pub use users::*;
