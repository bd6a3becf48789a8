//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 요청 본문 문자열 역직렬화 유틸리티

pub mod string_utils;
