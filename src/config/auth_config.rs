//! # Authentication Configuration Module
//!
//! JWT 토큰 발급과 CORS 정책 등 인증 관련 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### JWT 토큰 설정
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```
//!
//! ### CORS 설정
//! ```bash
//! export CORS_ALLOWED_ORIGIN="https://your-frontend.example.com"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{JwtConfig, CorsConfig};
//!
//! let secret = JwtConfig::secret();
//! let expiration = JwtConfig::expiration_hours();
//! let origin = CorsConfig::allowed_origin();
//! ```

use std::env;

/// JWT 토큰 설정
///
/// 액세스 토큰 서명 키와 만료 시간을 제공합니다.
/// 리프레시 토큰은 발급하지 않습니다.
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 HMAC 비밀 키를 반환합니다.
    ///
    /// `JWT_SECRET`이 설정되지 않으면 경고 로그와 함께 개발용 기본값을 사용합니다.
    /// 프로덕션에서는 반드시 충분히 긴 임의의 값을 설정해야 합니다.
    ///
    /// # 보안 주의사항
    ///
    /// - 이 값을 로그에 출력하지 마세요
    /// - 환경 변수나 보안 저장소에만 저장하세요
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// 액세스 토큰 만료 시간(시간 단위). 기본값: 24
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&hours: &i64| hours > 0)
            .unwrap_or(24)
    }
}

/// CORS 정책 설정
///
/// 프론트엔드 한 곳의 Origin만 허용합니다.
pub struct CorsConfig;

impl CorsConfig {
    /// 허용할 Origin. 기본값: `http://localhost:3000`
    pub fn allowed_origin() -> String {
        env::var("CORS_ALLOWED_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
    }

    /// Preflight 요청 캐시 시간(초). 기본값: 3600
    pub fn max_age() -> usize {
        env::var("CORS_MAX_AGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600)
    }
}
