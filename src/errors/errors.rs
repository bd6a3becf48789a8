//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 회원가입/로그인 흐름에서 발생하는 모든 실패를 하나의 열거형으로 표현합니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 각 에러를
//! HTTP 상태 코드와 `{"error": "..."}` 형태의 JSON 응답으로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `MissingFields` | 400 Bad Request |
//! | `InvalidEmailFormat` | 400 Bad Request |
//! | `PasswordTooShort` | 400 Bad Request |
//! | `InvalidNick` | 400 Bad Request |
//! | `MalformedRequest` | 400 Bad Request |
//! | `DuplicateUser` | 409 Conflict |
//! | `InvalidCredentials` | 401 Unauthorized |
//! | `Unauthorized` | 401 Unauthorized |
//! | `InternalError` | 500 Internal Server Error |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! let user = store.find_by_email(email).await
//!     .map_err(|e| AppError::InternalError(format!("사용자 조회 실패: {}", e)))?
//!     .ok_or(AppError::InvalidCredentials)?;
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// `Display` 구현은 클라이언트에게 그대로 노출되는 메시지입니다.
/// 내부 상세 정보는 `InternalError`의 필드에만 담기며 서버 로그로만 남습니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 필수 입력값 누락 (400)
    #[error("모든 필드는 필수입니다")]
    MissingFields,

    /// 이메일 형식 오류 (400)
    #[error("이메일 형식이 올바르지 않습니다")]
    InvalidEmailFormat,

    /// 비밀번호 길이 부족 (400)
    #[error("비밀번호는 최소 8자 이상이어야 합니다")]
    PasswordTooShort,

    /// 닉네임 규칙 위반 (400)
    #[error("닉네임은 3자 이상이며 문자와 숫자만 사용할 수 있습니다")]
    InvalidNick,

    /// JSON 본문 형식 오류 (400)
    ///
    /// 역직렬화 단계에서 거부된 요청입니다. 상세 원인은 로그에만 남깁니다.
    #[error("요청 본문 형식이 올바르지 않습니다")]
    MalformedRequest(String),

    /// 이메일 또는 닉네임 중복 (409)
    #[error("해당 이메일 또는 닉네임을 가진 사용자가 이미 존재합니다")]
    DuplicateUser,

    /// 로그인 실패 (401)
    ///
    /// 존재하지 않는 이메일과 틀린 비밀번호를 구분하지 않습니다.
    #[error("잘못된 이메일 또는 비밀번호입니다")]
    InvalidCredentials,

    /// 베어러 토큰 누락/만료/위조 (401)
    #[error("{0}")]
    Unauthorized(String),

    /// 예상하지 못한 저장소/해셔/토큰 발급 실패 (500)
    #[error("내부 서버 오류가 발생했습니다")]
    InternalError(String),
}

impl AppError {
    /// 에러에 대응하는 HTTP 상태 코드
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingFields
            | AppError::InvalidEmailFormat
            | AppError::PasswordTooShort
            | AppError::InvalidNick
            | AppError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            AppError::DuplicateUser => StatusCode::CONFLICT,
            AppError::InvalidCredentials | AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 본문은 항상 `{"error": "<메시지>"}` 형식입니다.
    /// `InternalError`의 상세 내용은 서버 로그에만 기록됩니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        if let AppError::InternalError(detail) = self {
            log::error!("Internal error: {}", detail);
        }

        actix_web::HttpResponse::build(self.status())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 `AppError::InternalError`로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_errors_are_bad_request() {
        for error in [
            AppError::MissingFields,
            AppError::InvalidEmailFormat,
            AppError::PasswordTooShort,
            AppError::InvalidNick,
            AppError::MalformedRequest("expected value".to_string()),
        ] {
            assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_duplicate_user_response() {
        let response = AppError::DuplicateUser.error_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_authentication_error_responses() {
        assert_eq!(
            AppError::InvalidCredentials.error_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Unauthorized("토큰이 만료되었습니다".to_string()).error_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[actix_web::test]
    async fn test_internal_error_hides_details() {
        let error = AppError::InternalError("connection reset by peer".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let message = json["error"].as_str().unwrap();

        assert!(!message.contains("connection reset"));
        assert_eq!(message, "내부 서버 오류가 발생했습니다");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
