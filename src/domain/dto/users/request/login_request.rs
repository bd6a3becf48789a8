//! 로그인 요청 DTO
//!
//! `POST /login` 요청 본문을 매핑합니다.
//! 형식 검증은 하지 않으며 누락 여부만 확인합니다.

use serde::Deserialize;

use crate::utils::string_utils::deserialize_nullable_string;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub email: String,

    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn has_missing_fields(&self) -> bool {
        self.email.is_empty() || self.password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_request() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"email": "a@b.com", "password": "longenough"}"#).unwrap();

        assert_eq!(request.email, "a@b.com");
        assert!(!request.has_missing_fields());
    }

    #[test]
    fn test_missing_password() {
        let request: LoginRequest = serde_json::from_str(r#"{"email": "a@b.com"}"#).unwrap();

        assert!(request.has_missing_fields());
    }

    #[test]
    fn test_empty_email() {
        let request = LoginRequest::new("", "longenough");

        assert!(request.has_missing_fields());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result = serde_json::from_str::<LoginRequest>(r#"{"email": 42, "password": "x"}"#);

        assert!(result.is_err());
    }
}
