//! # 회원가입 요청 DTO
//!
//! `POST /register` 요청 본문을 매핑합니다.
//!
//! ## 검증 규칙
//!
//! - `email`: `@`를 포함하고, 마지막 `@` 뒤에 `.`이 있어야 함
//! - `password`: 8자 이상
//! - `nick`: 3자 이상, 문자와 숫자만 허용
//!
//! 필드 누락이나 `null`은 역직렬화 단계에서 빈 문자열로 채워지며,
//! 누락 여부와 규칙 간 우선순위는 `services::users::input_validator`가 결정합니다.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::utils::string_utils::deserialize_nullable_string;

pub const CODE_INVALID_EMAIL: &str = "invalid_email_format";
pub const CODE_PASSWORD_TOO_SHORT: &str = "password_too_short";
pub const CODE_INVALID_NICK: &str = "invalid_nick";

pub const NICK_MIN_LENGTH: usize = 3;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(custom(function = "validate_email_format"))]
    pub email: String,

    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 8, code = "password_too_short"))]
    pub password: String,

    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(custom(function = "validate_nick"))]
    pub nick: String,
}

impl RegisterRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>, nick: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            nick: nick.into(),
        }
    }

    /// 세 필드 중 하나라도 비어 있는지 확인
    pub fn has_missing_fields(&self) -> bool {
        self.email.is_empty() || self.password.is_empty() || self.nick.is_empty()
    }
}

fn validate_email_format(email: &str) -> Result<(), ValidationError> {
    let domain_has_dot = email
        .rsplit('@')
        .next()
        .is_some_and(|domain| domain.contains('.'));

    if !email.contains('@') || !domain_has_dot {
        return Err(ValidationError::new(CODE_INVALID_EMAIL)
            .with_message("이메일 형식이 올바르지 않습니다".into()));
    }
    Ok(())
}

fn validate_nick(nick: &str) -> Result<(), ValidationError> {
    if nick.chars().count() < NICK_MIN_LENGTH || !nick.chars().all(char::is_alphanumeric) {
        return Err(ValidationError::new(CODE_INVALID_NICK)
            .with_message("닉네임은 3자 이상이며 문자와 숫자만 사용할 수 있습니다".into()));
    }
    Ok(())
}
