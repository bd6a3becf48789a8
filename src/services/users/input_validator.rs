//! 회원가입 입력 검증
//!
//! 여러 규칙이 동시에 실패해도 클라이언트에는 하나의 에러만 반환합니다.
//! 검사 순서: 필드 누락 → 이메일 형식 → 비밀번호 길이 → 닉네임 규칙

use validator::Validate;

use crate::{
    domain::dto::users::request::RegisterRequest,
    errors::AppError,
};

/// 규칙 우선순위 (앞쪽이 먼저 보고됨)
const FIELD_PRIORITY: [(&str, AppError); 3] = [
    ("email", AppError::InvalidEmailFormat),
    ("password", AppError::PasswordTooShort),
    ("nick", AppError::InvalidNick),
];

/// 회원가입 요청을 검증하고 첫 번째로 위반된 규칙을 반환합니다.
///
/// 저장소나 해셔에 접근하지 않는 순수 함수입니다.
///
/// # Errors
///
/// * `AppError::MissingFields` - 필드가 비어 있거나 누락됨
/// * `AppError::InvalidEmailFormat` - 이메일 형식 위반
/// * `AppError::PasswordTooShort` - 비밀번호 8자 미만
/// * `AppError::InvalidNick` - 닉네임 3자 미만 또는 영숫자 외 문자 포함
pub fn validate_registration(request: &RegisterRequest) -> Result<(), AppError> {
    if request.has_missing_fields() {
        return Err(AppError::MissingFields);
    }

    let errors = match request.validate() {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };

    let field_errors = errors.field_errors();
    FIELD_PRIORITY
        .into_iter()
        .find(|(field, _)| field_errors.contains_key(*field))
        .map_or_else(
            || Err(AppError::MalformedRequest(errors.to_string())),
            |(_, error)| Err(error),
        )
}
