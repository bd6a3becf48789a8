//! # 문자열 유틸리티
//!
//! 요청 DTO의 문자열 필드 처리를 위한 공통 유틸리티 함수들입니다.

use serde::Deserialize;

/// `null`을 빈 문자열로 역직렬화합니다.
///
/// 값이 `null`이거나 필드가 없는 경우(`#[serde(default)]`와 함께 사용)를
/// 빈 문자열과 동일하게 취급하여 "필수 필드 누락"으로 판단할 수 있게 합니다.
/// 공백은 제거하지 않습니다.
pub fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
