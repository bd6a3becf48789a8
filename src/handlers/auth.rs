//! 회원가입 및 로그인 핸들러

use actix_web::{error::JsonPayloadError, post, web, HttpRequest, HttpResponse};

use crate::{
    core::AppServices,
    domain::dto::users::request::{LoginRequest, RegisterRequest},
    errors::AppError,
};

/// 회원가입
///
/// # Request Body
///
/// ```json
/// { "email": "a@b.com", "password": "longenough", "nick": "abc123" }
/// ```
///
/// # Responses
///
/// * `201` - `{"message": "사용자가 성공적으로 등록되었습니다"}`
/// * `400` - 필드 누락, 형식 오류
/// * `409` - 이메일 또는 닉네임 중복
#[post("/register")]
pub async fn register(
    services: web::Data<AppServices>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let response = services.registration.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 로그인
///
/// # Responses
///
/// * `200` - `{"token": "...", "user": {"id", "email", "nick"}}`
/// * `400` - 필드 누락
/// * `401` - 이메일 또는 비밀번호 불일치
#[post("/login")]
pub async fn login(
    services: web::Data<AppServices>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = services.authentication.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// JSON 본문 파싱 실패를 `400 {"error": "..."}`로 변환합니다.
///
/// `web::JsonConfig::default().error_handler(json_error_handler)`로 등록합니다.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("요청 본문 파싱 실패 ({} {}): {}", req.method(), req.path(), err);

    AppError::MalformedRequest(err.to_string()).into()
}
