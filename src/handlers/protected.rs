use actix_web::{get, HttpResponse};
use serde_json::json;

use crate::domain::models::auth::AuthenticatedUser;

/// 인증된 사용자 확인용 엔드포인트
///
/// [`AuthMiddleware`](crate::middlewares::AuthMiddleware)로 감싼 스코프에 등록해야 합니다.
#[get("")]
pub async fn protected(user: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": format!("인증된 사용자입니다: {}", user.user_id),
        "user_id": user.user_id,
    }))
}
