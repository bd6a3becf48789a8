use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::domain::models::token::TokenClaims;
use crate::errors::AppError;

/// JWT 토큰에서 추출된 사용자 정보
///
/// 인증 미들웨어가 토큰 검증에 성공하면 Request Extensions에 저장합니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self { user_id: claims.sub }
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::Unauthorized(
                "인증되지 않은 요청입니다".to_string(),
            ).into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extracts_user_from_extensions() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(AuthenticatedUser {
            user_id: "507f1f77bcf86cd799439011".to_string(),
        });

        let user = AuthenticatedUser::extract(&req).await.unwrap();

        assert_eq!(user.user_id, "507f1f77bcf86cd799439011");
    }

    #[actix_web::test]
    async fn test_missing_user_is_unauthorized() {
        let req = TestRequest::default().to_http_request();

        let result = AuthenticatedUser::extract(&req).await;

        let status = result.unwrap_err().as_response_error().status_code();
        assert_eq!(status, actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_from_claims() {
        let claims = TokenClaims {
            sub: "user-1".to_string(),
            iat: 0,
            exp: 60,
        };

        assert_eq!(AuthenticatedUser::from(claims).user_id, "user-1");
    }
}
