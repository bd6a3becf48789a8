use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::TokenIssuer;

/// 베어러 토큰 인증 미들웨어
///
/// 감싼 스코프의 모든 요청에 유효한 토큰을 요구합니다.
/// 핸들러에서는 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)
/// 추출자로 사용자 정보를 받습니다.
pub struct AuthMiddleware {
    issuer: Arc<dyn TokenIssuer>,
}

impl AuthMiddleware {
    pub fn new(issuer: Arc<dyn TokenIssuer>) -> Self {
        Self { issuer }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            issuer: self.issuer.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::StatusCode, test, App, HttpResponse};

    use crate::{
        domain::models::auth::AuthenticatedUser,
        services::auth::JwtTokenIssuer,
    };

    #[get("/whoami")]
    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id)
    }

    fn issuer() -> Arc<JwtTokenIssuer> {
        Arc::new(JwtTokenIssuer::new("test-secret", 1))
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler() {
        let issuer = issuer();
        let token = issuer.issue("user-42").unwrap();
        let app = test::init_service(
            App::new().wrap(AuthMiddleware::new(issuer)).service(whoami),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, "user-42");
    }

    #[actix_web::test]
    async fn test_missing_header_is_unauthorized() {
        let app = test::init_service(
            App::new().wrap(AuthMiddleware::new(issuer())).service(whoami),
        )
        .await;

        let req = test::TestRequest::get().uri("/whoami").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_token_from_other_secret_is_unauthorized() {
        let foreign = JwtTokenIssuer::new("other-secret", 1).issue("user-42").unwrap();
        let app = test::init_service(
            App::new().wrap(AuthMiddleware::new(issuer())).service(whoami),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Bearer {}", foreign)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
