use std::sync::Arc;

use crate::{
    config::StoreBackend,
    db::Database,
    errors::{AppResult, ErrorContext},
    repositories::users::{InMemoryUserStore, MongoUserStore, UserStore},
    services::{
        auth::{AuthenticationService, BcryptPasswordHasher, JwtTokenIssuer, PasswordHasher, TokenIssuer},
        users::RegistrationService,
    },
};

/// 요청 처리에 필요한 서비스 묶음
///
/// 모든 필드가 `Arc`이므로 워커 간 복제 비용이 작습니다.
#[derive(Clone)]
pub struct AppServices {
    pub registration: Arc<RegistrationService>,
    pub authentication: Arc<AuthenticationService>,
    pub token_issuer: Arc<dyn TokenIssuer>,
}

impl AppServices {
    /// 주어진 구현체로 서비스를 조립합니다.
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHasher>,
        token_issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            registration: Arc::new(RegistrationService::new(store.clone(), hasher.clone())),
            authentication: Arc::new(AuthenticationService::new(store, hasher, token_issuer.clone())),
            token_issuer,
        }
    }

    /// 환경 변수 설정의 bcrypt cost와 JWT 설정을 사용합니다.
    pub fn from_config(store: Arc<dyn UserStore>) -> Self {
        let hasher = BcryptPasswordHasher::from_config();
        let issuer = JwtTokenIssuer::from_config();

        log::info!(
            "🔐 bcrypt cost: {}, 토큰 유효 시간: {}시간",
            hasher.cost(),
            issuer.expiration_hours()
        );

        Self::new(store, Arc::new(hasher), Arc::new(issuer))
    }

    /// 선택된 백엔드의 사용자 저장소를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - MongoDB 연결 또는 인덱스 생성 실패
    pub async fn init_user_store(backend: StoreBackend) -> AppResult<Arc<dyn UserStore>> {
        match backend {
            StoreBackend::Mongo => {
                let database = Database::new().await.context("MongoDB 연결 실패")?;
                let store = MongoUserStore::new(&database)
                    .await
                    .context("users 컬렉션 초기화 실패")?;

                log::info!("📦 사용자 저장소: MongoDB ({})", database.database_name());
                Ok(Arc::new(store))
            }
            StoreBackend::Memory => {
                log::warn!("📦 사용자 저장소: 인메모리 (재시작 시 데이터가 사라집니다)");
                Ok(Arc::new(InMemoryUserStore::new()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};

    #[actix_web::test]
    async fn test_services_share_one_store() {
        let store = AppServices::init_user_store(StoreBackend::Memory).await.unwrap();
        let services = AppServices::new(
            store,
            Arc::new(BcryptPasswordHasher::new(4)),
            Arc::new(JwtTokenIssuer::new("test-secret", 1)),
        );

        services
            .registration
            .register(RegisterRequest::new("a@b.com", "longenough", "abc123"))
            .await
            .unwrap();
        let response = services
            .authentication
            .login(LoginRequest::new("a@b.com", "longenough"))
            .await
            .unwrap();

        let claims = services.token_issuer.verify(&response.token).unwrap();
        assert_eq!(claims.sub, response.user.id);
    }
}
