//! JWT 토큰 발급 서비스
//!
//! 로그인 성공 시 HMAC-SHA256으로 서명된 액세스 토큰을 발급하고,
//! 보호된 엔드포인트에서 베어러 토큰을 검증합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    config::JwtConfig,
    domain::models::token::TokenClaims,
    errors::{AppError, AppResult},
};

/// 토큰 발급기 추상화
pub trait TokenIssuer: Send + Sync {
    /// 사용자 ID를 주체로 하는 서명된 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 서명 실패
    fn issue(&self, user_id: &str) -> AppResult<String>;

    /// 토큰의 서명과 만료 시간을 검증하고 클레임을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::Unauthorized` - 만료, 위조 또는 형식 오류
    fn verify(&self, token: &str) -> AppResult<TokenClaims>;
}

/// HS256 JWT 발급기
///
/// 비밀 키와 만료 시간은 생성 시점에 고정됩니다.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    secret: String,
    expiration_hours: i64,
}

impl JwtTokenIssuer {
    pub fn new(secret: impl Into<String>, expiration_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }

    /// `JWT_SECRET`, `JWT_EXPIRATION_HOURS` 환경 변수로 생성합니다.
    pub fn from_config() -> Self {
        Self::new(JwtConfig::secret(), JwtConfig::expiration_hours())
    }

    pub fn expiration_hours(&self) -> i64 {
        self.expiration_hours
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user_id: &str) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    fn verify(&self, token: &str) -> AppResult<TokenClaims> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());

        decode::<TokenClaims>(token, &decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::Unauthorized("토큰이 만료되었습니다".to_string())
                }
                _ => {
                    log::debug!("토큰 검증 실패: {}", e);
                    AppError::Unauthorized("유효하지 않은 토큰입니다".to_string())
                }
            })
    }
}

/// `Authorization` 헤더 값에서 `Bearer ` 접두사를 제거한 토큰을 추출합니다.
///
/// ```rust,ignore
/// let token = extract_bearer_token("Bearer eyJhbGciOiJIUzI1NiIs...")?;
/// let claims = issuer.verify(token)?;
/// ```
pub fn extract_bearer_token(auth_header: &str) -> AppResult<&str> {
    match auth_header.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        _ => Err(AppError::Unauthorized("유효하지 않은 인증 헤더 형식입니다".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> JwtTokenIssuer {
        JwtTokenIssuer::new("test-secret", 24)
    }

    #[test]
    fn test_issue_then_verify() {
        let issuer = issuer();

        let token = issuer.issue("507f1f77bcf86cd799439011").unwrap();
        let claims = issuer.verify(&token).unwrap();

        assert_eq!(claims.sub, "507f1f77bcf86cd799439011");
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = issuer().issue("user-1").unwrap();

        let result = JwtTokenIssuer::new("other-secret", 24).verify(&token);

        assert_eq!(
            result,
            Err(AppError::Unauthorized("유효하지 않은 토큰입니다".to_string()))
        );
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: "user-1".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let result = issuer().verify(&token);

        assert_eq!(
            result,
            Err(AppError::Unauthorized("토큰이 만료되었습니다".to_string()))
        );
    }

    #[test]
    fn test_garbage_token_is_unauthorized() {
        assert!(matches!(issuer().verify("not.a.jwt"), Err(AppError::Unauthorized(_))));
        assert!(matches!(issuer().verify(""), Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(extract_bearer_token("Basic abc").is_err());
        assert!(extract_bearer_token("Bearer ").is_err());
        assert!(extract_bearer_token("abc.def.ghi").is_err());
    }
}
