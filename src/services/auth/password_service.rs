//! 비밀번호 해싱 서비스
//!
//! bcrypt 기반 단방향 해싱과 검증을 제공합니다.
//! 해시 문자열에 솔트와 cost가 포함되므로 원문 없이도 검증이 가능합니다.

use crate::config::PasswordConfig;
use crate::errors::AppError;

/// 비밀번호 해셔 추상화
///
/// 서비스 계층은 이 trait에만 의존하며 테스트에서 낮은 cost의 구현으로 대체됩니다.
pub trait PasswordHasher: Send + Sync {
    /// 평문 비밀번호를 솔트가 포함된 해시로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 해싱 실패
    fn hash(&self, password: &str) -> Result<String, AppError>;

    /// 평문 비밀번호가 저장된 해시와 일치하는지 확인합니다.
    ///
    /// 불일치는 `Ok(false)`이며, 해시 형식 오류만 에러로 반환됩니다.
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, AppError>;
}

/// bcrypt 구현
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 환경별 bcrypt cost를 사용합니다.
    pub fn from_config() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::from_config()
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, AppError> {
        let hash_start = std::time::Instant::now();
        let password_hash = bcrypt::hash(password, self.cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        log::debug!("Password hashing took: {:?}", hash_start.elapsed());
        Ok(password_hash)
    }

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, AppError> {
        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(password, password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        log::debug!("Password verification took: {:?}", verify_start.elapsed());
        Ok(is_valid)
    }
}
