//! 비밀번호 해싱 서비스
//!
//! bcrypt 기반의 단방향, 솔트 포함, cost 조절 가능한 해셔입니다.
//! 생성된 해시는 bcrypt 표준 형식(`$2b$<cost>$...`)이므로 향후 인증 흐름에서
//! [`PasswordHasher::verify`]로 그대로 비교할 수 있습니다.
//!
//! 해싱은 CPU 집약적인 작업이므로 `actix_web::web::block`을 통해 블로킹 스레드 풀에서
//! 실행됩니다. 비동기 워커 스레드나 다른 요청을 막지 않습니다.
//!
//! # Security
//!
//! - 평문 비밀번호는 로그에 남기지 않고 에러 메시지에도 포함하지 않습니다.
//! - 솔트는 bcrypt가 호출마다 새로 생성합니다.

use actix_web::web;

use crate::config::PasswordConfig;
use crate::core::errors::{AppError, AppResult};

/// bcrypt 해셔
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    /// 보안 기준선인 bcrypt 기본 cost(12)를 사용합니다.
    fn default() -> Self {
        Self { cost: bcrypt::DEFAULT_COST }
    }
}

impl PasswordHasher {
    /// bcrypt가 사용하는 최대 입력 길이 (bytes). 이보다 긴 비밀번호는 잘라내지 않고 거부합니다.
    pub const MAX_PASSWORD_BYTES: usize = 72;

    /// 지정한 cost로 해셔를 만듭니다.
    ///
    /// # Errors
    ///
    /// * `AppError::HashingError` - bcrypt가 허용하지 않는 범위(4..=31)의 cost
    pub fn new(cost: u32) -> AppResult<Self> {
        if !(PasswordConfig::MIN_COST..=PasswordConfig::MAX_COST).contains(&cost) {
            return Err(AppError::HashingError(format!(
                "bcrypt cost는 {}-{} 범위여야 합니다: {}",
                PasswordConfig::MIN_COST,
                PasswordConfig::MAX_COST,
                cost
            )));
        }

        Ok(Self { cost })
    }

    /// 환경 설정(`BCRYPT_COST` 또는 환경별 기본값)에서 해셔를 만듭니다.
    pub fn from_config() -> Self {
        Self { cost: PasswordConfig::bcrypt_cost() }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// 평문 비밀번호를 해싱합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 72바이트를 넘는 비밀번호
    /// * `AppError::HashingError` - bcrypt 실패
    pub async fn hash(&self, plaintext: &str) -> AppResult<String> {
        if plaintext.len() > Self::MAX_PASSWORD_BYTES {
            return Err(AppError::ValidationError(format!(
                "비밀번호는 {}바이트를 넘을 수 없습니다",
                Self::MAX_PASSWORD_BYTES
            )));
        }

        let cost = self.cost;
        let plaintext = plaintext.to_owned();
        let started = std::time::Instant::now();

        let hashed = web::block(move || bcrypt::non_truncating_hash(plaintext, cost))
            .await
            .map_err(|e| AppError::HashingError(format!("해싱 작업을 실행할 수 없습니다: {}", e)))?
            .map_err(|e| AppError::HashingError(format!("비밀번호 해싱 실패: {}", e)))?;

        log::debug!("Password hashing took: {:?} (cost {})", started.elapsed(), cost);

        Ok(hashed)
    }

    /// 평문과 저장된 해시를 비교합니다.
    ///
    /// 불일치는 `Ok(false)`이며, 해시 형식이 잘못된 경우에만 에러를 반환합니다.
    /// 72바이트를 넘는 평문은 어떤 해시와도 일치하지 않습니다.
    pub async fn verify(&self, plaintext: &str, hash: &str) -> AppResult<bool> {
        if plaintext.len() > Self::MAX_PASSWORD_BYTES {
            return Ok(false);
        }

        let plaintext = plaintext.to_owned();
        let hash = hash.to_owned();

        web::block(move || bcrypt::non_truncating_verify(plaintext, &hash))
            .await
            .map_err(|e| AppError::HashingError(format!("검증 작업을 실행할 수 없습니다: {}", e)))?
            .map_err(|e| AppError::HashingError(format!("비밀번호 검증 실패: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_hasher() -> PasswordHasher {
        PasswordHasher::new(PasswordConfig::MIN_COST).unwrap()
    }

    #[test]
    fn test_cost_must_be_in_bcrypt_range() {
        assert!(PasswordHasher::new(3).is_err());
        assert!(PasswordHasher::new(32).is_err());
        assert_eq!(PasswordHasher::new(10).unwrap().cost(), 10);
        assert_eq!(PasswordHasher::default().cost(), bcrypt::DEFAULT_COST);
    }

    #[actix_web::test]
    async fn test_hash_then_verify_round_trip() {
        let hasher = fast_hasher();
        let hashed = hasher.hash("Fake1234").await.unwrap();

        assert_ne!(hashed, "Fake1234");
        assert!(hashed.starts_with("$2"));
        assert!(hasher.verify("Fake1234", &hashed).await.unwrap());
        assert!(!hasher.verify("Fake12345", &hashed).await.unwrap());
        assert!(!hasher.verify("fake1234", &hashed).await.unwrap());
    }

    #[actix_web::test]
    async fn test_hash_is_salted() {
        let hasher = fast_hasher();
        let first = hasher.hash("Fake1234").await.unwrap();
        let second = hasher.hash("Fake1234").await.unwrap();

        assert_ne!(first, second);
    }

    #[actix_web::test]
    async fn test_overlong_password_is_rejected_not_truncated() {
        let hasher = fast_hasher();
        let long = format!("Aa1{}", "x".repeat(80));

        assert!(matches!(hasher.hash(&long).await, Err(AppError::ValidationError(_))));

        let at_limit = format!("Aa1{}", "x".repeat(69));
        assert_eq!(at_limit.len(), PasswordHasher::MAX_PASSWORD_BYTES);
        let hashed = hasher.hash(&at_limit).await.unwrap();

        assert!(hasher.verify(&at_limit, &hashed).await.unwrap());
        assert!(!hasher.verify(&format!("{}Zz9", at_limit), &hashed).await.unwrap());
    }

    #[actix_web::test]
    async fn test_verify_rejects_malformed_hash() {
        let result = fast_hasher().verify("Fake1234", "not-a-bcrypt-hash").await;

        assert!(matches!(result, Err(AppError::HashingError(_))));
    }
}
