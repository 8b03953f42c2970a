//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경 및 보안 관련 설정을 관리합니다.
//! 모든 값은 프로세스 시작 시 한 번 읽혀 생성자로 전달되며,
//! 요청 처리 경로에서는 환경 변수를 다시 읽지 않습니다.

use std::env;
use std::time::Duration;

use crate::core::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 비밀번호 해싱 설정
///
/// bcrypt cost는 `BCRYPT_COST`로 직접 지정하거나, 없으면 환경별 기본값을 사용합니다.
/// 범위를 벗어난 값은 무시됩니다.
pub struct PasswordConfig;

impl PasswordConfig {
    pub const MIN_COST: u32 = 4;
    pub const MAX_COST: u32 = 31;

    pub fn bcrypt_cost() -> u32 {
        Self::parse_cost(env::var("BCRYPT_COST").ok().as_deref())
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(&Environment::current()))
    }

    pub fn parse_cost(raw: Option<&str>) -> Option<u32> {
        raw.and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|cost| (Self::MIN_COST..=Self::MAX_COST).contains(cost))
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}

/// 문서 저장소 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    pub const DEFAULT_DATABASE: &'static str = "usersdb";
    pub const USERS_COLLECTION: &'static str = "users";

    /// `MONGODB_URI`는 필수입니다. 없으면 프로세스 시작이 실패해야 합니다.
    pub fn uri() -> AppResult<String> {
        Self::require_uri(env::var("MONGODB_URI").ok())
    }

    pub fn require_uri(raw: Option<String>) -> AppResult<String> {
        raw.filter(|uri| !uri.trim().is_empty())
            .ok_or_else(|| AppError::InternalError("MONGODB_URI 환경 변수가 설정되지 않았습니다".to_string()))
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| Self::DEFAULT_DATABASE.to_string())
    }
}

/// 저장소 호출별 타임아웃 상한
///
/// 생성/수정/조회는 `write`(기본 10초), 삭제는 `delete`(기본 5초)를 사용합니다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoreTimeouts {
    pub write: Duration,
    pub delete: Duration,
}

impl Default for StoreTimeouts {
    fn default() -> Self {
        Self {
            write: Duration::from_secs(10),
            delete: Duration::from_secs(5),
        }
    }
}

impl StoreTimeouts {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            write: Self::parse_secs(env::var("STORE_TIMEOUT_SECS").ok().as_deref())
                .unwrap_or(defaults.write),
            delete: Self::parse_secs(env::var("STORE_DELETE_TIMEOUT_SECS").ok().as_deref())
                .unwrap_or(defaults.delete),
        }
    }

    fn parse_secs(raw: Option<&str>) -> Option<Duration> {
        raw.and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Development),
            4
        );
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Staging),
            10
        );
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Production),
            12
        );
    }

    #[test]
    fn test_bcrypt_cost_rejects_out_of_range_values() {
        assert_eq!(PasswordConfig::parse_cost(Some("12")), Some(12));
        assert_eq!(PasswordConfig::parse_cost(Some("3")), None);
        assert_eq!(PasswordConfig::parse_cost(Some("32")), None);
        assert_eq!(PasswordConfig::parse_cost(Some("abc")), None);
        assert_eq!(PasswordConfig::parse_cost(None), None);
    }

    #[test]
    fn test_missing_mongodb_uri_is_an_error() {
        assert!(DatabaseConfig::require_uri(None).is_err());
        assert!(DatabaseConfig::require_uri(Some("   ".to_string())).is_err());
        assert_eq!(
            DatabaseConfig::require_uri(Some("mongodb://localhost:27017".to_string())).unwrap(),
            "mongodb://localhost:27017"
        );
    }

    #[test]
    fn test_store_timeout_defaults() {
        let timeouts = StoreTimeouts::default();

        assert_eq!(timeouts.write, Duration::from_secs(10));
        assert_eq!(timeouts.delete, Duration::from_secs(5));
        assert_eq!(StoreTimeouts::parse_secs(Some("0")), None);
        assert_eq!(StoreTimeouts::parse_secs(Some("3")), Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }
}
