//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스와 핸들러는 [`UserRepository`] trait만 알고 있으며, 구체 구현은
//! 생성 시점에 `Arc<dyn UserRepository>`로 주입됩니다.
//!
//! - [`MongoUserRepository`](user_repo::MongoUserRepository) - MongoDB 구현
//! - [`InMemoryUserRepository`](memory_repo::InMemoryUserRepository) - 테스트/개발용 메모리 구현
//!
//! 모든 저장소 호출은 [`with_timeout`]으로 상한 시간이 걸립니다.
//! 시간 초과는 재시도 없이 `AppError::DatabaseError`로 호출자에게 전달됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserRepository, UserRepository};
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let mut user = User::new("fake_user".into(), "fake@example.com".into(), hash);
//! repo.create_user(&mut user).await?;
//! assert!(user.id.is_some());
//! ```

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::{User, UserPatch};

pub mod memory_repo;
pub mod user_repo;

pub use memory_repo::InMemoryUserRepository;
pub use user_repo::MongoUserRepository;

/// 사용자 저장소 연산 집합
///
/// 구현체는 다음 의미를 지켜야 합니다.
///
/// | 연산 | 실패 |
/// |------|------|
/// | `create_user` | 이메일 중복 → `ConflictError` |
/// | `update_user` | 잘못된 ID, 빈 패치 → `ValidationError` / 일치 문서 없음 → `NotFound` / 이메일 중복 → `ConflictError` |
/// | `delete_user` | 잘못된 ID → `ValidationError` / 일치 문서 없음 → `NotFound` |
/// | `fetch_all_users` | 전송/디코딩 실패만 `DatabaseError`. 빈 결과는 에러가 아님 |
/// | `fetch_user_by_id` | 잘못된 ID → `ValidationError` / 없음 → `NotFound` |
/// | `update_user_status` | `update_user`와 동일 |
///
/// `update_user`는 다른 문서와의 이메일 유일성을 미리 검사하지 않습니다.
/// 그 검사는 서비스가 [`UserRepository::email_taken`]으로 수행합니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 사용자를 삽입합니다. 성공하면 저장소가 생성한 ID를 `user.id`에 기록합니다.
    ///
    /// 상태가 비어 있으면 `active`로, `created_at`은 현재 시각으로 설정됩니다.
    async fn create_user(&self, user: &mut User) -> AppResult<()>;

    /// 패치에서 비어 있지 않은 필드만 `$set`으로 변경합니다.
    async fn update_user(&self, id: &str, patch: &UserPatch) -> AppResult<()>;

    /// 사용자를 물리적으로 삭제합니다.
    async fn delete_user(&self, id: &str) -> AppResult<()>;

    async fn fetch_all_users(&self) -> AppResult<Vec<User>>;

    async fn fetch_user_by_id(&self, id: &str) -> AppResult<User>;

    /// 이전 상태와 무관하게 상태를 덮어씁니다.
    async fn update_user_status(&self, id: &str, status: &str) -> AppResult<()>;

    /// 모든 사용자의 이메일만 조회합니다.
    async fn fetch_all_emails(&self) -> AppResult<Vec<String>>;

    /// `exclude_id`를 제외한 다른 사용자가 이 이메일을 쓰고 있는지 확인합니다.
    async fn email_taken(&self, email: &str, exclude_id: Option<&str>) -> AppResult<bool>;
}

/// 저장소 호출에 상한 시간을 겁니다.
///
/// 시간 초과 시 `AppError::DatabaseError`를 반환하며 재시도하지 않습니다.
pub async fn with_timeout<T, F>(limit: Duration, operation: &'static str, fut: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    match actix_web::rt::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => {
            log::warn!("저장소 작업 시간 초과: {} ({:?})", operation, limit);
            Err(AppError::DatabaseError(format!(
                "{} 작업이 {:?} 안에 완료되지 않았습니다",
                operation, limit
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_with_timeout_passes_result_through() {
        let result = with_timeout(Duration::from_secs(1), "noop", async { Ok::<_, AppError>(7) }).await;

        assert_eq!(result.unwrap(), 7);
    }

    #[actix_web::test]
    async fn test_with_timeout_fails_stalled_call() {
        let result: AppResult<()> = with_timeout(Duration::from_millis(20), "stalled", async {
            actix_web::rt::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;

        match result {
            Err(AppError::DatabaseError(msg)) => assert!(msg.contains("stalled")),
            other => panic!("expected DatabaseError, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_with_timeout_keeps_inner_error() {
        let result: AppResult<()> = with_timeout(Duration::from_secs(1), "missing", async {
            Err(AppError::NotFound("user not found".to_string()))
        })
        .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
