//! 메모리 기반 사용자 리포지토리
//!
//! [`UserRepository`]의 레코드 기반 구현입니다. 서비스와 핸들러 테스트에서
//! MongoDB 없이 동일한 의미(ID 생성, 이메일 유니크 인덱스, 일치 문서 수)를 재현합니다.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::{parse_user_id, User, UserPatch};
use crate::repositories::users::UserRepository;

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 이미 저장된 문서로 시작합니다. ID가 없는 문서에는 새 ID를 부여합니다.
    pub fn with_users(users: Vec<User>) -> Self {
        let users = users
            .into_iter()
            .map(|mut user| {
                user.id.get_or_insert_with(ObjectId::new);
                user
            })
            .collect();

        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    /// 현재 저장된 문서의 복사본
    pub fn snapshot(&self) -> Vec<User> {
        self.read().map(|users| users.clone()).unwrap_or_default()
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Vec<User>>> {
        self.users
            .read()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금이 손상되었습니다".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Vec<User>>> {
        self.users
            .write()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금이 손상되었습니다".to_string()))
    }
}

fn email_in_use(users: &[User], email: &str, exclude: Option<ObjectId>) -> bool {
    users
        .iter()
        .any(|u| u.email == email && (exclude.is_none() || u.id != exclude))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, user: &mut User) -> AppResult<()> {
        user.stamp_for_insert();

        let mut users = self.write()?;
        if email_in_use(&users, &user.email, None) {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        let id = ObjectId::new();
        user.id = Some(id);
        users.push(user.clone());

        log::info!("사용자 생성: {}", id.to_hex());
        Ok(())
    }

    async fn update_user(&self, id: &str, patch: &UserPatch) -> AppResult<()> {
        let object_id = parse_user_id(id)?;
        if patch.is_empty() {
            return Err(AppError::ValidationError("변경할 필드가 없습니다".to_string()));
        }

        let mut users = self.write()?;
        let index = users
            .iter()
            .position(|u| u.id == Some(object_id))
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        // 유니크 인덱스와 같은 동작
        if let Some(email) = patch.email.as_deref().filter(|e| !e.is_empty()) {
            if email_in_use(&users, email, Some(object_id)) {
                return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
            }
        }

        patch.apply_to(&mut users[index]);
        Ok(())
    }

    async fn delete_user(&self, id: &str) -> AppResult<()> {
        let object_id = parse_user_id(id)?;

        let mut users = self.write()?;
        let before = users.len();
        users.retain(|u| u.id != Some(object_id));

        if users.len() == before {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }

    async fn fetch_all_users(&self) -> AppResult<Vec<User>> {
        Ok(self.read()?.clone())
    }

    async fn fetch_user_by_id(&self, id: &str) -> AppResult<User> {
        let object_id = parse_user_id(id)?;

        self.read()?
            .iter()
            .find(|u| u.id == Some(object_id))
            .cloned()
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    async fn update_user_status(&self, id: &str, status: &str) -> AppResult<()> {
        let object_id = parse_user_id(id)?;

        let mut users = self.write()?;
        let user = users
            .iter_mut()
            .find(|u| u.id == Some(object_id))
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        user.status = status.to_string();
        Ok(())
    }

    async fn fetch_all_emails(&self) -> AppResult<Vec<String>> {
        Ok(self.read()?.iter().map(|u| u.email.clone()).collect())
    }

    async fn email_taken(&self, email: &str, exclude_id: Option<&str>) -> AppResult<bool> {
        let exclude = exclude_id.map(parse_user_id).transpose()?;

        Ok(email_in_use(&self.read()?, email, exclude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> User {
        User::new("fake_user".to_string(), email.to_string(), "$2b$04$hash".to_string())
    }

    #[actix_web::test]
    async fn test_create_assigns_id_status_and_timestamp() {
        let repo = InMemoryUserRepository::new();
        let mut user = new_user("fake@example.com");

        repo.create_user(&mut user).await.unwrap();

        assert!(user.id.is_some());
        assert_eq!(user.status, "active");
        assert!(user.created_at.is_some());
        assert_eq!(repo.snapshot(), vec![user]);
    }

    #[actix_web::test]
    async fn test_concurrent_creates_with_same_email_admit_one() {
        let repo = InMemoryUserRepository::new();
        let mut first = new_user("fake@example.com");
        let mut second = new_user("fake@example.com");

        let (a, b) = futures_util::future::join(
            repo.create_user(&mut first),
            repo.create_user(&mut second),
        )
        .await;

        let results = [a, b];
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert_eq!(
            results
                .iter()
                .filter(|r| matches!(r, Err(AppError::ConflictError(_))))
                .count(),
            1
        );
        assert_eq!(repo.snapshot().len(), 1);
    }

    #[actix_web::test]
    async fn test_with_users_assigns_missing_ids() {
        let existing_id = ObjectId::new();
        let mut seeded = new_user("seeded@example.com");
        seeded.id = Some(existing_id);

        let repo = InMemoryUserRepository::with_users(vec![seeded, new_user("fresh@example.com")]);
        let stored = repo.snapshot();

        assert_eq!(stored[0].id, Some(existing_id));
        assert!(stored[1].id.is_some());
        assert!(repo.fetch_user_by_id(&existing_id.to_hex()).await.is_ok());
        assert!(repo.email_taken("fresh@example.com", None).await.unwrap());
    }

    #[actix_web::test]
    async fn test_create_with_duplicate_email_is_conflict() {
        let repo = InMemoryUserRepository::new();
        repo.create_user(&mut new_user("fake@example.com")).await.unwrap();

        let result = repo.create_user(&mut new_user("fake@example.com")).await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
        assert_eq!(repo.snapshot().len(), 1);
    }

    #[actix_web::test]
    async fn test_update_semantics() {
        let repo = InMemoryUserRepository::new();
        let mut user = new_user("fake@example.com");
        repo.create_user(&mut user).await.unwrap();
        let id = user.id_string().unwrap();

        let missing = ObjectId::new().to_hex();
        let patch = UserPatch { username: Some("Newname".to_string()), ..Default::default() };

        assert!(matches!(repo.update_user(&missing, &patch).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            repo.update_user(&id, &UserPatch::default()).await,
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(repo.update_user("nope", &patch).await, Err(AppError::ValidationError(_))));

        repo.update_user(&id, &patch).await.unwrap();
        let stored = repo.fetch_user_by_id(&id).await.unwrap();
        assert_eq!(stored.username, "Newname");
        assert_eq!(stored.email, user.email);
        assert_eq!(stored.password, user.password);
        assert_eq!(stored.created_at, user.created_at);
    }

    #[actix_web::test]
    async fn test_delete_twice_is_not_found() {
        let repo = InMemoryUserRepository::new();
        let mut user = new_user("fake@example.com");
        repo.create_user(&mut user).await.unwrap();
        let id = user.id_string().unwrap();

        repo.delete_user(&id).await.unwrap();

        assert!(matches!(repo.delete_user(&id).await, Err(AppError::NotFound(_))));
        assert!(matches!(repo.delete_user("bad-id").await, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_status_update_and_email_lookup() {
        let repo = InMemoryUserRepository::new();
        let mut first = new_user("first@example.com");
        let mut second = new_user("second@example.com");
        repo.create_user(&mut first).await.unwrap();
        repo.create_user(&mut second).await.unwrap();
        let first_id = first.id_string().unwrap();

        repo.update_user_status(&first_id, "suspended").await.unwrap();
        assert_eq!(repo.fetch_user_by_id(&first_id).await.unwrap().status, "suspended");

        assert!(repo.email_taken("second@example.com", Some(&first_id)).await.unwrap());
        assert!(!repo.email_taken("first@example.com", Some(&first_id)).await.unwrap());
        assert_eq!(
            repo.fetch_all_emails().await.unwrap(),
            vec!["first@example.com".to_string(), "second@example.com".to_string()]
        );
    }

    #[actix_web::test]
    async fn test_empty_store_lists_nothing() {
        let repo = InMemoryUserRepository::new();

        assert!(repo.fetch_all_users().await.unwrap().is_empty());
    }
}
