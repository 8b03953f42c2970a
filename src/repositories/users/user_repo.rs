//! # 사용자 리포지토리 구현
//!
//! MongoDB `users` 컬렉션에 대한 [`UserRepository`] 구현입니다.
//!
//! ## 특징
//!
//! - **필터 기반 연산**: `_id` 필터로 단일 문서에 대해 원자적으로 동작
//! - **부분 업데이트**: `$set`으로 지정된 필드만 변경
//! - **유일성**: `email` 유니크 인덱스의 duplicate key(11000) 신호를 `ConflictError`로 변환
//! - **타임아웃**: 생성/수정/조회는 `StoreTimeouts::write`, 삭제는 `StoreTimeouts::delete`

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use serde::Deserialize;

use crate::config::{DatabaseConfig, StoreTimeouts};
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::{parse_user_id, User, UserPatch};
use crate::repositories::users::{with_timeout, UserRepository};

/// MongoDB duplicate key 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 이메일 프로젝션 결과
#[derive(Debug, Deserialize)]
struct EmailDocument {
    #[serde(default)]
    email: String,
}

/// 사용자 데이터 액세스 리포지토리
///
/// `Database` 핸들과 타임아웃 설정을 생성자로 주입받습니다.
/// 요청 사이에 공유하는 상태는 드라이버의 커넥션 풀뿐입니다.
///
/// ```rust,ignore
/// let repo = MongoUserRepository::new(database, StoreTimeouts::from_env());
/// repo.create_indexes().await?;
/// ```
#[derive(Clone)]
pub struct MongoUserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
    timeouts: StoreTimeouts,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>, timeouts: StoreTimeouts) -> Self {
        Self { db, timeouts }
    }

    fn collection<T: Send + Sync>(&self) -> Collection<T> {
        self.db
            .get_database()
            .collection::<T>(DatabaseConfig::USERS_COLLECTION)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 1. **이메일 유니크 인덱스** - 중복 이메일을 저장소 수준에서 거부
    /// 2. **생성일 인덱스** - `createdAt` 내림차순
    ///
    /// 애플리케이션 시작 시 한 번 호출합니다. 이미 중복 데이터가 있으면 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let collection = self.collection::<User>();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "createdAt": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create_user(&self, user: &mut User) -> AppResult<()> {
        user.stamp_for_insert();

        let collection = self.collection::<User>();
        let result = with_timeout(self.timeouts.write, "create_user", async {
            collection
                .insert_one(&*user)
                .await
                .map_err(|e| map_write_error(e, "이미 사용 중인 이메일입니다"))
        })
        .await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("저장소가 ObjectId가 아닌 ID를 반환했습니다".to_string())
        })?;
        user.id = Some(id);

        log::info!("사용자 생성: {}", id.to_hex());
        Ok(())
    }

    async fn update_user(&self, id: &str, patch: &UserPatch) -> AppResult<()> {
        let object_id = parse_user_id(id)?;

        let fields = patch.set_document();
        if fields.is_empty() {
            return Err(AppError::ValidationError("변경할 필드가 없습니다".to_string()));
        }

        let collection = self.collection::<User>();
        let result = with_timeout(self.timeouts.write, "update_user", async {
            collection
                .update_one(doc! { "_id": object_id }, doc! { "$set": fields })
                .await
                .map_err(|e| map_write_error(e, "이미 사용 중인 이메일입니다"))
        })
        .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }

    async fn delete_user(&self, id: &str) -> AppResult<()> {
        let object_id = parse_user_id(id)?;

        let collection = self.collection::<User>();
        let result = with_timeout(self.timeouts.delete, "delete_user", async {
            collection
                .delete_one(doc! { "_id": object_id })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))
        })
        .await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }

    async fn fetch_all_users(&self) -> AppResult<Vec<User>> {
        let collection = self.collection::<User>();

        with_timeout(self.timeouts.write, "fetch_all_users", async {
            let mut cursor = collection
                .find(doc! {})
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            // 문서마다 개별 디코딩. 하나라도 실패하면 전체 실패
            let mut users = Vec::new();
            while let Some(user) = cursor
                .try_next()
                .await
                .map_err(|e| AppError::DatabaseError(format!("사용자 문서 디코딩 실패: {}", e)))?
            {
                users.push(user);
            }

            Ok(users)
        })
        .await
    }

    async fn fetch_user_by_id(&self, id: &str) -> AppResult<User> {
        let object_id = parse_user_id(id)?;

        let collection = self.collection::<User>();
        let user = with_timeout(self.timeouts.write, "fetch_user_by_id", async {
            collection
                .find_one(doc! { "_id": object_id })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))
        })
        .await?;

        user.ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    async fn update_user_status(&self, id: &str, status: &str) -> AppResult<()> {
        let object_id = parse_user_id(id)?;

        let collection = self.collection::<User>();
        let result = with_timeout(self.timeouts.write, "update_user_status", async {
            collection
                .update_one(
                    doc! { "_id": object_id },
                    doc! { "$set": { "status": status } },
                )
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))
        })
        .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }

    async fn fetch_all_emails(&self) -> AppResult<Vec<String>> {
        let collection = self.collection::<EmailDocument>();

        with_timeout(self.timeouts.write, "fetch_all_emails", async {
            let documents: Vec<EmailDocument> = collection
                .find(doc! {})
                .projection(doc! { "email": 1, "_id": 0 })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?
                .try_collect()
                .await
                .map_err(|e| AppError::DatabaseError(format!("이메일 디코딩 실패: {}", e)))?;

            Ok(documents.into_iter().map(|d| d.email).collect())
        })
        .await
    }

    async fn email_taken(&self, email: &str, exclude_id: Option<&str>) -> AppResult<bool> {
        let filter = email_filter(email, exclude_id)?;

        let collection = self.collection::<User>();
        let count = with_timeout(self.timeouts.write, "email_taken", async {
            collection
                .count_documents(filter)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))
        })
        .await?;

        Ok(count > 0)
    }
}

/// `email`이 같고 `_id`가 `exclude_id`가 아닌 문서를 찾는 필터
fn email_filter(email: &str, exclude_id: Option<&str>) -> AppResult<Document> {
    let mut filter = doc! { "email": email };

    if let Some(id) = exclude_id {
        filter.insert("_id", doc! { "$ne": parse_user_id(id)? });
    }

    Ok(filter)
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(e)) => e.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(e) => e.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

fn map_write_error(error: mongodb::error::Error, conflict_message: &str) -> AppError {
    if is_duplicate_key(&error) {
        log::warn!("duplicate key: {}", error);
        AppError::ConflictError(conflict_message.to_string())
    } else {
        AppError::DatabaseError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_filter_without_exclusion() {
        let filter = email_filter("fake@example.com", None).unwrap();

        assert_eq!(filter, doc! { "email": "fake@example.com" });
    }

    #[test]
    fn test_email_filter_excludes_target_user() {
        let filter = email_filter("fake@example.com", Some("507f1f77bcf86cd799439011")).unwrap();
        let excluded = parse_user_id("507f1f77bcf86cd799439011").unwrap();

        assert_eq!(
            filter,
            doc! { "email": "fake@example.com", "_id": { "$ne": excluded } }
        );
    }

    #[test]
    fn test_email_filter_rejects_malformed_id() {
        assert!(matches!(
            email_filter("fake@example.com", Some("invalid-id")),
            Err(AppError::ValidationError(_))
        ));
    }
}
