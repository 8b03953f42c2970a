//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용합니다. 상위 계층은 trait 객체로만 리포지토리에 접근합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{MongoUserRepository, UserRepository};
//!
//! let user_repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(db, timeouts));
//! let users = user_repo.fetch_all_users().await?;
//! ```

pub mod users;
