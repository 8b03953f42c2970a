//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new("fake_user".to_string(), "fake@example.com".to_string(), hashed_password);
//! ```

pub mod user;

pub use user::{parse_user_id, User, UserPatch, DEFAULT_STATUS};
