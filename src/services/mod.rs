//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 도메인별로 모듈화되어 사용자 관리와 자격 증명 처리를 담당합니다.
//! 서비스는 의존성을 생성자로 받으며 전역 상태를 갖지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::PasswordHasher, users::UserService};
//!
//! let user_service = UserService::new(repo, PasswordHasher::from_config());
//! ```

pub mod auth;
pub mod users;
