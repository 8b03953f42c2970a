//! 사용자 관리 서비스 모듈
//!
//! 사용자 생명주기와 관련된 비즈니스 로직을 담당합니다.
//!
//! # Features
//!
//! - 사용자 등록 및 입력 검증
//! - 부분 수정과 비밀번호 재해싱
//! - 계정 상태 관리
//! - 이메일 중복 방지
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//! use crate::domain::dto::users::request::CreateUserRequest;
//!
//! let user_service = UserService::new(repo, PasswordHasher::from_config());
//! let id = user_service.create_user(request).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
