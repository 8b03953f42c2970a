//! 인증 및 보안 서비스 모듈
//!
//! 자격 증명 처리를 담당합니다. 현재는 비밀번호 해싱만 제공하며,
//! 해시 형식은 이후 로그인 흐름에서 [`PasswordHasher::verify`]로 검증할 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::from_config();
//! let hashed = hasher.hash("Fake1234").await?;
//! assert!(hasher.verify("Fake1234", &hashed).await?);
//! ```

pub mod password_hasher;

pub use password_hasher::*;
