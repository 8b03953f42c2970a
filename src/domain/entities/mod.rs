//! 도메인 엔티티 모듈
//!
//! 저장소에 영속화되는 문서 타입을 정의합니다.

pub mod users;

pub use users::*;
