//! 사용자 도메인 DTO 모듈
//!
//! 요청 DTO는 [`request`], 응답 DTO는 [`response`]에 정의됩니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
