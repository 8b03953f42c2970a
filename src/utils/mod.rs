//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 빈 문자열 정규화, serde 헬퍼

pub mod string_utils;
