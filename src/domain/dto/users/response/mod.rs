//! # 사용자 관련 응답 DTO 모듈
//!
//! - `MessageResponse` - 생성/수정/삭제/상태 변경 성공 시 `{"message": "..."}`
//! - `UserResponse` - 사용자 조회 응답 (비밀번호 해시 제외)
//! - `EmailResponse` - 이메일 목록 항목
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "id": "507f1f77bcf86cd799439011",
//!   "username": "fake_user",
//!   "email": "fake@example.com",
//!   "status": "active",
//!   "created_at": "2024-01-01T12:00:00Z"
//! }
//! ```

pub mod user_response;

pub use user_response::{EmailResponse, MessageResponse, UserResponse};
