//! # Domain Module
//!
//! 사용자 관리 도메인의 타입들을 정의합니다.
//!
//! - [`entities`] - 저장소 문서 (`User`, `UserPatch`)
//! - [`dto`] - HTTP 요청/응답 데이터 전송 객체
//!
//! 요청 DTO와 엔티티를 분리하여, 클라이언트가 `id`, `status`, `createdAt`
//! 같은 저장소 관리 필드를 주입할 수 없도록 합니다.

pub mod entities;
pub mod dto;
