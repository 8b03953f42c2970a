//! 데이터 전송 객체(DTO) 모듈
//!
//! HTTP 경계에서 주고받는 요청/응답 타입을 정의합니다.
//! 엔티티와 분리되어 있어 저장소 전용 필드가 외부로 새거나 주입되지 않습니다.

pub mod users;

pub use users::*;
