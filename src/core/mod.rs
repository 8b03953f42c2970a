//! # Core Module
//!
//! 서비스 전역에서 공유하는 핵심 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 상태 코드 자동 매핑
//! - **AppResult**: `Result<T, AppError>` 별칭
//!
//! 의존성은 전역 레지스트리 없이 생성자를 통해 명시적으로 주입됩니다.
//! `main`에서 `Database` → `MongoUserRepository` → `UserService` 순으로 조립한 뒤
//! `web::Data`로 핸들러에 전달합니다.

pub mod errors;

pub use errors::*;
