//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 메서드 필터 (MethodFilter)
//! - 리소스별 허용 메서드 외의 요청을 `405`로 거부
//! - `Allow` 헤더에 허용 메서드 목록 포함
//!
//! ### 2. Panic 복구 (PanicRecovery)
//! - 핸들러 panic을 `500` JSON 응답으로 변환
//! - 서버 프로세스는 계속 요청을 처리
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{http::Method, web, App};
//! use crate::middlewares::{MethodFilter, PanicRecovery};
//!
//! App::new()
//!     .service(
//!         web::resource("/api/users")
//!             .wrap(MethodFilter::only(Method::GET))
//!             .route(web::route().to(fetch_all_users)),
//!     )
//!     .wrap(PanicRecovery) // 가장 바깥쪽
//! ```

pub mod method_filter;
pub mod panic_recovery;

pub use method_filter::MethodFilter;
pub use panic_recovery::PanicRecovery;
