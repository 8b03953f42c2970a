//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환합니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use actix_web::{web, HttpResponse};
//! use crate::domain::dto::users::request::CreateUserRequest;
//!
//! async fn create_user(
//!     service: web::Data<UserService>,
//!     payload: web::Json<CreateUserRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     service.create_user(payload.into_inner()).await?;
//!     Ok(HttpResponse::Ok().json(MessageResponse::new("User created successfully")))
//! }
//! ```
//!
//! ## 에러 핸들링
//!
//! JSON 구문 오류는 라우트의 `JsonConfig`에서 `AppError::ValidationError`(400)로 변환됩니다.

pub mod create_user;

pub use create_user::{CreateUserRequest, UpdateStatusRequest, UpdateUserRequest};
