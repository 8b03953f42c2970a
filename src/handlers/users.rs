//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 | 성공 응답 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/create-user` | 새 사용자 생성 | `{"message": "User created successfully"}` |
//! | `PUT` | `/api/update-user/{id}` | 사용자 부분 수정 | `{"message": "User updated successfully"}` |
//! | `GET` | `/api/users` | 사용자 목록 | `[UserResponse]` |
//! | `GET` | `/api/users/{id}` | 사용자 조회 | `UserResponse` |
//! | `DELETE` | `/api/delete-user/{id}` | 사용자 삭제 | `{"message": "User deleted successfully"}` |
//! | `PUT` | `/api/update-status/{id}` | 상태 변경 | `{"message": "User status updated successfully"}` |
//! | `GET` | `/api/emails` | 이메일 목록 | `[{"email": "..."}]` |
//!
//! 모든 성공 응답은 `200 OK`입니다.
//!
//! ## 에러 처리 패턴
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하며, `AppError`의
//! `ResponseError` 구현이 상태 코드와 `{"error": "..."}` 본문을 결정합니다.
//!
//! ```text
//! ValidationError → 400, NotFound → 404, ConflictError → 409, 그 외 → 500
//! ```
//!
//! 핸들러는 요청을 파싱하고 [`UserService`]에 위임할 뿐, 비즈니스 규칙을 갖지 않습니다.

use actix_web::{web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::users::{
    request::{CreateUserRequest, UpdateStatusRequest, UpdateUserRequest},
    response::MessageResponse,
};
use crate::services::users::UserService;

/// 새 사용자 생성
///
/// # Request Body
///
/// ```json
/// { "username": "fake_user", "email": "fake@example.com", "password": "Fake1234" }
/// ```
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("User created successfully")))
}

/// 사용자 부분 수정. 본문에 있는 필드만 변경됩니다.
pub async fn update_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    service.update_user(&user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("User updated successfully")))
}

pub async fn fetch_all_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users = service.list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

pub async fn fetch_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("User deleted successfully")))
}

/// 계정 상태 변경
///
/// # Request Body
///
/// ```json
/// { "status": "suspended" }
/// ```
pub async fn update_status(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse, AppError> {
    service.update_status(&user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("User status updated successfully")))
}

pub async fn fetch_all_emails(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let emails = service.list_emails().await?;

    Ok(HttpResponse::Ok().json(emails))
}
