//! 라우트 설정 모듈
//!
//! 애플리케이션의 모든 HTTP 엔드포인트를 한 곳에서 등록합니다.
//!
//! 각 리소스는 모든 메서드를 받는 `web::route()`로 등록되고,
//! [`MethodFilter`]가 허용 메서드 외의 요청을 핸들러 실행 전에 `405`로 거부합니다.
//!
//! JSON 본문 파싱 실패(잘못된 JSON, Content-Type 누락 등)는
//! `AppError::ValidationError`로 변환되어 `400`이 됩니다.

use actix_web::{error::JsonPayloadError, http::Method, web, HttpRequest};
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers::users;
use crate::middlewares::MethodFilter;

/// 요청 본문 최대 크기 (bytes)
const JSON_PAYLOAD_LIMIT: usize = 64 * 1024;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(health_check);

    configure_user_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/create-user")
            .wrap(MethodFilter::only(Method::POST))
            .route(web::route().to(users::create_user)),
    )
    .service(
        web::resource("/api/update-user/{id}")
            .wrap(MethodFilter::only(Method::PUT))
            .route(web::route().to(users::update_user)),
    )
    .service(
        web::resource("/api/users")
            .wrap(MethodFilter::only(Method::GET))
            .route(web::route().to(users::fetch_all_users)),
    )
    .service(
        web::resource("/api/users/{id}")
            .wrap(MethodFilter::only(Method::GET))
            .route(web::route().to(users::fetch_user)),
    )
    .service(
        web::resource("/api/delete-user/{id}")
            .wrap(MethodFilter::only(Method::DELETE))
            .route(web::route().to(users::delete_user)),
    )
    .service(
        web::resource("/api/update-status/{id}")
            .wrap(MethodFilter::only(Method::PUT))
            .route(web::route().to(users::update_status)),
    )
    .service(
        web::resource("/api/emails")
            .wrap(MethodFilter::only(Method::GET))
            .route(web::route().to(users::fetch_all_emails)),
    );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_PAYLOAD_LIMIT)
        .error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("요청 본문 파싱 실패: {} {} - {}", req.method(), req.path(), err);

    AppError::ValidationError(format!("잘못된 요청 본문입니다: {}", err)).into()
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "dependency_injection": "Constructor"
        }
    }))
}
