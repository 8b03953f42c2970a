//! # Application Error Handling System
//!
//! 사용자 관리 서비스 전역에서 사용하는 에러 타입입니다.
//! 검증 → 서비스 → 리포지토리로 이어지는 파이프라인의 모든 실패는
//! [`AppError`]로 표현되며, 계층을 거치는 동안 변형 없이 그대로 전달됩니다.
//!
//! HTTP 상태 코드로의 변환은 오직 [`actix_web::ResponseError`] 구현에서만 일어납니다.
//! 서비스나 리포지토리는 상태 코드를 알지 못합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 이메일/비밀번호/사용자명 형식 오류, 잘못된 ID, 빈 업데이트 |
//! | `NotFound` | 404 Not Found | 존재하지 않는 사용자 ID |
//! | `ConflictError` | 409 Conflict | 이메일 중복 |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 통신 실패, 타임아웃, 디코딩 실패 |
//! | `HashingError` | 500 Internal Server Error | 비밀번호 해싱 실패 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류, 복구된 panic |
//!
//! ## 에러 변환 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! // MongoDB 에러 변환
//! collection.find_one(filter).await
//!     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
//!
//! // ID 파싱 실패
//! ObjectId::parse_str(id)
//!     .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 각 변형은 하나의 실패 범주에 대응합니다. 메시지는 클라이언트에 그대로 노출되므로
/// 비밀번호나 해시 같은 민감 정보를 절대 포함하지 않아야 합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 잘못된 이메일/비밀번호/사용자명 형식, 16진수가 아닌 사용자 ID,
    /// 변경할 필드가 없는 업데이트 요청, 파싱할 수 없는 JSON 본문 등.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    ///
    /// 이메일 유일성 위반. 서비스의 사전 검사 또는 저장소의
    /// duplicate key(11000) 신호 양쪽에서 발생합니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    ///
    /// 연결 오류, 디코딩 실패, 그리고 작업별 타임아웃 초과를 포함합니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 비밀번호 해싱 실패 (500 Internal Server Error)
    #[error("Hashing error: {0}")]
    HashingError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 이 에러에 대응하는 HTTP 상태 코드
    pub fn status(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        self.status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 다음과 같은 표준 JSON 형식을 따릅니다:
    ///
    /// ```json
    /// {
    ///   "error": "Human readable error message"
    /// }
    /// ```
    ///
    /// 5xx 에러는 서버 로그에 기록합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status();

        if status.is_server_error() {
            log::error!("요청 처리 실패 ({}): {}", status, self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("invalid email format".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("user not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("user already exists".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_store_and_hashing_errors_are_server_errors() {
        for error in [
            AppError::DatabaseError("timed out".to_string()),
            AppError::HashingError("cost out of range".to_string()),
            AppError::InternalError("panic".to_string()),
        ] {
            assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
