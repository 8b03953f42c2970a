//! # 입력값 검증
//!
//! 이메일, 비밀번호, 사용자명에 대한 순수 검증 함수들입니다.
//! 상태와 I/O가 없으므로 어느 스레드에서든 동시에 호출할 수 있습니다.
//!
//! 모든 실패는 `AppError::ValidationError`로 반환됩니다.
//!
//! | 함수 | 규칙 |
//! |------|------|
//! | [`validate_email`] | 비어 있지 않고 올바른 이메일 형식 |
//! | [`validate_password`] | 대문자, 소문자, 숫자를 각각 하나 이상 포함 (길이 제한 없음) |
//! | [`validate_username`] | 3자 이상, `[A-Za-z0-9_]`만 허용 |

use validator::ValidateEmail;

use crate::core::errors::{AppError, AppResult};

pub const USERNAME_MIN_LENGTH: usize = 3;

pub fn validate_email(email: &str) -> AppResult<()> {
    if email.is_empty() {
        return Err(AppError::ValidationError("이메일은 비어 있을 수 없습니다".to_string()));
    }

    if !email.validate_email() {
        return Err(AppError::ValidationError("유효하지 않은 이메일 형식입니다".to_string()));
    }

    Ok(())
}

/// 비밀번호 구성 검사
///
/// 최소 길이는 이 계층에서 강제하지 않습니다.
pub fn validate_password(password: &str) -> AppResult<()> {
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(has_uppercase && has_lowercase && has_digit) {
        return Err(AppError::ValidationError(
            "비밀번호는 대문자, 소문자, 숫자를 포함해야 합니다".to_string(),
        ));
    }

    Ok(())
}

pub fn validate_username(username: &str) -> AppResult<()> {
    if username.is_empty() {
        return Err(AppError::ValidationError("사용자명은 비어 있을 수 없습니다".to_string()));
    }

    if username.chars().count() < USERNAME_MIN_LENGTH {
        return Err(AppError::ValidationError(format!(
            "사용자명은 최소 {}자 이상이어야 합니다",
            USERNAME_MIN_LENGTH
        )));
    }

    // 알파벳, 숫자, 언더스코어만 허용
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(AppError::ValidationError(
            "사용자명은 알파벳, 숫자, 언더스코어만 사용 가능합니다".to_string(),
        ));
    }

    Ok(())
}
