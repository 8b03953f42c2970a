//! # 사용자 요청 DTO
//!
//! 생성/수정/상태 변경 요청 본문을 정의합니다.
//!
//! 요청 본문에는 사용자 문서의 모양을 한 JSON이 들어오지만, 이 타입들은
//! 클라이언트가 다룰 수 있는 필드만 선언합니다. `id`, `status`, `createdAt` 같은
//! 저장소 관리 필드가 본문에 포함되어도 역직렬화 단계에서 버려집니다.
//!
//! 누락, `null`, 빈 문자열은 모두 "값 없음"(`None`)으로 읽습니다.
//! 필드별 규칙 검사는 [`crate::validation`]에서 서비스가 수행합니다.
//!
//! ```json
//! { "username": "fake_user", "email": "fake@example.com", "password": "Fake1234" }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::entities::users::UserPatch;
use crate::utils::string_utils::deserialize_optional_string;

/// 사용자 생성 요청
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub username: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub password: Option<String>,
}

/// 사용자 부분 수정 요청
///
/// 제공된 필드만 변경됩니다. 비밀번호는 서비스에서 해싱된 후 저장됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub username: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub password: Option<String>,
}

impl UpdateUserRequest {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.password.is_none()
    }

    /// 해시된 비밀번호로 저장용 패치를 만듭니다.
    pub fn into_patch(self, password_hash: Option<String>) -> UserPatch {
        UserPatch {
            username: self.username,
            email: self.email,
            password: password_hash,
        }
    }
}

/// 상태 변경 요청
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_managed_fields_are_discarded() {
        let json = r#"{
            "id": "507f1f77bcf86cd799439011",
            "username": "fake_user",
            "email": "fake@example.com",
            "password": "Fake1234",
            "status": "admin",
            "createdAt": "2001-01-01T00:00:00Z"
        }"#;
        let request: CreateUserRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.username.as_deref(), Some("fake_user"));
        assert_eq!(request.email.as_deref(), Some("fake@example.com"));
        assert_eq!(request.password.as_deref(), Some("Fake1234"));
    }

    #[test]
    fn test_update_request_with_only_blank_fields_is_empty() {
        let request: UpdateUserRequest =
            serde_json::from_str(r#"{"username": "", "email": "  "}"#).unwrap();

        assert!(request.is_empty());
    }

    #[test]
    fn test_into_patch_uses_hashed_password() {
        let request = UpdateUserRequest {
            username: Some("Newname".to_string()),
            email: None,
            password: Some("Plain1234".to_string()),
        };
        let patch = request.into_patch(Some("$2b$04$hash".to_string()));

        assert_eq!(patch.password.as_deref(), Some("$2b$04$hash"));
        assert_eq!(patch.username.as_deref(), Some("Newname"));
        assert_eq!(patch.email, None);
    }
}
