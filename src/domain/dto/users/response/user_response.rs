use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

/// 변경 작업의 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// 조회 응답용 사용자 표현
///
/// 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub status: String,
    pub created_at: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            email,
            status,
            created_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            username,
            email,
            status,
            created_at: created_at.and_then(|at| at.try_to_rfc3339_string().ok()),
        }
    }
}

/// 이메일 목록 응답 항목
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmailResponse {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_omits_password() {
        let mut user = User::new("fake_user".into(), "fake@example.com".into(), "$2b$04$secret".into());
        user.stamp_for_insert();
        user.id = Some(mongodb::bson::oid::ObjectId::new());

        let json = serde_json::to_value(UserResponse::from(user.clone())).unwrap();

        assert!(json.get("password").is_none());
        assert_eq!(json["id"], user.id_string().unwrap());
        assert_eq!(json["status"], "active");
        assert!(json["created_at"].is_string());
    }
}
