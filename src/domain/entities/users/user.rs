//! User Entity Implementation
//!
//! `users` 컬렉션에 저장되는 사용자 문서와, 부분 업데이트를 표현하는
//! [`UserPatch`]를 정의합니다.

use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, AppResult};

/// 새로 생성된 사용자의 기본 상태
pub const DEFAULT_STATUS: &str = "active";

/// 사용자 엔티티
///
/// 시스템이 관리하는 유일한 리소스입니다.
/// `id`와 `created_at`은 저장 시점에 리포지토리가 한 번만 채우며, 호출자가 설정하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름 (영문, 숫자, 언더스코어 3자 이상)
    #[serde(default)]
    pub username: String,
    /// 사용자 이메일 (unique)
    #[serde(default)]
    pub email: String,
    /// bcrypt 해시. 평문은 저장되지 않습니다.
    #[serde(default)]
    pub password: String,
    /// 계정 상태
    #[serde(default)]
    pub status: String,
    /// 생성 시간
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
}

impl User {
    /// 저장 전의 새 사용자 레코드를 만듭니다.
    ///
    /// 아이디, 상태, 생성 시간은 비워 둡니다. 리포지토리가 삽입 시 채웁니다.
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: None,
            username,
            email,
            password: password_hash,
            status: String::new(),
            created_at: None,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 삽입 직전 저장소가 책임지는 기본값을 채웁니다.
    ///
    /// 상태가 비어 있으면 `active`로, 생성 시간은 항상 현재 시각으로 설정합니다.
    pub fn stamp_for_insert(&mut self) {
        if self.status.trim().is_empty() {
            self.status = DEFAULT_STATUS.to_string();
        }
        self.created_at = Some(DateTime::now());
    }
}

/// 16진수 ObjectId 문자열을 파싱합니다.
pub fn parse_user_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id.trim())
        .map_err(|_| AppError::ValidationError("유효하지 않은 사용자 ID 형식입니다".to_string()))
}

/// 사용자 부분 업데이트
///
/// `None`인 필드는 변경하지 않습니다. `password`는 이미 해시된 값이어야 합니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.set_document().is_empty()
    }

    /// `$set`에 들어갈 문서를 만듭니다. 빈 문자열은 설정되지 않은 것으로 취급합니다.
    pub fn set_document(&self) -> Document {
        let mut fields = Document::new();

        let entries = [
            ("email", &self.email),
            ("username", &self.username),
            ("password", &self.password),
        ];
        for (key, value) in entries {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                fields.insert(key, value);
            }
        }

        fields
    }

    /// 메모리 레코드에 패치를 적용합니다.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(email) = self.email.as_deref().filter(|v| !v.is_empty()) {
            user.email = email.to_string();
        }
        if let Some(username) = self.username.as_deref().filter(|v| !v.is_empty()) {
            user.username = username.to_string();
        }
        if let Some(password) = self.password.as_deref().filter(|v| !v.is_empty()) {
            user.password = password.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamp_for_insert_sets_defaults() {
        let mut user = User::new("fake_user".into(), "fake@example.com".into(), "hash".into());
        user.stamp_for_insert();

        assert_eq!(user.status, DEFAULT_STATUS);
        assert!(user.created_at.is_some());
        assert!(user.id.is_none());
    }

    #[test]
    fn test_stamp_for_insert_keeps_existing_status() {
        let mut user = User::new("fake_user".into(), "fake@example.com".into(), "hash".into());
        user.status = "suspended".to_string();
        user.stamp_for_insert();

        assert_eq!(user.status, "suspended");
    }

    #[test]
    fn test_patch_only_contains_non_empty_fields() {
        let patch = UserPatch {
            username: Some("Newname".to_string()),
            email: Some(String::new()),
            password: None,
        };

        assert_eq!(patch.set_document(), doc! { "username": "Newname" });
        assert!(!patch.is_empty());
        assert!(UserPatch::default().is_empty());
    }

    #[test]
    fn test_parse_user_id() {
        assert!(parse_user_id("507f1f77bcf86cd799439011").is_ok());
        assert!(matches!(
            parse_user_id("invalid-id"),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_user_document_uses_store_field_names() {
        let mut user = User::new("fake_user".into(), "fake@example.com".into(), "hash".into());
        user.stamp_for_insert();
        let document = mongodb::bson::to_document(&user).unwrap();

        assert!(document.contains_key("createdAt"));
        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("status").unwrap(), "active");
    }
}
