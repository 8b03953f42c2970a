//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 생명주기(등록, 수정, 상태 변경, 조회, 삭제)를 담당하는 비즈니스 로직입니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 UserService                  │
//! │  • 입력 검증 (crate::validation)             │
//! │  • 이메일 중복 사전 검사                     │
//! │  • 비밀번호 해싱 (PasswordHasher)            │
//! │  • 엔티티 → DTO 변환 (비밀번호 해시 제외)    │
//! └──────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │          Arc<dyn UserRepository>             │
//! │  MongoUserRepository / InMemoryUserRepository│
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## 의존성 주입
//!
//! 서비스는 전역 인스턴스가 아니라 생성자로 리포지토리와 해셔를 받습니다.
//! `main`에서 한 번 만들어 `web::Data<UserService>`로 핸들러에 공유합니다.
//!
//! ```rust,ignore
//! let repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(db, timeouts));
//! let service = UserService::new(repo, PasswordHasher::from_config());
//! ```
//!
//! ## 이메일 유일성
//!
//! 생성과 수정 모두 저장 전에 [`UserRepository::email_taken`]으로 검사합니다.
//! 검사와 쓰기 사이의 경합은 저장소의 유니크 인덱스가 `ConflictError`로 막습니다.

use std::sync::Arc;

use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::{
            request::{CreateUserRequest, UpdateStatusRequest, UpdateUserRequest},
            response::{EmailResponse, UserResponse},
        },
        entities::users::{parse_user_id, User},
    },
    repositories::users::UserRepository,
    services::auth::PasswordHasher,
    validation::{validate_email, validate_password, validate_username},
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// 모든 메서드는 `AppResult<T>`를 반환하며 에러 종류는 그대로 HTTP 상태로 매핑됩니다.
///
/// - **ValidationError**: 입력값 검증 실패, 잘못된 ID 형식
/// - **ConflictError**: 다른 사용자가 쓰고 있는 이메일
/// - **NotFound**: 대상 사용자 없음
/// - **HashingError** / **DatabaseError**: 시스템 레벨 오류
#[derive(Clone)]
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, hasher: PasswordHasher) -> Self {
        Self { user_repo, hasher }
    }

    /// 새 사용자를 등록하고 생성된 ID를 반환합니다.
    ///
    /// # 처리 과정
    ///
    /// 1. `username`, `email`, `password` 모두 필수이며 각 규칙을 검사
    /// 2. 이메일 중복 확인
    /// 3. 비밀번호 해싱
    /// 4. 저장 (상태 `active`, 생성 시간은 저장소가 설정)
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<String> {
        let start_time = std::time::Instant::now();

        let username = required(request.username, "사용자명")?;
        let email = required(request.email, "이메일")?;
        let password = required(request.password, "비밀번호")?;

        validate_username(&username)?;
        validate_email(&email)?;
        validate_password(&password)?;

        if self.user_repo.email_taken(&email, None).await? {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        let password_hash = self.hasher.hash(&password).await?;

        let mut user = User::new(username, email, password_hash);
        self.user_repo.create_user(&mut user).await?;

        let id = user.id_string().ok_or_else(|| {
            AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string())
        })?;

        log::info!("사용자 등록 완료: {} ({:?})", id, start_time.elapsed());
        Ok(id)
    }

    /// 제공된 필드만 변경합니다.
    ///
    /// 각 필드는 값이 있을 때만 검증되고, 비밀번호는 해싱된 뒤 저장됩니다.
    /// 본문에 변경할 필드가 하나도 없으면 `ValidationError`입니다.
    pub async fn update_user(&self, id: &str, request: UpdateUserRequest) -> AppResult<()> {
        parse_user_id(id)?;

        if request.is_empty() {
            return Err(AppError::ValidationError("변경할 필드가 없습니다".to_string()));
        }

        if let Some(username) = request.username.as_deref() {
            validate_username(username)?;
        }
        if let Some(email) = request.email.as_deref() {
            validate_email(email)?;
            if self.user_repo.email_taken(email, Some(id)).await? {
                return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
            }
        }

        let password_hash = match request.password.as_deref() {
            Some(password) => {
                validate_password(password)?;
                Some(self.hasher.hash(password).await?)
            }
            None => None,
        };

        let patch = request.into_patch(password_hash);
        self.user_repo.update_user(id, &patch).await?;

        log::info!("사용자 정보 수정: {}", id);
        Ok(())
    }

    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        self.user_repo.delete_user(id).await?;

        log::info!("사용자 삭제: {}", id);
        Ok(())
    }

    /// 전체 사용자 목록. 저장소가 비어 있으면 빈 목록입니다.
    pub async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.user_repo.fetch_all_users().await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_user(&self, id: &str) -> AppResult<UserResponse> {
        let user = self.user_repo.fetch_user_by_id(id).await?;

        Ok(UserResponse::from(user))
    }

    /// 계정 상태를 덮어씁니다. 빈 상태 값은 허용하지 않습니다.
    pub async fn update_status(&self, id: &str, request: UpdateStatusRequest) -> AppResult<()> {
        let status = request.status.trim();
        if status.is_empty() {
            return Err(AppError::ValidationError("상태 값은 필수입니다".to_string()));
        }

        self.user_repo.update_user_status(id, status).await?;

        log::info!("사용자 상태 변경: {} -> {}", id, status);
        Ok(())
    }

    pub async fn list_emails(&self) -> AppResult<Vec<EmailResponse>> {
        let emails = self.user_repo.fetch_all_emails().await?;

        Ok(emails.into_iter().map(|email| EmailResponse { email }).collect())
    }
}

fn required(value: Option<String>, field: &str) -> AppResult<String> {
    value.ok_or_else(|| AppError::ValidationError(format!("{}은(는) 필수입니다", field)))
}
