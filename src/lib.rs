//! 사용자 계정 관리 서비스
//!
//! Rust 기반의 사용자 계정 관리 HTTP 서비스입니다.
//! MongoDB에 사용자 문서를 저장하고, 생성/수정/상태 변경/조회/삭제 API를 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 계정 생성, 부분 수정, 상태 변경, 삭제
//! - **입력 검증**: 이메일, 비밀번호 강도, 사용자명 규칙
//! - **비밀번호 보안**: bcrypt 해싱 (블로킹 스레드 풀에서 실행)
//! - **명시적 DI**: 생성자 주입과 `web::Data`로 의존성 전달
//! - **MongoDB**: 사용자 데이터 영구 저장, 이메일 유니크 인덱스
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + 메서드 필터
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 해싱, 비즈니스 규칙
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (타임아웃 포함)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_service::repositories::users::InMemoryUserRepository;
//! use user_service::services::{auth::PasswordHasher, users::UserService};
//!
//! let service = UserService::new(
//!     Arc::new(InMemoryUserRepository::new()),
//!     PasswordHasher::from_config(),
//! );
//! let id = service.create_user(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod validation;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
