//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 해싱, 타임아웃 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수
//!
//! ```bash
//! # 문서 저장소 연결 (없으면 프로세스 시작 실패)
//! export MONGODB_URI="mongodb://localhost:27017"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export DATABASE_NAME="usersdb"
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export ENVIRONMENT="production"        # development, test, staging, production
//! export BCRYPT_COST="12"                # 4-31 범위
//! export STORE_TIMEOUT_SECS="10"         # 생성/수정/조회 타임아웃
//! export STORE_DELETE_TIMEOUT_SECS="5"   # 삭제 타임아웃
//! ```

pub mod data_config;

pub use data_config::*;
