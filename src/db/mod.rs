//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결 문자열과 데이터베이스 이름은 호출자가 설정에서 읽어 넘겨주며,
//! 생성된 [`Database`]는 `Arc`로 감싸 리포지토리 생성자에 주입됩니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::config::DatabaseConfig;
//! use crate::db::Database;
//! use crate::repositories::users::MongoUserRepository;
//!
//! let database = Arc::new(Database::new(&DatabaseConfig::uri()?, &DatabaseConfig::database_name()).await?);
//! let repository = MongoUserRepository::new(database, StoreTimeouts::from_env());
//! ```

use log::info;
use mongodb::{Client, options::ClientOptions};

use crate::core::errors::{AppError, AppResult};

/// MongoDB 데이터베이스 연결 래퍼
///
/// `mongodb::Client`는 내부적으로 커넥션 풀을 공유하므로 복제 비용이 낮습니다.
/// 요청 사이에 공유되는 유일한 자원입니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 클라이언트를 초기화하고 `ping`으로 연결 상태를 검증한 뒤 반환합니다.
    pub async fn new(uri: &str, database_name: &str) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(uri)
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB URI 파싱 실패: {}", e)))?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some("user_service".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(format!("MongoDB 클라이언트 생성 실패: {}", e)))?;

        client
            .database(database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB ping 실패: {}", e)))?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// 클라이언트를 종료합니다. 진행 중인 작업이 끝날 때까지 기다립니다.
    pub async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        info!("MongoDB 연결 종료: {}", self.database_name);
    }
}
