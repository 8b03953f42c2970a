//! 사용자 계정 관리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 의존성을 조립합니다.
//! MongoDB 연결과 인덱스를 준비한 뒤 사용자 관리 REST API를 제공합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_service::config::{DatabaseConfig, ServerConfig, StoreTimeouts};
use user_service::core::errors::AppResult;
use user_service::db::Database;
use user_service::middlewares::PanicRecovery;
use user_service::repositories::users::MongoUserRepository;
use user_service::routes::configure_all_routes;
use user_service::services::auth::PasswordHasher;
use user_service::services::users::UserService;

/// 종료 신호 후 진행 중인 요청을 기다리는 시간 (초)
const SHUTDOWN_TIMEOUT_SECS: u64 = 5;

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 관리 서비스 시작중...");

    let database = initialize_data_store().await.map_err(|e| {
        error!("데이터베이스 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    let user_service = build_user_service(Arc::clone(&database)).await.map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    let result = start_http_server(user_service).await;

    database.shutdown().await;
    info!("👋 서버가 종료되었습니다");

    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 미들웨어는 바깥쪽부터 PanicRecovery → 경로 정규화 → 로깅 → CORS → Rate Limiting 순서로 적용됩니다.
/// SIGINT/SIGTERM을 받으면 새 연결을 거부하고 진행 중인 요청을 최대 5초까지 기다립니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(user_service: UserService) -> std::io::Result<()> {
    let host = ServerConfig::host();
    let port = ServerConfig::port();

    info!("🌐 서버가 http://{}:{} 에서 실행중입니다", host, port);
    info!("📍 Health check: http://{}:{}/health", host, port);

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 유효하지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let user_service = web::Data::new(user_service);

    HttpServer::new(move || {
        let cors = configure_cors();

        App::new()
            .app_data(user_service.clone())
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .wrap(PanicRecovery)
            .configure(configure_all_routes)
    })
    .bind((host.as_str(), port))?
    .workers(4)
    .shutdown_timeout(SHUTDOWN_TIMEOUT_SECS)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// MongoDB 연결을 초기화합니다
///
/// `MONGODB_URI`가 없거나 연결에 실패하면 에러를 반환하고, 프로세스는 시작하지 않습니다.
async fn initialize_data_store() -> AppResult<Arc<Database>> {
    info!("📡 데이터베이스 연결 중...");

    let uri = DatabaseConfig::uri()?;
    let database = Database::new(&uri, &DatabaseConfig::database_name()).await?;
    info!("데이터베이스 선택: {}", database.database_name());

    Ok(Arc::new(database))
}

/// 리포지토리와 해셔를 조립해 `UserService`를 만듭니다
///
/// 시작 시 한 번 `users` 컬렉션 인덱스를 생성합니다.
async fn build_user_service(database: Arc<Database>) -> AppResult<UserService> {
    let timeouts = StoreTimeouts::from_env();
    info!("저장소 타임아웃: {:?}", timeouts);

    let repository = MongoUserRepository::new(database, timeouts);
    repository.create_indexes().await?;
    info!("✅ users 컬렉션 인덱스 준비 완료");

    let hasher = PasswordHasher::from_config();
    info!("bcrypt cost: {}", hasher.cost());

    Ok(UserService::new(Arc::new(repository), hasher))
}

/// CORS 설정을 구성합니다
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
