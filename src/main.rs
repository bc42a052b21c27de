//! Stream 토큰 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! Supabase 세션을 검증한 뒤 Stream Chat 사용자 토큰을 발급하는 엔드포인트를 제공합니다.

use actix_governor::Governor;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use stream_token_service::config::{env_file_for_profile, AppConfig};
use stream_token_service::core::state::AppState;
use stream_token_service::middlewares::{configure_cors, rate_limiter_config};
use stream_token_service::routes::configure_all_routes;
use stream_token_service::utils::display_terminal::print_config_summary;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 로깅을 먼저 초기화해야 .env 로드 결과가 기록됩니다
    init_logging();
    load_env_file();

    info!("🚀 Stream 토큰 서비스 시작중...");

    let config = AppConfig::from_env().map_err(|e| {
        error!("설정 로드 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    print_config_summary(&config);

    if !config.stream.is_complete() {
        warn!("⚠️ STREAM_API_KEY / STREAM_API_SECRET 미설정 - 토큰 요청은 503 으로 응답합니다");
    }

    let state = AppState::from_config(&config).map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(config, web::Data::new(state)).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
///
/// # Examples
///
/// ```rust,ignore
/// // 기본값으로 127.0.0.1:8080 에서 실행됩니다
/// // Health check: http://127.0.0.1:8080/health
/// // 토큰 발급: POST http://127.0.0.1:8080/functions/v1/stream-tokens
/// ```
async fn start_http_server(config: AppConfig, state: web::Data<AppState>) -> std::io::Result<()> {
    let bind_address = config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 토큰 발급: POST http://{}/functions/v1/stream-tokens", bind_address);

    let governor_conf = rate_limiter_config(&config.rate_limit).map_err(|e| {
        error!("Rate Limiting 설정 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.rate_limit.per_second,
        config.rate_limit.burst_size
    );

    let server_config = config.server.clone();

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&server_config))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(state.clone())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(config.server.workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// # Examples
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").ok();

    info!("Current profile: {}", profile.as_deref().unwrap_or("dev"));

    match env_file_for_profile(profile.as_deref()) {
        Some(file) => match dotenv::from_filename(file) {
            Ok(_) => info!("{} 파일 로드 됨", file),
            Err(e) => error!("{} 파일 로드 실패: {}", file, e),
        },
        None => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `.env` 파일보다 먼저 초기화되므로 `RUST_LOG` 는 프로세스 환경에서만 읽습니다.
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=stream_token_service::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}
