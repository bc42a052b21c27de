//! CORS 미들웨어 설정
//!
//! 브라우저 클라이언트는 Supabase SDK 와 같은 헤더(`apikey`, `x-client-info`)를 붙여
//! 토큰 엔드포인트를 호출하므로, 프리플라이트에서 이 헤더들을 허용합니다.

use actix_cors::Cors;
use actix_web::http::header;

use crate::config::ServerConfig;

/// 프리플라이트 응답 캐시 시간 (초)
const PREFLIGHT_MAX_AGE_SECONDS: usize = 3600;

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS` 가 비어 있으면 모든 Origin 을 허용합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let cors = configure_cors(&config.server);
/// App::new().wrap(cors)
/// ```
pub fn configure_cors(server: &ServerConfig) -> Cors {
    let cors = if server.cors_allowed_origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        server
            .cors_allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
        .allowed_header("apikey")
        .allowed_header("x-client-info")
        .max_age(PREFLIGHT_MAX_AGE_SECONDS)
}
