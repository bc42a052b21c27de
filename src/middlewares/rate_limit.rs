//! Rate Limiting 미들웨어 설정
//!
//! 클라이언트 IP 별로 토큰 버킷을 적용합니다. 응답에는 `x-ratelimit-*` 헤더가 포함되며,
//! 한도를 넘으면 429 로 응답합니다.

use actix_governor::governor::middleware::StateInformationMiddleware;
use actix_governor::{GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor};

use crate::config::RateLimitConfig;
use crate::core::errors::{AppError, AppResult};

/// IP 별 Rate Limiting 설정 (응답 헤더 포함)
pub type RateLimiterConfig = GovernorConfig<PeerIpKeyExtractor, StateInformationMiddleware>;

/// `RateLimitConfig` 로부터 governor 설정을 만듭니다.
///
/// # Errors
///
/// * `AppError::Configuration` - 초당 요청 수 또는 버스트 크기가 0
///
/// # Examples
///
/// ```rust,ignore
/// let governor_conf = rate_limiter_config(&config.rate_limit)?;
/// App::new().wrap(Governor::new(&governor_conf))
/// ```
pub fn rate_limiter_config(config: &RateLimitConfig) -> AppResult<RateLimiterConfig> {
    if config.per_second == 0 {
        return Err(AppError::Configuration(
            "RATE_LIMIT_PER_SECOND must be greater than 0".to_string(),
        ));
    }

    GovernorConfigBuilder::default()
        .requests_per_second(config.per_second)
        .burst_size(config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            AppError::Configuration(format!("invalid rate limit configuration: {:?}", config))
        })
}

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr, SocketAddr};

    use actix_governor::Governor;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpResponse};

    use super::*;

    fn limits(per_second: u64, burst_size: u32) -> RateLimitConfig {
        RateLimitConfig {
            per_second,
            burst_size,
        }
    }

    async fn ok() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    fn request_from(addr: SocketAddr) -> test::TestRequest {
        test::TestRequest::get().uri("/health").peer_addr(addr)
    }

    #[::core::prelude::v1::test]
    fn test_zero_limits_are_rejected() {
        assert!(matches!(
            rate_limiter_config(&limits(0, 10)),
            Err(AppError::Configuration(_))
        ));
        assert!(matches!(
            rate_limiter_config(&limits(10, 0)),
            Err(AppError::Configuration(_))
        ));
    }

    #[actix_web::test]
    async fn test_request_over_burst_is_throttled() {
        let governor_conf = rate_limiter_config(&limits(1, 1)).unwrap();
        let app = test::init_service(
            App::new()
                .wrap(Governor::new(&governor_conf))
                .route("/health", web::get().to(ok)),
        )
        .await;
        let client = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 40000);

        let first = test::call_service(&app, request_from(client).to_request()).await;
        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(first.headers().get("x-ratelimit-limit").unwrap(), "1");

        let second = test::call_service(&app, request_from(client).to_request()).await;
        assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[actix_web::test]
    async fn test_limits_are_per_client_ip() {
        let governor_conf = rate_limiter_config(&limits(1, 1)).unwrap();
        let app = test::init_service(
            App::new()
                .wrap(Governor::new(&governor_conf))
                .route("/health", web::get().to(ok)),
        )
        .await;
        let alice = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)), 40000);
        let bob = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2)), 40000);

        let first = test::call_service(&app, request_from(alice).to_request()).await;
        let other = test::call_service(&app, request_from(bob).to_request()).await;

        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(other.status(), StatusCode::OK);
    }
}
