//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인에 감싸지는 횡단 관심사 설정을 제공합니다.
//!
//! - [`cors`] - 브라우저 클라이언트용 CORS (프리플라이트 포함)
//! - [`rate_limit`] - 클라이언트 IP 별 Rate Limiting
//!
//! ```rust,ignore
//! use actix_governor::Governor;
//! use actix_web::App;
//!
//! let governor_conf = rate_limiter_config(&config.rate_limit)?;
//! App::new()
//!     .wrap(Governor::new(&governor_conf))
//!     .wrap(configure_cors(&config.server))
//! ```

pub mod cors;
pub mod rate_limit;

pub use cors::*;
pub use rate_limit::*;
