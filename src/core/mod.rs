//! # Core Module
//!
//! 서비스 전반에서 공유하는 핵심 구성 요소를 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: `Unauthenticated`(401) / `Configuration`(503) 두 가지 실패
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 `{ "error": ... }` 응답 생성
//! - **자동 변환**: `ErrorContext` 로 외부 에러를 설정 에러로 변환
//!
//! ### [`state`] - 의존성 조립
//! - **AppState**: 시작 시 한 번 만들어져 모든 워커가 읽기 전용으로 공유
//! - **명시적 주입**: 전역 싱글톤 없이 `web::Data<AppState>` 로 핸들러에 전달
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::{web, App, HttpServer};
//! use stream_token_service::core::AppState;
//! use stream_token_service::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! let state = web::Data::new(AppState::from_config(&config)?);
//!
//! HttpServer::new(move || App::new().app_data(state.clone()))
//!     .bind(config.server.bind_address())?
//!     .run()
//!     .await
//! ```

pub mod errors;
pub mod state;

pub use errors::*;
pub use state::*;
