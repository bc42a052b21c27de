//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 시작 시 한 번 조립되어 [`crate::core::AppState`] 를 통해 핸들러에 주입됩니다.
//!
//! # Features
//!
//! - Supabase Auth 기반 자격 증명 검증
//! - Stream Chat 사용자 토큰 서명 및 검증
//! - 검증 → 발급 토큰 교환 파이프라인
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::auth::{SupabaseVerifier, TokenExchangeService};
//!
//! let verifier = Arc::new(SupabaseVerifier::new(config.identity.clone())?);
//! let exchange = TokenExchangeService::new(verifier, config.stream.clone());
//! let issued = exchange.exchange(Some("Bearer eyJ...")).await?;
//! ```

pub mod auth;
