//! Stream 토큰 서비스
//!
//! Supabase 로그인 세션을 Stream Chat 사용자 토큰으로 교환하는 서비스입니다.
//! 클라이언트는 Stream 시크릿을 알 필요 없이, 검증된 자신의 사용자 id 에 묶인
//! 토큰만 받을 수 있습니다.
//!
//! # Features
//!
//! - **자격 증명 검증**: Supabase `/auth/v1/user` 로 access token 확인
//! - **토큰 발급**: Stream 호환 HS256 토큰 (`user_id`, `iat`, `exp`)
//! - **클라이언트**: Stream SDK 의 token provider 역할을 하는 `TokenProvider`
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← POST /functions/v1/stream-tokens, GET /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← Authorization 헤더 추출, JSON 응답
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증 → 발급 파이프라인
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Supabase Auth   │ ← 아이덴티티 프로바이더
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use stream_token_service::client::TokenProvider;
//!
//! let provider = TokenProvider::for_supabase("https://abc.supabase.co", "anon-key");
//! let token = provider.fetch_token(&session.access_token).await?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
pub mod client;
