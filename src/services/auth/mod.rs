//! 인증 관련 서비스
//!
//! - [`identity_verifier`] - 자격 증명 검증 trait (신뢰 경계)
//! - [`supabase_verifier`] - Supabase Auth 구현
//! - [`token_service`] - Stream 사용자 토큰 서명
//! - [`exchange_service`] - 검증 → 발급 파이프라인

pub mod identity_verifier;
pub mod supabase_verifier;
pub mod token_service;
pub mod exchange_service;

pub use identity_verifier::*;
pub use supabase_verifier::*;
pub use token_service::*;
pub use exchange_service::*;
