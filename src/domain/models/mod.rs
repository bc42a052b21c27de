//! # Domain Models Module
//!
//! 토큰 교환 파이프라인을 흐르는 값 객체들을 정의합니다.
//! 모든 모델은 요청 하나의 수명 동안만 존재하며 영속화되지 않습니다.
//!
//! ## 파이프라인
//!
//! ```text
//! Authorization 헤더
//!        │  Credential::from_authorization
//!        ▼
//! ┌──────────────┐   IdentityVerifier::verify   ┌──────────────────┐
//! │  Credential  │ ───────────────────────────▶ │ VerifiedIdentity │
//! └──────────────┘                              └──────────────────┘
//!                                                        │ StreamTokenSigner::mint
//!                                                        ▼
//!                                               ┌──────────────────┐
//!                                               │   IssuedToken    │
//!                                               └──────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - [`auth`] - 검증 전 자격 증명과 검증된 사용자
//! - [`token`] - Stream 사용자 토큰 클레임과 발급 결과

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
