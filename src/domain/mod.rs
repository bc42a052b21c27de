//! # Domain Layer Module
//!
//! 토큰 교환 서비스의 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── models  - 파이프라인 값 객체 (Credential, VerifiedIdentity, IssuedToken)
//! └── dto     - HTTP 응답 본문
//!      │
//!      ▼
//! Application Layer (Services)
//! ```

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
