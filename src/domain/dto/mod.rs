//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 경계에서 주고받는 JSON 본문을 정의합니다.
//! 토큰 교환 엔드포인트는 요청 본문을 사용하지 않으므로 응답 DTO만 존재합니다.
//!
//! ```text
//! dto/
//! └── tokens/
//!     └── response.rs   # { "token": ... } / { "error": ... }
//! ```

pub mod tokens;

pub use tokens::*;
