//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청에서 값을 꺼내 서비스에 넘기고, 결과를 JSON 응답으로 바꾸는 일만 합니다.
//! 에러는 `Result<HttpResponse, AppError>` 로 반환되어 `ResponseError` 구현이 응답을 만듭니다.
//!
//! ```text
//!   Client (Mobile App / Chat SDK tokenProvider)
//!                       │ POST /functions/v1/stream-tokens
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                              ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   TokenExchangeService                          ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Supabase Auth  /  Stream 토큰 서명               ← External
//! └─────────────────────────────────────────────┘
//! ```

pub mod token_handlers;
