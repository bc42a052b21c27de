//! 토큰 발급 엔드포인트 클라이언트
//!
//! 채팅 클라이언트가 Stream 연결 시 토큰을 받아오는 데 사용합니다.

pub mod token_provider;

pub use token_provider::*;
