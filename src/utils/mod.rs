//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리, 로그용 지문 생성
//! - [`display_terminal`] - 시작 시 설정 요약 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::fingerprint;
//! use crate::utils::display_terminal::print_config_summary;
//!
//! log::info!("credential={}", fingerprint(raw));
//! print_config_summary(&config);
//! ```

pub mod string_utils;
pub mod display_terminal;
