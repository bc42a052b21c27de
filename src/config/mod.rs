//! # Configuration Module
//!
//! 토큰 교환 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정은 프로세스 시작 시 한 번 읽혀 [`AppConfig`] 로 고정되며,
//! 이후에는 불변 구조체로 필요한 곳에 명시적으로 전달됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, Rate Limiting 설정
//! - [`auth_config`] - Supabase 검증, Stream 토큰 서명 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 한 번 읽고 고정 (Read Once)
//!
//! 요청 처리 중에는 환경 변수를 다시 읽지 않습니다.
//! 요청 간에 공유되는 가변 상태가 없습니다.
//!
//! ### 2. 보안 우선 (Security First)
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - `Debug` 출력에서 시크릿은 가려짐
//! - 프로덕션에서는 Supabase 설정 누락 시 시작 실패
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use stream_token_service::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("Server will bind to {}", config.server.bind_address());
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! export SUPABASE_URL="https://your-project.supabase.co"
//! export SUPABASE_ANON_KEY="your-anon-key"
//!
//! export STREAM_API_KEY="your-stream-key"
//! export STREAM_API_SECRET="your-stream-secret"
//! ```

pub mod auth_config;
pub mod data_config;

pub use auth_config::*;
pub use data_config::*;

use std::collections::HashMap;

use crate::core::errors::AppResult;
use crate::utils::string_utils::clean_optional_string;

/// `PROFILE` 값에 해당하는 dotenv 파일 이름
///
/// `None` 이면 기본 `.env` 파일을 사용합니다. 프로필이 없으면 `dev` 로 취급합니다.
pub fn env_file_for_profile(profile: Option<&str>) -> Option<&'static str> {
    match profile.unwrap_or("dev") {
        "prod" => Some(".env.prod"),
        "dev" => Some(".env.dev"),
        _ => None,
    }
}

/// 설정값 조회 소스
///
/// 프로세스 환경 변수의 스냅샷입니다. 테스트에서는 `from_pairs` 로
/// 전역 환경을 건드리지 않고 임의의 값을 주입합니다.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    vars: HashMap<String, String>,
}

impl EnvSource {
    /// 현재 프로세스 환경 변수로부터 생성
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// 키/값 쌍으로부터 생성
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            vars: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// 값을 조회합니다. 빈 문자열이나 공백만 있는 값은 설정되지 않은 것으로 취급합니다.
    pub fn get(&self, key: &str) -> Option<String> {
        clean_optional_string(self.vars.get(key).cloned())
    }
}

/// 프로세스 전역 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub rate_limit: RateLimitConfig,
    pub identity: IdentityProviderConfig,
    pub stream: StreamConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::Configuration` - Supabase 설정 누락/검증 실패
    pub fn from_env() -> AppResult<Self> {
        Self::from_source(&EnvSource::from_process())
    }

    /// 주어진 소스에서 설정을 읽습니다.
    pub fn from_source(source: &EnvSource) -> AppResult<Self> {
        let environment = Environment::detect(source);

        Ok(Self {
            environment,
            server: ServerConfig::load(source),
            rate_limit: RateLimitConfig::load(source),
            identity: IdentityProviderConfig::load(source, environment)?,
            stream: StreamConfig::load(source),
        })
    }
}
