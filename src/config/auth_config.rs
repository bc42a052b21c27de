//! # Authentication Configuration Module
//!
//! 아이덴티티 프로바이더(Supabase Auth)와 메시징 백엔드(Stream Chat)
//! 토큰 서명 관련 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### Supabase 설정
//! ```bash
//! export SUPABASE_URL="https://your-project.supabase.co"
//! export SUPABASE_ANON_KEY="your-anon-key"
//! export SUPABASE_TIMEOUT_SECONDS="10"
//! ```
//!
//! ### Stream 토큰 서명 설정
//! ```bash
//! export STREAM_API_KEY="your-stream-api-key"
//! export STREAM_API_SECRET="your-stream-api-secret"
//! export STREAM_TOKEN_TTL_SECONDS="3600"   # 0 이면 만료 없음
//! ```
//!
//! ## 보안 고려사항
//!
//! - `SUPABASE_ANON_KEY`는 공개 키입니다. service role 키를 넣으면 안 됩니다.
//! - `STREAM_API_SECRET`은 서버에만 존재하며 응답이나 로그로 노출되지 않습니다.

use std::fmt;

use log::warn;
use validator::Validate;

use super::data_config::{parse_or_default, Environment};
use super::EnvSource;
use crate::core::errors::{AppError, AppResult};

/// 로컬 `supabase start` 스택의 기본 API 주소
pub const LOCAL_SUPABASE_URL: &str = "http://127.0.0.1:54321";

/// 기본 Stream 토큰 수명 (초)
///
/// Edge Function 의 `createToken(user.id)` 는 `exp` 없는 토큰을 발급했습니다.
/// 같은 동작이 필요하면 `STREAM_TOKEN_TTL_SECONDS=0` 으로 설정합니다.
pub const DEFAULT_STREAM_TOKEN_TTL_SECONDS: i64 = 3600;

/// Supabase Auth 설정
///
/// 자격 증명 검증 요청은 anon 키와 호출자의 Authorization 헤더로만 수행되므로
/// 여기에는 관리자 권한 키가 포함되지 않습니다.
#[derive(Clone, PartialEq, Eq, Validate)]
pub struct IdentityProviderConfig {
    /// 프로젝트 API 주소 (예: `https://abc.supabase.co`)
    #[validate(url(message = "SUPABASE_URL must be a valid URL"))]
    pub url: String,

    /// 공개 anon 키 (`apikey` 헤더로 전송)
    #[validate(length(min = 1, message = "SUPABASE_ANON_KEY must not be empty"))]
    pub anon_key: String,

    /// 검증 요청 타임아웃 (초)
    #[validate(range(min = 1, max = 120, message = "SUPABASE_TIMEOUT_SECONDS must be 1-120"))]
    pub timeout_seconds: u64,
}

impl IdentityProviderConfig {
    /// 설정 소스에서 Supabase 설정을 읽습니다.
    ///
    /// 개발/테스트 환경에서는 로컬 Supabase 스택 주소를 기본값으로 사용하지만,
    /// 그 외 환경에서 값이 없으면 시작 단계에서 설정 에러를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::Configuration` - 필수 값 누락 또는 검증 실패
    pub fn load(source: &EnvSource, environment: Environment) -> AppResult<Self> {
        let url = match source.get("SUPABASE_URL") {
            Some(url) => url,
            None if environment.allows_local_defaults() => {
                warn!("SUPABASE_URL not set, using local stack {}", LOCAL_SUPABASE_URL);
                LOCAL_SUPABASE_URL.to_string()
            }
            None => {
                return Err(AppError::Configuration(
                    "SUPABASE_URL is not set".to_string(),
                ));
            }
        };

        let anon_key = source.get("SUPABASE_ANON_KEY").ok_or_else(|| {
            AppError::Configuration("SUPABASE_ANON_KEY is not set".to_string())
        })?;

        let config = Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key,
            timeout_seconds: parse_or_default(source, "SUPABASE_TIMEOUT_SECONDS", 10),
        };

        config
            .validate()
            .map_err(|e| AppError::Configuration(format!("Supabase 설정 검증 실패: {}", e)))?;

        Ok(config)
    }

    /// GoTrue "현재 사용자 조회" 엔드포인트 주소
    pub fn user_endpoint(&self) -> String {
        format!("{}/auth/v1/user", self.url)
    }
}

impl fmt::Debug for IdentityProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityProviderConfig")
            .field("url", &self.url)
            .field("anon_key", &"<redacted>")
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

/// Stream Chat 토큰 서명 설정
///
/// 키와 시크릿은 로딩 시점에는 선택 값입니다.
/// 누락 여부는 검증이 끝난 뒤 서명 단계에서 확인되며 503으로 응답합니다.
#[derive(Clone, PartialEq, Eq)]
pub struct StreamConfig {
    /// Stream 앱 API 키
    pub api_key: Option<String>,
    /// HMAC 서명 시크릿
    pub api_secret: Option<String>,
    /// 발급 토큰 수명 (초). `None` 이면 `exp` 클레임을 넣지 않음
    pub token_ttl_seconds: Option<i64>,
}

impl StreamConfig {
    /// 설정 소스에서 Stream 설정을 읽습니다.
    pub fn load(source: &EnvSource) -> Self {
        let api_key = source.get("STREAM_API_KEY");
        let api_secret = source.get("STREAM_API_SECRET");

        if api_key.is_none() || api_secret.is_none() {
            warn!("STREAM_API_KEY/STREAM_API_SECRET not set, token requests will be rejected with 503");
        }

        let ttl = parse_or_default(source, "STREAM_TOKEN_TTL_SECONDS", DEFAULT_STREAM_TOKEN_TTL_SECONDS);

        Self {
            api_key,
            api_secret,
            token_ttl_seconds: (ttl > 0).then_some(ttl),
        }
    }

    /// 서명에 필요한 키/시크릿이 모두 있는지 확인
    pub fn is_complete(&self) -> bool {
        self.api_key.is_some() && self.api_secret.is_some()
    }
}

impl fmt::Debug for StreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<redacted>"))
            .field("token_ttl_seconds", &self.token_ttl_seconds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_provider_requires_url_in_production() {
        let source = EnvSource::from_pairs(&[("SUPABASE_ANON_KEY", "anon")]);
        let result = IdentityProviderConfig::load(&source, Environment::Production);

        assert_eq!(
            result,
            Err(AppError::Configuration("SUPABASE_URL is not set".to_string()))
        );
    }

    #[test]
    fn test_identity_provider_local_default_in_development() {
        let source = EnvSource::from_pairs(&[("SUPABASE_ANON_KEY", "anon")]);
        let config = IdentityProviderConfig::load(&source, Environment::Development).unwrap();

        assert_eq!(config.url, LOCAL_SUPABASE_URL);
        assert_eq!(config.user_endpoint(), "http://127.0.0.1:54321/auth/v1/user");
        assert_eq!(config.timeout_seconds, 10);
    }

    #[test]
    fn test_identity_provider_rejects_invalid_url() {
        let source = EnvSource::from_pairs(&[
            ("SUPABASE_URL", "not a url"),
            ("SUPABASE_ANON_KEY", "anon"),
        ]);

        assert!(matches!(
            IdentityProviderConfig::load(&source, Environment::Production),
            Err(AppError::Configuration(_))
        ));
    }

    #[test]
    fn test_identity_provider_trims_trailing_slash() {
        let source = EnvSource::from_pairs(&[
            ("SUPABASE_URL", "https://abc.supabase.co/"),
            ("SUPABASE_ANON_KEY", "anon"),
        ]);
        let config = IdentityProviderConfig::load(&source, Environment::Production).unwrap();

        assert_eq!(config.user_endpoint(), "https://abc.supabase.co/auth/v1/user");
    }

    #[test]
    fn test_stream_config_ttl() {
        let default = StreamConfig::load(&EnvSource::from_pairs(&[]));
        assert_eq!(default.token_ttl_seconds, Some(DEFAULT_STREAM_TOKEN_TTL_SECONDS));
        assert!(!default.is_complete());

        let no_expiry = StreamConfig::load(&EnvSource::from_pairs(&[
            ("STREAM_API_KEY", "key"),
            ("STREAM_API_SECRET", "secret"),
            ("STREAM_TOKEN_TTL_SECONDS", "0"),
        ]));
        assert_eq!(no_expiry.token_ttl_seconds, None);
        assert!(no_expiry.is_complete());
    }

    #[test]
    fn test_debug_output_redacts_secrets() {
        let config = StreamConfig {
            api_key: Some("key".to_string()),
            api_secret: Some("super-secret".to_string()),
            token_ttl_seconds: None,
        };

        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
