//! 실행 환경 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, Rate Limiting, CORS 관련 설정을 관리합니다.
//! 모든 값은 프로세스 시작 시 한 번만 읽히며 이후 변경되지 않습니다.

use log::warn;

use super::EnvSource;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경 - 로컬 Supabase 스택을 기본값으로 사용
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 필수 설정 누락 시 시작 실패
    Production,
}

impl Environment {
    /// 설정 소스에서 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 변수를 확인하며, 설정되지 않은 경우
    /// `Production`을 기본값으로 사용합니다.
    pub fn detect(source: &EnvSource) -> Self {
        source
            .get("ENVIRONMENT")
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Production)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 Environment 값. 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 로컬 기본값 사용이 허용되는 환경인지 확인합니다.
    pub fn allows_local_defaults(&self) -> bool {
        matches!(self, Environment::Development | Environment::Test)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// 바인딩 호스트 (기본값: "0.0.0.0")
    pub host: String,
    /// 바인딩 포트 (기본값: 8080)
    pub port: u16,
    /// 워커 스레드 수 (기본값: 4)
    pub workers: usize,
    /// CORS 허용 Origin 목록. 비어 있으면 모든 Origin 허용
    pub cors_allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// 설정 소스에서 서버 설정을 읽습니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    /// - `PORT`: 커스텀 포트 설정
    /// - `SERVER_WORKERS`: 워커 스레드 수
    /// - `CORS_ALLOWED_ORIGINS`: 쉼표로 구분된 Origin 목록
    pub fn load(source: &EnvSource) -> Self {
        let cors_allowed_origins = source
            .get("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            host: source.get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or_default(source, "PORT", 8080),
            workers: parse_or_default(source, "SERVER_WORKERS", 4),
            cors_allowed_origins,
        }
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// 초당 허용 요청 수 (기본값: 100)
    pub per_second: u64,
    /// 버스트 허용량 (기본값: 200)
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 설정 소스에서 Rate Limiting 설정을 읽습니다.
    ///
    /// ```bash
    /// # .env.dev (개발 환경)
    /// RATE_LIMIT_PER_SECOND=20
    /// RATE_LIMIT_BURST_SIZE=40
    /// ```
    pub fn load(source: &EnvSource) -> Self {
        Self {
            per_second: parse_or_default(source, "RATE_LIMIT_PER_SECOND", 100),
            burst_size: parse_or_default(source, "RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

/// 숫자형 설정값을 파싱하고, 실패 시 경고 로그와 함께 기본값을 사용합니다.
pub(crate) fn parse_or_default<T>(source: &EnvSource, key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match source.get(key) {
        Some(raw) => raw.parse::<T>().unwrap_or_else(|e| {
            warn!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        None => default,
    }
}
