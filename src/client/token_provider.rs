//! 클라이언트 측 토큰 제공자
//!
//! Stream Chat SDK 의 `tokenProvider` 콜백이 하는 일을 Rust 로 제공합니다.
//! 로그인한 사용자의 Supabase access token 으로 토큰 발급 엔드포인트를 호출하고
//! 응답의 `token` 필드를 돌려줍니다. SDK 는 토큰이 만료되면 이 콜백을 다시 호출합니다.

use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::models::auth::BEARER_PREFIX;
use crate::utils::string_utils::deserialize_optional_string;

/// 토큰 발급 엔드포인트 경로 (Supabase 프로젝트 주소 기준)
pub const STREAM_TOKENS_PATH: &str = "/functions/v1/stream-tokens";

/// 토큰 제공자 에러
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenProviderError {
    /// 네트워크 오류
    #[error("token endpoint unreachable: {0}")]
    Transport(String),

    /// 엔드포인트가 요청을 거부함 (401, 503 등)
    #[error("token endpoint rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// 응답 본문을 해석할 수 없음
    #[error("unexpected token endpoint response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Deserialize)]
struct TokenBody {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Stream 토큰 제공자
#[derive(Debug, Clone)]
pub struct TokenProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl TokenProvider {
    /// 엔드포인트 전체 주소로 생성
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: None,
        }
    }

    /// Supabase 프로젝트 주소와 anon 키로 생성
    ///
    /// Supabase 함수 게이트웨이는 `apikey` 헤더를 요구하므로 함께 전송합니다.
    ///
    /// ```rust,ignore
    /// let provider = TokenProvider::for_supabase("https://abc.supabase.co", "anon-key");
    /// ```
    pub fn for_supabase(project_url: &str, anon_key: &str) -> Self {
        let endpoint = format!("{}{}", project_url.trim_end_matches('/'), STREAM_TOKENS_PATH);
        Self {
            api_key: Some(anon_key.to_string()),
            ..Self::new(endpoint)
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 토큰을 요청합니다.
    ///
    /// 성공 응답에 `token` 이 없으면 `Ok(None)` 을 반환합니다.
    ///
    /// # Arguments
    ///
    /// * `access_token` - 로그인 세션의 Supabase access token (`Bearer ` 접두사 없이)
    ///
    /// # Errors
    ///
    /// * `TokenProviderError::Transport` - 연결 실패
    /// * `TokenProviderError::Rejected` - 2xx 가 아닌 응답
    /// * `TokenProviderError::InvalidResponse` - JSON 이 아닌 성공 응답
    pub async fn fetch_token(&self, access_token: &str) -> Result<Option<String>, TokenProviderError> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("{}{}", BEARER_PREFIX, access_token));

        if let Some(api_key) = &self.api_key {
            request = request.header("apikey", api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TokenProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.error)
                .unwrap_or(text);
            log::warn!("Stream 토큰 요청 실패 - status: {}, message: {}", status, message);
            return Err(TokenProviderError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .json::<TokenBody>()
            .await
            .map_err(|e| TokenProviderError::InvalidResponse(e.to_string()))?;

        Ok(body.token)
    }
}
