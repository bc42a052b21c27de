//! Supabase Auth 기반 아이덴티티 검증
//!
//! GoTrue 의 "현재 사용자 조회" API 에 호출자의 `Authorization` 헤더를 그대로 전달하여
//! 자격 증명을 검증합니다. 공개 anon 키만 사용하므로 검증은 원래 호출자가
//! 볼 수 있는 범위로 제한됩니다.
//!
//! # API 호출 형식
//!
//! ```text
//! GET {SUPABASE_URL}/auth/v1/user
//! apikey: {SUPABASE_ANON_KEY}
//! Authorization: Bearer {사용자 access token}
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;

use crate::config::IdentityProviderConfig;
use crate::core::errors::{AppResult, ErrorContext};
use crate::domain::models::auth::{Credential, VerifiedIdentity};
use crate::utils::string_utils::deserialize_optional_string;

use super::identity_verifier::{IdentityVerifier, VerificationError};

/// GoTrue 사용자 응답 중 필요한 필드
#[derive(Debug, Deserialize)]
struct SupabaseUser {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    id: Option<String>,
}

/// Supabase Auth 검증기
#[derive(Debug, Clone)]
pub struct SupabaseVerifier {
    client: reqwest::Client,
    config: IdentityProviderConfig,
}

impl SupabaseVerifier {
    /// 설정으로부터 검증기를 만듭니다.
    ///
    /// HTTP 클라이언트는 커넥션 풀을 공유하기 위해 한 번만 만들어집니다.
    /// 요청별 상태는 `Authorization` 헤더로만 전달됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::Configuration` - HTTP 클라이언트 생성 실패
    pub fn new(config: IdentityProviderConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Supabase HTTP 클라이언트 생성 실패")?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl IdentityVerifier for SupabaseVerifier {
    async fn verify(&self, credential: &Credential) -> Result<VerifiedIdentity, VerificationError> {
        let response = self
            .client
            .get(self.config.user_endpoint())
            .header("apikey", &self.config.anon_key)
            .header(AUTHORIZATION, credential.authorization())
            .send()
            .await
            .map_err(|e| VerificationError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(VerificationError::Transport(format!("status {}", status.as_u16())));
        }
        if !status.is_success() {
            log::debug!(
                "Supabase 사용자 조회 거부 - status: {}, credential: {}",
                status,
                credential.fingerprint()
            );
            return Err(VerificationError::Rejected(status.as_u16()));
        }

        let user = response
            .json::<SupabaseUser>()
            .await
            .map_err(|e| VerificationError::InvalidResponse(e.to_string()))?;

        user.id
            .and_then(VerifiedIdentity::new)
            .ok_or(VerificationError::NoIdentity)
    }
}
