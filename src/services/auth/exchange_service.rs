//! 토큰 교환 서비스
//!
//! Supabase 자격 증명을 검증하고, 검증된 사용자에게만 Stream 토큰을 발급하는
//! 검증 → 발급 파이프라인입니다.
//!
//! # 처리 순서
//!
//! 1. `Authorization` 헤더가 없으면 401 (`Authorization header missing`)
//! 2. `Bearer ` 접두사 제거
//! 3. 아이덴티티 프로바이더로 검증 (요청당 1회, 재시도 없음)
//! 4. 검증 실패 또는 사용자 id 없음이면 401 (`User not found or invalid token`)
//! 5. 서버 설정의 키/시크릿으로 서명기 생성 후 토큰 발급 (설정 누락 시 503)
//! 6. 발급된 토큰 반환
//!
//! 어느 단계에서든 실패하면 즉시 중단되며, 부분 성공으로 토큰이 나가는 일은 없습니다.

use std::sync::Arc;

use log::{info, warn};
use uuid::Uuid;

use crate::config::StreamConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::auth::Credential;
use crate::domain::models::token::IssuedToken;

use super::identity_verifier::IdentityVerifier;
use super::token_service::StreamTokenSigner;

/// 토큰 교환 서비스
///
/// 검증기와 서명 설정은 생성 시 주입되며 이후 변경되지 않습니다.
/// 요청 간 공유되는 가변 상태가 없으므로 여러 워커에서 동시에 사용해도 안전합니다.
#[derive(Clone)]
pub struct TokenExchangeService {
    verifier: Arc<dyn IdentityVerifier>,
    stream: StreamConfig,
}

impl TokenExchangeService {
    pub fn new(verifier: Arc<dyn IdentityVerifier>, stream: StreamConfig) -> Self {
        Self { verifier, stream }
    }

    /// `Authorization` 헤더 값을 Stream 토큰으로 교환합니다.
    ///
    /// # Arguments
    ///
    /// * `authorization` - 요청의 `Authorization` 헤더 값 (없으면 `None`)
    ///
    /// # Errors
    ///
    /// * `AppError::Unauthenticated` - 헤더 누락, 검증 실패, 사용자 id 없음
    /// * `AppError::Configuration` - Stream 키/시크릿 누락
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let issued = service.exchange(Some("Bearer eyJ...")).await?;
    /// println!("token for {}: {}", issued.claims.user_id, issued.token);
    /// ```
    pub async fn exchange(&self, authorization: Option<&str>) -> AppResult<IssuedToken> {
        let request_id = Uuid::new_v4();

        let credential = Credential::from_authorization(authorization).inspect_err(|_| {
            info!("[{}] 토큰 요청 거부 - Authorization 헤더 없음", request_id);
        })?;

        if credential.is_blank() {
            warn!("[{}] 토큰 요청 거부 - 빈 자격 증명", request_id);
            return Err(AppError::invalid_credential());
        }

        let identity = self.verifier.verify(&credential).await.map_err(|e| {
            warn!(
                "[{}] 자격 증명 검증 실패 - credential: {}, 원인: {}",
                request_id,
                credential.fingerprint(),
                e
            );
            AppError::invalid_credential()
        })?;

        let signer = StreamTokenSigner::from_config(&self.stream)?;
        let issued = signer.mint(&identity)?;

        info!(
            "[{}] Stream 토큰 발급 - api_key: {}, user_id: {}, exp: {:?}",
            request_id,
            signer.api_key(),
            identity.id(),
            issued.claims.exp
        );

        Ok(issued)
    }
}
