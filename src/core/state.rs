//! 애플리케이션 상태 조립
//!
//! 시작 시 설정으로부터 서비스 그래프를 한 번 만들고, 이후에는
//! `web::Data<AppState>` 로 모든 워커가 읽기 전용으로 공유합니다.

use std::sync::Arc;

use log::info;

use crate::config::{AppConfig, Environment};
use crate::core::errors::AppResult;
use crate::services::auth::{IdentityVerifier, SupabaseVerifier, TokenExchangeService};

/// 핸들러에 주입되는 공유 상태
#[derive(Clone)]
pub struct AppState {
    /// 토큰 교환 서비스
    pub exchange: TokenExchangeService,
    /// 헬스체크에 표시할 실행 환경
    pub environment: Environment,
}

impl AppState {
    /// 설정으로부터 실제 Supabase 검증기를 사용하는 상태를 만듭니다.
    ///
    /// # Errors
    ///
    /// * `AppError::Configuration` - HTTP 클라이언트 생성 실패
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let verifier = SupabaseVerifier::new(config.identity.clone())?;
        info!("✅ Supabase 검증기 준비 완료: {}", config.identity.user_endpoint());

        Ok(Self::with_verifier(Arc::new(verifier), config))
    }

    /// 임의의 검증기로 상태를 만듭니다.
    pub fn with_verifier(verifier: Arc<dyn IdentityVerifier>, config: &AppConfig) -> Self {
        Self {
            exchange: TokenExchangeService::new(verifier, config.stream.clone()),
            environment: config.environment,
        }
    }
}
