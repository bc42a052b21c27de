//! 아이덴티티 검증 추상화
//!
//! 토큰 교환 서비스는 사용자 저장소를 갖지 않고, 자격 증명 검증을
//! 전적으로 아이덴티티 프로바이더에 위임합니다. 이 trait 이 그 신뢰 경계이며,
//! 교환 로직은 특정 프로바이더 구현에 묶이지 않아 가짜 구현으로 테스트할 수 있습니다.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::auth::{Credential, VerifiedIdentity};

/// 검증 실패 원인
///
/// 호출자에게는 모두 같은 401 응답으로 전달되며,
/// 세부 원인은 서버 로그에만 남습니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    /// 프로바이더가 자격 증명을 거부함
    #[error("credential rejected by identity provider (status {0})")]
    Rejected(u16),

    /// 검증은 성공했지만 사용자 id 가 없음
    #[error("identity provider returned no user id")]
    NoIdentity,

    /// 네트워크 오류, 타임아웃, 5xx 응답
    #[error("identity provider unavailable: {0}")]
    Transport(String),

    /// 응답 본문을 해석할 수 없음
    #[error("unexpected identity provider response: {0}")]
    InvalidResponse(String),
}

/// "자격 증명 검증 → 사용자" 기능
///
/// 구현체는 요청 범위의 권한만 사용해야 합니다.
/// 관리자 권한 클라이언트로 사용자 저장소를 직접 조회하면 안 됩니다.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// 자격 증명을 검증하고 사용자 하나를 반환합니다.
    ///
    /// 재시도하지 않습니다. 한 번의 시도가 실패하면 그대로 에러를 반환합니다.
    async fn verify(&self, credential: &Credential) -> Result<VerifiedIdentity, VerificationError>;
}

#[cfg(test)]
pub(crate) mod fakes {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// 토큰 → 결과 표로 동작하는 가짜 검증기. 호출 횟수를 기록합니다.
    #[derive(Default)]
    pub struct StaticVerifier {
        results: HashMap<String, Result<VerifiedIdentity, VerificationError>>,
        calls: AtomicUsize,
    }

    impl StaticVerifier {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_user(mut self, token: &str, user_id: &str) -> Self {
            let identity = VerifiedIdentity::new(user_id).expect("test user id must not be blank");
            self.results.insert(token.to_string(), Ok(identity));
            self
        }

        pub fn with_error(mut self, token: &str, error: VerificationError) -> Self {
            self.results.insert(token.to_string(), Err(error));
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl IdentityVerifier for StaticVerifier {
        async fn verify(&self, credential: &Credential) -> Result<VerifiedIdentity, VerificationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.results
                .get(credential.token())
                .cloned()
                .unwrap_or(Err(VerificationError::Rejected(401)))
        }
    }
}
