//! Stream 사용자 토큰 서명 서비스
//!
//! Stream Chat 서버 SDK 의 `createToken` 과 같은 방식으로 사용자 토큰을 만듭니다.
//! HMAC-SHA256 으로 서명한 JWT 이며, Stream 은 같은 API 시크릿으로 서명을 검증하고
//! `user_id` 클레임을 연결 사용자와 비교합니다.

use std::collections::HashSet;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::config::StreamConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::auth::VerifiedIdentity;
use crate::domain::models::token::{IssuedToken, StreamTokenClaims};

/// Stream 개발 토큰 헤더 (`{"alg":"HS256","typ":"JWT"}`)
const DEV_TOKEN_HEADER: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9";

/// Stream 개발 토큰 서명 자리 표시자
const DEV_TOKEN_SIGNATURE: &str = "devtoken";

/// Stream 토큰 서명기
///
/// 요청마다 [`StreamConfig`] 로부터 만들어지며, 키/시크릿이 없으면 생성되지 않습니다.
/// 시크릿은 `Debug` 출력에 포함되지 않습니다.
pub struct StreamTokenSigner {
    api_key: String,
    secret: String,
    ttl_seconds: Option<i64>,
}

impl StreamTokenSigner {
    /// 서명 설정으로부터 서명기를 만듭니다.
    ///
    /// # Errors
    ///
    /// * `AppError::Configuration` - `STREAM_API_KEY` 또는 `STREAM_API_SECRET` 누락
    pub fn from_config(config: &StreamConfig) -> AppResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| AppError::Configuration("STREAM_API_KEY is not set".to_string()))?;
        let secret = config
            .api_secret
            .clone()
            .ok_or_else(|| AppError::Configuration("STREAM_API_SECRET is not set".to_string()))?;

        Ok(Self {
            api_key,
            secret,
            ttl_seconds: config.token_ttl_seconds,
        })
    }

    /// 서명기가 속한 Stream 앱의 API 키
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// 검증된 사용자에게 토큰을 발급합니다.
    ///
    /// 호출할 때마다 `iat` 이 새로 설정되므로 같은 사용자라도 토큰이 달라질 수 있으며,
    /// 모두 독립적으로 유효합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let signer = StreamTokenSigner::from_config(&config.stream)?;
    /// let issued = signer.mint(&identity)?;
    /// ```
    pub fn mint(&self, identity: &VerifiedIdentity) -> AppResult<IssuedToken> {
        self.mint_at(identity, Utc::now().timestamp())
    }

    /// 발급 시각을 지정하여 토큰을 발급합니다.
    pub fn mint_at(&self, identity: &VerifiedIdentity, issued_at: i64) -> AppResult<IssuedToken> {
        let claims = StreamTokenClaims {
            user_id: identity.id().to_string(),
            iat: Some(issued_at),
            exp: self.ttl_seconds.map(|ttl| issued_at + ttl),
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::Configuration(format!("Stream 토큰 서명 실패: {}", e)))?;

        Ok(IssuedToken { token, claims })
    }

    /// 토큰 서명을 검증하고 클레임을 반환합니다.
    ///
    /// Stream 서버가 수행하는 검증과 같은 기준입니다.
    /// `exp` 가 있으면 만료를 확인하고, 없으면 만료 없는 토큰으로 취급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::Unauthenticated` - 서명 불일치, 만료, 형식 오류
    pub fn verify(&self, token: &str) -> AppResult<StreamTokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims = HashSet::new();
        validation.leeway = 0;

        decode::<StreamTokenClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AppError::Unauthenticated("Stream token expired".to_string())
            }
            _ => AppError::Unauthenticated(format!("Invalid stream token: {}", e)),
        })
    }

    /// Stream 개발 토큰을 만듭니다.
    ///
    /// 서명되지 않은 토큰으로, Stream 앱에서 "Disable Auth Checks" 가 켜진 경우에만 허용됩니다.
    /// 모바일 클라이언트의 `client.devToken(id)` 와 같은 문자열을 만듭니다.
    /// 페이로드는 SDK 와 같이 `=` 패딩을 유지한 표준 base64 입니다.
    ///
    /// ```text
    /// eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.<base64({"user_id":"u123"})>.devtoken
    /// ```
    pub fn dev_token(user_id: &str) -> AppResult<String> {
        let payload = serde_json::to_string(&StreamTokenClaims {
            user_id: user_id.to_string(),
            iat: None,
            exp: None,
        })
        .map_err(|e| AppError::Configuration(format!("개발 토큰 직렬화 실패: {}", e)))?;

        Ok(format!(
            "{}.{}.{}",
            DEV_TOKEN_HEADER,
            STANDARD.encode(payload),
            DEV_TOKEN_SIGNATURE
        ))
    }
}

impl std::fmt::Debug for StreamTokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamTokenSigner")
            .field("api_key", &self.api_key)
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(ttl: Option<i64>) -> StreamConfig {
        StreamConfig {
            api_key: Some("stream-key".to_string()),
            api_secret: Some("stream-secret".to_string()),
            token_ttl_seconds: ttl,
        }
    }

    fn identity(id: &str) -> VerifiedIdentity {
        VerifiedIdentity::new(id).unwrap()
    }

    #[test]
    fn test_missing_secret_is_configuration_error() {
        let mut incomplete = config(None);
        incomplete.api_secret = None;

        assert_eq!(
            StreamTokenSigner::from_config(&incomplete).unwrap_err(),
            AppError::Configuration("STREAM_API_SECRET is not set".to_string())
        );

        incomplete.api_key = None;
        assert!(matches!(
            StreamTokenSigner::from_config(&incomplete),
            Err(AppError::Configuration(_))
        ));
    }

    #[test]
    fn test_minted_token_is_bound_to_identity() {
        let signer = StreamTokenSigner::from_config(&config(Some(3600))).unwrap();
        let issued = signer.mint(&identity("u123")).unwrap();

        let claims = signer.verify(&issued.token).unwrap();
        assert_eq!(claims.user_id, "u123");
        assert_eq!(claims, issued.claims);
    }

    #[test]
    fn test_ttl_sets_expiry() {
        let signer = StreamTokenSigner::from_config(&config(Some(600))).unwrap();
        let issued = signer.mint_at(&identity("u123"), 1_700_000_000).unwrap();

        assert_eq!(issued.claims.iat, Some(1_700_000_000));
        assert_eq!(issued.claims.exp, Some(1_700_000_600));
    }

    #[test]
    fn test_no_ttl_means_no_expiry_claim() {
        let signer = StreamTokenSigner::from_config(&config(None)).unwrap();
        let issued = signer.mint_at(&identity("u123"), 1_700_000_000).unwrap();

        assert_eq!(issued.claims.exp, None);
        assert_eq!(signer.verify(&issued.token).unwrap().user_id, "u123");
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let signer = StreamTokenSigner::from_config(&config(Some(60))).unwrap();
        let issued = signer.mint_at(&identity("u123"), 1_000_000_000).unwrap();

        assert_eq!(
            signer.verify(&issued.token),
            Err(AppError::Unauthenticated("Stream token expired".to_string()))
        );
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let signer = StreamTokenSigner::from_config(&config(None)).unwrap();
        let mut other = config(None);
        other.api_secret = Some("other-secret".to_string());
        let other_signer = StreamTokenSigner::from_config(&other).unwrap();

        let issued = other_signer.mint(&identity("u123")).unwrap();
        assert!(signer.verify(&issued.token).is_err());
    }

    #[test]
    fn test_tokens_for_different_users_differ() {
        let signer = StreamTokenSigner::from_config(&config(None)).unwrap();
        let a = signer.mint_at(&identity("alice"), 1_700_000_000).unwrap();
        let b = signer.mint_at(&identity("bob"), 1_700_000_000).unwrap();

        assert_ne!(a.token, b.token);
        assert_eq!(signer.verify(&b.token).unwrap().user_id, "bob");
    }

    #[test]
    fn test_dev_token_format() {
        let token = StreamTokenSigner::dev_token("u123").unwrap();
        let parts: Vec<&str> = token.split('.').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], DEV_TOKEN_HEADER);
        assert_eq!(parts[2], "devtoken");

        let payload = STANDARD.decode(parts[1]).unwrap();
        let claims: StreamTokenClaims = serde_json::from_slice(&payload).unwrap();
        assert_eq!(claims.user_id, "u123");
    }

    #[test]
    fn test_dev_token_keeps_base64_padding() {
        let token = StreamTokenSigner::dev_token("u1234").unwrap();

        assert_eq!(
            token,
            format!("{}.eyJ1c2VyX2lkIjoidTEyMzQifQ==.devtoken", DEV_TOKEN_HEADER)
        );
    }

    #[test]
    fn test_api_key_of_configured_app() {
        let signer = StreamTokenSigner::from_config(&config(None)).unwrap();
        assert_eq!(signer.api_key(), "stream-key");
    }

    #[test]
    fn test_debug_hides_secret() {
        let signer = StreamTokenSigner::from_config(&config(None)).unwrap();
        let debug = format!("{:?}", signer);

        assert!(debug.contains("stream-key"));
        assert!(!debug.contains("stream-secret"));
    }
}
