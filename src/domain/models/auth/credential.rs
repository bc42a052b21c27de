//! 호출자 자격 증명
//!
//! `Authorization` 헤더에서 추출한, 아직 검증되지 않은 bearer 자격 증명입니다.
//! 요청 하나의 수명 동안만 존재하며 어디에도 저장되지 않습니다.

use std::fmt;

use crate::core::errors::{AppError, AppResult};
use crate::utils::string_utils::fingerprint;

/// 인증 스킴 접두사
pub const BEARER_PREFIX: &str = "Bearer ";

/// 검증 전 자격 증명
///
/// 아이덴티티 프로바이더로 그대로 전달할 원본 헤더 값과
/// 스킴 접두사를 제거한 토큰 값을 함께 보관합니다.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    authorization: String,
    token: String,
}

impl Credential {
    /// `Authorization` 헤더 값에서 자격 증명을 만듭니다.
    ///
    /// 헤더가 없거나 비어 있으면 `Unauthenticated` 를 반환합니다.
    /// `Bearer ` 접두사가 없으면 헤더 값 전체를 토큰으로 취급하고,
    /// 판단은 아이덴티티 프로바이더에 맡깁니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let credential = Credential::from_authorization(Some("Bearer eyJ..."))?;
    /// assert_eq!(credential.token(), "eyJ...");
    /// ```
    pub fn from_authorization(header: Option<&str>) -> AppResult<Self> {
        let raw = header
            .map(str::trim_start)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(AppError::missing_authorization)?;

        let token = raw.strip_prefix(BEARER_PREFIX).unwrap_or(raw).trim();

        Ok(Self {
            authorization: raw.trim_end().to_string(),
            token: token.to_string(),
        })
    }

    /// 프로바이더로 전달할 원본 `Authorization` 헤더 값
    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    /// 스킴 접두사를 제거한 토큰 값
    pub fn token(&self) -> &str {
        &self.token
    }

    /// 헤더는 있지만 토큰 부분이 비어 있는지 (`"Bearer "`)
    pub fn is_blank(&self) -> bool {
        self.token.is_empty()
    }

    /// 로그용 지문
    pub fn fingerprint(&self) -> String {
        fingerprint(&self.token)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("fingerprint", &self.fingerprint())
            .finish()
    }
}
