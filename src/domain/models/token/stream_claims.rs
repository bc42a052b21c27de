//! Stream Chat 사용자 토큰 클레임
//!
//! Stream 서버 SDK의 `createToken(userId, exp, iat)` 이 만드는 JWT 페이로드와 같은 형식입니다.
use serde::{Deserialize, Serialize};

/// Stream 사용자 토큰의 클레임(Payload)
///
/// ## 클레임 구성
///
/// - `user_id`: 토큰이 바인딩된 사용자 ID (Stream 이 연결 사용자와 비교)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp, 선택사항)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamTokenClaims {
    /// 사용자 ID
    pub user_id: String,
    /// 토큰 발급 시간
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// 토큰 만료 시간
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

/// 발급된 토큰과 메타데이터
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// 서명된 JWT 문자열
    pub token: String,
    /// 토큰에 담긴 클레임
    pub claims: StreamTokenClaims,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_claims_are_omitted() {
        let claims = StreamTokenClaims {
            user_id: "u123".to_string(),
            iat: None,
            exp: None,
        };

        assert_eq!(
            serde_json::to_value(&claims).unwrap(),
            serde_json::json!({ "user_id": "u123" })
        );
    }
}
