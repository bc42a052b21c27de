//! # 통합 에러 처리
//!
//! 토큰 교환 서비스 전역에서 사용하는 에러 타입을 정의합니다.
//! `thiserror`로 에러를 선언하고 `actix_web::ResponseError`를 구현하여
//! 핸들러가 `Result<HttpResponse, AppError>`를 반환하기만 하면
//! 일관된 JSON 에러 응답이 만들어지도록 합니다.
//!
//! ## 응답 형식
//!
//! ```json
//! { "error": "Authorization header missing" }
//! ```
//!
//! ## 상태 코드 매핑
//!
//! | 변형 | HTTP 상태 |
//! |------|-----------|
//! | `Unauthenticated` | 401 Unauthorized |
//! | `Configuration` | 503 Service Unavailable |

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::dto::tokens::response::ErrorResponse;

/// 애플리케이션 전역 에러 타입
///
/// 토큰 교환 파이프라인은 두 가지 실패만 가집니다.
/// 인증 실패는 호출자가 해결할 수 있는 문제이고,
/// 설정 에러는 운영자가 해결해야 하는 문제입니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// 인증 실패 에러 (401 Unauthorized)
    ///
    /// 자격 증명이 없거나, 아이덴티티 프로바이더가 사용자를 확인하지 못한 경우입니다.
    /// 메시지는 그대로 클라이언트에 전달되므로 프로바이더 내부 정보를 담으면 안 됩니다.
    ///
    /// # 예제
    /// ```rust,ignore
    /// let header = header.ok_or_else(|| {
    ///     AppError::Unauthenticated("Authorization header missing".to_string())
    /// })?;
    /// ```
    #[error("{0}")]
    Unauthenticated(String),

    /// 설정 에러 (503 Service Unavailable)
    ///
    /// 서명 키/시크릿 누락처럼 서버 설정이 잘못된 경우입니다.
    /// 재시도해도 해결되지 않으며 운영자의 조치가 필요합니다.
    #[error("{0}")]
    Configuration(String),
}

impl AppError {
    /// 인증 헤더 누락 에러
    pub fn missing_authorization() -> Self {
        AppError::Unauthenticated("Authorization header missing".to_string())
    }

    /// 사용자 확인 실패 에러
    ///
    /// 검증 실패의 세부 원인과 상관없이 항상 같은 메시지를 사용합니다.
    pub fn invalid_credential() -> Self {
        AppError::Unauthenticated("User not found or invalid token".to_string())
    }

    /// 에러에 대응하는 HTTP 상태 코드
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            AppError::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 설정 에러의 상세 내용은 서버 로그에만 남기고,
    /// 클라이언트에는 일반화된 메시지만 전달합니다.
    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Unauthenticated(msg) => msg.clone(),
            AppError::Configuration(msg) => {
                log::error!("서비스 설정 오류: {}", msg);
                "Token service is not configured".to_string()
            }
        };

        HttpResponse::build(self.status()).json(ErrorResponse { error: message })
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 `AppError::Configuration`으로 변환하는 확장 trait
///
/// 설정 로딩, 키 준비 등 서버 측 준비 단계에서 발생한 에러에 사용합니다.
///
/// # 예제
///
/// ```rust,ignore
/// let timeout = raw.parse::<u64>()
///     .context("SUPABASE_TIMEOUT_SECONDS 파싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::Configuration(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;

    #[test]
    fn test_unauthenticated_error_response() {
        let error = AppError::missing_authorization();
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_configuration_error_response() {
        let error = AppError::Configuration("STREAM_API_SECRET is not set".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_display_is_bare_message() {
        assert_eq!(
            AppError::invalid_credential().to_string(),
            "User not found or invalid token"
        );
    }

    #[actix_web::test]
    async fn test_configuration_detail_is_not_exposed() {
        let error = AppError::Configuration("STREAM_API_SECRET is not set".to_string());
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], "Token service is not configured");
        assert!(!body.windows(6).any(|w| w == b"SECRET"));
    }

    #[actix_web::test]
    async fn test_unauthenticated_body_shape() {
        let body = to_bytes(AppError::missing_authorization().error_response().into_body())
            .await
            .unwrap();

        assert_eq!(
            serde_json::from_slice::<serde_json::Value>(&body).unwrap(),
            serde_json::json!({ "error": "Authorization header missing" })
        );
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        match app_result {
            Err(AppError::Configuration(msg)) => {
                assert!(msg.contains("Additional context"));
                assert!(msg.contains("original error"));
            }
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }
}
