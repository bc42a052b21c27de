use actix_web::http::header;
use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::core::errors::AppError;
use crate::core::state::AppState;
use crate::domain::TokenResponse;

/// Stream 토큰 발급 핸들러
///
/// Supabase access token 을 Stream Chat 사용자 토큰으로 교환합니다.
/// UTF-8 이 아닌 `Authorization` 헤더는 없는 것으로 취급합니다.
///
/// # Endpoint
/// `POST /functions/v1/stream-tokens`
///
/// # Responses
/// - `200 {"token": "..."}`
/// - `401 {"error": "Authorization header missing"}`
/// - `401 {"error": "User not found or invalid token"}`
/// - `503 {"error": "Token service is not configured"}`
#[post("/stream-tokens")]
pub async fn issue_stream_token(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let issued = state.exchange.exchange(authorization).await?;

    Ok(HttpResponse::Ok().json(TokenResponse { token: issued.token }))
}
