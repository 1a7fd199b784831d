use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;

use crate::domain::access::errors::AuthError;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Middleware that resolves the bearer token to a `Principal` and stores it
/// in request extensions.
///
/// Every token failure is the same 401 to the caller; the reason is only logged.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(req.headers())
        .ok_or_else(|| {
            tracing::debug!("Request without bearer token");
            ApiError::invalid_token()
        })?
        .to_string();

    let principal = state
        .auth_service
        .authenticate(&token, Utc::now())
        .await
        .map_err(|e| match e {
            AuthError::InvalidCredentials => ApiError::invalid_token(),
            other => ApiError::from(other),
        })?;

    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

/// Token from an `Authorization: Bearer <token>` header. The scheme is
/// matched case-insensitively.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
