//! Bearer-token guard for protected routes.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::web::{AppError, AppState};

use super::error::AuthError;

/// Reject requests without a valid `Authorization: Bearer <token>` header.
///
/// On success the verified [`Claims`](super::Claims) are inserted into the
/// request extensions for downstream handlers.
pub async fn require_token(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingHeader)?;

    let token = header_value
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(AuthError::InvalidToken)?;

    let claims = state.tokens.verify(token.trim())?;
    tracing::debug!(username = %claims.username, "authenticated request");

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
