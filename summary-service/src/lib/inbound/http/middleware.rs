use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

/// Identity established by the bearer-token middleware, stored in request
/// extensions for the protected handlers.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
}

/// Validates the `Authorization: Bearer <token>` header.
///
/// Missing header, malformed header, and invalid/expired token are distinct
/// 401 rejections; none of them reveal more than which check failed.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let claims: auth::Claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        unauthorized("Invalid or expired token")
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: UserId(claims.user_id),
        email: claims.sub,
    });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthorized("Malformed Authorization header"))?;

    // Scheme is case-insensitive per RFC 7235
    let (scheme, token) = auth_str
        .split_once(' ')
        .ok_or_else(|| unauthorized("Malformed Authorization header"))?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(unauthorized("Malformed Authorization header"));
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(unauthorized("Malformed Authorization header"));
    }

    Ok(token)
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": message })),
    )
        .into_response()
}
