use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::ApiError;
use super::UserBody;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// Return the caller's public identity.
///
/// The token may outlive its account: a valid token whose user is gone is
/// still an unauthenticated request.
pub async fn get_me(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedUser>,
) -> Result<Json<UserBody>, ApiError> {
    state
        .user_service
        .get_user(&current.user_id)
        .await
        .map_err(|e| match e {
            UserError::NotFound(_) => ApiError::Unauthorized("User not found".to_string()),
            _ => ApiError::from(e),
        })
        .map(|ref user| Json(user.into()))
}
