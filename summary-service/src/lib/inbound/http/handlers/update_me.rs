use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::UserBody;
use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateUserCommand;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// HTTP request body for a partial profile update (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateMeRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UpdateMeRequest {
    fn try_into_command(self) -> Result<UpdateUserCommand, UserError> {
        let name = self.name.map(DisplayName::new).transpose()?;
        let email = self.email.map(EmailAddress::new).transpose()?;
        Ok(UpdateUserCommand { name, email })
    }
}

pub async fn update_me(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedUser>,
    Json(body): Json<UpdateMeRequest>,
) -> Result<Json<UserBody>, ApiError> {
    let command = body.try_into_command()?;

    state
        .user_service
        .update_user(&current.user_id, command)
        .await
        .map_err(|e| match e {
            UserError::NotFound(_) => ApiError::Unauthorized("User not found".to_string()),
            _ => ApiError::from(e),
        })
        .map(|ref user| Json(user.into()))
}
