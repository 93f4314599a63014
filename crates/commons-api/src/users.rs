use axum::{Json, extract::State};
use commons_types::api::{LoginRequest, LoginResponse};
use commons_types::validation::Username;
use tracing::info;

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::{AppState, with_db};

/// POST /login: look the user up by name, registering it on first sight.
/// There is no password; the name is the identity.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let username = Username::new(req.username)?;

    let user = with_db(&state, move |db| db.login_or_register(&username)).await?;
    info!(user_id = user.id, "user logged in");

    Ok(Json(LoginResponse {
        id: user.id,
        username: user.username,
    }))
}
