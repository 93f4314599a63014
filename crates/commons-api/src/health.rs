use axum::extract::State;

use crate::error::ApiError;
use crate::state::{AppState, with_db};

/// GET /health
pub async fn health(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    with_db(&state, |db| db.ping()).await?;
    Ok("Backend is running, database connected")
}
