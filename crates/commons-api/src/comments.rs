use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use commons_types::api::CreateCommentRequest;
use commons_types::models::Comment;
use commons_types::validation::{Body, UserId};
use tracing::info;

use crate::error::ApiError;
use crate::extract::{JsonBody, PostId};
use crate::state::{AppState, with_db};

/// GET /posts/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    PostId(post_id): PostId,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let comments = with_db(&state, move |db| db.list_comments_by_post(post_id)).await?;
    Ok(Json(comments))
}

/// POST /posts/{id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    PostId(post_id): PostId,
    JsonBody(req): JsonBody<CreateCommentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let body = Body::new(req.body)?;
    let created_by = UserId::new("created_by", req.created_by)?;

    let comment = with_db(&state, move |db| db.create_comment(post_id, &body, created_by)).await?;
    info!(comment_id = comment.id, post_id, "comment created");

    Ok((StatusCode::CREATED, Json(comment)))
}
