use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use commons_types::api::{CreatePostRequest, UpdatePostRequest};
use commons_types::models::Post;
use commons_types::validation::{Body, Title, UserId};
use tracing::info;

use crate::error::ApiError;
use crate::extract::{JsonBody, PostId, TopicId};
use crate::state::{AppState, with_db};

/// GET /topics/{id}/posts
pub async fn list_posts(
    State(state): State<AppState>,
    TopicId(topic_id): TopicId,
) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = with_db(&state, move |db| db.list_posts_by_topic(topic_id)).await?;
    Ok(Json(posts))
}

/// POST /topics/{id}/posts
pub async fn create_post(
    State(state): State<AppState>,
    TopicId(topic_id): TopicId,
    JsonBody(req): JsonBody<CreatePostRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let title = Title::new(req.title)?;
    let body = Body::new(req.body)?;
    let created_by = UserId::new("created_by", req.created_by)?;

    let post = with_db(&state, move |db| {
        db.create_post(topic_id, &title, &body, created_by)
    })
    .await?;
    info!(post_id = post.id, topic_id, "post created");

    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn get_post(
    State(state): State<AppState>,
    PostId(id): PostId,
) -> Result<Json<Post>, ApiError> {
    let post = with_db(&state, move |db| db.get_post(id)).await?;
    Ok(Json(post))
}

pub async fn update_post(
    State(state): State<AppState>,
    PostId(id): PostId,
    JsonBody(req): JsonBody<UpdatePostRequest>,
) -> Result<Json<Post>, ApiError> {
    let title = Title::new(req.title)?;
    let body = Body::new(req.body)?;

    let post = with_db(&state, move |db| db.update_post(id, &title, &body)).await?;
    info!(post_id = id, "post updated");

    Ok(Json(post))
}

pub async fn delete_post(
    State(state): State<AppState>,
    PostId(id): PostId,
) -> Result<StatusCode, ApiError> {
    with_db(&state, move |db| db.delete_post(id)).await?;
    info!(post_id = id, "post deleted");
    Ok(StatusCode::NO_CONTENT)
}
