use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use commons_types::api::{CreateTopicRequest, UpdateTopicRequest, normalize_description};
use commons_types::models::Topic;
use commons_types::validation::{Title, UserId};
use tracing::info;

use crate::error::ApiError;
use crate::extract::{JsonBody, TopicId};
use crate::state::{AppState, with_db};

/// GET /topics: newest first, `[]` when there are none.
pub async fn list_topics(State(state): State<AppState>) -> Result<Json<Vec<Topic>>, ApiError> {
    let topics = with_db(&state, |db| db.list_topics()).await?;
    Ok(Json(topics))
}

pub async fn get_topic(
    State(state): State<AppState>,
    TopicId(id): TopicId,
) -> Result<Json<Topic>, ApiError> {
    let topic = with_db(&state, move |db| db.get_topic(id)).await?;
    Ok(Json(topic))
}

pub async fn create_topic(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateTopicRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let title = Title::new(req.title)?;
    let created_by = UserId::new("created_by", req.created_by)?;
    let description = normalize_description(req.description);

    let topic = with_db(&state, move |db| {
        db.create_topic(&title, description.as_deref(), created_by)
    })
    .await?;
    info!(topic_id = topic.id, created_by = topic.created_by, "topic created");

    Ok((StatusCode::CREATED, Json(topic)))
}

pub async fn update_topic(
    State(state): State<AppState>,
    TopicId(id): TopicId,
    JsonBody(req): JsonBody<UpdateTopicRequest>,
) -> Result<Json<Topic>, ApiError> {
    let title = Title::new(req.title)?;
    let description = normalize_description(req.description);

    let topic = with_db(&state, move |db| {
        db.update_topic(id, &title, description.as_deref())
    })
    .await?;
    info!(topic_id = id, "topic updated");

    Ok(Json(topic))
}

/// DELETE /topics/{id}: the topic goes together with its posts and their comments.
pub async fn delete_topic(
    State(state): State<AppState>,
    TopicId(id): TopicId,
) -> Result<StatusCode, ApiError> {
    with_db(&state, move |db| db.delete_topic(id)).await?;
    info!(topic_id = id, "topic deleted");
    Ok(StatusCode::NO_CONTENT)
}
