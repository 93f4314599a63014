//! Request extractors that reject with [`ApiError`] instead of axum's
//! default rejections.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use commons_types::validation::{ValidationError, parse_id};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;

/// JSON request body. Decoded regardless of `Content-Type`; any read or
/// decode failure is a 400.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            debug!("failed to read request body: {}", e);
            ApiError::BadRequest("invalid JSON payload".into())
        })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            debug!("invalid JSON: {}", e);
            ApiError::BadRequest("invalid JSON payload".into())
        })?;

        Ok(Self(value))
    }
}

async fn path_id<S>(parts: &mut Parts, state: &S, entity: &'static str) -> Result<i64, ApiError>
where
    S: Send + Sync,
{
    let Path(raw): Path<String> = Path::from_request_parts(parts, state)
        .await
        .map_err(|_| ValidationError::InvalidId { entity })?;

    Ok(parse_id(entity, &raw)?)
}

/// `{id}` path segment of a `/topics/...` route.
pub struct TopicId(pub i64);

impl<S> FromRequestParts<S> for TopicId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        path_id(parts, state, "topic").await.map(Self)
    }
}

/// `{id}` path segment of a `/posts/...` route.
pub struct PostId(pub i64);

impl<S> FromRequestParts<S> for PostId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        path_id(parts, state, "post").await.map(Self)
    }
}
