pub mod comments;
pub mod error;
pub mod extract;
pub mod health;
pub mod posts;
pub mod state;
pub mod topics;
pub mod users;

#[cfg(test)]
mod test_support;

use axum::{
    Router,
    http::{HeaderValue, Method, header::{AUTHORIZATION, CONTENT_TYPE}},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use state::{AppState, AppStateInner};

/// The web front end's dev server; the only origin allowed cross-site.
pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/login", post(users::login))
        .route("/topics", get(topics::list_topics).post(topics::create_topic))
        .route(
            "/topics/{id}",
            get(topics::get_topic)
                .put(topics::update_topic)
                .delete(topics::delete_topic),
        )
        .route(
            "/topics/{id}/posts",
            get(posts::list_posts).post(posts::create_post),
        )
        .route(
            "/posts/{id}",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        .route(
            "/posts/{id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(HeaderValue::from_static(ALLOWED_ORIGIN))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}
