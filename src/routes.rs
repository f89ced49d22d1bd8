use crate::{AppState, handlers};
use axum::{Router, extract::DefaultBodyLimit, routing::get};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Request bodies are small JSON documents; the image bytes go to the media host.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Creates the Axum router and associates routes with handlers.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/images",
            get(handlers::list_images).post(handlers::create_image),
        )
        .route(
            "/comments/{image_id}",
            get(handlers::list_comments).post(handlers::create_comment),
        )
        .route("/media-host", get(handlers::media_host))
        // Middleware Layers
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
