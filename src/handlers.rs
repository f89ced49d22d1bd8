use crate::{
    AppState,
    errors::AppError,
    extractors::AppJson,
    models::{NewComment, NewImage},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

const URL_REQUIRED: &str = "Image URL is required and must be a string.";
const CONTENT_REQUIRED: &str = "Content is required and must be a string.";
const INVALID_IMAGE_ID: &str = "Invalid image ID.";

/// Returns `payload[field]` if it is a non-empty JSON string.
fn required_string(payload: &Value, field: &str) -> Option<String> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parses the `{image_id}` path segment as a positive integer.
fn parse_image_id(raw: &str) -> Result<i64, AppError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            tracing::warn!(invalid_id = %raw, "Received request with invalid image ID");
            Err(AppError::InvalidInput(INVALID_IMAGE_ID.to_string()))
        }
    }
}

/// Handler for POST /images
pub async fn create_image(
    State(state): State<Arc<AppState>>,
    AppJson(payload): AppJson<Value>,
) -> Result<impl IntoResponse, AppError> {
    let url = required_string(&payload, "url")
        .ok_or_else(|| AppError::InvalidInput(URL_REQUIRED.to_string()))?;

    let image = state
        .image_repo
        .create(&NewImage { url })
        .await
        .map_err(|e| AppError::from_repo("Failed to save image.", e))?;

    tracing::info!(image_id = image.id, "Image created successfully via handler");
    Ok((StatusCode::CREATED, Json(image)))
}

/// Handler for GET /images
pub async fn list_images(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Listing all images via handler");
    let images = state
        .image_repo
        .list_with_comments()
        .await
        .map_err(|e| AppError::from_repo("Failed to fetch images.", e))?;
    tracing::info!("Handler successfully retrieved {} images", images.len());
    Ok(Json(images))
}

/// Handler for POST /comments/{image_id}
///
/// The body rejection is held back so a bad image id is reported first.
pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
    body: Result<AppJson<Value>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let image_id = parse_image_id(&id_str)?;
    let AppJson(payload) = body?;
    let content = required_string(&payload, "content")
        .ok_or_else(|| AppError::InvalidInput(CONTENT_REQUIRED.to_string()))?;

    let comment = state
        .comment_repo
        .create(&NewComment { image_id, content })
        .await
        .map_err(|e| AppError::from_repo("Failed to add comment.", e))?;

    tracing::info!(
        comment_id = comment.id,
        image_id,
        "Comment created successfully via handler"
    );
    Ok((StatusCode::CREATED, Json(comment)))
}

/// Handler for GET /comments/{image_id}
pub async fn list_comments(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let image_id = parse_image_id(&id_str)?;
    tracing::debug!(image_id, "Listing comments via handler");

    let comments = state
        .comment_repo
        .list_for_image(image_id)
        .await
        .map_err(|e| AppError::from_repo("Failed to fetch comments.", e))?;
    Ok(Json(comments))
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MediaHostSettings {
    pub upload_url: String,
    pub upload_preset: String,
}

/// Handler for GET /media-host
///
/// Tells the browser client where to upload files. The server never sees the file itself;
/// the `secure_url` the media host returns is what gets posted to `/images`.
pub async fn media_host(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MediaHostSettings>, AppError> {
    let media_host = state
        .media_host
        .as_ref()
        .ok_or(AppError::MediaHostNotConfigured)?;

    Ok(Json(MediaHostSettings {
        upload_url: media_host.upload_url(),
        upload_preset: media_host.upload_preset.clone(),
    }))
}
