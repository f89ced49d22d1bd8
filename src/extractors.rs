use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// A `Json<T>` wrapper whose rejections (bad syntax, wrong content type) become
/// `AppError::InvalidInput`, so clients always get the `{ "error": ... }` body.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!(rejection = %e.body_text(), "Rejected JSON body");
            AppError::InvalidInput(format!("Invalid JSON body: {}", e.body_text()))
        })?;
        Ok(AppJson(value))
    }
}
