//! Image gallery backend: images registered by URL, with comments attached to each.

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod startup;

use crate::{
    config::{Config, MediaHostConfig},
    domain::{CommentRepository, ImageRepository},
    errors::AppError,
    repositories::{SqliteCommentRepository, SqliteImageRepository},
};
use axum::Router;
use sqlx::SqlitePool;
use std::sync::Arc;

/// AppState holds shared resources for the web server.
pub struct AppState {
    pub image_repo: Arc<dyn ImageRepository>,
    pub comment_repo: Arc<dyn CommentRepository>,
    pub media_host: Option<MediaHostConfig>,
}

impl AppState {
    /// Wires the SQLite repositories over one shared pool.
    pub fn new(pool: SqlitePool, media_host: Option<MediaHostConfig>) -> Self {
        Self {
            image_repo: Arc::new(SqliteImageRepository::new(pool.clone())),
            comment_repo: Arc::new(SqliteCommentRepository::new(pool)),
            media_host,
        }
    }
}

/// Creates the pool, prepares the schema and returns the ready-to-serve router.
pub async fn build_app(config: &Config) -> Result<Router, AppError> {
    let pool = db::create_pool(&config.database)
        .map_err(|e| AppError::InitError(format!("Failed to create database pool: {:#}", e)))?;
    startup::init_schema(&pool).await?;

    let state = Arc::new(AppState::new(pool, config.media_host.clone()));
    Ok(routes::create_router(state))
}
