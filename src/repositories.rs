use crate::{
    domain::{CommentRepository, ImageRepository},
    errors::RepoError,
    models::{Comment, Image, NewComment, NewImage, creation_timestamp},
};
use anyhow::Context;
use async_trait::async_trait;
use sqlx::SqlitePool;
use std::collections::HashMap;
use tracing::info;

#[derive(Debug, Clone)]
pub struct SqliteImageRepository {
    pool: SqlitePool,
}

impl SqliteImageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        info!("Initializing SqliteImageRepository");
        Self { pool }
    }
}

#[async_trait]
impl ImageRepository for SqliteImageRepository {
    async fn create(&self, new_image: &NewImage) -> Result<Image, RepoError> {
        let image = sqlx::query_as::<_, Image>(
            "INSERT INTO images (url, created_at) VALUES (?, ?)
             RETURNING id, url, created_at",
        )
        .bind(&new_image.url)
        .bind(creation_timestamp())
        .fetch_one(&self.pool)
        .await
        .context("SQLite (table: images): Failed to insert image")
        .map_err(RepoError::BackendError)?;

        tracing::debug!(image_id = image.id, "SQLite: Inserted image");
        Ok(image)
    }

    /// Reads images and comments in one transaction so the nested view is consistent.
    async fn list_with_comments(&self) -> Result<Vec<Image>, RepoError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("SQLite: Failed to begin read transaction")
            .map_err(RepoError::BackendError)?;

        let mut images = sqlx::query_as::<_, Image>(
            "SELECT id, url, created_at FROM images ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&mut *tx)
        .await
        .context("SQLite (table: images): Failed to list images")
        .map_err(RepoError::BackendError)?;

        let comments = sqlx::query_as::<_, Comment>(
            "SELECT id, content, created_at, image_id FROM comments
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&mut *tx)
        .await
        .context("SQLite (table: comments): Failed to list comments")
        .map_err(RepoError::BackendError)?;

        tx.commit()
            .await
            .context("SQLite: Failed to finish read transaction")
            .map_err(RepoError::BackendError)?;

        // Grouping keeps the descending order of the comment query.
        let mut by_image: HashMap<i64, Vec<Comment>> = HashMap::new();
        for comment in comments {
            by_image.entry(comment.image_id).or_default().push(comment);
        }
        for image in &mut images {
            if let Some(comments) = by_image.remove(&image.id) {
                image.comments = comments;
            }
        }

        info!("SQLite: Successfully listed {} images", images.len());
        Ok(images)
    }
}

#[derive(Debug, Clone)]
pub struct SqliteCommentRepository {
    pool: SqlitePool,
}

impl SqliteCommentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        info!("Initializing SqliteCommentRepository");
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    async fn create(&self, new_comment: &NewComment) -> Result<Comment, RepoError> {
        let result = sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (content, created_at, image_id) VALUES (?, ?, ?)
             RETURNING id, content, created_at, image_id",
        )
        .bind(&new_comment.content)
        .bind(creation_timestamp())
        .bind(new_comment.image_id)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(comment) => {
                tracing::debug!(
                    comment_id = comment.id,
                    image_id = comment.image_id,
                    "SQLite: Inserted comment"
                );
                Ok(comment)
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                tracing::warn!(
                    image_id = new_comment.image_id,
                    "SQLite: Comment references a missing image"
                );
                Err(RepoError::ImageNotFound(new_comment.image_id))
            }
            Err(e) => Err(RepoError::BackendError(anyhow::Error::new(e).context(format!(
                "SQLite (table: comments): Failed to insert comment for image {}",
                new_comment.image_id
            )))),
        }
    }

    async fn list_for_image(&self, image_id: i64) -> Result<Vec<Comment>, RepoError> {
        let comments = sqlx::query_as::<_, Comment>(
            "SELECT id, content, created_at, image_id FROM comments
             WHERE image_id = ?
             ORDER BY created_at DESC, id DESC",
        )
        .bind(image_id)
        .fetch_all(&self.pool)
        .await
        .context(format!(
            "SQLite (table: comments): Failed to list comments for image {}",
            image_id
        ))
        .map_err(RepoError::BackendError)?;

        tracing::debug!(image_id, count = comments.len(), "SQLite: Listed comments");
        Ok(comments)
    }
}
