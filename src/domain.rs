use crate::errors::RepoError;
use crate::models::{Comment, Image, NewComment, NewImage};
use async_trait::async_trait;

/// Trait defining operations for storing and retrieving images.
#[async_trait]
pub trait ImageRepository: Send + Sync + 'static { // Send+Sync+'static required for Arc<dyn>
    /// Inserts a new image and returns the stored record with an empty comment list.
    async fn create(&self, new_image: &NewImage) -> Result<Image, RepoError>;

    /// Lists every image newest first, each with its comments (also newest first).
    async fn list_with_comments(&self) -> Result<Vec<Image>, RepoError>;
}

/// Trait defining operations for storing and retrieving comments on an image.
#[async_trait]
pub trait CommentRepository: Send + Sync + 'static {
    /// Inserts a comment. Fails with `RepoError::ImageNotFound` if the image does not exist.
    async fn create(&self, new_comment: &NewComment) -> Result<Comment, RepoError>;

    /// Lists the comments of one image, newest first. Unknown images yield an empty list.
    async fn list_for_image(&self, image_id: i64) -> Result<Vec<Comment>, RepoError>;
}
