use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted reference to an image hosted on the external media host.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: i64,
    pub url: String,
    pub created_at: DateTime<Utc>,
    #[sqlx(skip)]
    pub comments: Vec<Comment>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub image_id: i64,
}

/// Validated input for a new image row.
#[derive(Debug, Clone)]
pub struct NewImage {
    pub url: String,
}

/// Validated input for a new comment row.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub image_id: i64,
    pub content: String,
}

/// Creation timestamp, truncated to milliseconds so it survives a store round trip unchanged.
pub fn creation_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}
