use crate::errors::AppError;
use sqlx::SqlitePool;

const IMAGES_TABLE: &str = "images";
const COMMENTS_TABLE: &str = "comments";

const SCHEMA: [(&str, &str); 3] = [
    (
        IMAGES_TABLE,
        "CREATE TABLE IF NOT EXISTS images (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            url TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
    ),
    (
        COMMENTS_TABLE,
        "CREATE TABLE IF NOT EXISTS comments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            content TEXT NOT NULL,
            created_at TEXT NOT NULL,
            image_id INTEGER NOT NULL REFERENCES images (id)
        )",
    ),
    (
        "comments_image_id_created_at",
        "CREATE INDEX IF NOT EXISTS comments_image_id_created_at
            ON comments (image_id, created_at)",
    ),
];

/// Creates the tables and indexes if they don't exist.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), AppError> {
    tracing::info!("Startup: Initializing database schema...");
    for (name, statement) in SCHEMA {
        sqlx::query(statement).execute(pool).await.map_err(|e| {
            let context = format!("Startup: Failed to create '{}'", name);
            tracing::error!("{}: {}", context, e);
            AppError::InitError(format!("{}: {}", context, e))
        })?;
        tracing::debug!("Startup: '{}' created or already exists.", name);
    }
    tracing::info!("Startup: Database schema initialization complete.");
    Ok(())
}
