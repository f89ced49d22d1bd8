use std::{env, net::SocketAddr, str::FromStr};
use thiserror::Error;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_DATABASE_URL: &str = "sqlite://image_comments.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(String),
    #[error("Invalid environment variable format for {0}: {1}")]
    InvalidVar(String, String),
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Where the browser client sends image files before registering them here.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaHostConfig {
    pub cloud_name: String,
    pub upload_preset: String,
}

impl MediaHostConfig {
    pub fn upload_url(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        )
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub database: DatabaseConfig,
    pub media_host: Option<MediaHostConfig>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors, relies on env vars otherwise)
        match dotenvy::dotenv() {
            Ok(path) => tracing::info!(path = %path.display(), ".env file loaded"),
            Err(_) => tracing::debug!(".env file not found, relying on environment variables"),
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address_str =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = SocketAddr::from_str(&bind_address_str)
            .map_err(|e| ConfigError::InvalidVar("BIND_ADDRESS".into(), e.to_string()))?;

        let url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(0) => {
                    return Err(ConfigError::InvalidVar(
                        "DATABASE_MAX_CONNECTIONS".into(),
                        "must be greater than zero".into(),
                    ));
                }
                Ok(n) => n,
                Err(e) => {
                    return Err(ConfigError::InvalidVar(
                        "DATABASE_MAX_CONNECTIONS".into(),
                        e.to_string(),
                    ));
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let media_host = match (
            lookup("MEDIA_HOST_CLOUD_NAME"),
            lookup("MEDIA_HOST_UPLOAD_PRESET"),
        ) {
            (Some(cloud_name), Some(upload_preset)) => Some(MediaHostConfig {
                cloud_name,
                upload_preset,
            }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(ConfigError::MissingVar("MEDIA_HOST_UPLOAD_PRESET".into()));
            }
            (None, Some(_)) => {
                return Err(ConfigError::MissingVar("MEDIA_HOST_CLOUD_NAME".into()));
            }
        };

        Ok(Config {
            bind_address,
            database: DatabaseConfig {
                url,
                max_connections,
            },
            media_host,
        })
    }
}
