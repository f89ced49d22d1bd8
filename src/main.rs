use image_comments::{build_app, config::Config, errors::AppError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing (logging)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "image_comments=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = Config::load()?;

    // --- Application ---
    let app = build_app(&config).await?;

    // --- Server Startup ---
    tracing::info!("Server listening on http://{}", config.bind_address);

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .map_err(|e| {
            AppError::InitError(format!("Failed to bind {}: {}", config.bind_address, e))
        })?;
    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InitError(format!("Server error: {}", e)))?;

    Ok(())
}
