//! PDF to JPG Converter - Entry point
//!
//! Binds the HTTP server and serves the upload/convert/download pipeline.

use pdf2jpg_server::{build_router, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdf2jpg_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    config.ensure_dirs()?;
    tracing::info!("Output directory: {}", config.output_dir.display());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("PDF to JPG converter listening on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET  /                        (upload form)");
    tracing::info!("  - POST /upload                  (convert)");
    tracing::info!("  - GET  /download_zip/:filename  (download)");
    tracing::info!("  - GET  /health");

    axum::serve(listener, build_router(AppState::new(config))).await?;

    Ok(())
}
