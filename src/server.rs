//! HTTP surface: upload, convert, package, download
//!
//! Each request runs the linear pipeline intake → conversion → packaging →
//! delivery. The only state shared between requests is the output directory
//! namespace on disk.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{self, Session};
use crate::pdf::{render_document, RENDER_DPI};
use axum::body::Body;
use axum::extract::{DefaultBodyLimit, Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Shared application state accessible to all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Build the application router.
///
/// The framework's default multipart size cap is disabled: intake buffers
/// the whole upload in memory and enforces no limit of its own.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/upload", post(upload))
        .route("/download_zip/:filename", get(download_zip))
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Upload form page
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[derive(Debug, Serialize)]
struct UploadResponse {
    zip_url: String,
}

/// Convert an uploaded PDF into a ZIP of per-page JPEGs.
///
/// Multipart fields: `file` (required, must end in `.pdf`) and `zipname`
/// (optional archive base name).
async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let mut file_name: Option<String> = None;
    let mut data: Option<axum::body::Bytes> = None;
    let mut zipname: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "file" => {
                file_name = field.file_name().map(str::to_string);
                data = Some(field.bytes().await?);
            }
            "zipname" => {
                zipname = Some(field.text().await?);
            }
            _ => {}
        }
    }

    let data = data.ok_or_else(|| Error::invalid_upload("No file part"))?;
    validate_file_name(file_name.as_deref())?;

    tracing::info!(
        "Upload accepted: {} ({} bytes)",
        file_name.as_deref().unwrap_or_default(),
        data.len()
    );

    let config = state.config.clone();
    let zip_filename =
        tokio::task::spawn_blocking(move || convert_and_package(&config, &data, zipname.as_deref()))
            .await
            .map_err(|e| Error::Internal(format!("Conversion task panicked: {}", e)))??;

    Ok(Json(UploadResponse {
        zip_url: format!("/download_zip/{}", zip_filename),
    }))
}

/// Serve a packaged archive as an attachment.
async fn download_zip(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response> {
    let path = output::resolve_archive(&state.config.output_dir, &filename)?;

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|_| Error::ArchiveNotFound {
            name: filename.clone(),
        })?;

    tracing::info!("Serving archive {} ({} bytes)", filename, bytes.len());

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/zip")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(Body::from(bytes))
        .map_err(|e| Error::Internal(format!("Failed to build response: {}", e)))
}

/// Reject uploads with no usable PDF filename.
fn validate_file_name(name: Option<&str>) -> Result<()> {
    match name {
        None => Err(Error::invalid_upload("No file part")),
        Some("") => Err(Error::invalid_upload("No selected file")),
        Some(name) if !name.ends_with(".pdf") => Err(Error::invalid_upload("Invalid file type")),
        Some(_) => Ok(()),
    }
}

/// The blocking conversion pipeline: rasterize, write page images into a
/// fresh session directory, package them into an archive.
///
/// Returns the archive filename (`<name>.zip`) for URL construction.
fn convert_and_package(config: &Config, data: &[u8], zipname: Option<&str>) -> Result<String> {
    let pages = render_document(data, RENDER_DPI)?;

    let session = Session::create(&config.output_dir)?;
    let page_paths = session.write_pages(&pages)?;
    tracing::info!(
        "Session {}: rendered {} pages",
        session.id(),
        page_paths.len()
    );

    let base_name = zipname
        .and_then(output::sanitize_zipname)
        .unwrap_or_else(|| session.id().to_string());

    output::write_archive(&config.output_dir, &base_name, &page_paths)?;

    Ok(format!("{}.zip", base_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_field_is_rejected() {
        let err = validate_file_name(None).unwrap_err();
        assert_eq!(err.to_string(), "No file part");
    }

    #[test]
    fn empty_filename_is_rejected() {
        let err = validate_file_name(Some("")).unwrap_err();
        assert_eq!(err.to_string(), "No selected file");
    }

    #[test]
    fn non_pdf_extension_is_rejected() {
        let err = validate_file_name(Some("notes.txt")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid file type");
    }

    #[test]
    fn pdf_filename_is_accepted() {
        assert!(validate_file_name(Some("document.pdf")).is_ok());
    }

    #[test]
    fn extension_check_is_case_sensitive() {
        let err = validate_file_name(Some("SCAN.PDF")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid file type");
    }
}
