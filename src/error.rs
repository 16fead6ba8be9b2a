//! Error types for the PDF to JPG converter

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for the PDF to JPG converter
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the PDF to JPG converter
#[derive(Error, Debug)]
pub enum Error {
    /// Upload rejected before conversion starts (missing/empty/wrong-type file)
    #[error("{reason}")]
    InvalidUpload { reason: String },

    /// Payload is not a parseable PDF
    #[error("Invalid PDF file: {reason}")]
    InvalidPdf { reason: String },

    /// PDFium error (failed to bind the library or render a page)
    #[error("PDFium error: {reason}")]
    Pdfium { reason: String },

    /// Requested archive does not exist in the output directory
    #[error("Archive not found: {name}")]
    ArchiveNotFound { name: String },

    /// Malformed multipart request body
    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding error
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    /// Archive writing error
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Internal error (blocking task failure, response assembly)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn invalid_upload(reason: &str) -> Self {
        Self::InvalidUpload {
            reason: reason.to_string(),
        }
    }

    /// HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidUpload { .. } | Self::Multipart(_) => StatusCode::BAD_REQUEST,
            Self::ArchiveNotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidPdf { .. }
            | Self::Pdfium { .. }
            | Self::Io(_)
            | Self::Image(_)
            | Self::Zip(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_upload_maps_to_bad_request() {
        let err = Error::invalid_upload("Invalid file type");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid file type");
    }

    #[test]
    fn missing_archive_maps_to_not_found() {
        let err = Error::ArchiveNotFound {
            name: "doesnotexist.zip".to_string(),
        };
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn conversion_failures_map_to_internal_error() {
        let err = Error::Pdfium {
            reason: "renderer unavailable".to_string(),
        };
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = Error::InvalidPdf {
            reason: "Not a valid PDF file".to_string(),
        };
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_body_carries_message() {
        let err = Error::invalid_upload("No file part");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
