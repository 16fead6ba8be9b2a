//! PDF to JPG Converter Library
//!
//! This crate implements a small HTTP service that:
//! - accepts a PDF upload (`POST /upload`)
//! - rasterizes each page to a JPEG image at a fixed resolution
//! - packages the images into a ZIP archive
//! - serves the archive for download (`GET /download_zip/<filename>`)

pub mod config;
pub mod error;
pub mod output;
pub mod pdf;
pub mod server;

pub use config::Config;
pub use error::{Error, Result};
pub use server::{build_router, AppState};
