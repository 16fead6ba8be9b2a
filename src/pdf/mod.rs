//! PDF processing layer
//!
//! This module provides page rasterization using PDFium.

mod rasterize;

pub use rasterize::{render_document, RENDER_DPI};
