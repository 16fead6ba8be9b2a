//! PDF rasterization wrapper for PDFium
//!
//! The rendering engine is consumed as a black box: PDF bytes plus a target
//! resolution in, an ordered sequence of page images out. PDFium wraps a C++
//! library that is CPU-bound and not async-aware; callers on the Tokio
//! runtime must invoke [`render_document`] from the blocking thread pool.

use crate::error::{Error, Result};
use image::DynamicImage;
use pdfium_render::prelude::*;

/// Fixed rendering resolution for page rasterization
pub const RENDER_DPI: u32 = 300;

/// PDF user-space unit: 1 point = 1/72 inch
const POINTS_PER_INCH: f32 = 72.0;

/// Get PDFium instance (creates new instance each time - PDFium is not thread-safe)
fn create_pdfium() -> Result<Pdfium> {
    // Try to bind to system library or use static linking
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| {
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
                "/opt/pdfium/lib",
            ))
        })
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| Error::Pdfium {
            reason: format!("Failed to initialize PDFium: {}", e),
        })?;

    Ok(Pdfium::new(bindings))
}

/// Rasterize every page of a PDF at the given resolution.
///
/// Returns one image per page, in page order. Any failure (corrupt PDF,
/// unsupported encoding, missing renderer library) surfaces as a single
/// error kind; nothing is retried.
pub fn render_document(data: &[u8], dpi: u32) -> Result<Vec<DynamicImage>> {
    if data.len() < 4 || &data[0..4] != b"%PDF" {
        return Err(Error::InvalidPdf {
            reason: "Not a valid PDF file".to_string(),
        });
    }

    let pdfium = create_pdfium()?;

    let document = pdfium
        .load_pdf_from_byte_slice(data, None)
        .map_err(|e| Error::Pdfium {
            reason: format!("{}", e),
        })?;

    let render_config = PdfRenderConfig::new().scale_page_by_factor(dpi as f32 / POINTS_PER_INCH);

    let pages = document.pages();
    let mut images = Vec::with_capacity(pages.len() as usize);

    for index in 0..pages.len() {
        let page = pages.get(index).map_err(|e| Error::Pdfium {
            reason: format!("Failed to get page {}: {}", index + 1, e),
        })?;

        let bitmap = page
            .render_with_config(&render_config)
            .map_err(|e| Error::Pdfium {
                reason: format!("Failed to render page {}: {}", index + 1, e),
            })?;

        images.push(bitmap.as_image());
    }

    Ok(images)
}
