//! Per-upload session directories

use crate::error::Result;
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Fixed JPEG quality for page images
pub const JPEG_QUALITY: u8 = 95;

/// One upload's isolated working directory for page images.
///
/// Identified by a freshly generated UUID; the directory persists after the
/// request completes (there is no retention policy).
pub struct Session {
    id: String,
    dir: PathBuf,
}

impl Session {
    /// Generate a new session id and create its directory under the output root.
    pub fn create(output_root: &Path) -> Result<Self> {
        let id = Uuid::new_v4().to_string();
        let dir = output_root.join(&id);
        std::fs::create_dir_all(&dir)?;
        Ok(Self { id, dir })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write rendered pages as `page_<n>.jpg` (1-based, page order).
    ///
    /// Returns the written paths in the same order.
    pub fn write_pages(&self, pages: &[DynamicImage]) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::with_capacity(pages.len());

        for (index, page) in pages.iter().enumerate() {
            let path = self.dir.join(format!("page_{}.jpg", index + 1));
            let mut writer = BufWriter::new(File::create(&path)?);

            // JPEG has no alpha channel; PDFium bitmaps come back as RGBA
            let rgb = page.to_rgb8();
            JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY).encode_image(&rgb)?;
            writer.flush()?;

            paths.push(path);
        }

        Ok(paths)
    }
}
