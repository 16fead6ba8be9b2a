//! Archive packaging and download-path resolution

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Sanitize a user-supplied archive base name.
///
/// Whitespace becomes `_`; anything outside `[A-Za-z0-9._-]` is dropped;
/// leading and trailing dots are stripped so the result can never name a
/// hidden file or a traversal segment. Returns `None` when nothing safe
/// remains, in which case the caller falls back to the session id.
pub fn sanitize_zipname(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.trim().chars() {
        if ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.') {
            out.push(ch);
        } else if ch.is_whitespace() {
            out.push('_');
        }
    }

    let out = out.trim_matches('.');
    if out.is_empty() {
        None
    } else {
        Some(out.to_string())
    }
}

/// Package page images into `<output_root>/<base_name>.zip`.
///
/// Entries are stored flat under their base filenames, deflated. An existing
/// archive with the same name is overwritten (last write wins).
pub fn write_archive(output_root: &Path, base_name: &str, page_paths: &[PathBuf]) -> Result<PathBuf> {
    let archive_path = output_root.join(format!("{}.zip", base_name));
    let mut zip = ZipWriter::new(File::create(&archive_path)?);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for path in page_paths {
        let entry_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| Error::Internal(format!("Invalid page path: {}", path.display())))?;

        zip.start_file(entry_name, options)?;
        zip.write_all(&std::fs::read(path)?)?;
    }

    zip.finish()?;
    Ok(archive_path)
}

/// Resolve a download path segment to an archive file in the output root.
///
/// Any name carrying path separators or traversal segments resolves to
/// not-found, as does a name with no file behind it.
pub fn resolve_archive(output_root: &Path, filename: &str) -> Result<PathBuf> {
    let not_found = || Error::ArchiveNotFound {
        name: filename.to_string(),
    };

    if filename.is_empty() || filename.contains(['/', '\\']) || filename.contains("..") {
        return Err(not_found());
    }

    let path = output_root.join(filename);
    if !path.is_file() {
        return Err(not_found());
    }

    Ok(path)
}
