//! Runtime configuration for the converter service
//!
//! Base paths are held in an explicit struct handed to the router at
//! construction; nothing reads directories from process-global state.

use std::path::PathBuf;

/// Service configuration: bind address and filesystem layout
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind the HTTP listener on
    pub host: String,
    /// Port to bind the HTTP listener on
    pub port: u16,
    /// Directory reserved for raw uploads (created at startup, currently unused)
    pub upload_dir: PathBuf,
    /// Directory holding per-session page images and packaged archives
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            upload_dir: PathBuf::from("uploads"),
            output_dir: PathBuf::from("output"),
        }
    }
}

impl Config {
    /// Build a configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(host) = std::env::var("PDF2JPG_HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("PDF2JPG_PORT") {
            if let Ok(port) = port.parse() {
                config.port = port;
            }
        }
        if let Ok(dir) = std::env::var("PDF2JPG_UPLOAD_DIR") {
            config.upload_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("PDF2JPG_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }
        config
    }

    /// Create the upload and output directories if they do not exist yet.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.upload_dir)?;
        std::fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }
}
