//! Output management: per-session page images and packaged archives
//!
//! Every upload gets its own session directory under the shared output
//! root; finished archives live directly in the root, addressable by
//! filename alone.

pub mod archive;
pub mod session;

pub use archive::{resolve_archive, sanitize_zipname, write_archive};
pub use session::Session;
