//! Read-only access to a data-export archive.
//!
//! The export is a ZIP of HTML pages whose layout drifts between export
//! versions. [`ExportArchive`] exposes the two primitives the extractors
//! need, "read the text at a path" and "list paths under a prefix", plus a
//! couple of helpers for trying alternate root folders in order.
//!
//! A path that does not exist is never an error: reads return `None` and
//! listings come back empty.

mod error;
mod reader;

pub use error::ArchiveError;
pub use reader::ExportArchive;

/// Content roots used by different export versions, in lookup order.
pub const CONTENT_ROOTS: [&str; 2] = [
    "your_instagram_activity/media",
    "your_instagram_activity/content",
];

/// Join an archive directory and a file name with a single `/`.
pub fn join(dir: &str, name: &str) -> String {
    format!("{}/{}", dir.trim_end_matches('/'), name.trim_start_matches('/'))
}

/// Last path component of an archive path.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
