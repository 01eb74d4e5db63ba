//! Archive container errors.

/// Errors that can occur while opening an export archive.
///
/// This is the only failure the extraction core surfaces to its caller.
/// Missing pages and unparsable values inside a valid archive are absorbed
/// by the extractors.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("Not a valid export archive: {0}")]
    InvalidContainer(#[from] zip::result::ZipError),

    #[error("Export archive is empty (0 bytes)")]
    Empty,
}
