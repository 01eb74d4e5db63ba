//! ZIP-backed export archive reader.

use std::io::{Cursor, Read};

use tracing::{trace, warn};
use zip::result::ZipError;
use zip::ZipArchive;

use super::error::ArchiveError;

/// An opened export archive, borrowed from the caller's bytes.
///
/// Reads take `&mut self` because the underlying ZIP reader seeks. The
/// archive is never modified.
pub struct ExportArchive<'a> {
    zip: ZipArchive<Cursor<&'a [u8]>>,
    size: usize,
}

impl<'a> ExportArchive<'a> {
    /// Open an archive from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError`] if the bytes are empty or are not a ZIP
    /// container. This is the only hard failure of the extraction pipeline.
    pub fn open(bytes: &'a [u8]) -> Result<Self, ArchiveError> {
        if bytes.is_empty() {
            return Err(ArchiveError::Empty);
        }
        let zip = ZipArchive::new(Cursor::new(bytes))?;
        Ok(Self {
            zip,
            size: bytes.len(),
        })
    }

    /// Number of entries (files and directories) in the archive.
    pub fn len(&self) -> usize {
        self.zip.len()
    }

    /// Whether the archive has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.zip.len() == 0
    }

    /// Size of the compressed container in bytes.
    pub fn size_bytes(&self) -> usize {
        self.size
    }

    /// Read the text of the file at `path`.
    ///
    /// Returns `None` when the path does not exist, names a directory, or the
    /// entry cannot be decompressed. Invalid UTF-8 is replaced rather than
    /// rejected.
    pub fn read_text(&mut self, path: &str) -> Option<String> {
        let mut file = match self.zip.by_name(path) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => {
                trace!(path, "archive entry not found");
                return None;
            }
            Err(e) => {
                warn!(path, error = %e, "unreadable archive entry");
                return None;
            }
        };
        if file.is_dir() {
            return None;
        }

        let mut bytes = Vec::with_capacity(file.size() as usize);
        if let Err(e) = file.read_to_end(&mut bytes) {
            warn!(path, error = %e, "failed to decompress archive entry");
            return None;
        }
        Some(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// List file paths under `prefix`, sorted.
    ///
    /// Directory entries are skipped. An unknown prefix yields an empty list.
    pub fn list_files(&self, prefix: &str) -> Vec<String> {
        let prefix = if prefix.is_empty() || prefix.ends_with('/') {
            prefix.to_string()
        } else {
            format!("{}/", prefix)
        };
        let mut files: Vec<String> = self
            .zip
            .file_names()
            .filter(|name| name.starts_with(&prefix) && !name.ends_with('/'))
            .map(str::to_string)
            .collect();
        files.sort();
        files
    }

    /// Read the first path in `candidates` that exists.
    ///
    /// Returns the matching path alongside its text.
    pub fn read_first(&mut self, candidates: &[String]) -> Option<(String, String)> {
        candidates
            .iter()
            .find_map(|path| self.read_text(path).map(|text| (path.clone(), text)))
    }

    /// First root in `roots` under which `matches` accepts at least one file.
    pub fn first_root_with<F>(&self, roots: &[&'static str], matches: F) -> Option<&'static str>
    where
        F: Fn(&str) -> bool,
    {
        roots.iter().copied().find(|root| {
            self.list_files(root)
                .iter()
                .any(|path| matches(super::file_name(path)))
        })
    }
}
