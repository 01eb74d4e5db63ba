//! Instagram Wrapped (IGW) Library
//!
//! Extracts yearly highlights (account age, likes, comments, chat partners,
//! shares, response time, published content and topics) from the ZIP of HTML
//! pages produced by an Instagram data export.
//!
//! ```no_run
//! let bytes = std::fs::read("instagram-export.zip").unwrap();
//! let result = igw::extract(&bytes).unwrap();
//! println!("liked {} posts", result.likes.total);
//! ```

pub mod archive;
pub mod cli;
pub mod config;
pub mod extract;
pub mod identity;
pub mod markup;
pub mod pipeline;
pub mod report;
pub mod result;
pub mod topics;

pub use archive::{ArchiveError, ExportArchive};
pub use config::Config;
pub use identity::Identity;
pub use pipeline::{extract, Extraction, Pipeline};
pub use result::ExtractionResult;
