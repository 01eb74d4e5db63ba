//! Metric extractors.
//!
//! Each extractor reads its own page(s) from the archive and produces one
//! [`Fragment`] of the result. Extractors share nothing but the read-only
//! [`ExtractContext`]; counters live inside each extractor call.
//!
//! A missing page is never an error. The extractor returns the zero/absent
//! value for its fields and the pipeline moves on.
//!
//! - [`account_age`] - signup date to years/months
//! - [`topics`] - recommended topics with emoji
//! - [`content`] - posts, reels and stories published
//! - [`likes`] - liked posts and the most-liked creator
//! - [`comments`] - comments on others' posts and the most-commented creator
//! - [`messages`] - chat partners, shares and response time

use chrono::NaiveDate;

use crate::archive::ExportArchive;
use crate::config::ExtractionConfig;
use crate::identity::Identity;
use crate::result::Fragment;

pub mod account_age;
pub mod comments;
pub mod content;
pub mod likes;
pub mod messages;
pub mod strategy;
pub mod topics;

mod tally;

pub use account_age::AccountAgeExtractor;
pub use comments::CommentsExtractor;
pub use content::ContentExtractor;
pub use likes::LikesExtractor;
pub use messages::MessagesExtractor;
pub use tally::{creator_key, handle, join_handles, Tally};
pub use topics::TopicsExtractor;

/// Read-only inputs shared by every extractor.
#[derive(Debug, Clone, Copy)]
pub struct ExtractContext<'a> {
    pub identity: &'a Identity,
    pub config: &'a ExtractionConfig,
    /// Reference date for time-relative facts such as account age.
    pub today: NaiveDate,
}

/// One fact family pulled out of the archive.
pub trait MetricExtractor: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Extract this extractor's fragment.
    ///
    /// Must not fail: missing or malformed sources yield default values.
    fn extract(&self, archive: &mut ExportArchive<'_>, ctx: &ExtractContext<'_>) -> Fragment;
}

/// The full set of extractors, in the order the pipeline runs them.
pub fn default_extractors() -> Vec<Box<dyn MetricExtractor>> {
    vec![
        Box::new(AccountAgeExtractor),
        Box::new(TopicsExtractor),
        Box::new(ContentExtractor),
        Box::new(LikesExtractor),
        Box::new(CommentsExtractor),
        Box::new(MessagesExtractor),
    ]
}
