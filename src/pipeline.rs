//! Archive bytes in, [`ExtractionResult`] out.

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::archive::{ArchiveError, ExportArchive};
use crate::config::ExtractionConfig;
use crate::extract::{default_extractors, ExtractContext, MetricExtractor};
use crate::identity::Identity;
use crate::result::ExtractionResult;

/// Extract every metric from an export archive with default settings.
///
/// Account age is measured against today's local date.
///
/// # Errors
///
/// Fails only when `bytes` are not a readable archive container. Missing or
/// malformed pages leave their fields at default values.
pub fn extract(bytes: &[u8]) -> Result<ExtractionResult, ArchiveError> {
    Pipeline::default().run(bytes)
}

/// A finished run with the context it was computed in.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub identity: Identity,
    pub result: ExtractionResult,
    /// Number of archive entries.
    pub entries: usize,
    /// Size of the archive container.
    pub archive_bytes: usize,
}

/// Configured extraction run.
pub struct Pipeline {
    config: ExtractionConfig,
    today: Option<NaiveDate>,
    extractors: Vec<Box<dyn MetricExtractor>>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(ExtractionConfig::default())
    }
}

impl Pipeline {
    pub fn new(config: ExtractionConfig) -> Self {
        Self {
            config,
            today: None,
            extractors: default_extractors(),
        }
    }

    /// Fix the reference date instead of reading the clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Run the identity resolver once, then every extractor, and merge.
    pub fn run(&self, bytes: &[u8]) -> Result<ExtractionResult, ArchiveError> {
        self.run_detailed(bytes).map(|extraction| extraction.result)
    }

    /// Like [`run`](Self::run), also returning the resolved owner and
    /// archive facts for reporting.
    pub fn run_detailed(&self, bytes: &[u8]) -> Result<Extraction, ArchiveError> {
        let mut archive = ExportArchive::open(bytes)?;
        info!(
            entries = archive.len(),
            bytes = archive.size_bytes(),
            "opened export archive"
        );

        let identity = Identity::resolve(&mut archive);
        let ctx = ExtractContext {
            identity: &identity,
            config: &self.config,
            today: self.today.unwrap_or_else(|| Local::now().date_naive()),
        };

        let mut result = ExtractionResult::default();
        for extractor in &self.extractors {
            let fragment = extractor.extract(&mut archive, &ctx);
            debug!(extractor = extractor.name(), "extracted");
            result.merge(fragment);
        }

        Ok(Extraction {
            entries: archive.len(),
            archive_bytes: archive.size_bytes(),
            identity,
            result,
        })
    }

    /// Resolve only the owner's identity.
    pub fn identity(bytes: &[u8]) -> Result<Identity, ArchiveError> {
        let mut archive = ExportArchive::open(bytes)?;
        Ok(Identity::resolve(&mut archive))
    }
}
