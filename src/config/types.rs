//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Check every section, returning the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        self.extraction.validate()?;
        self.output.validate()
    }
}

/// Tuning for the extraction pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Length of every ranked list (chat partners, shares), at most 3
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Reply gaps at or above this many seconds are treated as noise (at most one day)
    #[serde(default = "default_max_response_gap_secs")]
    pub max_response_gap_secs: u64,
    /// Shortest accepted topic label (characters)
    #[serde(default = "default_min_topic_len")]
    pub min_topic_len: usize,
    /// Longest accepted topic label (characters)
    #[serde(default = "default_max_topic_len")]
    pub max_topic_len: usize,
    /// Parsed message timestamps before this year are rejected as garbage (at least 2001)
    #[serde(default = "default_min_timestamp_year")]
    pub min_timestamp_year: i32,
}

/// Ranked lists never hold more entries than this.
pub const MAX_TOP_N: usize = 3;

/// Longest gap (one day) that can still count as a reply.
pub const MAX_RESPONSE_GAP_SECS: u64 = 24 * 60 * 60;

/// Earliest year a message timestamp may carry.
pub const MIN_TIMESTAMP_YEAR: i32 = 2001;

pub fn default_top_n() -> usize {
    MAX_TOP_N
}

pub fn default_max_response_gap_secs() -> u64 {
    MAX_RESPONSE_GAP_SECS
}

pub fn default_min_topic_len() -> usize {
    3
}

pub fn default_max_topic_len() -> usize {
    99
}

pub fn default_min_timestamp_year() -> i32 {
    MIN_TIMESTAMP_YEAR
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            max_response_gap_secs: default_max_response_gap_secs(),
            min_topic_len: default_min_topic_len(),
            max_topic_len: default_max_topic_len(),
            min_timestamp_year: default_min_timestamp_year(),
        }
    }
}

impl ExtractionConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.top_n == 0 || self.top_n > MAX_TOP_N {
            return Err(format!(
                "extraction.top_n {} must be between 1 and {}",
                self.top_n, MAX_TOP_N
            ));
        }
        if self.max_response_gap_secs == 0
            || self.max_response_gap_secs > MAX_RESPONSE_GAP_SECS
        {
            return Err(format!(
                "extraction.max_response_gap_secs {} must be between 1 and {}",
                self.max_response_gap_secs, MAX_RESPONSE_GAP_SECS
            ));
        }
        if self.min_timestamp_year < MIN_TIMESTAMP_YEAR {
            return Err(format!(
                "extraction.min_timestamp_year {} is below minimum ({})",
                self.min_timestamp_year, MIN_TIMESTAMP_YEAR
            ));
        }
        if self.min_topic_len > self.max_topic_len {
            return Err(format!(
                "extraction.min_topic_len {} exceeds max_topic_len {}",
                self.min_topic_len, self.max_topic_len
            ));
        }
        Ok(())
    }

    /// Whether a topic label length (in characters) is accepted.
    pub fn topic_len_ok(&self, label: &str) -> bool {
        let len = label.chars().count();
        len >= self.min_topic_len && len <= self.max_topic_len
    }
}

/// How `igw extract` presents its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,
    /// Names longer than this (display columns) are truncated in reports
    #[serde(default = "default_max_name_width")]
    pub max_name_width: usize,
}

pub fn default_max_name_width() -> usize {
    24
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            max_name_width: default_max_name_width(),
        }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_name_width < 4 {
            return Err(format!(
                "output.max_name_width {} is below minimum (4)",
                self.max_name_width
            ));
        }
        Ok(())
    }
}
