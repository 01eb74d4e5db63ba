//! Markup helpers: text cleaning, tag-tree queries and timestamp parsing.
//!
//! - [`clean`] - entity decoding and whitespace normalization
//! - [`query`] - CSS-selector lookups over parsed export pages
//! - [`datetime`] - date/time layouts used by the exports

pub mod clean;
pub mod datetime;
pub mod query;

pub use clean::{clean, strip_tags};
pub use datetime::{parse_date, parse_datetime};
