//! Extract command handler

use anyhow::Result;
use chrono::NaiveDate;
use std::path::Path;

use igw::config::OutputFormat;
use igw::{report, Config, Extraction, Pipeline};

use super::read_archive;

/// Render an extraction in the requested format.
pub fn render(extraction: &Extraction, format: OutputFormat, config: &Config) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(&extraction.result)?,
        OutputFormat::Pretty => report::summary(extraction, &config.output),
    })
}

/// Extract highlights from an archive and print them.
#[cfg(not(tarpaulin_include))]
pub fn handle(archive: &Path, json: bool, today: Option<NaiveDate>) -> Result<()> {
    let config = Config::load()?;
    let bytes = read_archive(archive)?;

    let mut pipeline = Pipeline::new(config.extraction.clone());
    if let Some(today) = today {
        pipeline = pipeline.with_today(today);
    }
    let extraction = pipeline.run_detailed(&bytes)?;

    let format = if json {
        OutputFormat::Json
    } else {
        config.output.format
    };
    println!("{}", render(&extraction, format, &config)?);
    Ok(())
}
