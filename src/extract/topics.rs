//! Recommended topics.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html};
use tracing::debug;

use super::{ExtractContext, MetricExtractor};
use crate::archive::ExportArchive;
use crate::config::ExtractionConfig;
use crate::markup::query::{compile, text_of, CELL, NESTED_DIV};
use crate::markup::strip_tags;
use crate::result::{Fragment, Topic};
use crate::topics::classify;

pub const TOPICS_PAGE: &str = "preferences/your_topics/recommended_topics.html";

const LABEL: &str = "Name";

static TOPIC_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"Name</td>\s*<td[^>]*><div><div>([^<]+)</div>",
        r"Name<div><div>([^<]+)</div></div>",
    ])
});

/// Candidate label for one table cell.
///
/// Cells with the nested `div > div` shape yield the inner text. Plain cells
/// are taken as-is unless they are the label column itself.
fn cell_label(cell: ElementRef<'_>) -> Option<String> {
    if let Some(inner) = cell.select(&NESTED_DIV).next() {
        return Some(text_of(inner));
    }
    let text = text_of(cell);
    if text.to_lowercase().starts_with("name") {
        return None;
    }
    Some(text)
}

fn accept(label: &str, config: &ExtractionConfig) -> bool {
    !label.is_empty()
        && label != LABEL
        && config.topic_len_ok(label)
        && !label.contains("http")
        && !label.contains("class=")
}

/// Topic labels in first-seen order, duplicates dropped.
pub fn topic_labels(html: &str, config: &ExtractionConfig) -> Vec<String> {
    let doc = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut labels: Vec<String> = doc
        .select(&CELL)
        .filter_map(cell_label)
        .filter(|label| accept(label, config))
        .filter(|label| seen.insert(label.clone()))
        .collect();

    if labels.is_empty() {
        for pattern in TOPIC_PATTERNS.iter() {
            for caps in pattern.captures_iter(html) {
                let label = strip_tags(&caps[1]);
                if accept(&label, config) && seen.insert(label.clone()) {
                    labels.push(label);
                }
            }
        }
    }
    labels
}

pub struct TopicsExtractor;

impl MetricExtractor for TopicsExtractor {
    fn name(&self) -> &'static str {
        "topics"
    }

    fn extract(&self, archive: &mut ExportArchive<'_>, ctx: &ExtractContext<'_>) -> Fragment {
        let Some(html) = archive.read_text(TOPICS_PAGE) else {
            return Fragment::Topics(Vec::new());
        };
        let topics: Vec<Topic> = topic_labels(&html, ctx.config)
            .into_iter()
            .map(|name| Topic {
                emoji: classify(&name).to_string(),
                name,
            })
            .collect();
        debug!(count = topics.len(), "topics");
        Fragment::Topics(topics)
    }
}
