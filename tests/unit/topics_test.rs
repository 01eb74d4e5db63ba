//! Unit tests for topic extraction and classification

use igw::config::ExtractionConfig;
use igw::extract::topics::topic_labels;
use igw::topics::{classify, FALLBACK_EMOJI};

use crate::helpers::{nested_row, page};

#[test]
fn labels_come_from_nested_cells_in_page_order() {
    let rows: String = ["Travel", "Basketball", "Travel", "Street food"]
        .iter()
        .map(|t| nested_row("Name", t))
        .collect();
    let html = page(&format!("<table>{}</table>", rows));
    assert_eq!(
        topic_labels(&html, &ExtractionConfig::default()),
        vec!["Travel", "Basketball", "Street food"]
    );
}

#[test]
fn short_and_link_like_labels_are_rejected() {
    let rows: String = ["ok", "https://example.com", "Yoga"]
        .iter()
        .map(|t| nested_row("Name", t))
        .collect();
    let html = page(&format!("<table>{}</table>", rows));
    assert_eq!(topic_labels(&html, &ExtractionConfig::default()), vec!["Yoga"]);
}

#[test]
fn label_length_bounds_follow_config() {
    let config = ExtractionConfig {
        min_topic_len: 5,
        ..ExtractionConfig::default()
    };
    let rows: String = ["Yoga", "Cricket"].iter().map(|t| nested_row("Name", t)).collect();
    let html = page(&format!("<table>{}</table>", rows));
    assert_eq!(topic_labels(&html, &config), vec!["Cricket"]);
}

#[test]
fn every_label_gets_an_emoji() {
    for label in ["Basketball", "Specialty Coffee", "Knitting", "Machine learning"] {
        assert!(!classify(label).is_empty());
    }
    assert_eq!(classify("Knitting"), FALLBACK_EMOJI);
    assert_eq!(classify("Machine learning"), "🤖");
}
