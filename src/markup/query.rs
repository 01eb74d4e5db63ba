//! Tag-tree queries shared by the identity resolver and the extractors.
//!
//! Export pages are machine generated, so a handful of shapes cover them:
//!
//! ```text
//! <tr><td colspan="2">Label<div><div>value</div></div></td></tr>   nested
//! <tr><td>Label</td><td>value</td></tr>                              two-cell
//! ```
//!
//! Every helper returns cleaned text and treats an empty result as a miss so
//! callers can fall through to the next strategy.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::clean::{clean, strip_tags};

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {:?}: {:?}", css, e))
}

pub static ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
pub static CELL: LazyLock<Selector> = LazyLock::new(|| selector("td"));
pub static SPANNING_CELL: LazyLock<Selector> = LazyLock::new(|| selector(r#"td[colspan="2"]"#));
pub static DIV: LazyLock<Selector> = LazyLock::new(|| selector("div"));
pub static NESTED_DIV: LazyLock<Selector> = LazyLock::new(|| selector("div > div"));
pub static HEADING: LazyLock<Selector> = LazyLock::new(|| selector("h2"));
pub static LINK: LazyLock<Selector> = LazyLock::new(|| selector("a"));

/// Content-block selectors, most specific first.
static BLOCKS: LazyLock<[Selector; 2]> = LazyLock::new(|| {
    [
        selector("div.pam"),
        selector(r#"div[class*="uiBoxWhite"]"#),
    ]
});

/// Concatenated, cleaned text of an element and its descendants.
pub fn text_of(element: ElementRef<'_>) -> String {
    clean(&element.text().collect::<String>())
}

/// Raw (uncleaned) text of an element, for substring checks on labels.
pub fn raw_text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Content blocks of a page, one per activity record.
///
/// Falls back to the `uiBoxWhite` marker when no `pam` block is present.
pub fn content_blocks(doc: &Html) -> Vec<ElementRef<'_>> {
    BLOCKS
        .iter()
        .map(|sel| doc.select(sel).collect::<Vec<_>>())
        .find(|blocks| !blocks.is_empty())
        .unwrap_or_default()
}

/// Text of the innermost `div` under `cell` that is non-empty and does not
/// contain `label`.
///
/// Divs are scanned from the last one in document order, which is the most
/// deeply nested for the `Label<div><div>value</div></div>` shape.
pub fn innermost_text(cell: ElementRef<'_>, label: &str) -> Option<String> {
    let divs: Vec<_> = cell.select(&DIV).collect();
    divs.into_iter().rev().find_map(|div| {
        let text = text_of(div);
        (!text.is_empty() && !text.contains(label)).then_some(text)
    })
}

/// Value of the first nested-shape row whose text contains `label`.
///
/// Rows whose text also contains `exclude` are skipped, which keeps a
/// "Name" lookup from capturing the "Username" row.
pub fn nested_value(scope: ElementRef<'_>, label: &str, exclude: Option<&str>) -> Option<String> {
    scope
        .select(&ROW)
        .filter(|row| {
            let text = raw_text_of(*row);
            text.contains(label) && exclude.map_or(true, |ex| !text.contains(ex))
        })
        .find_map(|row| {
            let cell = row.select(&SPANNING_CELL).next()?;
            innermost_text(cell, label)
        })
}

/// Value of the first two-cell row whose first cell equals one of `labels`.
pub fn two_cell_value(scope: ElementRef<'_>, labels: &[&str]) -> Option<String> {
    scope.select(&ROW).find_map(|row| {
        let cells: Vec<_> = row.select(&CELL).collect();
        if cells.len() < 2 {
            return None;
        }
        let label = text_of(cells[0]);
        if !labels.contains(&label.as_str()) {
            return None;
        }
        let value = text_of(cells[1]);
        (!value.is_empty()).then_some(value)
    })
}

/// First non-empty capture group 1 across `patterns`, tried in order.
pub fn first_capture(patterns: &[Regex], raw: &str) -> Option<String> {
    patterns.iter().find_map(|pattern| {
        let value = strip_tags(pattern.captures(raw)?.get(1)?.as_str());
        (!value.is_empty()).then_some(value)
    })
}

/// Compile a fixed list of patterns.
///
/// Only used for literals in `LazyLock` statics.
pub fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).unwrap_or_else(|e| panic!("invalid pattern {:?}: {}", p, e)))
        .collect()
}
