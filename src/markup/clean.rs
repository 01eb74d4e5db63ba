//! Text normalization for values pulled out of export markup.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Entities the export pages are known to escape, with their replacements.
///
/// `&amp;` goes first so that `&amp;lt;` ends up as `<` after the next pass.
const ENTITIES: [(&str, &str); 6] = [
    ("&amp;", "&"),
    ("&#064;", "@"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&#039;", "'"),
    ("&quot;", "\""),
];

static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[^>]+>").unwrap_or_else(|e| panic!("invalid tag pattern: {}", e))
});

/// Decode entities, collapse whitespace runs to one space and trim.
///
/// Total on any input. Decoding repeats until nothing changes, so the result
/// is a fixed point: `clean(&clean(x)) == clean(x)`.
pub fn clean(raw: &str) -> String {
    let mut text = Cow::Borrowed(raw);
    loop {
        let decoded = decode_once(&text);
        if decoded == *text {
            break;
        }
        text = Cow::Owned(decoded);
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_once(text: &str) -> String {
    ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, plain)| acc.replace(entity, plain))
}

/// Remove anything that looks like a tag, then [`clean`].
///
/// Used on regex captures taken from raw markup.
pub fn strip_tags(raw: &str) -> String {
    clean(&TAG.replace_all(raw, ""))
}
