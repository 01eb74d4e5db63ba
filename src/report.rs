//! Human-readable summary of an extraction.

use humansize::{format_size, BINARY};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::OutputConfig;
use crate::pipeline::Extraction;
use crate::result::{AccountAge, CreatorStats, RankedName, ResponseTime};

/// Format a count for display: `9,999`, `12.3K`, `1.2M`.
///
/// A trailing `.0` is dropped, so 10 000 renders as `10K`.
pub fn format_number(value: u64) -> String {
    if value < 10_000 {
        return group_thousands(value);
    }
    let (scaled, suffix) = if value < 1_000_000 {
        (value as f64 / 1_000.0, "K")
    } else {
        (value as f64 / 1_000_000.0, "M")
    };
    let text = format!("{:.1}", scaled);
    format!("{}{}", text.strip_suffix(".0").unwrap_or(&text), suffix)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Truncate `text` to at most `max_width` terminal columns, ending in `...`.
///
/// Width is measured in display columns, so wide characters and emoji count
/// double.
pub fn truncate_text(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return take_width(text, max_width);
    }
    format!("{}...", take_width(text, max_width - 3))
}

fn take_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    text.chars()
        .take_while(|c| {
            width += c.width().unwrap_or(0);
            width <= max_width
        })
        .collect()
}

fn plural(count: u32, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

fn account_age_line(age: Option<AccountAge>) -> String {
    match age {
        Some(age) if age.years == 0 => plural(age.months, "month", "months"),
        Some(age) if age.months == 0 => plural(age.years, "year", "years"),
        Some(age) => format!(
            "{}, {}",
            plural(age.years, "year", "years"),
            plural(age.months, "month", "months")
        ),
        None => "unknown".to_string(),
    }
}

fn creator_line(stats: &CreatorStats, max_width: usize) -> String {
    let total = format_number(stats.total as u64);
    match &stats.top_creator {
        Some(top) => format!(
            "{} (top: {}, {})",
            total,
            truncate_text(top, max_width),
            format_number(stats.top_creator_count as u64)
        ),
        None => total,
    }
}

fn response_line(time: Option<ResponseTime>) -> String {
    match time {
        Some(t) if t.hours == 0 => format!("{}m", t.minutes),
        Some(t) => format!("{}h {}m", t.hours, t.minutes),
        None => "unknown".to_string(),
    }
}

fn ranking(title: &str, names: &[RankedName], max_width: usize) -> String {
    if names.is_empty() {
        return format!("\n   {}: none", title);
    }
    let mut out = format!("\n   {}:", title);
    for (i, entry) in names.iter().enumerate() {
        let name = truncate_text(&entry.name, max_width);
        let pad = max_width.saturating_sub(name.width());
        out.push_str(&format!(
            "\n      {}. {}{} {}",
            i + 1,
            name,
            " ".repeat(pad),
            format_number(entry.count as u64)
        ));
    }
    out
}

/// Multi-line summary of an extraction.
pub fn summary(extraction: &Extraction, output: &OutputConfig) -> String {
    let result = &extraction.result;
    let width = output.max_name_width;
    let owner = extraction
        .identity
        .username
        .as_deref()
        .map(|u| format!("@{}", u.trim_start_matches('@')))
        .or_else(|| extraction.identity.name.clone())
        .unwrap_or_else(|| "unknown owner".to_string());

    let mut out = format!(
        "Instagram Wrapped: {}\n   Archive: {} ({} entries)\n   Account age: {}",
        owner,
        format_size(extraction.archive_bytes as u64, BINARY),
        format_number(extraction.entries as u64),
        account_age_line(result.account_age)
    );

    let content = &result.content_created;
    out.push_str(&format!(
        "\n   Content: {} ({}, {}, {})",
        format_number(content.total() as u64),
        plural(content.posts, "post", "posts"),
        plural(content.reels, "reel", "reels"),
        plural(content.stories, "story", "stories")
    ));
    out.push_str(&format!("\n   Likes: {}", creator_line(&result.likes, width)));
    out.push_str(&format!(
        "\n   Comments: {}",
        creator_line(&result.comments, width)
    ));
    out.push_str(&format!(
        "\n   Avg response: {}",
        response_line(result.avg_response_time)
    ));

    out.push_str(&ranking("Top chat partners", &result.top_chat_partners, width));
    out.push_str(&ranking("Most shared to", &result.top_shared_to, width));
    out.push_str(&ranking("Most shares from", &result.top_received_from, width));

    if result.topics.is_empty() {
        out.push_str("\n   Topics: none");
    } else {
        let topics: Vec<String> = result
            .topics
            .iter()
            .map(|t| format!("{} {}", t.emoji, t.name))
            .collect();
        out.push_str(&format!("\n   Topics: {}", topics.join(", ")));
    }
    out
}
