//! Inbox metrics: chat partners, shares and response time.
//!
//! Every folder under the inbox is one chat. Its `message_<n>.html` pages are
//! read in page-number order, parsed into [`Message`]s and sorted by
//! timestamp. Pages are read from the archive one at a time; parsing runs in
//! parallel across chats.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDateTime};
use rayon::prelude::*;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

use super::{ExtractContext, MetricExtractor, Tally};
use crate::archive::{self, ExportArchive};
use crate::config::ExtractionConfig;
use crate::identity::Identity;
use crate::markup::parse_datetime;
use crate::markup::query::{compile, content_blocks, text_of, HEADING};
use crate::result::{Fragment, MessageMetrics, ResponseTime};

pub const INBOX_DIR: &str = "your_instagram_activity/messages/inbox";

/// Pseudo-messages that never count.
const REACTION_PHRASES: [&str; 3] = [
    "reacted to your msg",
    "liked a message",
    "reacted to a message",
];

const SHARE_URLS: [&str; 3] = [
    "instagram.com/reel/",
    "instagram.com/p/",
    "instagram.com/stories/",
];

const SHARE_PHRASES: [&str; 3] = ["sent an attachment", "shared a video", "shared a post"];

static MESSAGE_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^message_(\d+)\.html$").unwrap_or_else(|e| panic!("invalid pattern: {}", e))
});

/// Timestamp containers, most specific first.
static TIMESTAMP_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    [
        "div._3-94._a6-o",
        "div._a6-o",
        r#"div[class*="_a6-o"]"#,
        r#"div[class*="timestamp"]"#,
        r#"div[class*="date"]"#,
    ]
    .iter()
    .map(|css| Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {:?}: {:?}", css, e)))
    .collect()
});

/// Date-like text anywhere in a block, most precise first.
static TIMESTAMP_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(\w{3}\s+\d{1,2},\s+\d{4}\s+\d{1,2}:\d{2}:\d{2}\s+[APap][Mm])",
        r"(\w{3}\s+\d{1,2},\s+\d{4}\s+\d{1,2}:\d{2}\s+[APap][Mm])",
        r"(\d{1,2}/\d{1,2}/\d{4}\s+\d{1,2}:\d{2}:\d{2}\s+[APap][Mm])",
        r"(\w{3}\s+\d{1,2},\s+\d{4})",
    ])
});

/// One message as read from a chat page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: String,
    pub timestamp: Option<NaiveDateTime>,
    /// Carries a reel, post or story, or was sent as an attachment.
    pub is_share: bool,
    /// False for reaction and like pseudo-messages.
    pub countable: bool,
}

/// One inbox folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    /// Folder name, e.g. `alice_1234567890`.
    pub folder_key: String,
    /// Distinct senders in first-seen order.
    pub participants: Vec<String>,
    /// Timed messages in chronological order. Untimed messages keep their
    /// page position.
    pub messages: Vec<Message>,
}

/// Stable-sort the timed messages among the slots they occupy.
///
/// An untimed message stays where the page put it, so it still separates
/// its neighbours.
fn sort_timed_in_place(messages: &mut [Message]) {
    let slots: Vec<usize> = messages
        .iter()
        .enumerate()
        .filter(|(_, m)| m.timestamp.is_some())
        .map(|(i, _)| i)
        .collect();
    let mut timed: Vec<Message> = slots.iter().map(|&i| messages[i].clone()).collect();
    timed.sort_by_key(|m| m.timestamp);
    for (slot, message) in slots.into_iter().zip(timed) {
        messages[slot] = message;
    }
}

impl Chat {
    /// Build a chat from its messages, in page order.
    pub fn new(folder_key: &str, mut messages: Vec<Message>) -> Self {
        sort_timed_in_place(&mut messages);
        let mut participants: Vec<String> = Vec::new();
        for message in &messages {
            if !participants.contains(&message.sender) {
                participants.push(message.sender.clone());
            }
        }
        Self {
            folder_key: folder_key.to_string(),
            participants,
            messages,
        }
    }

    /// Parse a chat from the HTML of its pages, in page order.
    pub fn from_pages(folder_key: &str, pages: &[String], min_year: i32) -> Self {
        let messages = pages
            .iter()
            .flat_map(|html| parse_messages(html, min_year))
            .collect();
        Self::new(folder_key, messages)
    }

    pub fn is_group(&self) -> bool {
        self.participants.len() > 2
    }

    /// Display name: the folder prefix for groups, the other participant
    /// otherwise.
    pub fn name(&self, identity: &Identity) -> String {
        let prefix = self
            .folder_key
            .split('_')
            .next()
            .unwrap_or(&self.folder_key)
            .to_string();
        if self.is_group() {
            return prefix;
        }
        self.participants
            .iter()
            .find(|p| !identity.is_self(p))
            .cloned()
            .unwrap_or(prefix)
    }
}

fn is_reaction(lower_text: &str) -> bool {
    REACTION_PHRASES.iter().any(|p| lower_text.contains(p))
}

fn valid_year(timestamp: NaiveDateTime, min_year: i32) -> Option<NaiveDateTime> {
    (timestamp.year() >= min_year).then_some(timestamp)
}

fn block_timestamp(block: ElementRef<'_>, text: &str, min_year: i32) -> Option<NaiveDateTime> {
    TIMESTAMP_SELECTORS
        .iter()
        .find_map(|sel| {
            let element = block.select(sel).next()?;
            parse_datetime(&text_of(element)).and_then(|ts| valid_year(ts, min_year))
        })
        .or_else(|| {
            TIMESTAMP_PATTERNS.iter().find_map(|pattern| {
                let found = pattern.captures(text)?.get(1)?.as_str();
                parse_datetime(found).and_then(|ts| valid_year(ts, min_year))
            })
        })
}

fn parse_block(block: ElementRef<'_>, min_year: i32) -> Option<Message> {
    let sender = text_of(block.select(&HEADING).next()?);
    if sender.is_empty() {
        return None;
    }
    let text = text_of(block);
    let lower = text.to_lowercase();
    let countable = !is_reaction(&lower);
    let markup = block.html();
    let shared = SHARE_URLS.iter().any(|u| markup.contains(u))
        || SHARE_PHRASES.iter().any(|p| lower.contains(p));

    Some(Message {
        timestamp: block_timestamp(block, &text, min_year),
        is_share: shared && countable,
        countable,
        sender,
    })
}

/// Messages of one chat page, in page order.
///
/// Blocks without a sender heading are skipped. Timestamps before
/// `min_year` are treated as parse noise and dropped.
pub fn parse_messages(html: &str, min_year: i32) -> Vec<Message> {
    let doc = Html::parse_document(html);
    content_blocks(&doc)
        .into_iter()
        .filter_map(|block| parse_block(block, min_year))
        .collect()
}

/// Message page paths per chat folder, folders sorted, pages in number order.
fn chat_pages(archive: &ExportArchive<'_>) -> BTreeMap<String, Vec<String>> {
    let prefix = format!("{}/", INBOX_DIR);
    let mut folders: BTreeMap<String, Vec<(u64, String)>> = BTreeMap::new();
    for path in archive.list_files(INBOX_DIR) {
        let Some((folder, file)) = path.strip_prefix(&prefix).and_then(|rest| rest.split_once('/'))
        else {
            continue;
        };
        let Some(n) = MESSAGE_FILE
            .captures(file)
            .and_then(|caps| caps[1].parse::<u64>().ok())
        else {
            continue;
        };
        folders
            .entry(folder.to_string())
            .or_default()
            .push((n, path.clone()));
    }
    folders
        .into_iter()
        .map(|(folder, mut pages)| {
            pages.sort();
            (folder, pages.into_iter().map(|(_, path)| path).collect())
        })
        .collect()
}

/// Read and parse every chat in the inbox.
pub fn read_chats(archive: &mut ExportArchive<'_>, config: &ExtractionConfig) -> Vec<Chat> {
    let raw: Vec<(String, Vec<String>)> = chat_pages(archive)
        .into_iter()
        .map(|(folder, paths)| {
            let pages = paths
                .iter()
                .filter_map(|path| archive.read_text(path))
                .collect();
            (folder, pages)
        })
        .collect();

    let min_year = config.min_timestamp_year;
    raw.into_par_iter()
        .map(|(folder, pages)| Chat::from_pages(&folder, &pages, min_year))
        .collect()
}

/// Fold all chats into the message metrics.
pub fn message_metrics(
    chats: &[Chat],
    identity: &Identity,
    config: &ExtractionConfig,
) -> MessageMetrics {
    let mut partners = Tally::new();
    let mut shared_to = Tally::new();
    let mut received_from = Tally::new();
    let mut gaps: Vec<f64> = Vec::new();
    let max_gap = config.max_response_gap_secs as i64;

    for chat in chats {
        let name = chat.name(identity);
        let group = chat.is_group();

        if !group {
            let from_others = chat
                .messages
                .iter()
                .filter(|m| m.countable && !identity.is_self(&m.sender))
                .count();
            if from_others > 0 {
                partners.add(&name, from_others as u32);
            }
        }

        for message in chat.messages.iter().filter(|m| m.is_share && m.countable) {
            if identity.is_self(&message.sender) {
                shared_to.increment(&name);
            } else if group {
                received_from.increment(&name);
            } else {
                received_from.increment(&message.sender);
            }
        }

        if !group {
            for pair in chat.messages.windows(2) {
                let (prev, next) = (&pair[0], &pair[1]);
                if identity.is_self(&prev.sender) || !identity.is_self(&next.sender) {
                    continue;
                }
                let (Some(asked), Some(answered)) = (prev.timestamp, next.timestamp) else {
                    continue;
                };
                let gap = (answered - asked).num_seconds();
                if gap > 0 && gap < max_gap {
                    gaps.push(gap as f64);
                }
            }
        }

        trace!(
            chat = %chat.folder_key,
            name = %name,
            group,
            messages = chat.messages.len(),
            "chat"
        );
    }

    let avg_response_time = (!gaps.is_empty())
        .then(|| ResponseTime::from_seconds(gaps.iter().sum::<f64>() / gaps.len() as f64));

    MessageMetrics {
        top_chat_partners: partners.top(config.top_n),
        top_shared_to: shared_to.top(config.top_n),
        top_received_from: received_from.top(config.top_n),
        avg_response_time,
    }
}

pub struct MessagesExtractor;

impl MetricExtractor for MessagesExtractor {
    fn name(&self) -> &'static str {
        "messages"
    }

    fn extract(&self, archive: &mut ExportArchive<'_>, ctx: &ExtractContext<'_>) -> Fragment {
        let chats = read_chats(archive, ctx.config);
        let metrics = message_metrics(&chats, ctx.identity, ctx.config);
        debug!(
            chats = chats.len(),
            partners = metrics.top_chat_partners.len(),
            response = ?metrics.avg_response_time,
            "messages"
        );
        Fragment::Messages(metrics)
    }
}

/// Path of a chat page, for building archives.
pub fn page_path(folder: &str, n: u32) -> String {
    archive::join(&archive::join(INBOX_DIR, folder), &format!("message_{}.html", n))
}
