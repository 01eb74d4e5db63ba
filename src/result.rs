//! The extraction result record and the fragments extractors produce.
//!
//! [`ExtractionResult`] always has the same shape. Facts that could not be
//! found stay at their zero or absent defaults, so a consumer never has to
//! distinguish "missing page" from "nothing to report".

use serde::{Deserialize, Serialize};

/// How long the account has existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountAge {
    pub years: u32,
    /// Always in `0..=11`.
    pub months: u32,
}

/// A name with a positive count, as used in ranked lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedName {
    pub name: String,
    pub count: u32,
}

/// Totals and leader for likes or comments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorStats {
    pub total: u32,
    /// `@name`, or several tied names joined as `@a, @b & @c`.
    pub top_creator: Option<String>,
    pub top_creator_count: u32,
}

/// Number of posts, reels and stories the owner published.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCreated {
    pub posts: u32,
    pub reels: u32,
    pub stories: u32,
}

impl ContentCreated {
    pub fn total(&self) -> u32 {
        self.posts + self.reels + self.stories
    }
}

/// An interest label with its representative emoji.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub emoji: String,
}

/// Average time the owner took to answer a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseTime {
    pub hours: u32,
    /// Always in `0..=59`.
    pub minutes: u32,
}

impl ResponseTime {
    /// Split an average in seconds into whole hours and floored minutes.
    pub fn from_seconds(seconds: f64) -> Self {
        let seconds = seconds.max(0.0);
        Self {
            hours: (seconds / 3600.0).floor() as u32,
            minutes: ((seconds % 3600.0) / 60.0).floor() as u32,
        }
    }
}

/// Everything the message extractor derives from the inbox.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageMetrics {
    pub top_chat_partners: Vec<RankedName>,
    pub top_shared_to: Vec<RankedName>,
    pub top_received_from: Vec<RankedName>,
    pub avg_response_time: Option<ResponseTime>,
}

/// The output of one extractor, merged into the result record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    AccountAge(Option<AccountAge>),
    Topics(Vec<Topic>),
    Content(ContentCreated),
    Likes(CreatorStats),
    Comments(CreatorStats),
    Messages(MessageMetrics),
}

/// The full set of facts extracted from one archive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub account_age: Option<AccountAge>,
    pub top_chat_partners: Vec<RankedName>,
    pub likes: CreatorStats,
    pub comments: CreatorStats,
    pub avg_response_time: Option<ResponseTime>,
    pub top_shared_to: Vec<RankedName>,
    pub top_received_from: Vec<RankedName>,
    pub content_created: ContentCreated,
    pub topics: Vec<Topic>,
}

impl ExtractionResult {
    /// Fold one extractor's output into the record.
    pub fn merge(&mut self, fragment: Fragment) {
        match fragment {
            Fragment::AccountAge(age) => self.account_age = age,
            Fragment::Topics(topics) => self.topics = topics,
            Fragment::Content(content) => self.content_created = content,
            Fragment::Likes(likes) => self.likes = likes,
            Fragment::Comments(comments) => self.comments = comments,
            Fragment::Messages(metrics) => {
                self.top_chat_partners = metrics.top_chat_partners;
                self.top_shared_to = metrics.top_shared_to;
                self.top_received_from = metrics.top_received_from;
                self.avg_response_time = metrics.avg_response_time;
            }
        }
    }

    /// Whether nothing at all was found.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
