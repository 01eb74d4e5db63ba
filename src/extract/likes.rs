//! Liked posts and the most-liked creator.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html};
use tracing::{debug, trace};

use super::strategy::first_success;
use super::{creator_key, handle, ExtractContext, MetricExtractor, Tally};
use crate::archive::ExportArchive;
use crate::markup::clean;
use crate::markup::query::{
    content_blocks, nested_value, raw_text_of, text_of, two_cell_value, HEADING, LINK,
};
use crate::result::{CreatorStats, Fragment};

pub const LIKES_PAGE: &str = "your_instagram_activity/likes/liked_posts.html";

const OWNER_LABEL: &str = "Media Owner";

/// Path segments that are never usernames.
const RESERVED_SEGMENTS: [&str; 6] = ["p", "reel", "reels", "stories", "explore", "tv"];

static LIKED_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Liked\s+([^'’]+)['’]s").unwrap_or_else(|e| panic!("invalid pattern: {}", e))
});

static PROFILE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"instagram\.com/([^/?#]+)").unwrap_or_else(|e| panic!("invalid pattern: {}", e))
});

static USERNAME_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._]{1,30}$").unwrap_or_else(|e| panic!("invalid pattern: {}", e))
});

/// One liked-post block.
struct LikedBlock<'a>(ElementRef<'a>);

impl LikedBlock<'_> {
    fn owner_cell(&self) -> Option<String> {
        two_cell_value(self.0, &[OWNER_LABEL]).or_else(|| nested_value(self.0, OWNER_LABEL, None))
    }

    fn heading(&self) -> Option<String> {
        let text = text_of(self.0.select(&HEADING).next()?);
        (!text.is_empty()).then_some(text)
    }

    fn liked_phrase(&self) -> Option<String> {
        let raw = raw_text_of(self.0);
        let name = clean(LIKED_PHRASE.captures(&raw)?.get(1)?.as_str());
        (!name.is_empty()).then_some(name)
    }

    fn first_link(&self) -> Option<String> {
        let link = self.0.select(&LINK).next()?;
        let from_url = link
            .value()
            .attr("href")
            .and_then(username_from_url);
        from_url.or_else(|| {
            let text = text_of(link);
            (!text.is_empty()).then_some(text)
        })
    }
}

/// Username-shaped first path segment of an Instagram URL.
fn username_from_url(href: &str) -> Option<String> {
    let segment = PROFILE_URL.captures(href)?.get(1)?.as_str();
    (USERNAME_SHAPE.is_match(segment) && !RESERVED_SEGMENTS.contains(&segment))
        .then(|| segment.to_string())
}

/// Creator of the liked post, first strategy that finds one wins.
fn liked_owner(block: ElementRef<'_>) -> Option<String> {
    let block = LikedBlock(block);
    first_success(
        &block,
        &[
            LikedBlock::owner_cell,
            LikedBlock::heading,
            LikedBlock::liked_phrase,
            LikedBlock::first_link,
        ],
    )
}

/// Like totals for one liked-posts page.
///
/// Every block counts toward the total. Only blocks whose creator resolves
/// and is not the owner feed the per-creator tally.
pub fn like_stats(html: &str, ctx: &ExtractContext<'_>) -> CreatorStats {
    let doc = Html::parse_document(html);
    let blocks = content_blocks(&doc);
    let mut tally = Tally::new();
    for owner in blocks.iter().filter_map(|block| liked_owner(*block)) {
        if ctx.identity.is_self(&owner) {
            trace!(owner = %owner, "skipping own post");
            continue;
        }
        let key = creator_key(&owner);
        if key.is_empty() {
            continue;
        }
        tally.increment(key);
    }

    let top = tally.ranked().first().map(|(name, count)| (handle(name), *count));
    CreatorStats {
        total: blocks.len() as u32,
        top_creator_count: top.as_ref().map_or(0, |(_, count)| *count),
        top_creator: top.map(|(name, _)| name),
    }
}

pub struct LikesExtractor;

impl MetricExtractor for LikesExtractor {
    fn name(&self) -> &'static str {
        "likes"
    }

    fn extract(&self, archive: &mut ExportArchive<'_>, ctx: &ExtractContext<'_>) -> Fragment {
        let stats = archive
            .read_text(LIKES_PAGE)
            .map(|html| like_stats(&html, ctx))
            .unwrap_or_default();
        debug!(total = stats.total, top = ?stats.top_creator, "likes");
        Fragment::Likes(stats)
    }
}
