//! Comments left on other people's posts and reels.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html};
use tracing::{debug, trace};

use super::strategy::first_success;
use super::{creator_key, join_handles, ExtractContext, MetricExtractor, Tally};
use crate::archive::{self, ExportArchive};
use crate::markup::query::{compile, content_blocks, first_capture, nested_value, two_cell_value};
use crate::result::{CreatorStats, Fragment};

pub const COMMENTS_DIR: &str = "your_instagram_activity/comments";

const REELS_COMMENTS: &str = "reels_comments.html";
const OWNER_LABEL: &str = "Media Owner";

static POST_COMMENTS_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^post_comments_(\d+)\.html$").unwrap_or_else(|e| panic!("invalid pattern: {}", e))
});

static OWNER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"Media Owner</td>\s*<td[^>]*><div><div>([^<]+)</div>",
        r"Media Owner<div><div>([^<]+)</div></div>",
        r"Media Owner</td>\s*<td[^>]*>([^<]+)</td>",
    ])
});

/// Comment pages in reading order: numbered post pages ascending, then reels.
fn comment_pages(archive: &ExportArchive<'_>) -> Vec<String> {
    let mut numbered: Vec<(u64, String)> = archive
        .list_files(COMMENTS_DIR)
        .into_iter()
        .filter_map(|path| {
            let n = POST_COMMENTS_FILE
                .captures(archive::file_name(&path))?
                .get(1)?
                .as_str()
                .parse::<u64>()
                .ok()?;
            Some((n, path))
        })
        .collect();
    numbered.sort();
    let mut pages: Vec<String> = numbered.into_iter().map(|(_, path)| path).collect();
    pages.push(archive::join(COMMENTS_DIR, REELS_COMMENTS));
    pages
}

/// One comment block with its markup.
struct CommentBlock<'a> {
    element: ElementRef<'a>,
    raw: String,
}

impl CommentBlock<'_> {
    fn nested(&self) -> Option<String> {
        nested_value(self.element, OWNER_LABEL, None)
    }

    fn two_cell(&self) -> Option<String> {
        two_cell_value(self.element, &[OWNER_LABEL])
    }

    fn raw(&self) -> Option<String> {
        first_capture(&OWNER_PATTERNS, &self.raw)
    }
}

fn comment_owner(element: ElementRef<'_>) -> Option<String> {
    let block = CommentBlock {
        element,
        raw: element.html(),
    };
    first_success(
        &block,
        &[CommentBlock::nested, CommentBlock::two_cell, CommentBlock::raw],
    )
}

/// Add one page's comments on others' posts to `tally`.
///
/// Returns how many blocks counted. Blocks without a resolvable owner and
/// comments on the owner's own posts are skipped.
fn tally_page(html: &str, ctx: &ExtractContext<'_>, tally: &mut Tally) -> u32 {
    let doc = Html::parse_document(html);
    let mut counted = 0;
    for owner in content_blocks(&doc).into_iter().filter_map(comment_owner) {
        if ctx.identity.is_self(&owner) {
            trace!(owner = %owner, "skipping comment on own post");
            continue;
        }
        let key = creator_key(&owner);
        if key.is_empty() {
            continue;
        }
        tally.increment(key);
        counted += 1;
    }
    counted
}

/// Summarise a tally: total and the tied leaders joined into one label.
fn creator_stats(tally: &Tally, total: u32) -> CreatorStats {
    match tally.leaders() {
        Some((names, count)) => CreatorStats {
            total,
            top_creator: join_handles(&names),
            top_creator_count: count,
        },
        None => CreatorStats {
            total,
            ..Default::default()
        },
    }
}

pub struct CommentsExtractor;

impl MetricExtractor for CommentsExtractor {
    fn name(&self) -> &'static str {
        "comments"
    }

    fn extract(&self, archive: &mut ExportArchive<'_>, ctx: &ExtractContext<'_>) -> Fragment {
        let mut tally = Tally::new();
        let mut total = 0;
        for path in comment_pages(archive) {
            if let Some(html) = archive.read_text(&path) {
                let counted = tally_page(&html, ctx, &mut tally);
                trace!(path = %path, counted, "comment page");
                total += counted;
            }
        }
        let stats = creator_stats(&tally, total);
        debug!(total, top = ?stats.top_creator, "comments");
        Fragment::Comments(stats)
    }
}
