//! Posts, reels and stories the owner published.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;
use tracing::{debug, trace};

use super::{ExtractContext, MetricExtractor};
use crate::archive::{self, ExportArchive, CONTENT_ROOTS};
use crate::markup::query::content_blocks;
use crate::result::{ContentCreated, Fragment};

static POSTS_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^posts_\d+\.html$").unwrap_or_else(|e| panic!("invalid pattern: {}", e))
});

fn is_posts_file(name: &str) -> bool {
    POSTS_FILE.is_match(name)
}

/// Number of content blocks on one page.
pub fn count_blocks(html: &str) -> u32 {
    let doc = Html::parse_document(html);
    content_blocks(&doc).len() as u32
}

fn count_posts(archive: &mut ExportArchive<'_>) -> u32 {
    let Some(root) = archive.first_root_with(&CONTENT_ROOTS, is_posts_file) else {
        return 0;
    };
    let files: Vec<String> = archive
        .list_files(root)
        .into_iter()
        .filter(|path| is_posts_file(archive::file_name(path)))
        .collect();
    files
        .iter()
        .filter_map(|path| archive.read_text(path))
        .map(|html| count_blocks(&html))
        .sum()
}

/// Block count of `name` under the first content root that has it.
fn count_single(archive: &mut ExportArchive<'_>, name: &str) -> u32 {
    let candidates: Vec<String> = CONTENT_ROOTS
        .iter()
        .map(|root| archive::join(root, name))
        .collect();
    archive.read_first(&candidates).map_or(0, |(path, html)| {
        trace!(path = %path, "counting content blocks");
        count_blocks(&html)
    })
}

pub struct ContentExtractor;

impl MetricExtractor for ContentExtractor {
    fn name(&self) -> &'static str {
        "content"
    }

    fn extract(&self, archive: &mut ExportArchive<'_>, _ctx: &ExtractContext<'_>) -> Fragment {
        let content = ContentCreated {
            posts: count_posts(archive),
            reels: count_single(archive, "reels.html"),
            stories: count_single(archive, "stories.html"),
        };
        debug!(
            posts = content.posts,
            reels = content.reels,
            stories = content.stories,
            "content created"
        );
        Fragment::Content(content)
    }
}
