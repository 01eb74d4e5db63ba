//! Account-owner identity and the self/other predicate.
//!
//! The owner's username and display name come from the personal-information
//! page. Every "other party" metric filters through [`Identity::is_self`],
//! which is a conservative string heuristic: a participant whose display
//! name happens to equal the owner's username is treated as the owner.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::archive::ExportArchive;
use crate::extract::strategy::first_success;
use crate::markup::query::{compile, first_capture, nested_value, two_cell_value};

/// Pages that may carry the owner's identity, in lookup order.
pub const IDENTITY_PAGES: [&str; 2] = [
    "personal_information/personal_information/personal_information.html",
    "security_and_login_information/login_and_profile_creation/signup_details.html",
];

const USERNAME_LABEL: &str = "Username";
const NAME_LABEL: &str = "Name";

static USERNAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"Username</td>[\s\S]*?<div><div>([^<]+)</div></div>",
        r"Username[^>]*>[\s\S]*?<div><div>([^<]+)</div></div>",
        r"Username</td>\s*<td[^>]*>([\s\S]*?)</td>",
    ])
});

static NAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"\bName</td>[\s\S]*?<div><div>([^<]+)</div></div>",
        r"\bName[^>]*>[\s\S]*?<div><div>([^<]+)</div></div>",
    ])
});

/// The account owner as named by the export.
///
/// Resolved once per extraction and shared read-only with every extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: Option<String>,
    pub name: Option<String>,
}

/// Parsed page plus its raw markup, handed to each identity strategy.
struct Page<'a> {
    doc: &'a Html,
    raw: &'a str,
}

impl Page<'_> {
    fn nested_username(&self) -> Option<String> {
        nested_value(self.doc.root_element(), USERNAME_LABEL, None)
    }

    fn two_cell_username(&self) -> Option<String> {
        two_cell_value(self.doc.root_element(), &[USERNAME_LABEL])
    }

    fn raw_username(&self) -> Option<String> {
        first_capture(&USERNAME_PATTERNS, self.raw)
    }

    fn nested_name(&self) -> Option<String> {
        nested_value(self.doc.root_element(), NAME_LABEL, Some(USERNAME_LABEL))
    }

    fn two_cell_name(&self) -> Option<String> {
        two_cell_value(self.doc.root_element(), &[NAME_LABEL])
    }

    fn raw_name(&self) -> Option<String> {
        first_capture(&NAME_PATTERNS, self.raw)
    }
}

impl Identity {
    /// Create an identity from known values.
    pub fn new(username: Option<&str>, name: Option<&str>) -> Self {
        Self {
            username: username.map(str::to_string),
            name: name.map(str::to_string),
        }
    }

    /// Whether neither a username nor a name was resolved.
    pub fn is_unknown(&self) -> bool {
        self.username.is_none() && self.name.is_none()
    }

    /// Resolve the identity from one page of markup.
    ///
    /// Each field runs its own fallback chain: nested-div row, two-cell row,
    /// then regexes over the raw markup. Missing fields stay `None`.
    pub fn from_html(html: &str) -> Self {
        let doc = Html::parse_document(html);
        let page = Page { doc: &doc, raw: html };

        let username = first_success(
            &page,
            &[Page::nested_username, Page::two_cell_username, Page::raw_username],
        );
        let name = first_success(
            &page,
            &[Page::nested_name, Page::two_cell_name, Page::raw_name],
        );

        Self { username, name }
    }

    /// Resolve the identity from the first identity page that yields anything.
    ///
    /// An archive without identity pages produces an unknown identity, for
    /// which [`is_self`](Self::is_self) is always false.
    pub fn resolve(archive: &mut ExportArchive<'_>) -> Self {
        for path in IDENTITY_PAGES {
            let Some(html) = archive.read_text(path) else {
                continue;
            };
            let identity = Self::from_html(&html);
            if !identity.is_unknown() {
                debug!(
                    page = path,
                    username = identity.username.as_deref().unwrap_or("-"),
                    name = identity.name.as_deref().unwrap_or("-"),
                    "resolved account owner"
                );
                return identity;
            }
        }
        debug!("account owner could not be resolved");
        Self::default()
    }

    /// Whether `candidate` names the account owner.
    ///
    /// Comparison ignores case, surrounding and repeated whitespace, and one
    /// leading `@` on either side. Matches the username or the display name.
    pub fn is_self(&self, candidate: &str) -> bool {
        if self.is_unknown() {
            return false;
        }
        let candidate = normalize(candidate);
        if candidate.is_empty() {
            return false;
        }
        let bare = strip_at(&candidate);

        let username_hit = self.username.as_deref().map(normalize).is_some_and(|u| {
            !u.is_empty() && (candidate == u || bare == strip_at(&u) || candidate == strip_at(&u))
        });
        let name_hit = self
            .name
            .as_deref()
            .map(normalize)
            .is_some_and(|n| !n.is_empty() && (candidate == n || bare == n));

        username_hit || name_hit
    }
}

fn normalize(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn strip_at(value: &str) -> &str {
    value.strip_prefix('@').unwrap_or(value)
}
