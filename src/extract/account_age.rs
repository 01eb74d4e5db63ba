//! Account age from the signup-details page.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use scraper::Html;
use tracing::debug;

use super::strategy::first_success;
use super::{ExtractContext, MetricExtractor};
use crate::archive::ExportArchive;
use crate::markup::parse_date;
use crate::markup::query::{compile, first_capture, nested_value, two_cell_value};
use crate::result::{AccountAge, Fragment};

pub const SIGNUP_PAGE: &str =
    "security_and_login_information/login_and_profile_creation/signup_details.html";

const DATE_LABELS: [&str; 2] = ["Time", "Date"];

static DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?:Time|Date)</td>\s*<td[^>]*>([^<]+)</td>",
        r"(?:Time|Date)</td>\s*<td[^>]*><div><div>([^<]+)</div>",
        r"(?:Time|Date)<div><div>([^<]+)</div></div>",
    ])
});

struct SignupPage<'a> {
    doc: &'a Html,
    raw: &'a str,
}

impl SignupPage<'_> {
    fn two_cell(&self) -> Option<NaiveDate> {
        two_cell_value(self.doc.root_element(), &DATE_LABELS).and_then(|v| parse_date(&v))
    }

    fn nested(&self) -> Option<NaiveDate> {
        DATE_LABELS.iter().find_map(|label| {
            nested_value(self.doc.root_element(), label, None).and_then(|v| parse_date(&v))
        })
    }

    fn raw(&self) -> Option<NaiveDate> {
        DATE_PATTERNS
            .iter()
            .find_map(|p| first_capture(std::slice::from_ref(p), self.raw).and_then(|v| parse_date(&v)))
    }
}

/// Calendar difference from `signup` to `today` in whole years and months.
///
/// Days are ignored. A negative month difference borrows a year. Returns
/// `None` when `signup` lies in a later month than `today`.
pub fn age_between(signup: NaiveDate, today: NaiveDate) -> Option<AccountAge> {
    let mut years = today.year() - signup.year();
    let mut months = today.month() as i32 - signup.month() as i32;
    if months < 0 {
        years -= 1;
        months += 12;
    }
    if years < 0 {
        return None;
    }
    Some(AccountAge {
        years: years as u32,
        months: months as u32,
    })
}

/// Signup date from the page markup, first strategy that parses wins.
pub fn signup_date(html: &str) -> Option<NaiveDate> {
    let doc = Html::parse_document(html);
    let page = SignupPage { doc: &doc, raw: html };
    first_success(
        &page,
        &[SignupPage::two_cell, SignupPage::nested, SignupPage::raw],
    )
}

pub struct AccountAgeExtractor;

impl MetricExtractor for AccountAgeExtractor {
    fn name(&self) -> &'static str {
        "account_age"
    }

    fn extract(&self, archive: &mut ExportArchive<'_>, ctx: &ExtractContext<'_>) -> Fragment {
        let age = archive
            .read_text(SIGNUP_PAGE)
            .and_then(|html| signup_date(&html))
            .and_then(|date| {
                debug!(%date, "signup date");
                age_between(date, ctx.today)
            });
        Fragment::AccountAge(age)
    }
}
