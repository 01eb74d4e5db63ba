//! Unit tests for account-owner resolution

use igw::Identity;

use crate::helpers::{nested_row, page, two_cell_row};

#[test]
fn nested_rows_give_username_and_name() {
    let html = page(&format!(
        "<table>{}{}</table>",
        nested_row("Username", "jane.doe"),
        nested_row("Name", "Jane Doe")
    ));
    let identity = Identity::from_html(&html);
    assert_eq!(identity.username.as_deref(), Some("jane.doe"));
    assert_eq!(identity.name.as_deref(), Some("Jane Doe"));
}

#[test]
fn two_cell_rows_are_a_fallback() {
    let html = page(&format!(
        "<table>{}{}</table>",
        two_cell_row("Username", "jane.doe"),
        two_cell_row("Name", "Jane")
    ));
    let identity = Identity::from_html(&html);
    assert_eq!(identity, Identity::new(Some("jane.doe"), Some("Jane")));
}

#[test]
fn name_row_is_not_confused_with_username_row() {
    let html = page(&format!(
        "<table>{}</table>",
        nested_row("Username", "jane.doe")
    ));
    let identity = Identity::from_html(&html);
    assert_eq!(identity.username.as_deref(), Some("jane.doe"));
    assert_eq!(identity.name, None);
}

#[test]
fn entities_in_values_are_decoded() {
    let html = page(&format!(
        "<table>{}</table>",
        nested_row("Name", "Tom &amp; Jerry")
    ));
    assert_eq!(
        Identity::from_html(&html).name.as_deref(),
        Some("Tom & Jerry")
    );
}

#[test]
fn page_without_rows_is_unknown() {
    let identity = Identity::from_html(&page("<p>nothing here</p>"));
    assert!(identity.is_unknown());
    assert!(!identity.is_self("anyone"));
}

#[test]
fn self_match_uses_either_field() {
    let identity = Identity::new(Some("jane.doe"), Some("Jane Doe"));
    assert!(identity.is_self("Jane Doe"));
    assert!(identity.is_self("@jane.doe"));
    assert!(!identity.is_self("Jane"));
}
