//! Unit tests for counting and ranking helpers

use igw::extract::{handle, join_handles, Tally};
use igw::result::RankedName;

#[test]
fn ranking_is_by_count_then_first_seen() {
    let mut tally = Tally::new();
    for name in ["carol", "alice", "bob", "alice", "bob", "dave"] {
        tally.increment(name);
    }
    assert_eq!(
        tally.top(3),
        vec![
            RankedName {
                name: "alice".to_string(),
                count: 2
            },
            RankedName {
                name: "bob".to_string(),
                count: 2
            },
            RankedName {
                name: "carol".to_string(),
                count: 1
            },
        ]
    );
}

#[test]
fn leaders_report_every_tied_name() {
    let mut tally = Tally::new();
    tally.add("x", 4);
    tally.add("y", 4);
    tally.add("z", 1);
    let (names, count) = tally.leaders().unwrap();
    assert_eq!(names, vec!["x", "y"]);
    assert_eq!(count, 4);
    assert!(Tally::new().leaders().is_none());
}

#[test]
fn handles_are_prefixed_once() {
    assert_eq!(handle("sam"), "@sam");
    assert_eq!(handle("@sam"), "@sam");
}

#[test]
fn joined_handles_read_naturally() {
    assert_eq!(join_handles(&[]), None);
    assert_eq!(join_handles(&["a"]).as_deref(), Some("@a"));
    assert_eq!(join_handles(&["a", "b"]).as_deref(), Some("@a & @b"));
    assert_eq!(join_handles(&["a", "b", "c"]).as_deref(), Some("@a, @b & @c"));
    assert_eq!(
        join_handles(&["a", "b", "c", "d"]).as_deref(),
        Some("@a, @b, @c & @d")
    );
}
