//! Insertion-ordered name counters.

use std::collections::HashMap;

use crate::result::RankedName;

/// Per-name counts that remember first-seen order.
///
/// Ranking sorts by count descending with a stable sort, so names with equal
/// counts keep the order in which they were first counted.
#[derive(Debug, Default, Clone)]
pub struct Tally {
    entries: Vec<(String, u32)>,
    index: HashMap<String, usize>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` to `name`. Zero counts are ignored.
    pub fn add(&mut self, name: &str, count: u32) {
        if count == 0 {
            return;
        }
        match self.index.get(name) {
            Some(&i) => self.entries[i].1 += count,
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), count));
            }
        }
    }

    pub fn increment(&mut self, name: &str) {
        self.add(name, 1);
    }

    pub fn get(&self, name: &str) -> u32 {
        self.index.get(name).map_or(0, |&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, highest count first, ties in first-seen order.
    pub fn ranked(&self) -> Vec<(&str, u32)> {
        let mut ranked: Vec<(&str, u32)> = self
            .entries
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The `n` highest entries.
    pub fn top(&self, n: usize) -> Vec<RankedName> {
        self.ranked()
            .into_iter()
            .take(n)
            .map(|(name, count)| RankedName {
                name: name.to_string(),
                count,
            })
            .collect()
    }

    /// Every name sharing the highest count, in first-seen order.
    pub fn leaders(&self) -> Option<(Vec<&str>, u32)> {
        let max = self.entries.iter().map(|(_, c)| *c).max()?;
        let names = self
            .entries
            .iter()
            .filter(|(_, c)| *c == max)
            .map(|(name, _)| name.as_str())
            .collect();
        Some((names, max))
    }
}

/// Tally key for a creator: the name without its leading `@`s.
///
/// `@dave` and `dave` name the same account.
pub fn creator_key(name: &str) -> &str {
    name.trim_start_matches('@')
}

/// Format a name as a handle, `@name`.
pub fn handle(name: &str) -> String {
    format!("@{}", name.trim_start_matches('@'))
}

/// Join tied names: `@a`, `@a & @b`, `@a, @b & @c`.
pub fn join_handles(names: &[&str]) -> Option<String> {
    let (last, rest) = names.split_last()?;
    if rest.is_empty() {
        return Some(handle(last));
    }
    let head = rest.iter().map(|n| handle(n)).collect::<Vec<_>>().join(", ");
    Some(format!("{} & {}", head, handle(last)))
}
