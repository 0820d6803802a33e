// The set of documentation sections a reader has viewed.
//
// Invariants
// - Identifiers are unique and non-empty.
// - Entries are only ever added. Nothing here removes one.
// - last_visited moves only when an insertion actually changes the set.

use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitedSet {
    sections: BTreeSet<String>,
    last_visited: Option<DateTime<Utc>>,
}

impl VisitedSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a set from stored values. Empty identifiers are dropped.
    pub fn from_parts<I, S>(sections: I, last_visited: Option<DateTime<Utc>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: sections
                .into_iter()
                .map(Into::into)
                .filter(|id: &String| !id.is_empty())
                .collect(),
            last_visited,
        }
    }

    /// Returns true when `section_id` was not yet a member.
    pub fn insert(&mut self, section_id: &str, at: DateTime<Utc>) -> bool {
        if self.sections.contains(section_id) {
            return false;
        }
        self.sections.insert(section_id.to_string());
        self.last_visited = Some(at);
        true
    }

    pub fn contains(&self, section_id: &str) -> bool {
        self.sections.contains(section_id)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(String::as_str)
    }

    pub fn last_visited(&self) -> Option<DateTime<Utc>> {
        self.last_visited
    }
}
