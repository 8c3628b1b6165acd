use crate::log_set::LogSet;
use serde::Serialize;
use std::collections::BTreeMap;

/// Entries of a [`LogSet`] grouped by tag.
///
/// The index is a snapshot: it owns copies of the entries and is not updated
/// when the source set grows. Build a new one with [`LogSet::tags`] instead.
/// Within a group, entries keep the order they had in the source set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagIndex {
    groups: BTreeMap<String, LogSet>,
}

impl TagIndex {
    pub fn from_set(set: &LogSet) -> Self {
        let groups = set.iter().fold(BTreeMap::new(), |mut groups, entry| {
            groups
                .entry(entry.tag().to_string())
                .or_insert_with(LogSet::new)
                .push(entry.clone());
            groups
        });
        Self { groups }
    }

    pub fn get(&self, tag: &str) -> Option<&LogSet> {
        self.groups.get(tag)
    }

    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LogSet)> {
        self.groups.iter().map(|(tag, set)| (tag.as_str(), set))
    }

    /// Entries over all groups. Equals the length of the source set.
    pub fn entry_count(&self) -> usize {
        self.groups.values().map(LogSet::len).sum()
    }
}

/// Shorthand for [`LogSet::tags`].
pub fn tags_of(set: &LogSet) -> TagIndex {
    set.tags()
}
