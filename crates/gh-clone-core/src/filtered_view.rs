//! Filtered repository list
//!
//! The append-only source list together with an explicit index cache of the
//! positions matching the active filter. Two update paths, matching how the
//! list actually changes:
//!
//! - [`FilteredRepositoryList::append`] tests only the new element against
//!   the active filter (source growth is incremental).
//! - [`FilteredRepositoryList::set_filter`] recomputes the whole cache (the
//!   filter only changes when a debounce settle fires).
//!
//! Ordering falls out of construction: indices are appended in source order,
//! so the visible view is always the matching subset in source order with no
//! duplicates.

use crate::domain_models::RepositoryRecord;

#[derive(Debug, Default)]
pub struct FilteredRepositoryList {
    records: Vec<RepositoryRecord>,
    visible: Vec<usize>,
    filter: String,
}

impl FilteredRepositoryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `record.name` contains `text` case-insensitively, or when
    /// the text is empty or whitespace-only ("no filter").
    pub fn matches(record: &RepositoryRecord, text: &str) -> bool {
        let needle = text.trim();
        if needle.is_empty() {
            return true;
        }
        record
            .name
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }

    /// Append one record to the source, updating the visible cache
    /// incrementally. Returns whether the record is visible under the
    /// active filter.
    pub fn append(&mut self, record: RepositoryRecord) -> bool {
        let index = self.records.len();
        self.records.push(record);
        if Self::matches(&self.records[index], &self.filter) {
            self.visible.push(index);
            true
        } else {
            false
        }
    }

    /// Install a new active filter and recompute the cache over the entire
    /// current source.
    pub fn set_filter(&mut self, text: &str) {
        self.filter = text.to_string();
        self.visible = (0..self.records.len())
            .filter(|&i| Self::matches(&self.records[i], text))
            .collect();
    }

    /// The active (settled) filter text.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn source(&self) -> &[RepositoryRecord] {
        &self.records
    }

    pub fn source_len(&self) -> usize {
        self.records.len()
    }

    pub fn visible(&self) -> impl Iterator<Item = &RepositoryRecord> {
        self.visible.iter().map(|&i| &self.records[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }
}
