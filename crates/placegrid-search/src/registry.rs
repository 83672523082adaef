//! Run-scoped set of entity ids already returned by some point search.

use std::collections::HashSet;

/// The dedup set shared by every point search and grid level of one run.
///
/// Owned by exactly one in-flight run and passed down by `&mut`; concurrent
/// runs need their own registries.
#[derive(Debug, Default)]
pub struct DedupRegistry {
    seen: HashSet<String>,
}

impl DedupRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets every id. Called at the start of each run.
    pub fn clear(&mut self) {
        self.seen.clear();
    }

    #[must_use]
    pub fn contains(&self, entity_id: &str) -> bool {
        self.seen.contains(entity_id)
    }

    /// Records `entity_id`, returning `false` if it was already present.
    pub fn insert(&mut self, entity_id: &str) -> bool {
        if self.seen.contains(entity_id) {
            return false;
        }
        self.seen.insert(entity_id.to_owned())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
