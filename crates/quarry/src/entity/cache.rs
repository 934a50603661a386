use crate::Related;

use indexmap::IndexMap;

use std::{cell::RefCell, fmt};

/// Resolved relationships of one entity instance, keyed by relationship
/// name.
///
/// An entry is written the first time a relationship is resolved and is
/// only dropped through [`Entity::refresh_relation`](crate::Entity::refresh_relation).
#[derive(Default)]
pub struct RelationCache {
    entries: RefCell<IndexMap<String, Related>>,
}

impl RelationCache {
    pub fn new() -> RelationCache {
        RelationCache::default()
    }

    pub fn get(&self, name: &str) -> Option<Related> {
        self.entries.borrow().get(name).cloned()
    }

    pub(crate) fn insert(&self, name: &str, related: Related) {
        self.entries.borrow_mut().insert(name.to_string(), related);
    }

    pub(crate) fn remove(&self, name: &str) -> Option<Related> {
        self.entries.borrow_mut().shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.borrow().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// The cached entries, in the order they were resolved.
    pub fn entries(&self) -> Vec<(String, Related)> {
        self.entries
            .borrow()
            .iter()
            .map(|(name, related)| (name.clone(), related.clone()))
            .collect()
    }
}

impl fmt::Debug for RelationCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.borrow().keys())
            .finish()
    }
}
