use std::collections::HashMap;
use std::hash::Hash;

/// Buckets that remember the order in which their keys were first seen.
#[derive(Debug)]
pub(crate) struct OrderedGroups<K, T> {
    index: HashMap<K, usize>,
    groups: Vec<T>,
}

impl<K: Eq + Hash, T> OrderedGroups<K, T> {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }

    /// Bucket for `key`, created with `init` on first use
    pub fn entry(&mut self, key: K, init: impl FnOnce() -> T) -> &mut T {
        let position = *self.index.entry(key).or_insert_with(|| {
            self.groups.push(init());
            self.groups.len() - 1
        });
        &mut self.groups[position]
    }

    pub fn into_vec(self) -> Vec<T> {
        self.groups
    }
}
