//! Keyed reconciliation of sibling lists.
//!
//! Matches the children of two successive render passes by identity: a
//! child's explicit key, or its position when it has none. Content is never
//! compared; a kept key means the host may reuse whatever it built for that
//! child last time.
//!
//! Duplicate identities are tolerated. They are logged and the last
//! occurrence wins, so the earlier sibling is treated as if it were absent.

use std::collections::HashMap;

use crate::element::Node;
use crate::key::Key;

/// Identity to position lookup for one list of siblings.
#[derive(Debug, Clone, Default)]
pub struct KeyedIndex {
    positions: HashMap<Key, usize>,
    duplicates: Vec<Key>,
}

impl KeyedIndex {
    pub fn get(&self, key: &Key) -> Option<usize> {
        self.positions.get(key).copied()
    }

    pub fn contains(&self, key: &Key) -> bool {
        self.positions.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Keys that appeared more than once, in the order they were seen again.
    pub fn duplicates(&self) -> &[Key] {
        &self.duplicates
    }
}

/// What happened to one child between two render passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// Same identity in both passes. `from != to` means it moved.
    Keep { key: Key, from: usize, to: usize },
    /// New identity at position `at`.
    Insert { key: Key, at: usize },
    /// Identity gone from the new pass.
    Remove { key: Key, from: usize },
}

impl Change {
    pub fn key(&self) -> &Key {
        match self {
            Self::Keep { key, .. } | Self::Insert { key, .. } | Self::Remove { key, .. } => key,
        }
    }

    pub fn is_move(&self) -> bool {
        matches!(self, Self::Keep { from, to, .. } if from != to)
    }
}

/// Index a list of siblings by identity.
pub fn index_children(children: &[Node]) -> KeyedIndex {
    let mut index = KeyedIndex::default();
    for (position, child) in children.iter().enumerate() {
        let key = child.identity(position);
        if let Some(previous) = index.positions.insert(key.clone(), position) {
            log::warn!(
                "duplicate key {key:?} at positions {previous} and {position}; keeping the last"
            );
            index.duplicates.push(key);
        }
    }
    index
}

/// Compute the changes that turn `old` siblings into `new` siblings.
///
/// Changes for the new list come first, in new order, followed by removals
/// in old order.
pub fn diff(old: &[Node], new: &[Node]) -> Vec<Change> {
    let old_index = index_children(old);
    let new_index = index_children(new);
    let mut changes = Vec::with_capacity(new.len());

    for (to, child) in new.iter().enumerate() {
        let key = child.identity(to);
        // Shadowed duplicates in the new list are skipped; the last one stands.
        if new_index.get(&key) != Some(to) {
            continue;
        }
        match old_index.get(&key) {
            Some(from) => changes.push(Change::Keep { key, from, to }),
            None => changes.push(Change::Insert { key, at: to }),
        }
    }

    for (from, child) in old.iter().enumerate() {
        let key = child.identity(from);
        if old_index.get(&key) == Some(from) && !new_index.contains(&key) {
            changes.push(Change::Remove { key, from });
        }
    }

    log::debug!(
        "reconciled {} -> {} children: {} kept, {} inserted, {} removed",
        old.len(),
        new.len(),
        changes
            .iter()
            .filter(|c| matches!(c, Change::Keep { .. }))
            .count(),
        changes
            .iter()
            .filter(|c| matches!(c, Change::Insert { .. }))
            .count(),
        changes
            .iter()
            .filter(|c| matches!(c, Change::Remove { .. }))
            .count(),
    );

    changes
}
