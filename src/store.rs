//! Bounded entry storage with insertion-order eviction
//!
//! The store is the core's only mutable resource. It is owned exclusively by
//! the engine and mutated only through `append` and `prune_older_than`.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::types::OrderEntry;

/// Append-only (with eviction) collection of order-book entries
#[derive(Debug, Clone)]
pub struct EntryStore {
    /// Maximum number of entries to keep
    cap: usize,
    /// Entries in insertion order; front is oldest-inserted
    entries: VecDeque<OrderEntry>,
}

impl EntryStore {
    /// Create an empty store retaining at most `cap` entries
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            entries: VecDeque::with_capacity(cap),
        }
    }

    /// Add a batch, then truncate to the most-recently-inserted `cap` entries
    pub fn append(&mut self, batch: Vec<OrderEntry>) {
        self.entries.extend(batch);

        if self.entries.len() > self.cap {
            let excess = self.entries.len() - self.cap;
            self.entries.drain(..excess);
            debug!(evicted = excess, "entry cap reached, dropped oldest entries");
        }
    }

    /// Remove all entries with `timestamp <= cutoff`, preserving the relative
    /// order of survivors
    pub fn prune_older_than(&mut self, cutoff: DateTime<Utc>) {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.timestamp > cutoff);

        let pruned = before - self.entries.len();
        if pruned > 0 {
            debug!(pruned, %cutoff, "pruned aged entries");
        }
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &OrderEntry> {
        self.entries.iter()
    }

    /// Copy out all entries in insertion order
    pub fn to_vec(&self) -> Vec<OrderEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
