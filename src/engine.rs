//! Owning controller for the visualization core
//!
//! The engine serializes action application: every accepted action mutates the
//! store or the parameter snapshot, then derived state (pressure zones and
//! market statistics) is recomputed wholesale before the call returns. No
//! partial recomputation is ever observable.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::config::CoreConfig;
use crate::error::ActionError;
use crate::filter::{venue_entries, visible_entries};
use crate::params::{Action, ViewParameters};
use crate::stats::{compute_stats, MarketStats};
use crate::store::EntryStore;
use crate::types::{BookSnapshot, OrderEntry, PressureZone};
use crate::zones::compute_zones;

/// Order-book state engine
///
/// Owns the entry store exclusively; collaborators mutate it only through
/// [`dispatch`](Self::dispatch).
#[derive(Debug)]
pub struct BookEngine {
    config: CoreConfig,
    store: EntryStore,
    params: ViewParameters,
    zones: Vec<PressureZone>,
    stats: MarketStats,
}

impl BookEngine {
    /// Create an engine with empty, well-defined initial state
    pub fn new(config: CoreConfig) -> Self {
        let params = ViewParameters::initial(&config);
        Self {
            store: EntryStore::new(config.entry_cap),
            params,
            zones: Vec::new(),
            stats: MarketStats::default(),
            config,
        }
    }

    /// Apply one action
    ///
    /// On `Err` no state changed at all; the rejection is logged and the
    /// previous snapshot remains current.
    pub fn dispatch(&mut self, action: Action) -> Result<(), ActionError> {
        match action {
            Action::AddEntries(batch) => self.store.append(batch),
            Action::ClearOlderThan(cutoff) => self.store.prune_older_than(cutoff),
            other => {
                self.params = self.params.apply(&other, &self.config).inspect_err(|err| {
                    warn!(%err, ?other, "rejected action, retaining previous parameters");
                })?;
            }
        }

        self.recompute();
        Ok(())
    }

    /// Rebuild all derived state from the store and parameters
    fn recompute(&mut self) {
        let input = venue_entries(self.store.iter(), &self.params.selected_venues);
        self.zones = compute_zones(&input, self.params.quantity_threshold, &self.config);
        self.stats = compute_stats(self.store.iter(), &self.params, self.zones.len());
    }

    /// Published read model for rendering collaborators
    pub fn snapshot(&self) -> BookSnapshot {
        BookSnapshot {
            entries: self.store.to_vec(),
            pressure_zones: self.zones.clone(),
            params: self.params.clone(),
            stats: self.stats.clone(),
        }
    }

    /// Entries passing the full view filter, ascending by timestamp
    pub fn visible_entries(&self, now: DateTime<Utc>) -> Vec<OrderEntry> {
        visible_entries(self.store.iter(), &self.params, now)
    }

    /// Current view parameters
    pub fn params(&self) -> &ViewParameters {
        &self.params
    }

    /// Engine configuration
    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Number of stored entries
    pub fn entry_count(&self) -> usize {
        self.store.len()
    }
}
