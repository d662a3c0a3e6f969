//! Pure filtering pipeline
//!
//! Derives the subset of entries relevant to the current view. Both functions
//! are pure and recomputed wholesale whenever any input changes; nothing here
//! is incrementally maintained.

use chrono::{DateTime, TimeDelta, Utc};

use crate::params::ViewParameters;
use crate::types::OrderEntry;

/// Entries visible to the rendering layer
///
/// An entry survives iff its venue is selected, it falls within the recency
/// window (strictly newer than `now - time_range`), its price lies inside the
/// price range (inclusive at both edges), and its quantity is at least the
/// display threshold. Output is ascending by timestamp.
pub fn visible_entries<'a>(
    entries: impl IntoIterator<Item = &'a OrderEntry>,
    params: &ViewParameters,
    now: DateTime<Utc>,
) -> Vec<OrderEntry> {
    let horizon = now - TimeDelta::milliseconds(params.time_range_ms);
    let (min_price, max_price) = params.price_range;

    let mut visible: Vec<OrderEntry> = entries
        .into_iter()
        .filter(|entry| {
            params.selected_venues.contains(&entry.venue)
                && entry.timestamp > horizon
                && entry.price >= min_price
                && entry.price <= max_price
                && entry.quantity >= params.quantity_threshold
        })
        .cloned()
        .collect();

    visible.sort_by_key(|entry| entry.timestamp);
    visible
}

/// Entries restricted to the venue selection only
///
/// This is the aggregation input: the time, price, and per-entry quantity
/// clauses deliberately do not apply here. Only the zone-level gate filters
/// aggregated output.
pub fn venue_entries<'a>(
    entries: impl IntoIterator<Item = &'a OrderEntry>,
    selected_venues: &[String],
) -> Vec<OrderEntry> {
    entries
        .into_iter()
        .filter(|entry| selected_venues.contains(&entry.venue))
        .cloned()
        .collect()
}
