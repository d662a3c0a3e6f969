//! Derived market statistics for the stats panel
//!
//! Counts and volume cover the whole store; best bid/ask and spread cover
//! entries matching the venue selection and price range only, mirroring what
//! the panel displays next to the 3D scene.

use serde::{Deserialize, Serialize};

use crate::params::ViewParameters;
use crate::types::OrderEntry;

/// Snapshot of derived market statistics
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MarketStats {
    /// Total stored entries
    pub total_entries: usize,
    /// Bid entries within the venue selection and price range
    pub bid_entries: usize,
    /// Ask entries within the venue selection and price range
    pub ask_entries: usize,
    /// Sum of quantities over all stored entries
    pub total_volume: f64,
    /// Highest bid price in view (None when no bids in view)
    pub best_bid: Option<f64>,
    /// Lowest ask price in view (None when no asks in view)
    pub best_ask: Option<f64>,
    /// `best_ask - best_bid` when both sides are present
    pub spread: Option<f64>,
    /// Number of retained pressure zones
    pub pressure_zone_count: usize,
}

/// Compute statistics over the current store contents
pub fn compute_stats<'a>(
    entries: impl IntoIterator<Item = &'a OrderEntry>,
    params: &ViewParameters,
    pressure_zone_count: usize,
) -> MarketStats {
    let (min_price, max_price) = params.price_range;

    let mut stats = MarketStats {
        pressure_zone_count,
        ..MarketStats::default()
    };

    for entry in entries {
        stats.total_entries += 1;
        stats.total_volume += entry.quantity;

        let in_view = params.selected_venues.contains(&entry.venue)
            && entry.price >= min_price
            && entry.price <= max_price;
        if !in_view {
            continue;
        }

        if entry.side.is_bid() {
            stats.bid_entries += 1;
            stats.best_bid = Some(match stats.best_bid {
                Some(best) => best.max(entry.price),
                None => entry.price,
            });
        } else {
            stats.ask_entries += 1;
            stats.best_ask = Some(match stats.best_ask {
                Some(best) => best.min(entry.price),
                None => entry.price,
            });
        }
    }

    stats.spread = match (stats.best_bid, stats.best_ask) {
        (Some(bid), Some(ask)) => Some(ask - bid),
        _ => None,
    };

    stats
}
