/// Core data types for the order-book visualization state
///
/// These types form the published read model consumed by the rendering layer.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::params::ViewParameters;
use crate::stats::MarketStats;

/// Order side (Bid or Ask)
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub enum Side {
    Bid,
    Ask,
}

impl Side {
    /// Convert to display string
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Bid => "bid",
            Side::Ask => "ask",
        }
    }

    /// Check if this is a bid (buy) order
    pub fn is_bid(&self) -> bool {
        matches!(self, Side::Bid)
    }

    /// Check if this is an ask (sell) order
    pub fn is_ask(&self) -> bool {
        matches!(self, Side::Ask)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One resting order observation
///
/// Created only by the mock feed and immutable thereafter; removed only by
/// cap eviction in the [`EntryStore`](crate::store::EntryStore) or by
/// age-based pruning.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct OrderEntry {
    /// Unique id: `{venue}-{side}-{seq}-{millis}`
    pub id: String,
    /// Venue that contributed the order
    pub venue: String,
    /// Bid or ask
    pub side: Side,
    /// Price in venue-currency units
    pub price: f64,
    /// Order size (base units), >= 0
    pub quantity: f64,
    /// Observation time; may be backdated within the current window
    pub timestamp: DateTime<Utc>,
}

/// A price bucket with concentrated resting quantity
///
/// Derived wholesale by the aggregator on every input change; never patched
/// incrementally.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PressureZone {
    /// Price rounded to the nearest bucket width
    pub price_level: f64,
    /// Sum of quantities of all contributing entries
    pub total_quantity: f64,
    /// Normalized concentration, always in [0, 1]
    pub intensity: f64,
    /// Distinct contributing venues, in first-contribution order
    pub venues: Vec<String>,
}

/// Published read model for rendering collaborators
///
/// A fresh snapshot is available after every dispatched action; before any
/// data generation it is a well-defined empty state.
#[derive(Debug, Clone, Serialize)]
pub struct BookSnapshot {
    /// All stored entries, in insertion order
    pub entries: Vec<OrderEntry>,
    /// Current top pressure zones, descending by total quantity
    pub pressure_zones: Vec<PressureZone>,
    /// Current view parameters
    pub params: ViewParameters,
    /// Derived market statistics
    pub stats: MarketStats,
}
