//! Synthetic order-book feed
//!
//! Produces batches of mock entries per venue and side around a configured
//! base price. Output is a statistical contract (counts and bounds), not
//! exact values; tests pin a seed for reproducibility.

use chrono::{TimeDelta, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::types::{OrderEntry, Side};

/// Price levels generated per venue per side
const LEVELS_PER_SIDE: usize = 20;

/// Quantity distribution bounds (uniform)
const MIN_QUANTITY: f64 = 0.1;
const MAX_QUANTITY: f64 = 5.1;

/// Mock feed generator
///
/// Bids are spread below the base price and asks above it, one $10 step per
/// level with uniform jitter inside the step. Timestamps are
/// uniformly backdated within the current time window so arrivals look
/// spread out rather than clustered at generation instants.
#[derive(Debug)]
pub struct MockFeed {
    base_price: f64,
    rng: StdRng,
}

impl MockFeed {
    /// Create a feed around `base_price` with an OS-seeded random source
    pub fn new(base_price: f64) -> Self {
        Self {
            base_price,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a deterministically seeded feed (test use)
    pub fn with_seed(base_price: f64, seed: u64) -> Self {
        Self {
            base_price,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate one batch: 20 bids and 20 asks per venue
    pub fn generate(&mut self, venues: &[String], time_range_ms: i64) -> Vec<OrderEntry> {
        let now = Utc::now();
        let now_ms = now.timestamp_millis();
        let backdate_span = time_range_ms.max(1);
        let mut entries = Vec::with_capacity(venues.len() * LEVELS_PER_SIDE * 2);

        for venue in venues {
            for seq in 0..LEVELS_PER_SIDE {
                let offset = seq as f64 * 10.0 + self.rng.random_range(0.0..10.0);
                entries.push(OrderEntry {
                    id: format!("{venue}-bid-{seq}-{now_ms}"),
                    venue: venue.clone(),
                    side: Side::Bid,
                    price: self.base_price - offset,
                    quantity: self.rng.random_range(MIN_QUANTITY..MAX_QUANTITY),
                    timestamp: now - TimeDelta::milliseconds(self.rng.random_range(0..backdate_span)),
                });
            }

            for seq in 0..LEVELS_PER_SIDE {
                let offset = seq as f64 * 10.0 + self.rng.random_range(0.0..10.0);
                entries.push(OrderEntry {
                    id: format!("{venue}-ask-{seq}-{now_ms}"),
                    venue: venue.clone(),
                    side: Side::Ask,
                    price: self.base_price + offset,
                    quantity: self.rng.random_range(MIN_QUANTITY..MAX_QUANTITY),
                    timestamp: now - TimeDelta::milliseconds(self.rng.random_range(0..backdate_span)),
                });
            }
        }

        debug!(count = entries.len(), venues = venues.len(), "generated mock batch");
        entries
    }
}
