//! Pressure-zone aggregation
//!
//! Groups venue-selected entries into discretized price buckets, gates weak
//! buckets out, and ranks the survivors. The zone set is rebuilt from scratch
//! on every input change; the previous set is discarded wholesale.

use std::cmp::Ordering;

use indexmap::IndexMap;
use tracing::trace;

use crate::config::CoreConfig;
use crate::types::{OrderEntry, PressureZone};

/// Quantity at which a zone saturates to intensity 1.0
const INTENSITY_SCALE: f64 = 10.0;

/// Running per-bucket accumulator
#[derive(Debug, Default)]
struct Bucket {
    total_quantity: f64,
    venues: Vec<String>,
}

/// Align a price to its bucket index (round half away from zero)
#[inline]
fn bucket_index(price: f64, width: f64) -> i64 {
    (price / width).round() as i64
}

/// Compute the top pressure zones for the given entries
///
/// Input must already be restricted to the venue selection; the time, price,
/// and per-entry quantity clauses of the view filter do not apply here. Only
/// the zone-level gate (`total_quantity > threshold * gate_multiplier`,
/// strict) filters output. Ties in the descending sort preserve
/// bucket-creation order. Empty input yields an empty list.
pub fn compute_zones<'a>(
    entries: impl IntoIterator<Item = &'a OrderEntry>,
    quantity_threshold: f64,
    config: &CoreConfig,
) -> Vec<PressureZone> {
    let mut buckets: IndexMap<i64, Bucket> = IndexMap::new();

    for entry in entries {
        let bucket = buckets
            .entry(bucket_index(entry.price, config.bucket_width))
            .or_default();
        bucket.total_quantity += entry.quantity;
        if !bucket.venues.contains(&entry.venue) {
            bucket.venues.push(entry.venue.clone());
        }
    }

    let gate = quantity_threshold * config.zone_gate_multiplier;
    let mut zones: Vec<PressureZone> = buckets
        .into_iter()
        .filter(|(_, bucket)| bucket.total_quantity > gate)
        .map(|(index, bucket)| PressureZone {
            price_level: index as f64 * config.bucket_width,
            total_quantity: bucket.total_quantity,
            intensity: (bucket.total_quantity / INTENSITY_SCALE).min(1.0),
            venues: bucket.venues,
        })
        .collect();

    // Vec::sort_by is stable, so equal sums keep bucket-creation order
    zones.sort_by(|a, b| {
        b.total_quantity
            .partial_cmp(&a.total_quantity)
            .unwrap_or(Ordering::Equal)
    });
    zones.truncate(config.max_zones);

    trace!(zones = zones.len(), gate, "recomputed pressure zones");
    zones
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;
    use chrono::Utc;

    fn entry(venue: &str, side: Side, price: f64, quantity: f64) -> OrderEntry {
        let now = Utc::now();
        OrderEntry {
            id: format!("{venue}-{side}-0-{}", now.timestamp_millis()),
            venue: venue.to_string(),
            side,
            price,
            quantity,
            timestamp: now,
        }
    }

    #[test]
    fn test_empty_input_yields_empty_zones() {
        let entries: Vec<OrderEntry> = Vec::new();
        let zones = compute_zones(&entries, 1.0, &CoreConfig::default());
        assert!(zones.is_empty());
    }

    #[test]
    fn test_bucket_rounding_boundaries() {
        let config = CoreConfig::default();
        let entries = vec![
            entry("Binance", Side::Bid, 104.9, 10.0), // -> 100
            entry("Binance", Side::Bid, 105.0, 10.0), // half rounds up -> 110
            entry("Binance", Side::Bid, 108.0, 10.0), // -> 110
        ];

        let zones = compute_zones(&entries, 0.0, &config);
        assert_eq!(zones.len(), 2);

        let bucket_110 = zones.iter().find(|z| z.price_level == 110.0).unwrap();
        assert_eq!(bucket_110.total_quantity, 20.0);
        let bucket_100 = zones.iter().find(|z| z.price_level == 100.0).unwrap();
        assert_eq!(bucket_100.total_quantity, 10.0);
    }

    #[test]
    fn test_reference_scenario() {
        // venues [A=Binance, B=OKX], threshold 1.0 -> gate 5.0:
        // bucket 100 sums 8.0 from both venues, bucket 110 holds 1.0 and drops
        let config = CoreConfig::default();
        let entries = vec![
            entry("Binance", Side::Bid, 100.0, 4.0),
            entry("OKX", Side::Bid, 102.0, 4.0),
            entry("Binance", Side::Ask, 108.0, 1.0),
        ];

        let zones = compute_zones(&entries, 1.0, &config);
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].price_level, 100.0);
        assert_eq!(zones[0].total_quantity, 8.0);
        assert_eq!(zones[0].venues, vec!["Binance", "OKX"]);
    }

    #[test]
    fn test_gate_is_strict() {
        let config = CoreConfig::default();
        // gate = 1.0 * 5 = 5.0
        let at_gate = vec![entry("Binance", Side::Bid, 100.0, 5.0)];
        assert!(compute_zones(&at_gate, 1.0, &config).is_empty());

        let above_gate = vec![entry("Binance", Side::Bid, 100.0, 6.0)];
        assert_eq!(compute_zones(&above_gate, 1.0, &config).len(), 1);
    }

    #[test]
    fn test_intensity_normalized_and_capped() {
        let config = CoreConfig::default();
        let entries = vec![
            entry("Binance", Side::Bid, 100.0, 4.0),
            entry("Binance", Side::Bid, 200.0, 25.0),
        ];

        let zones = compute_zones(&entries, 0.0, &config);
        let weak = zones.iter().find(|z| z.price_level == 100.0).unwrap();
        assert!((weak.intensity - 0.4).abs() < 1e-9);
        let saturated = zones.iter().find(|z| z.price_level == 200.0).unwrap();
        assert_eq!(saturated.intensity, 1.0);
    }

    #[test]
    fn test_ranking_descending_and_truncated() {
        let config = CoreConfig::default();
        // 12 buckets with increasing sums, all past the gate
        let entries: Vec<OrderEntry> = (0..12)
            .map(|i| entry("Binance", Side::Bid, 100.0 + i as f64 * 10.0, (i + 1) as f64))
            .collect();

        let zones = compute_zones(&entries, 0.0, &config);
        assert_eq!(zones.len(), 10);
        for pair in zones.windows(2) {
            assert!(pair[0].total_quantity >= pair[1].total_quantity);
        }
        // The two weakest buckets fell off
        assert!(zones.iter().all(|z| z.total_quantity >= 3.0));
    }

    #[test]
    fn test_ties_preserve_bucket_creation_order() {
        let config = CoreConfig::default();
        let entries = vec![
            entry("Binance", Side::Bid, 200.0, 4.0),
            entry("Binance", Side::Bid, 100.0, 4.0),
            entry("Binance", Side::Bid, 300.0, 4.0),
        ];

        let zones = compute_zones(&entries, 0.0, &config);
        let levels: Vec<f64> = zones.iter().map(|z| z.price_level).collect();
        assert_eq!(levels, vec![200.0, 100.0, 300.0]);
    }

    #[test]
    fn test_venues_deduplicated() {
        let config = CoreConfig::default();
        let entries = vec![
            entry("Binance", Side::Bid, 100.0, 3.0),
            entry("Binance", Side::Ask, 101.0, 3.0),
            entry("OKX", Side::Bid, 99.0, 3.0),
        ];

        let zones = compute_zones(&entries, 0.0, &config);
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].venues, vec!["Binance", "OKX"]);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let config = CoreConfig::default();
        let entries = vec![
            entry("Binance", Side::Bid, 100.0, 4.0),
            entry("OKX", Side::Bid, 102.0, 4.0),
        ];

        let first = compute_zones(&entries, 0.1, &config);
        let second = compute_zones(&entries, 0.1, &config);
        assert_eq!(first, second);
    }
}
