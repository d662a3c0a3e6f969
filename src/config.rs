//! Adjustable configuration for the visualization core
//!
//! Everything the reference scenario treats as a constant is surfaced here so
//! tests and embedders can tune it.

use std::time::Duration;

/// Time-range menu offered to UI collaborators: 1m / 5m / 15m / 1h, in ms.
pub const TIME_RANGE_MENU_MS: [i64; 4] = [60_000, 300_000, 900_000, 3_600_000];

/// Core configuration
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Known venue set; `selected_venues` is always a subset of this
    pub venues: Vec<String>,
    /// Maximum entries retained by the store (oldest evicted first)
    pub entry_cap: usize,
    /// Real-time generation period
    pub tick_period: Duration,
    /// Price bucket width for pressure-zone aggregation
    pub bucket_width: f64,
    /// A zone is retained only if `total_quantity > threshold * gate_multiplier`
    pub zone_gate_multiplier: f64,
    /// Maximum number of retained pressure zones
    pub max_zones: usize,
    /// Reference price the mock feed generates around
    pub base_price: f64,
    /// Initial number of venues selected (prefix of `venues`)
    pub initial_selected: usize,
    /// Initial time window in ms
    pub initial_time_range_ms: i64,
    /// Initial visible price range (min, max)
    pub initial_price_range: (f64, f64),
    /// Initial minimum order size to display
    pub initial_quantity_threshold: f64,
    /// Initial camera rotation speed (0..2)
    pub initial_rotation_speed: f64,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            venues: vec![
                "Binance".to_string(),
                "OKX".to_string(),
                "Bybit".to_string(),
                "Deribit".to_string(),
            ],
            entry_cap: 1000,
            tick_period: Duration::from_millis(1000),
            bucket_width: 10.0,
            zone_gate_multiplier: 5.0,
            max_zones: 10,
            base_price: 42_500.0,
            initial_selected: 2,
            initial_time_range_ms: 300_000,
            initial_price_range: (40_000.0, 45_000.0),
            initial_quantity_threshold: 0.1,
            initial_rotation_speed: 0.5,
        }
    }
}
