/// Depthviz Core - Order-Book Visualization State Engine
///
/// State and aggregation core behind a 3D order-book depth visualizer:
/// - Bounded in-memory store of simulated order-book entries
/// - Mock feed generating per-venue bid/ask batches around a base price
/// - Pure filtering pipeline deriving the entries in view
/// - Pressure-zone aggregation over discretized price buckets
/// - View-parameter state machine with fail-closed action validation
/// - Cancellable real-time tick driving generation and pruning
///
/// Rendering, camera, and widget concerns live outside this crate and consume
/// the published [`BookSnapshot`] read model.
pub mod config;
pub mod engine;
pub mod error;
pub mod feed;
pub mod filter;
pub mod params;
pub mod realtime;
pub mod stats;
pub mod store;
pub mod types;
pub mod zones;

// Re-export commonly used types for convenience
pub use config::{CoreConfig, TIME_RANGE_MENU_MS};
pub use engine::BookEngine;
pub use error::ActionError;
pub use feed::MockFeed;
pub use filter::{venue_entries, visible_entries};
pub use params::{Action, ViewParameters};
pub use realtime::RealtimeDriver;
pub use stats::{compute_stats, MarketStats};
pub use store::EntryStore;
pub use types::{BookSnapshot, OrderEntry, PressureZone, Side};
pub use zones::compute_zones;
