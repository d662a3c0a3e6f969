/// Depth Feed Demo
///
/// Runs the visualization core headless: builds the engine from config, starts
/// the real-time driver, and logs a JSON snapshot summary every tick until
/// ctrl-c. Stands in for the rendering shell during development.
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tokio::sync::Mutex;
use tracing::{info, warn};

use depthviz_core::{BookEngine, CoreConfig, MockFeed, RealtimeDriver};

/// Get base price from BASE_PRICE env var (default: 42500)
fn base_price() -> f64 {
    std::env::var("BASE_PRICE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(42_500.0)
}

/// Get tick period in ms from TICK_MS env var (default: 1000)
fn tick_ms() -> u64 {
    std::env::var("TICK_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1000)
}

/// Initialize logging
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let config = CoreConfig {
        base_price: base_price(),
        tick_period: Duration::from_millis(tick_ms()),
        ..CoreConfig::default()
    };
    info!(
        venues = ?config.venues,
        base_price = config.base_price,
        "starting depth feed"
    );

    let feed = MockFeed::new(config.base_price);
    let engine = Arc::new(Mutex::new(BookEngine::new(config.clone())));
    let mut driver = RealtimeDriver::new(Arc::clone(&engine), feed);
    driver.start().await;

    let mut report = tokio::time::interval(config.tick_period);
    loop {
        tokio::select! {
            _ = report.tick() => {
                let snapshot = engine.lock().await.snapshot();
                let summary = json!({
                    "entries": snapshot.entries.len(),
                    "zones": snapshot.pressure_zones.len(),
                    "top_zone": snapshot.pressure_zones.first().map(|z| z.price_level),
                    "best_bid": snapshot.stats.best_bid,
                    "best_ask": snapshot.stats.best_ask,
                    "spread": snapshot.stats.spread,
                    "live": snapshot.params.is_real_time,
                });
                info!(%summary, "book snapshot");
            }
            result = tokio::signal::ctrl_c() => {
                if let Err(err) = result {
                    warn!(%err, "ctrl-c handler failed, shutting down anyway");
                }
                break;
            }
        }
    }

    driver.shutdown();
    info!("depth feed stopped");
    Ok(())
}
