//! Real-time tick driver
//!
//! Owns the cancellable 1-second generation task. While Live, each tick
//! generates a mock batch, appends it, and prunes entries older than the
//! current window. Pausing aborts the pending task; changing the time range
//! replaces it atomically so no stale closure acts on outdated parameters.

use std::sync::Arc;

use chrono::{TimeDelta, Utc};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::engine::BookEngine;
use crate::error::ActionError;
use crate::feed::MockFeed;
use crate::params::Action;

/// Drives a [`BookEngine`] with periodic mock data while Live
///
/// All real-time wiring goes through [`dispatch`](Self::dispatch); dispatching
/// directly on the engine works but will not start or stop the tick task.
pub struct RealtimeDriver {
    engine: Arc<Mutex<BookEngine>>,
    feed: Arc<Mutex<MockFeed>>,
    tick: Option<JoinHandle<()>>,
}

impl RealtimeDriver {
    pub fn new(engine: Arc<Mutex<BookEngine>>, feed: MockFeed) -> Self {
        Self {
            engine,
            feed: Arc::new(Mutex::new(feed)),
            tick: None,
        }
    }

    /// Initial mount: one immediate generation regardless of state, then the
    /// periodic tick if Live
    pub async fn start(&mut self) {
        self.generate_once().await;
        if self.engine.lock().await.params().is_real_time {
            self.spawn_tick().await;
        }
    }

    /// Apply one action and rewire the tick task where required
    pub async fn dispatch(&mut self, action: Action) -> Result<(), ActionError> {
        let toggles_real_time = matches!(action, Action::ToggleRealTime);
        let reschedules = matches!(action, Action::SetTimeRange(_));

        self.engine.lock().await.dispatch(action)?;

        if toggles_real_time {
            if self.engine.lock().await.params().is_real_time {
                info!("real-time resumed");
                self.spawn_tick().await;
            } else {
                info!("real-time paused, cancelling pending tick");
                self.cancel_tick();
            }
        } else if reschedules && self.engine.lock().await.params().is_real_time {
            debug!("time range changed, rescheduling tick");
            self.spawn_tick().await;
        }

        Ok(())
    }

    /// Whether a tick task is currently scheduled
    pub fn is_ticking(&self) -> bool {
        self.tick.is_some()
    }

    /// Cancel the tick task; the engine keeps its state
    pub fn shutdown(&mut self) {
        self.cancel_tick();
    }

    async fn generate_once(&self) {
        let mut engine = self.engine.lock().await;
        let venues = engine.config().venues.clone();
        let window = engine.params().time_range_ms;
        let batch = self.feed.lock().await.generate(&venues, window);
        if let Err(err) = engine.dispatch(Action::AddEntries(batch)) {
            warn!(%err, "initial generation rejected");
        }
    }

    /// Replace the owned tick handle, aborting any previous task first
    async fn spawn_tick(&mut self) {
        self.cancel_tick();

        let period = self.engine.lock().await.config().tick_period;
        let engine = Arc::clone(&self.engine);
        let feed = Arc::clone(&self.feed);

        // First fire one full period out from spawn, matching the reference
        // cadence; sample the deadline here so it anchors to spawn time rather
        // than the task's first poll
        let first_fire = Instant::now() + period;
        self.tick = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(first_fire, period);
            loop {
                interval.tick().await;

                let mut engine = engine.lock().await;
                let venues = engine.config().venues.clone();
                let window = engine.params().time_range_ms;
                let batch = feed.lock().await.generate(&venues, window);
                if let Err(err) = engine.dispatch(Action::AddEntries(batch)) {
                    warn!(%err, "tick append rejected");
                }
                let cutoff = Utc::now() - TimeDelta::milliseconds(window);
                if let Err(err) = engine.dispatch(Action::ClearOlderThan(cutoff)) {
                    warn!(%err, "tick prune rejected");
                }
            }
        }));
    }

    fn cancel_tick(&mut self) {
        if let Some(handle) = self.tick.take() {
            handle.abort();
        }
    }
}

impl Drop for RealtimeDriver {
    fn drop(&mut self) {
        self.cancel_tick();
    }
}
