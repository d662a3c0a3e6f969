//! User-adjustable view parameters and the pure action transition
//!
//! The transition function is `(params, action) -> Result<params>`: a plain
//! state machine with no UI binding. `Err` means the action was rejected and
//! the caller must retain the prior snapshot (fail closed, no partial
//! application). Store-level actions pass through unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::CoreConfig;
use crate::error::ActionError;
use crate::types::OrderEntry;

/// Action surface accepted from UI collaborators
#[derive(Debug, Clone)]
pub enum Action {
    /// Append a batch to the entry store
    AddEntries(Vec<OrderEntry>),
    /// Replace the venue selection; must be a subset of the known venue set
    SetSelectedVenues(Vec<String>),
    /// Set the recency window, in ms
    SetTimeRange(i64),
    /// Set the visible price range (min, max)
    SetPriceRange(f64, f64),
    /// Set the minimum displayed order size
    SetQuantityThreshold(f64),
    /// Set the camera rotation speed
    SetRotationSpeed(f64),
    /// Flip between Live and Paused
    ToggleRealTime,
    /// Flip pressure-zone display
    TogglePressureZones,
    /// Drop stored entries with `timestamp <= cutoff`
    ClearOlderThan(DateTime<Utc>),
}

/// Immutable view-parameter snapshot
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ViewParameters {
    /// Venues currently displayed; always a subset of the known set
    pub selected_venues: Vec<String>,
    /// Recency window width in ms
    pub time_range_ms: i64,
    /// Visible price range (min, max), inclusive at both ends
    pub price_range: (f64, f64),
    /// Minimum order size to display
    pub quantity_threshold: f64,
    /// Camera rotation speed (0..2, clamped by the presentation layer)
    pub rotation_speed: f64,
    /// Live vs Paused
    pub is_real_time: bool,
    /// Whether pressure zones are rendered
    pub show_pressure_zones: bool,
}

impl ViewParameters {
    /// Initial parameter snapshot for a fresh mount
    pub fn initial(config: &CoreConfig) -> Self {
        Self {
            selected_venues: config
                .venues
                .iter()
                .take(config.initial_selected)
                .cloned()
                .collect(),
            time_range_ms: config.initial_time_range_ms,
            price_range: config.initial_price_range,
            quantity_threshold: config.initial_quantity_threshold,
            rotation_speed: config.initial_rotation_speed,
            is_real_time: true,
            show_pressure_zones: true,
        }
    }

    /// Apply one action, producing a new snapshot
    ///
    /// Total for every variant except the ones §7-style validation rejects:
    /// unknown venues, and negative or non-finite window/threshold values.
    pub fn apply(&self, action: &Action, config: &CoreConfig) -> Result<Self, ActionError> {
        match action {
            Action::SetSelectedVenues(venues) => {
                if let Some(unknown) = venues.iter().find(|v| !config.venues.contains(v)) {
                    return Err(ActionError::UnknownVenue(unknown.clone()));
                }
                Ok(Self {
                    selected_venues: venues.clone(),
                    ..self.clone()
                })
            }
            Action::SetTimeRange(ms) => {
                if *ms < 0 {
                    return Err(ActionError::InvalidTimeRange(*ms));
                }
                Ok(Self {
                    time_range_ms: *ms,
                    ..self.clone()
                })
            }
            Action::SetPriceRange(min, max) => Ok(Self {
                price_range: (*min, *max),
                ..self.clone()
            }),
            Action::SetQuantityThreshold(threshold) => {
                if !threshold.is_finite() || *threshold < 0.0 {
                    return Err(ActionError::InvalidQuantityThreshold(*threshold));
                }
                Ok(Self {
                    quantity_threshold: *threshold,
                    ..self.clone()
                })
            }
            Action::SetRotationSpeed(speed) => Ok(Self {
                rotation_speed: *speed,
                ..self.clone()
            }),
            Action::ToggleRealTime => Ok(Self {
                is_real_time: !self.is_real_time,
                ..self.clone()
            }),
            Action::TogglePressureZones => Ok(Self {
                show_pressure_zones: !self.show_pressure_zones,
                ..self.clone()
            }),
            // Store-level actions leave the parameters untouched
            Action::AddEntries(_) | Action::ClearOlderThan(_) => Ok(self.clone()),
        }
    }
}
