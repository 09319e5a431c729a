//! Color stops of the linear gradient
//!
//! The stop list is kept sorted ascending by position after every mutation
//! and never shrinks below [`MIN_COLOR_STOPS`] through removal. Equal
//! positions keep their relative insertion order (stable sort); NaN
//! positions, whatever their sign bit, sort after every other position.
//!
//! New ids are one past the largest id in use and saturate at
//! `StopId::MAX`, so a list holding a caller-chosen `StopId::MAX` gets a
//! duplicate id rather than a panic.

use crate::state::GradientState;
use serde::{Deserialize, Serialize};

pub type StopId = u32;

/// Removal is refused once the list is this short
pub const MIN_COLOR_STOPS: usize = 2;

/// Offset from the last stop used when a new stop has no explicit position
pub const POSITION_STEP: f32 = 0.1;

/// Position used for the first stop of an empty list
pub const FALLBACK_POSITION: f32 = 0.5;

/// One anchor of the gradient
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub id: StopId,
    /// Color value, opaque to the store (usually a CSS hex string)
    pub color: String,
    /// Position along the gradient, expected in 0.0..=1.0 but not clamped
    pub position: f32,
}

impl ColorStop {
    pub fn new(id: StopId, color: impl Into<String>, position: f32) -> Self {
        Self {
            id,
            color: color.into(),
            position,
        }
    }
}

/// Partial update for a [`ColorStop`]; `None` fields are left untouched
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorStopUpdate {
    /// Re-keys the stop; uniqueness is the caller's problem
    pub id: Option<StopId>,
    pub color: Option<String>,
    pub position: Option<f32>,
}

impl ColorStopUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: StopId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn position(mut self, position: f32) -> Self {
        self.position = Some(position);
        self
    }

    fn apply(&self, stop: &mut ColorStop) {
        if let Some(id) = self.id {
            stop.id = id;
        }
        if let Some(color) = &self.color {
            stop.color = color.clone();
        }
        if let Some(position) = self.position {
            stop.position = position;
        }
    }
}

/// The two-stop red to blue gradient every session starts with
pub fn default_color_stops() -> Vec<ColorStop> {
    vec![
        ColorStop::new(1, "#ff0000", 0.0),
        ColorStop::new(2, "#0000ff", 1.0),
    ]
}

pub fn sort_by_position(stops: &mut [ColorStop]) {
    stops.sort_by(|a, b| {
        a.position
            .is_nan()
            .cmp(&b.position.is_nan())
            .then_with(|| a.position.total_cmp(&b.position))
    });
}

/// One past the largest id in use (1 for an empty list), saturating
pub fn next_stop_id(stops: &[ColorStop]) -> StopId {
    stops
        .iter()
        .map(|stop| stop.id)
        .max()
        .unwrap_or(0)
        .saturating_add(1)
}

/// Default position for an appended stop: a step past the last one, capped at 1
pub fn next_stop_position(stops: &[ColorStop]) -> f32 {
    stops
        .last()
        .map(|last| (last.position + POSITION_STEP).min(1.0))
        .unwrap_or(FALLBACK_POSITION)
}

impl GradientState {
    /// Append a stop and re-sort; returns the id it was given
    pub fn add_color_stop(&mut self, color: impl Into<String>, position: Option<f32>) -> StopId {
        let id = next_stop_id(&self.color_stops);
        let position = position.unwrap_or_else(|| next_stop_position(&self.color_stops));
        self.color_stops.push(ColorStop::new(id, color, position));
        sort_by_position(&mut self.color_stops);
        id
    }

    /// Remove the first stop with `id`
    ///
    /// Refused while the list holds [`MIN_COLOR_STOPS`] or fewer stops.
    /// Returns `false` when nothing was removed.
    pub fn remove_color_stop(&mut self, id: StopId) -> bool {
        if self.color_stops.len() <= MIN_COLOR_STOPS {
            tracing::debug!(
                "remove_color_stop({}): refused, only {} stops left",
                id,
                self.color_stops.len()
            );
            return false;
        }

        match self.color_stops.iter().position(|stop| stop.id == id) {
            Some(index) => {
                self.color_stops.remove(index);
                true
            }
            None => {
                tracing::debug!("remove_color_stop({}): no such stop", id);
                false
            }
        }
    }

    /// Merge `update` into the first stop with `id`, re-sorting if it moved
    pub fn update_color_stop(&mut self, id: StopId, update: &ColorStopUpdate) -> bool {
        let Some(stop) = self.color_stops.iter_mut().find(|stop| stop.id == id) else {
            tracing::debug!("update_color_stop({}): no such stop", id);
            return false;
        };

        update.apply(stop);
        if update.position.is_some() {
            sort_by_position(&mut self.color_stops);
        }
        true
    }

    pub fn color_stop(&self, id: StopId) -> Option<&ColorStop> {
        self.color_stops.iter().find(|stop| stop.id == id)
    }
}
