//! Blend settings

use crate::state::GradientState;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SMOOTHNESS: f32 = 0.5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlendSettings {
    /// Transition softness between stops, expected in 0.0..=1.0 (not clamped)
    pub smoothness: f32,
}

impl Default for BlendSettings {
    fn default() -> Self {
        Self {
            smoothness: DEFAULT_SMOOTHNESS,
        }
    }
}

/// Partial update for [`BlendSettings`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlendSettingsUpdate {
    pub smoothness: Option<f32>,
}

impl BlendSettingsUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn smoothness(mut self, smoothness: f32) -> Self {
        self.smoothness = Some(smoothness);
        self
    }
}

impl GradientState {
    pub fn update_blend_settings(&mut self, update: &BlendSettingsUpdate) {
        if let Some(smoothness) = update.smoothness {
            self.blend.smoothness = smoothness;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_without_clamping() {
        let mut state = GradientState::new();
        assert_eq!(state.blend.smoothness, 0.5);

        state.update_blend_settings(&BlendSettingsUpdate::new().smoothness(0.8));
        assert_eq!(state.blend.smoothness, 0.8);

        state.update_blend_settings(&BlendSettingsUpdate::new().smoothness(4.0));
        assert_eq!(state.blend.smoothness, 4.0);

        state.update_blend_settings(&BlendSettingsUpdate::new());
        assert_eq!(state.blend.smoothness, 4.0);
    }
}
