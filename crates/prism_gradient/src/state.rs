//! Gradient definition data
//!
//! The mutation logic lives next to each part of the state
//! ([`crate::stops`], [`crate::blend`], [`crate::mesh`]); this module only
//! declares the aggregate.

use crate::blend::BlendSettings;
use crate::mesh::{MeshConfig, MeshNode};
use crate::stops::{default_color_stops, sort_by_position, ColorStop};
use serde::{Deserialize, Serialize};

/// Everything the gradient editor works on
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientState {
    /// Sorted ascending by position
    pub color_stops: Vec<ColorStop>,
    pub blend: BlendSettings,
    pub mesh: MeshConfig,
    pub mesh_nodes: Vec<MeshNode>,
}

impl GradientState {
    pub fn new() -> Self {
        Self {
            color_stops: default_color_stops(),
            blend: BlendSettings::default(),
            mesh: MeshConfig::default(),
            mesh_nodes: Vec::new(),
        }
    }

    /// Default state with the given stops, sorted by position
    pub fn with_color_stops(mut color_stops: Vec<ColorStop>) -> Self {
        sort_by_position(&mut color_stops);
        Self {
            color_stops,
            ..Self::new()
        }
    }

    pub fn with_blend(mut self, blend: BlendSettings) -> Self {
        self.blend = blend;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshConfig) -> Self {
        self.mesh = mesh;
        self
    }
}

impl Default for GradientState {
    fn default() -> Self {
        Self::new()
    }
}
