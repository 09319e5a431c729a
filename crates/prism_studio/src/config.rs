//! Studio configuration file handling
//!
//! `prism.toml` seeds the initial state of the stores. Every section and
//! field is optional; anything missing falls back to the built-in defaults.
//!
//! ```toml
//! [animation]
//! speed = 0.02
//! pattern = "cosine"
//! easing = "ease-in-out"
//!
//! [[gradient.stops]]
//! color = "#ff8800"
//! position = 0.0
//!
//! [[gradient.stops]]
//! color = "#0088ff"
//! position = 1.0
//!
//! [gradient.mesh]
//! rows = 8
//! ```
//!
//! The stores themselves are never written back to this file.

use prism_animation::{AnimationState, Easing, Pattern, DEFAULT_SPEED};
use prism_core::{Error, Result};
use prism_gradient::{
    default_color_stops, BlendSettings, ColorStop, GradientState, MeshConfig, StopId,
    DEFAULT_MESH_COLUMNS, DEFAULT_MESH_ROWS, DEFAULT_SMOOTHNESS, MIN_COLOR_STOPS,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Conventional file name looked up by applications
pub const CONFIG_FILE_NAME: &str = "prism.toml";

// =============================================================================
// prism.toml
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StudioConfig {
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub gradient: GradientConfig,
}

/// `[animation]` section
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnimationConfig {
    #[serde(default = "default_speed")]
    pub speed: f32,
    #[serde(default)]
    pub pattern: Pattern,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default = "default_true")]
    pub playing: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            pattern: Pattern::default(),
            easing: Easing::default(),
            playing: true,
        }
    }
}

/// `[gradient]` section
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GradientConfig {
    #[serde(default = "default_stops")]
    pub stops: Vec<StopConfig>,
    #[serde(default = "default_smoothness")]
    pub smoothness: f32,
    #[serde(default)]
    pub mesh: MeshSettings,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            stops: default_stops(),
            smoothness: default_smoothness(),
            mesh: MeshSettings::default(),
        }
    }
}

/// `[[gradient.stops]]` entry; ids are assigned in file order
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StopConfig {
    pub color: String,
    pub position: f32,
}

/// `[gradient.mesh]` section
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MeshSettings {
    #[serde(default = "default_rows")]
    pub rows: u32,
    #[serde(default = "default_columns")]
    pub columns: u32,
    #[serde(default = "default_true")]
    pub visible: bool,
}

impl Default for MeshSettings {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            columns: default_columns(),
            visible: true,
        }
    }
}

fn default_speed() -> f32 {
    DEFAULT_SPEED
}

fn default_true() -> bool {
    true
}

fn default_stops() -> Vec<StopConfig> {
    default_color_stops()
        .into_iter()
        .map(|stop| StopConfig {
            color: stop.color,
            position: stop.position,
        })
        .collect()
}

fn default_smoothness() -> f32 {
    DEFAULT_SMOOTHNESS
}

fn default_rows() -> u32 {
    DEFAULT_MESH_ROWS
}

fn default_columns() -> u32 {
    DEFAULT_MESH_COLUMNS
}

impl StudioConfig {
    /// Parse and validate configuration text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: StudioConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!("Loaded studio config from {}", path.display());
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the stores would otherwise start out broken with
    pub fn validate(&self) -> Result<()> {
        if !self.animation.speed.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "animation.speed must be finite, got {}",
                self.animation.speed
            )));
        }

        let gradient = &self.gradient;
        if gradient.stops.len() < MIN_COLOR_STOPS {
            return Err(Error::InvalidConfig(format!(
                "gradient needs at least {} stops, got {}",
                MIN_COLOR_STOPS,
                gradient.stops.len()
            )));
        }
        for (index, stop) in gradient.stops.iter().enumerate() {
            if !in_unit_range(stop.position) {
                return Err(Error::InvalidConfig(format!(
                    "gradient.stops[{}].position must be within 0..=1, got {}",
                    index, stop.position
                )));
            }
        }
        if !in_unit_range(gradient.smoothness) {
            return Err(Error::InvalidConfig(format!(
                "gradient.smoothness must be within 0..=1, got {}",
                gradient.smoothness
            )));
        }
        Ok(())
    }
}

fn in_unit_range(value: f32) -> bool {
    (0.0..=1.0).contains(&value)
}

impl AnimationConfig {
    pub fn to_state(&self) -> AnimationState {
        AnimationState {
            speed: self.speed,
            pattern: self.pattern,
            easing: self.easing,
            is_playing: self.playing,
        }
    }
}

impl GradientConfig {
    /// Initial gradient state; stops get ids `1..=n` in file order, then sort
    pub fn to_state(&self) -> GradientState {
        let stops = self
            .stops
            .iter()
            .zip(1..)
            .map(|(stop, id): (&StopConfig, StopId)| {
                ColorStop::new(id, stop.color.clone(), stop.position)
            })
            .collect();

        GradientState::with_color_stops(stops)
            .with_blend(BlendSettings {
                smoothness: self.smoothness,
            })
            .with_mesh(MeshConfig {
                rows: self.mesh.rows,
                columns: self.mesh.columns,
                visible: self.mesh.visible,
                selected_node_id: None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = StudioConfig::from_toml_str("").unwrap();
        assert_eq!(config, StudioConfig::default());
        assert_eq!(config.animation.to_state(), AnimationState::default());
        assert_eq!(config.gradient.to_state(), GradientState::new());
    }

    #[test]
    fn test_partial_config() {
        let config = StudioConfig::from_toml_str(
            r##"
            [animation]
            speed = 0.05
            easing = "ease-in-out"

            [gradient.mesh]
            rows = 8
            "##,
        )
        .unwrap();

        assert_eq!(config.animation.speed, 0.05);
        assert_eq!(config.animation.pattern, Pattern::Sine);
        assert_eq!(config.animation.easing, Easing::EaseInOut);
        assert!(config.animation.playing);
        assert_eq!(config.gradient.mesh.rows, 8);
        assert_eq!(config.gradient.mesh.columns, 4);
        assert_eq!(config.gradient.stops.len(), 2);
    }

    #[test]
    fn test_stops_get_ids_in_file_order_then_sort() {
        let config = StudioConfig::from_toml_str(
            r##"
            [[gradient.stops]]
            color = "#ffffff"
            position = 1.0

            [[gradient.stops]]
            color = "#000000"
            position = 0.0

            [[gradient.stops]]
            color = "#808080"
            position = 0.4
            "##,
        )
        .unwrap();

        let state = config.gradient.to_state();
        let order: Vec<(StopId, &str)> = state
            .color_stops
            .iter()
            .map(|s| (s.id, s.color.as_str()))
            .collect();
        assert_eq!(order, vec![(2, "#000000"), (3, "#808080"), (1, "#ffffff")]);
    }

    #[test]
    fn test_too_few_stops_rejected() {
        let err = StudioConfig::from_toml_str(
            r##"
            [[gradient.stops]]
            color = "#ffffff"
            position = 0.5
            "##,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let err = StudioConfig::from_toml_str("[gradient]\nsmoothness = 1.5\n").unwrap_err();
        assert!(err.to_string().contains("smoothness"));

        let err = StudioConfig::from_toml_str(
            r##"
            [[gradient.stops]]
            color = "#000"
            position = -0.1

            [[gradient.stops]]
            color = "#fff"
            position = 1.0
            "##,
        )
        .unwrap_err();
        assert!(err.to_string().contains("stops[0]"));

        let err = StudioConfig::from_toml_str("[animation]\nspeed = nan\n").unwrap_err();
        assert!(err.to_string().contains("speed"));
    }

    #[test]
    fn test_unknown_pattern_is_parse_error() {
        let err = StudioConfig::from_toml_str("[animation]\npattern = \"square\"\n").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = StudioConfig::default();
        config.animation.pattern = Pattern::Cosine;
        config.gradient.mesh.visible = false;

        let text = config.to_toml_string().unwrap();
        assert_eq!(StudioConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("prism-config-{}.toml", std::process::id()));
        fs::write(&path, "[animation]\nplaying = false\n").unwrap();

        let config = StudioConfig::load(&path).unwrap();
        assert!(!config.animation.playing);
        fs::remove_file(&path).unwrap();

        let err = StudioConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
