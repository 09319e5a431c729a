//! Shared store context
//!
//! [`StudioContext`] owns the configuration and the [`StoreRegistry`] and is
//! handed by reference to whatever needs the stores. Each store is created
//! on first access from the configuration and shared afterwards.

use crate::config::StudioConfig;
use prism_animation::AnimationStore;
use prism_core::{Result, StoreRegistry};
use prism_gradient::GradientStore;
use std::path::Path;
use std::sync::Arc;

pub const ANIMATION_STORE: &str = "animation";
pub const GRADIENT_STORE: &str = "gradient";

#[derive(Debug, Default)]
pub struct StudioContext {
    config: StudioConfig,
    registry: StoreRegistry,
}

impl StudioContext {
    pub fn new(config: StudioConfig) -> Self {
        Self {
            config,
            registry: StoreRegistry::new(),
        }
    }

    /// Build a context from a `prism.toml` file
    pub fn from_config_file(path: &Path) -> Result<Self> {
        Ok(Self::new(StudioConfig::load(path)?))
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn registry(&self) -> &StoreRegistry {
        &self.registry
    }

    /// The animation store, created from config on first use
    pub fn animation(&self) -> Arc<AnimationStore> {
        self.registry.get_or_create(ANIMATION_STORE, || {
            AnimationStore::with_state(self.config.animation.to_state())
        })
    }

    /// The gradient store, created from config on first use
    pub fn gradient(&self) -> Arc<GradientStore> {
        self.registry.get_or_create(GRADIENT_STORE, || {
            GradientStore::with_state(self.config.gradient.to_state())
        })
    }

    /// Drop every store; the next accessor call starts from config again
    pub fn reset_stores(&self) {
        tracing::debug!("StudioContext: dropping {} store(s)", self.registry.len());
        self.registry.clear();
    }
}
