//! Prism Studio
//!
//! Wires the animation and gradient stores together for an editor session:
//!
//! - **Config**: `prism.toml` seeds the initial store state
//! - **Context**: one shared instance per store, owned by an explicit
//!   [`StudioContext`] passed to consumers
//!
//! The two stores are independent; nothing here couples their state.
//!
//! # Example
//!
//! ```rust
//! use prism_studio::StudioContext;
//!
//! let ctx = StudioContext::default();
//!
//! let _handle = ctx.gradient().subscribe(|state| {
//!     println!("{} stops", state.color_stops.len());
//! });
//!
//! ctx.gradient().add_color_stop("#00ff00", Some(0.5));
//! ctx.animation().toggle_playback();
//! ```

pub mod config;
pub mod context;

pub use config::{
    AnimationConfig, GradientConfig, MeshSettings, StopConfig, StudioConfig, CONFIG_FILE_NAME,
};
pub use context::{StudioContext, ANIMATION_STORE, GRADIENT_STORE};
