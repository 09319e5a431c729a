//! Prism Gradient Store
//!
//! State behind the gradient editor:
//!
//! - **Color stops**: an ordered `(position, color)` list, always sorted by
//!   position, that never shrinks below two entries through removal
//! - **Blend settings**: smoothness of the transition between stops
//! - **Mesh grid**: dimensions, visibility, selection and the colored nodes
//!   of the 2D mesh gradient
//!
//! Lookups by id that miss are silent no-ops; the `bool` returned by the
//! store's mutators is the only signal that nothing happened.
//!
//! # Example
//!
//! ```rust
//! use prism_gradient::{ColorStopUpdate, GradientStore};
//!
//! let store = GradientStore::new();
//! let green = store.add_color_stop("#00ff00", Some(0.3));
//! store.update_color_stop(green, ColorStopUpdate::new().position(0.6));
//!
//! let positions: Vec<f32> = store.color_stops().iter().map(|s| s.position).collect();
//! assert_eq!(positions, vec![0.0, 0.6, 1.0]);
//! ```

pub mod blend;
pub mod mesh;
pub mod state;
pub mod stops;
pub mod store;

pub use blend::{BlendSettings, BlendSettingsUpdate, DEFAULT_SMOOTHNESS};
pub use mesh::{
    MeshConfig, MeshNode, MeshNodeId, MeshNodeUpdate, DEFAULT_MESH_COLUMNS, DEFAULT_MESH_ROWS,
};
pub use state::GradientState;
pub use stops::{default_color_stops, ColorStop, ColorStopUpdate, StopId, MIN_COLOR_STOPS};
pub use store::GradientStore;
