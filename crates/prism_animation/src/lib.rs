//! Prism Animation Store
//!
//! Holds the playback parameters of the gradient animation: speed, the
//! waveform pattern, the easing curve and whether playback is running.
//! Nothing here advances time; the render loop reads these values.
//!
//! # Example
//!
//! ```rust
//! use prism_animation::{AnimationStore, Easing, Pattern};
//!
//! let store = AnimationStore::new();
//! store.update_pattern(Pattern::Cosine);
//! store.update_easing(Easing::EaseInOut);
//! store.toggle_playback();
//!
//! assert!(!store.is_playing());
//! ```

pub mod easing;
pub mod pattern;
pub mod state;

pub use easing::Easing;
pub use pattern::Pattern;
pub use state::{AnimationState, AnimationStore, DEFAULT_SPEED};
