//! Prism Core
//!
//! Foundational primitives shared by the prism state stores:
//!
//! - **Observables**: values that notify subscribers synchronously on change
//! - **Store Registry**: one lazily created instance per store name, owned by
//!   an explicit context instead of ambient globals
//! - **Errors**: the error type used at configuration and parsing edges
//!
//! # Example
//!
//! ```rust
//! use prism_core::{Observable, StoreRegistry};
//!
//! let registry = StoreRegistry::new();
//! let speed = registry.get_or_create("speed", || Observable::new(0.01f32));
//!
//! let _handle = speed.subscribe(|v| println!("speed is now {v}"));
//! speed.set(0.02);
//! assert_eq!(speed.get(), 0.02);
//! ```

pub mod error;
pub mod reactive;
pub mod store;

pub use error::{Error, Result};
pub use reactive::{Observable, SubscriptionHandle, SubscriptionId};
pub use store::StoreRegistry;
