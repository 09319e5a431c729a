//! Named store registry
//!
//! Stores are lazily created the first time a `(type, name)` pair is asked
//! for and the same instance is handed out on every later request. The
//! registry is a plain value owned by whoever wires the application together
//! (see `prism_studio::StudioContext`) rather than a process-wide static, so
//! tests and multiple sessions get isolated stores.
//!
//! # Example
//!
//! ```rust
//! use prism_core::store::StoreRegistry;
//! use prism_core::reactive::Observable;
//!
//! let registry = StoreRegistry::new();
//!
//! let a = registry.get_or_create("counter", || Observable::new(0i32));
//! a.set(7);
//!
//! // Same name and type, same instance
//! let b = registry.get_or_create("counter", || Observable::new(0i32));
//! assert_eq!(b.get(), 7);
//! ```

use rustc_hash::FxHashMap;
use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type StoreKey = (TypeId, String);
type AnyStore = Arc<dyn Any + Send + Sync>;

/// Registry of lazily created, shared store instances keyed by type and name
#[derive(Default)]
pub struct StoreRegistry {
    stores: Mutex<FxHashMap<StoreKey, AnyStore>>,
}

impl StoreRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the store registered under `name`, creating it with `factory` if needed
    ///
    /// The factory runs without the registry lock held, so it may itself use
    /// the registry. If two callers race, the first insertion wins and both
    /// receive that instance.
    pub fn get_or_create<T, F>(&self, name: &str, factory: F) -> Arc<T>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        if let Some(store) = self.try_get::<T>(name) {
            return store;
        }

        let created: AnyStore = Arc::new(factory());
        let mut stores = self.lock();
        let entry = stores
            .entry(Self::key::<T>(name))
            .or_insert_with(|| {
                tracing::debug!("StoreRegistry: created {} store '{}'", type_name::<T>(), name);
                created
            })
            .clone();
        drop(stores);

        match entry.downcast::<T>() {
            Ok(store) => store,
            // Keys carry the TypeId, so a stored entry always has type T
            Err(_) => unreachable!("store registry key/type mismatch"),
        }
    }

    /// Get or create a store using `T::default()`
    pub fn get_or_default<T>(&self, name: &str) -> Arc<T>
    where
        T: Default + Send + Sync + 'static,
    {
        self.get_or_create(name, T::default)
    }

    /// Get the store if it exists, without creating
    pub fn try_get<T: Send + Sync + 'static>(&self, name: &str) -> Option<Arc<T>> {
        let store = self.lock().get(&Self::key::<T>(name)).cloned()?;
        store.downcast::<T>().ok()
    }

    pub fn contains<T: 'static>(&self, name: &str) -> bool {
        self.lock().contains_key(&Self::key::<T>(name))
    }

    /// Remove a store; outstanding `Arc`s stay valid but are no longer shared
    pub fn remove<T: 'static>(&self, name: &str) -> bool {
        let removed = self.lock().remove(&Self::key::<T>(name)).is_some();
        if removed {
            tracing::debug!("StoreRegistry: removed {} store '{}'", type_name::<T>(), name);
        }
        removed
    }

    /// Drop every registered store
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Names of all registered stores, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock().keys().map(|(_, name)| name.clone()).collect();
        names.sort();
        names
    }

    fn key<T: 'static>(name: &str) -> StoreKey {
        (TypeId::of::<T>(), name.to_string())
    }

    fn lock(&self) -> MutexGuard<'_, FxHashMap<StoreKey, AnyStore>> {
        self.stores.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for StoreRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreRegistry")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::Observable;

    #[derive(Clone, Default, Debug, PartialEq)]
    struct TestState {
        count: i32,
        name: String,
    }

    #[test]
    fn test_registry_reuses_instance() {
        let registry = StoreRegistry::new();

        let store1 = registry.get_or_default::<Observable<TestState>>("test-store");
        store1.update(|s| {
            s.count = 100;
            s.name = "a".into();
        });

        let store2 = registry.get_or_default::<Observable<TestState>>("test-store");
        assert!(Arc::ptr_eq(&store1, &store2));
        assert_eq!(store2.get().count, 100);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_factory_runs_once() {
        let registry = StoreRegistry::new();
        let mut runs = 0;

        let _ = registry.get_or_create("app", || {
            runs += 1;
            Observable::new(1i32)
        });
        let _ = registry.get_or_create("app", || {
            runs += 1;
            Observable::new(2i32)
        });

        assert_eq!(runs, 1);
    }

    #[test]
    fn test_same_name_different_types_are_distinct() {
        let registry = StoreRegistry::new();

        let ints = registry.get_or_create("shared", || Observable::new(5i32));
        let strings = registry.get_or_create("shared", || Observable::new("x".to_string()));

        assert_eq!(ints.get(), 5);
        assert_eq!(strings.get(), "x");
        assert_eq!(registry.len(), 2);
        assert!(registry.contains::<Observable<i32>>("shared"));
        assert!(!registry.contains::<Observable<u8>>("shared"));
    }

    #[test]
    fn test_try_get_and_remove() {
        let registry = StoreRegistry::new();
        assert!(registry.try_get::<Observable<i32>>("missing").is_none());

        let _ = registry.get_or_create("present", || Observable::new(1i32));
        assert!(registry.try_get::<Observable<i32>>("present").is_some());

        assert!(registry.remove::<Observable<i32>>("present"));
        assert!(!registry.remove::<Observable<i32>>("present"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_clear_and_names() {
        let registry = StoreRegistry::new();
        let _ = registry.get_or_default::<Observable<TestState>>("zeta");
        let _ = registry.get_or_default::<Observable<TestState>>("alpha");

        assert_eq!(registry.names(), vec!["alpha".to_string(), "zeta".to_string()]);

        registry.clear();
        assert!(registry.is_empty());

        // Recreated fresh after clear
        let fresh = registry.get_or_default::<Observable<TestState>>("alpha");
        assert_eq!(fresh.get(), TestState::default());
    }
}
