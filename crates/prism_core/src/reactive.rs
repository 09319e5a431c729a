//! Observable properties with synchronous change notification
//!
//! An [`Observable<T>`] owns one value and the callbacks interested in it.
//! Every mutation bumps a version counter and notifies subscribers in
//! subscription order, on the calling thread, before the mutator returns:
//!
//! - `set` / `update` / `update_with` always notify
//! - `update_if` notifies only when the closure reports a change
//! - `batch` coalesces everything raised inside it into one notification
//!
//! ```rust
//! use prism_core::reactive::Observable;
//! use std::sync::atomic::{AtomicI32, Ordering};
//! use std::sync::Arc;
//!
//! let count = Observable::new(0i32);
//! let seen = Arc::new(AtomicI32::new(0));
//!
//! let seen_clone = seen.clone();
//! let _handle = count.subscribe(move |v| seen_clone.store(*v, Ordering::SeqCst));
//!
//! count.update(|v| *v += 5);
//! assert_eq!(seen.load(Ordering::SeqCst), 5);
//! ```
//!
//! Callbacks receive a snapshot taken after the value lock is released, and
//! the subscriber list is copied before delivery, so a callback may subscribe
//! or unsubscribe freely. Mutating the same observable from inside one of its
//! own callbacks is not supported.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

new_key_type! {
    /// Unique identifier for a subscription
    pub struct SubscriptionId;
}

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Handle returned by [`Observable::subscribe`]
///
/// Pass [`SubscriptionHandle::id`] to `unsubscribe` to stop receiving
/// notifications. Dropping the handle does not unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionHandle {
    id: SubscriptionId,
}

impl SubscriptionHandle {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

/// A value that notifies subscribers whenever it changes
pub struct Observable<T> {
    value: RwLock<T>,
    /// Bumped once per effective mutation
    version: AtomicU64,
    subscribers: RwLock<SlotMap<SubscriptionId, Callback<T>>>,
    /// Current batch depth (> 0 means notifications are deferred)
    batch_depth: AtomicU32,
    /// Set when a change happened inside a batch
    pending: AtomicBool,
}

impl<T: Clone + Send + Sync + 'static> Observable<T> {
    /// Create a new observable with an initial value
    pub fn new(initial: T) -> Self {
        Self {
            value: RwLock::new(initial),
            version: AtomicU64::new(0),
            subscribers: RwLock::new(SlotMap::with_key()),
            batch_depth: AtomicU32::new(0),
            pending: AtomicBool::new(false),
        }
    }

    // =========================================================================
    // READS
    // =========================================================================

    /// Clone of the current value
    pub fn get(&self) -> T {
        self.read_value().clone()
    }

    /// Borrowing read without cloning the whole value
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.read_value())
    }

    /// Number of effective mutations so far
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    // =========================================================================
    // WRITES
    // =========================================================================

    /// Replace the value and notify subscribers
    pub fn set(&self, value: T) {
        *self.write_value() = value;
        self.changed();
    }

    /// Mutate the value in place and notify subscribers
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut *self.write_value());
        self.changed();
    }

    /// Mutate the value, notify subscribers and return the closure's result
    pub fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut *self.write_value());
        self.changed();
        result
    }

    /// Mutate the value; notify only if the closure returns `true`
    ///
    /// Returns whatever the closure returned.
    pub fn update_if(&self, f: impl FnOnce(&mut T) -> bool) -> bool {
        let changed = f(&mut *self.write_value());
        if changed {
            self.changed();
        }
        changed
    }

    /// Run `f` with notifications deferred until the outermost batch ends
    ///
    /// Subscribers see at most one notification for the whole batch, and
    /// none if nothing changed. If `f` panics the batch is still closed, but
    /// the deferred notification is not delivered during unwinding.
    pub fn batch<R>(&self, f: impl FnOnce(&Self) -> R) -> R {
        self.batch_depth.fetch_add(1, Ordering::SeqCst);
        let _guard = BatchGuard { observable: self };
        f(self)
    }

    // =========================================================================
    // SUBSCRIPTIONS
    // =========================================================================

    /// Subscribe to changes
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionHandle
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.write_subscribers().insert(Arc::new(callback));
        SubscriptionHandle { id }
    }

    /// Remove a subscription; returns `false` if it was already gone
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.write_subscribers().remove(id).is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    // =========================================================================
    // INTERNAL
    // =========================================================================

    fn changed(&self) {
        self.version.fetch_add(1, Ordering::SeqCst);
        if self.batch_depth.load(Ordering::SeqCst) > 0 {
            self.pending.store(true, Ordering::SeqCst);
            return;
        }
        self.notify();
    }

    fn notify(&self) {
        let callbacks: SmallVec<[Callback<T>; 4]> = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        if callbacks.is_empty() {
            return;
        }

        let snapshot = self.get();
        tracing::trace!(
            "Observable: notifying {} subscriber(s) at version {}",
            callbacks.len(),
            self.version()
        );
        for callback in callbacks {
            callback(&snapshot);
        }
    }

    fn read_value(&self) -> RwLockReadGuard<'_, T> {
        self.value.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_value(&self) -> RwLockWriteGuard<'_, T> {
        self.value.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_subscribers(&self) -> RwLockWriteGuard<'_, SlotMap<SubscriptionId, Callback<T>>> {
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Closes a batch on scope exit, including during a panic
struct BatchGuard<'a, T: Clone + Send + Sync + 'static> {
    observable: &'a Observable<T>,
}

impl<T: Clone + Send + Sync + 'static> Drop for BatchGuard<'_, T> {
    fn drop(&mut self) {
        let observable = self.observable;
        if observable.batch_depth.fetch_sub(1, Ordering::SeqCst) == 1
            && observable.pending.swap(false, Ordering::SeqCst)
            && !std::thread::panicking()
        {
            observable.notify();
        }
    }
}

impl<T: Clone + Default + Send + Sync + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug + Send + Sync + 'static> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &*self.read_value())
            .field("version", &self.version())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
