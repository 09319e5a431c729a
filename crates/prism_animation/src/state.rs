//! Animation playback state and its store
//!
//! [`AnimationState`] is the plain data; [`AnimationStore`] wraps it in an
//! [`Observable`] so every setter notifies subscribers. Fields are
//! independent and no setter validates its input.

use crate::easing::Easing;
use crate::pattern::Pattern;
use prism_core::{Observable, SubscriptionHandle, SubscriptionId};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SPEED: f32 = 0.01;

/// Scalar animation configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    pub speed: f32,
    pub pattern: Pattern,
    pub easing: Easing,
    pub is_playing: bool,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            pattern: Pattern::Sine,
            easing: Easing::Linear,
            is_playing: true,
        }
    }
}

/// Observable store for [`AnimationState`]
#[derive(Debug)]
pub struct AnimationStore {
    state: Observable<AnimationState>,
    initial: AnimationState,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::with_state(AnimationState::default())
    }

    /// Create a store seeded with `initial`; `reset` returns to it
    pub fn with_state(initial: AnimationState) -> Self {
        Self {
            state: Observable::new(initial.clone()),
            initial,
        }
    }

    // =========================================================================
    // READS
    // =========================================================================

    pub fn state(&self) -> AnimationState {
        self.state.get()
    }

    pub fn speed(&self) -> f32 {
        self.state.with(|s| s.speed)
    }

    pub fn pattern(&self) -> Pattern {
        self.state.with(|s| s.pattern)
    }

    pub fn easing(&self) -> Easing {
        self.state.with(|s| s.easing)
    }

    pub fn is_playing(&self) -> bool {
        self.state.with(|s| s.is_playing)
    }

    // =========================================================================
    // MUTATORS
    // =========================================================================

    /// Set the speed; any value is accepted
    pub fn update_speed(&self, speed: f32) {
        self.state.update(|s| s.speed = speed);
    }

    pub fn update_pattern(&self, pattern: Pattern) {
        self.state.update(|s| s.pattern = pattern);
    }

    pub fn update_easing(&self, easing: Easing) {
        self.state.update(|s| s.easing = easing);
    }

    /// Flip play/pause; returns the new value
    pub fn toggle_playback(&self) -> bool {
        self.state.update_with(|s| {
            s.is_playing = !s.is_playing;
            s.is_playing
        })
    }

    pub fn set_playing(&self, playing: bool) {
        self.state.update(|s| s.is_playing = playing);
    }

    /// Restore the state the store was created with
    pub fn reset(&self) {
        self.state.set(self.initial.clone());
    }

    // =========================================================================
    // OBSERVATION
    // =========================================================================

    /// Subscribe to every change of the animation state
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionHandle
    where
        F: Fn(&AnimationState) + Send + Sync + 'static,
    {
        self.state.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }

    /// Apply several setters with a single notification
    pub fn batch<R>(&self, f: impl FnOnce(&Self) -> R) -> R {
        self.state.batch(|_| f(self))
    }

    pub fn version(&self) -> u64 {
        self.state.version()
    }
}

impl Default for AnimationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_defaults() {
        let store = AnimationStore::new();
        assert_eq!(store.speed(), 0.01);
        assert_eq!(store.pattern(), Pattern::Sine);
        assert_eq!(store.easing(), Easing::Linear);
        assert!(store.is_playing());
    }

    #[test]
    fn test_setters_touch_only_their_field() {
        let store = AnimationStore::new();

        store.update_speed(0.5);
        assert_eq!(
            store.state(),
            AnimationState {
                speed: 0.5,
                ..AnimationState::default()
            }
        );

        store.update_pattern(Pattern::Cosine);
        store.update_easing(Easing::EaseInOut);
        store.set_playing(false);

        let state = store.state();
        assert_eq!(state.speed, 0.5);
        assert_eq!(state.pattern, Pattern::Cosine);
        assert_eq!(state.easing, Easing::EaseInOut);
        assert!(!state.is_playing);
    }

    #[test]
    fn test_speed_is_not_validated() {
        let store = AnimationStore::new();
        store.update_speed(-3.0);
        assert_eq!(store.speed(), -3.0);
        store.update_speed(1000.0);
        assert_eq!(store.speed(), 1000.0);
    }

    #[test]
    fn test_toggle_playback_twice_is_identity() {
        let store = AnimationStore::new();
        let before = store.is_playing();

        assert_eq!(store.toggle_playback(), !before);
        assert_eq!(store.toggle_playback(), before);
        assert_eq!(store.is_playing(), before);

        store.set_playing(false);
        store.toggle_playback();
        store.toggle_playback();
        assert!(!store.is_playing());
    }

    #[test]
    fn test_every_setter_notifies() {
        let store = AnimationStore::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let calls_clone = calls.clone();
        let _handle = store.subscribe(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        store.update_speed(0.02);
        store.update_pattern(Pattern::Linear);
        store.update_easing(Easing::EaseIn);
        store.toggle_playback();
        store.set_playing(true);

        assert_eq!(calls.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_subscriber_sees_new_state() {
        let store = AnimationStore::new();
        let speeds = Arc::new(Mutex::new(Vec::new()));

        let speeds_clone = speeds.clone();
        let handle = store.subscribe(move |state| speeds_clone.lock().unwrap().push(state.speed));

        store.update_speed(0.1);
        store.update_speed(0.2);
        assert!(store.unsubscribe(handle.id()));
        store.update_speed(0.3);

        assert_eq!(*speeds.lock().unwrap(), vec![0.1, 0.2]);
    }

    #[test]
    fn test_batch_and_reset() {
        let initial = AnimationState {
            speed: 0.05,
            pattern: Pattern::Linear,
            easing: Easing::EaseOut,
            is_playing: false,
        };
        let store = AnimationStore::with_state(initial.clone());
        let calls = Arc::new(AtomicUsize::new(0));

        let calls_clone = calls.clone();
        let _handle = store.subscribe(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        store.batch(|s| {
            s.update_speed(1.0);
            s.update_pattern(Pattern::Sine);
            s.set_playing(true);
        });
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.speed(), 1.0);

        store.reset();
        assert_eq!(store.state(), initial);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
