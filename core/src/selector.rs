//! Memoization for derived data.
//!
//! A selector derives a read-only view from state. Deriving is often a
//! filter or a sort over a whole collection, so the result is cached and
//! only recomputed when the inputs it was derived from change.
//!
//! "Change" is decided by [`InputKey::same_input`]: `Arc` inputs compare by
//! pointer identity, small `Copy` values by equality. Reducers that keep
//! their collections behind `Arc` and only call `Arc::make_mut` when they
//! actually change something give selectors exact, O(1) change detection.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use todolist_core::selector::Memo;
//!
//! let numbers = Arc::new(vec![3, 1, 2]);
//! let sorted: Memo<Arc<Vec<i32>>, Vec<i32>> = Memo::new();
//!
//! let sort = |input: &Arc<Vec<i32>>| {
//!     let mut values = input.to_vec();
//!     values.sort_unstable();
//!     values
//! };
//!
//! let first = sorted.get_or_compute(Arc::clone(&numbers), sort);
//! let second = sorted.get_or_compute(Arc::clone(&numbers), sort);
//! assert_eq!(*first, vec![1, 2, 3]);
//! assert!(Arc::ptr_eq(&first, &second));
//! assert_eq!(sorted.recomputations(), 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Inputs a [`Memo`] can be keyed by.
pub trait InputKey: Clone {
    /// Returns true when `other` is the same input as `self`.
    fn same_input(&self, other: &Self) -> bool;
}

impl<T: ?Sized> InputKey for Arc<T> {
    fn same_input(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

macro_rules! input_key_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl InputKey for $ty {
                fn same_input(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

input_key_by_value!(bool, char, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl<A: InputKey, B: InputKey> InputKey for (A, B) {
    fn same_input(&self, other: &Self) -> bool {
        self.0.same_input(&other.0) && self.1.same_input(&other.1)
    }
}

impl<A: InputKey, B: InputKey, C: InputKey> InputKey for (A, B, C) {
    fn same_input(&self, other: &Self) -> bool {
        self.0.same_input(&other.0) && self.1.same_input(&other.1) && self.2.same_input(&other.2)
    }
}

/// A single-slot cache of a derived value.
///
/// Holds the last input and the value computed from it. Holding the input
/// keeps `Arc` inputs alive, so a later input can never be mistaken for it
/// by address reuse.
pub struct Memo<K, V> {
    slot: Mutex<Option<(K, Arc<V>)>>,
    recomputations: AtomicU64,
}

impl<K: InputKey, V> Memo<K, V> {
    /// Create an empty cache
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
            recomputations: AtomicU64::new(0),
        }
    }

    /// Return the cached value for `key`, computing it on a miss.
    pub fn get_or_compute<F>(&self, key: K, compute: F) -> Arc<V>
    where
        F: FnOnce(&K) -> V,
    {
        self.get_or_compute_shared(key, |key| Arc::new(compute(key)))
    }

    /// Like [`Memo::get_or_compute`], for derivations that can hand back an
    /// existing `Arc` (for example an unfiltered upstream result).
    pub fn get_or_compute_shared<F>(&self, key: K, compute: F) -> Arc<V>
    where
        F: FnOnce(&K) -> Arc<V>,
    {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some((cached_key, value)) = slot.as_ref() {
            if cached_key.same_input(&key) {
                return Arc::clone(value);
            }
        }

        let value = compute(&key);
        self.recomputations.fetch_add(1, Ordering::Relaxed);
        *slot = Some((key, Arc::clone(&value)));
        value
    }

    /// Drop the cached value; the next read recomputes.
    pub fn invalidate(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// How many times the value has been computed
    #[must_use]
    pub fn recomputations(&self) -> u64 {
        self.recomputations.load(Ordering::Relaxed)
    }
}

impl<K: InputKey, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> std::fmt::Debug for Memo<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memo")
            .field("recomputations", &self.recomputations.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}
