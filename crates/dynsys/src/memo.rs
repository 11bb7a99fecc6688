#![forbid(unsafe_code)]

//! Shared, bounded memo of generated orderings.
//!
//! Equal `(seed, key, count)` inputs return the same `Arc<[usize]>` until the
//! memo is cleared. When full, the whole map is dropped rather than evicting
//! entry by entry; results never depend on memo state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use dynsys_core::{Seed, generate_order};
use rustc_hash::FxHashMap;

/// Entries kept before the memo resets.
pub const DEFAULT_MEMO_CAPACITY: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct OrderKey {
    seed: Seed,
    key: Box<str>,
    count: usize,
}

#[derive(Debug)]
pub struct OrderMemo {
    entries: Mutex<FxHashMap<OrderKey, Arc<[usize]>>>,
    capacity: usize,
}

impl Default for OrderMemo {
    fn default() -> Self {
        Self::new(DEFAULT_MEMO_CAPACITY)
    }
}

impl OrderMemo {
    /// A memo holding at most `capacity` orderings (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(FxHashMap::default()),
            capacity: capacity.max(1),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn entries(&self) -> MutexGuard<'_, FxHashMap<OrderKey, Arc<[usize]>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Memoized [`generate_order`].
    ///
    /// The lock is not held while generating. When two callers race on the
    /// same input, the first insert wins and both get that allocation.
    pub fn get_or_generate(&self, seed: Seed, key: &str, count: usize) -> Arc<[usize]> {
        let lookup = OrderKey {
            seed,
            key: key.into(),
            count,
        };
        if let Some(order) = self.entries().get(&lookup) {
            return Arc::clone(order);
        }
        let order: Arc<[usize]> = generate_order(seed, key, count).into();
        let mut entries = self.entries();
        if entries.len() >= self.capacity && !entries.contains_key(&lookup) {
            tracing::debug!(capacity = self.capacity, "order memo full, clearing");
            entries.clear();
        }
        Arc::clone(entries.entry(lookup).or_insert(order))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries().clear();
    }
}
