#![forbid(unsafe_code)]

//! Seeded permutations for reordering UI element lists.
//!
//! [`generate_order`] picks one entry from a pool of candidate permutations
//! of `[0..count)` drawn from several [`OrderStrategy`] families, using
//! [`pick_variant_index`].
//!
//! # Invariants
//!
//! 1. The canonical seed yields the identity permutation.
//! 2. `count == 0` yields `[]`, `count == 1` yields `[0]`.
//! 3. Every result contains each of `0..count` exactly once.
//! 4. The result depends only on `(seed, key, count)`.
//!
//! # Pool order
//!
//! Rotations, then adjacent swaps, then prefix reversals, then the seeded
//! Fisher–Yates shuffle. Deduplication keeps the first occurrence, so pool
//! indices are stable for a given `count`.
//!
//! The structured families only collide in known places: rotation `0` and
//! reversal split `1` are the identity, reversal split `2` is the swap at `0`,
//! and for `count == 2` the single swap is rotation `1`. [`CandidatePool`]
//! therefore computes entries by index and only compares the shuffle against
//! the families, keeping memory linear in `count`.

use crate::hash::{mix32, pick_variant_index, seed_key_hash};
use crate::seed::Seed;

/// Stride mixed into each Fisher–Yates draw.
const SHUFFLE_STRIDE: u32 = 7919;

/// Permutation families contributing to the candidate pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStrategy {
    /// `i -> (i + offset) mod count` for every offset.
    Rotation,
    /// Identity with positions `i` and `i + 1` swapped.
    AdjacentSwap,
    /// Prefix of length `1..count` reversed, suffix untouched.
    PartialReversal,
    /// Fisher–Yates driven by `mix32(hash(seed, key) + i * 7919)`.
    SeededShuffle,
}

impl OrderStrategy {
    /// All strategies in pool order.
    pub const ALL: [Self; 4] = [
        Self::Rotation,
        Self::AdjacentSwap,
        Self::PartialReversal,
        Self::SeededShuffle,
    ];

    /// Stable label for logs and CLI output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rotation => "rotation",
            Self::AdjacentSwap => "adjacent-swap",
            Self::PartialReversal => "partial-reversal",
            Self::SeededShuffle => "seeded-shuffle",
        }
    }
}

/// Identity permutation of length `count`.
#[must_use]
pub fn identity(count: usize) -> Vec<usize> {
    (0..count).collect()
}

fn rotation(count: usize, offset: usize) -> Vec<usize> {
    (0..count).map(|i| (i + offset) % count).collect()
}

fn adjacent_swap(count: usize, at: usize) -> Vec<usize> {
    let mut perm = identity(count);
    perm.swap(at, at + 1);
    perm
}

fn prefix_reversal(count: usize, split: usize) -> Vec<usize> {
    let mut perm = identity(count);
    perm[..split].reverse();
    perm
}

fn is_rotation(perm: &[usize]) -> bool {
    let count = perm.len();
    perm.first()
        .is_some_and(|&offset| perm.iter().enumerate().all(|(i, &v)| v == (i + offset) % count))
}

fn is_adjacent_swap(perm: &[usize]) -> bool {
    let mut moved = perm.iter().enumerate().filter(|&(i, &v)| i != v);
    match (moved.next(), moved.next(), moved.next()) {
        (Some((a, &va)), Some((b, &vb)), None) => b == a + 1 && va == b && vb == a,
        _ => false,
    }
}

fn is_prefix_reversal(perm: &[usize]) -> bool {
    let Some(&last) = perm.first() else {
        return false;
    };
    let split = last + 1;
    split < perm.len()
        && perm
            .iter()
            .enumerate()
            .all(|(i, &v)| if i < split { v == last - i } else { v == i })
}

/// Fisher–Yates shuffle whose draws are derived from `(seed, key)`.
#[must_use]
pub fn seeded_shuffle(seed: Seed, key: &str, count: usize) -> Vec<usize> {
    let base = seed_key_hash(seed, key);
    let mut perm = identity(count);
    for i in (1..count).rev() {
        let draw = mix32(base.wrapping_add((i as u32).wrapping_mul(SHUFFLE_STRIDE)));
        let j = draw as usize % (i + 1);
        perm.swap(i, j);
    }
    perm
}

// ---------------------------------------------------------------------------
// CandidatePool
// ---------------------------------------------------------------------------

/// Deduplicated candidate pool for `(seed, key, count)`.
///
/// Only the seeded shuffle is stored; every other entry is built on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool {
    count: usize,
    shuffle: Vec<usize>,
    shuffle_is_new: bool,
}

impl CandidatePool {
    #[must_use]
    pub fn new(seed: Seed, key: &str, count: usize) -> Self {
        let shuffle = seeded_shuffle(seed, key, count);
        let shuffle_is_new =
            !(is_rotation(&shuffle) || is_adjacent_swap(&shuffle) || is_prefix_reversal(&shuffle));
        Self {
            count,
            shuffle,
            shuffle_is_new,
        }
    }

    fn rotations(&self) -> usize {
        self.count
    }

    fn swaps(&self) -> usize {
        if self.count >= 3 { self.count - 1 } else { 0 }
    }

    fn reversals(&self) -> usize {
        self.count.saturating_sub(3)
    }

    fn structured(&self) -> usize {
        self.rotations() + self.swaps() + self.reversals()
    }

    /// Number of distinct candidates. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.structured() + usize::from(self.shuffle_is_new)
    }

    /// Always false; present for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Family that produced the entry at `index`.
    #[must_use]
    pub fn strategy_at(&self, index: usize) -> Option<OrderStrategy> {
        let swaps_end = self.rotations() + self.swaps();
        if index < self.rotations() {
            Some(OrderStrategy::Rotation)
        } else if index < swaps_end {
            Some(OrderStrategy::AdjacentSwap)
        } else if index < self.structured() {
            Some(OrderStrategy::PartialReversal)
        } else if index < self.len() {
            Some(OrderStrategy::SeededShuffle)
        } else {
            None
        }
    }

    /// Permutation at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Vec<usize>> {
        let swaps_end = self.rotations() + self.swaps();
        Some(match self.strategy_at(index)? {
            OrderStrategy::Rotation => rotation(self.count, index),
            OrderStrategy::AdjacentSwap => adjacent_swap(self.count, index - self.rotations()),
            // Splits 1 and 2 duplicate earlier entries.
            OrderStrategy::PartialReversal => prefix_reversal(self.count, index - swaps_end + 3),
            OrderStrategy::SeededShuffle => self.shuffle.clone(),
        })
    }

    /// Entries in pool order, built lazily.
    pub fn iter(&self) -> impl Iterator<Item = Vec<usize>> + '_ {
        (0..self.len()).filter_map(|index| self.get(index))
    }
}

/// Deduplicated candidate pool for `(seed, key, count)`.
#[must_use]
pub fn candidate_pool(seed: Seed, key: &str, count: usize) -> CandidatePool {
    CandidatePool::new(seed, key, count)
}

/// Seeded permutation of `[0..count)`.
#[must_use]
pub fn generate_order(seed: Seed, key: &str, count: usize) -> Vec<usize> {
    if count <= 1 || seed.is_canonical() {
        return identity(count);
    }
    let pool = candidate_pool(seed, key, count);
    let index = pick_variant_index(seed, key, pool.len());
    tracing::trace!(
        seed = seed.get(),
        key,
        count,
        pool = pool.len(),
        index,
        "order selected"
    );
    pool.get(index).unwrap_or_else(|| identity(count))
}

/// True when `order` contains each of `0..count` exactly once.
#[must_use]
pub fn is_permutation(order: &[usize], count: usize) -> bool {
    if order.len() != count {
        return false;
    }
    let mut seen = vec![false; count];
    for &i in order {
        match seen.get_mut(i) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

/// Borrow `items` in the given order. Out-of-range indices are skipped.
#[must_use]
pub fn apply_order<'a, T>(items: &'a [T], order: &[usize]) -> Vec<&'a T> {
    order.iter().filter_map(|&i| items.get(i)).collect()
}

/// Reorder `items` by the seeded permutation for `key`, without mutating them.
#[must_use]
pub fn change_order_elements<'a, T>(seed: Seed, key: &str, items: &'a [T]) -> Vec<&'a T> {
    apply_order(items, &generate_order(seed, key, items.len()))
}
