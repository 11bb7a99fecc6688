#![forbid(unsafe_code)]

//! Seeded selection primitive.
//!
//! `(seed, key)` is folded into a 32-bit rolling hash over the UTF-16 code
//! units of `"{seed}-{key}"` (`hash * 31 + unit`, wrapping, signed), then
//! reduced modulo the variant count. The arithmetic is bit-exact so that
//! selections stay stable across processes, platforms and releases.
//!
//! This is a reproducibility tool, not a security control: anyone holding the
//! seed can recompute every choice.

use crate::seed::Seed;

/// Fold `text` into a running 32-bit signed rolling hash.
#[inline]
fn fold_units(hash: i32, text: &str) -> i32 {
    text.encode_utf16()
        .fold(hash, |acc, unit| acc.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Rolling hash of a string (`hash = hash * 31 + unit`, wrapped to `i32`).
#[must_use]
pub fn rolling_hash(text: &str) -> i32 {
    fold_units(0, text)
}

/// Absolute rolling hash of `"{seed}-{key}"`.
#[must_use]
pub fn seed_key_hash(seed: Seed, key: &str) -> u32 {
    let hash = fold_units(0, &seed.get().to_string());
    let hash = fold_units(hash, "-");
    fold_units(hash, key).unsigned_abs()
}

/// Pick an index into a variant list of length `variant_count`.
///
/// Returns `0` for the canonical seed and for an empty list; callers must not
/// index an empty list with the result.
#[must_use]
pub fn pick_variant_index(seed: Seed, key: &str, variant_count: usize) -> usize {
    if variant_count == 0 || seed.is_canonical() {
        return 0;
    }
    let index = seed_key_hash(seed, key) as usize % variant_count;
    tracing::trace!(seed = seed.get(), key, variant_count, index, "variant picked");
    index
}

/// 32-bit avalanche finalizer (MurmurHash3 `fmix32`).
///
/// Used to turn nearby integers (`hash + i * 7919`) into well-spread draws.
#[must_use]
pub const fn mix32(mut x: u32) -> u32 {
    x ^= x >> 16;
    x = x.wrapping_mul(0x85eb_ca6b);
    x ^= x >> 13;
    x = x.wrapping_mul(0xc2b2_ae35);
    x ^= x >> 16;
    x
}
