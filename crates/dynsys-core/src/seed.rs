#![forbid(unsafe_code)]

//! Seed normalization and seed-source helpers.
//!
//! A [`Seed`] is always inside `[1, max]`; anything else collapses to the
//! canonical seed `1`, which reproduces the original page. Normalization never
//! fails, so decision functions never see a missing or out-of-range seed.
//!
//! # Invariants
//!
//! 1. `Seed::get()` is in `[1, DEFAULT_MAX_SEED]` for seeds built with
//!    [`Seed::normalize`], or `[1, max]` for [`Seed::normalize_in`].
//! 2. Missing, zero, negative, out-of-range and non-integer inputs all yield
//!    [`Seed::CANONICAL`].
//! 3. Query parsing takes the first occurrence of a parameter, the way
//!    `URLSearchParams::get` does.

use std::env;
use std::fmt;

/// Value of the canonical seed.
pub const CANONICAL_SEED: u16 = 1;

/// Upper bound of the seed domain unless configured otherwise.
pub const DEFAULT_MAX_SEED: u16 = 300;

/// Query parameter carrying the primary seed.
pub const SEED_PARAM: &str = "seed";

/// Query parameter carrying the independent structure seed.
pub const STRUCTURE_SEED_PARAM: &str = "seed-structure";

/// Environment keys consulted by [`seed_from_env`] callers, highest priority first.
pub const SEED_ENV_KEYS: &[&str] = &["DYNSYS_SEED", "SEED"];

/// A normalized seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "config", derive(serde::Serialize))]
#[cfg_attr(feature = "config", serde(transparent))]
pub struct Seed(u16);

impl Seed {
    /// The canonical seed: every decision returns the original output.
    pub const CANONICAL: Self = Self(CANONICAL_SEED);

    /// Normalize a raw seed against the default domain `[1, 300]`.
    #[must_use]
    pub fn normalize(raw: Option<i64>) -> Self {
        Self::normalize_in(raw, DEFAULT_MAX_SEED)
    }

    /// Normalize a raw seed against `[1, max]`.
    ///
    /// A `max` of zero is treated as `1`, so the domain is never empty.
    #[must_use]
    pub fn normalize_in(raw: Option<i64>, max: u16) -> Self {
        let max = max.max(CANONICAL_SEED);
        raw.and_then(|value| u16::try_from(value).ok())
            .filter(|value| (CANONICAL_SEED..=max).contains(value))
            .map_or(Self::CANONICAL, Self)
    }

    /// Parse a textual seed, falling back to canonical on anything non-integer.
    #[must_use]
    pub fn parse_lossy(raw: &str) -> Self {
        Self::parse_lossy_in(raw, DEFAULT_MAX_SEED)
    }

    /// Parse a textual seed against `[1, max]`.
    #[must_use]
    pub fn parse_lossy_in(raw: &str, max: u16) -> Self {
        Self::normalize_in(raw.trim().parse::<i64>().ok(), max)
    }

    /// Raw seed value.
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// True for the canonical seed.
    #[must_use]
    pub const fn is_canonical(self) -> bool {
        self.0 == CANONICAL_SEED
    }

    /// Re-check this seed against a narrower domain.
    #[must_use]
    pub fn within(self, max: u16) -> Self {
        Self::normalize_in(Some(i64::from(self.0)), max)
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self::CANONICAL
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Seed> for u16 {
    fn from(seed: Seed) -> Self {
        seed.0
    }
}

// ---------------------------------------------------------------------------
// Seed sources
// ---------------------------------------------------------------------------

/// Seeds carried by a page request.
///
/// `structure_seed` drives wrapper/decoy decisions independently of the
/// primary seed; it defaults to the primary seed when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedParams {
    pub seed: Seed,
    pub structure_seed: Seed,
}

impl SeedParams {
    /// Both seeds set to the same value.
    #[must_use]
    pub const fn uniform(seed: Seed) -> Self {
        Self {
            seed,
            structure_seed: seed,
        }
    }

    /// Parse `seed` and `seed-structure` out of a URL query string.
    ///
    /// A leading `?` is accepted. Unknown parameters are ignored.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        Self::from_query_in(query, DEFAULT_MAX_SEED)
    }

    /// Parse a query string against `[1, max]`.
    #[must_use]
    pub fn from_query_in(query: &str, max: u16) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut seed = None;
        let mut structure_seed = None;

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            match name {
                SEED_PARAM if seed.is_none() => seed = Some(Seed::parse_lossy_in(value, max)),
                STRUCTURE_SEED_PARAM if structure_seed.is_none() => {
                    structure_seed = Some(Seed::parse_lossy_in(value, max));
                }
                _ => {}
            }
        }

        let seed = seed.unwrap_or_default();
        Self {
            seed,
            structure_seed: structure_seed.unwrap_or(seed),
        }
    }
}

/// Resolve a seed from a list of env keys, first parseable key wins.
#[must_use]
pub fn seed_from_env(keys: &[&str], default: Seed) -> Seed {
    seed_from_env_with(keys, default, &env_get)
}

/// Same as [`seed_from_env`] with an injectable getter.
pub fn seed_from_env_with<F: Fn(&str) -> Option<String>>(
    keys: &[&str],
    default: Seed,
    get: &F,
) -> Seed {
    for key in keys {
        if let Some(raw) = get(key)
            && let Ok(value) = raw.trim().parse::<i64>()
        {
            return Seed::normalize(Some(value));
        }
    }
    default
}

pub(crate) fn env_get(name: &str) -> Option<String> {
    env::var(name).ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn map_getter<'a>(map: &'a BTreeMap<&'a str, &'a str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| map.get(key).map(|value| value.to_string())
    }

    #[test]
    fn out_of_domain_seeds_are_canonical() {
        for raw in [None, Some(0), Some(-5), Some(301), Some(i64::MAX), Some(i64::MIN)] {
            assert_eq!(Seed::normalize(raw), Seed::CANONICAL, "raw={raw:?}");
        }
    }

    #[test]
    fn in_domain_seeds_are_kept() {
        assert_eq!(Seed::normalize(Some(1)).get(), 1);
        assert_eq!(Seed::normalize(Some(42)).get(), 42);
        assert_eq!(Seed::normalize(Some(300)).get(), 300);
    }

    #[test]
    fn narrow_domain() {
        assert_eq!(Seed::normalize_in(Some(10), 10).get(), 10);
        assert_eq!(Seed::normalize_in(Some(11), 10), Seed::CANONICAL);
        assert_eq!(Seed::normalize_in(Some(1), 0), Seed::CANONICAL);
        assert_eq!(Seed::normalize(Some(50)).within(10), Seed::CANONICAL);
        assert_eq!(Seed::normalize(Some(7)).within(10).get(), 7);
    }

    #[test]
    fn parse_lossy_handles_garbage() {
        assert_eq!(Seed::parse_lossy("17").get(), 17);
        assert_eq!(Seed::parse_lossy(" 17 ").get(), 17);
        assert_eq!(Seed::parse_lossy("abc"), Seed::CANONICAL);
        assert_eq!(Seed::parse_lossy("4.5"), Seed::CANONICAL);
        assert_eq!(Seed::parse_lossy(""), Seed::CANONICAL);
    }

    #[test]
    fn query_parsing_reads_both_seeds() {
        let params = SeedParams::from_query("?seed=5&seed-structure=7&page=2");
        assert_eq!(params.seed.get(), 5);
        assert_eq!(params.structure_seed.get(), 7);
    }

    #[test]
    fn structure_seed_defaults_to_primary() {
        let params = SeedParams::from_query("seed=12");
        assert_eq!(params.structure_seed.get(), 12);

        let empty = SeedParams::from_query("");
        assert_eq!(empty, SeedParams::default());
    }

    #[test]
    fn query_first_occurrence_wins() {
        let params = SeedParams::from_query("seed=9&seed=4");
        assert_eq!(params.seed.get(), 9);
    }

    #[test]
    fn query_invalid_values_normalize() {
        let params = SeedParams::from_query("seed=999&seed-structure=x");
        assert_eq!(params.seed, Seed::CANONICAL);
        assert_eq!(params.structure_seed, Seed::CANONICAL);
    }

    #[test]
    fn env_seed_priority() {
        let mut vars = BTreeMap::new();
        vars.insert("SEED", "9");
        let get = map_getter(&vars);
        assert_eq!(seed_from_env_with(SEED_ENV_KEYS, Seed::CANONICAL, &get).get(), 9);
        drop(get);

        vars.insert("DYNSYS_SEED", "13");
        let get = map_getter(&vars);
        assert_eq!(seed_from_env_with(SEED_ENV_KEYS, Seed::CANONICAL, &get).get(), 13);
    }

    #[test]
    fn env_seed_skips_unparseable_keys() {
        let mut vars = BTreeMap::new();
        vars.insert("DYNSYS_SEED", "nope");
        vars.insert("SEED", "21");
        let get = map_getter(&vars);
        assert_eq!(seed_from_env_with(SEED_ENV_KEYS, Seed::CANONICAL, &get).get(), 21);

        let empty = BTreeMap::new();
        let get = map_getter(&empty);
        let fallback = Seed::normalize(Some(3));
        assert_eq!(seed_from_env_with(SEED_ENV_KEYS, fallback, &get), fallback);
    }
}
