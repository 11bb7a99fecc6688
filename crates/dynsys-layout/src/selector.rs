#![forbid(unsafe_code)]

//! Seed → layout selection.
//!
//! Variation off and the canonical seed both select the canonical layout
//! before anything else is looked at. Otherwise overrides are authoritative
//! and everything left falls through to the formula
//! `((seed mod 30) + 1) mod 10`, with `0` mapped to `10`.
//!
//! | seed | layout | source    |
//! |------|--------|-----------|
//! | 1    | 1      | canonical |
//! | 8    | 1      | override  |
//! | 31   | 2      | formula   |
//! | 76   | 7      | formula   |
//! | 160–170 | 3   | override  |
//! | 300  | 1      | formula   |

use dynsys_core::{DEFAULT_MAX_SEED, Seed};
use serde::Serialize;

use crate::catalog::{LAYOUT_COUNT, LayoutConfig, canonical_layout, layout};

/// A seed (or seed range) pinned to a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LayoutOverride {
    Seed { seed: u16, layout: u8 },
    Range { start: u16, end: u16, layout: u8 },
}

impl LayoutOverride {
    /// Layout for `seed` if this override covers it.
    #[must_use]
    pub const fn matches(&self, seed: u16) -> Option<u8> {
        match *self {
            Self::Seed { seed: pinned, layout } if pinned == seed => Some(layout),
            Self::Range { start, end, layout } if start <= seed && seed <= end => Some(layout),
            _ => None,
        }
    }
}

/// Built-in overrides. Seed `1` needs none; it is always canonical.
pub const DEFAULT_OVERRIDES: &[LayoutOverride] = &[
    LayoutOverride::Seed { seed: 8, layout: 1 },
    LayoutOverride::Range {
        start: 160,
        end: 170,
        layout: 3,
    },
];

/// Formula index in `1..=10`.
#[must_use]
pub const fn formula_index(seed: u16) -> u8 {
    let index = ((seed % 30) + 1) % LAYOUT_COUNT as u16;
    if index == 0 {
        LAYOUT_COUNT
    } else {
        index as u8
    }
}

/// How a layout was chosen, for inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutSource {
    /// Variation off or canonical seed.
    Canonical,
    Override,
    Formula,
}

/// Layout selection policy.
#[derive(Debug, Clone)]
pub struct LayoutSelector {
    overrides: Vec<LayoutOverride>,
    variation: bool,
    max_seed: u16,
}

impl Default for LayoutSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutSelector {
    /// Built-in overrides, variation enabled, default seed domain.
    #[must_use]
    pub fn new() -> Self {
        Self {
            overrides: DEFAULT_OVERRIDES.to_vec(),
            variation: true,
            max_seed: DEFAULT_MAX_SEED,
        }
    }

    #[must_use]
    pub fn with_variation(mut self, enabled: bool) -> Self {
        self.variation = enabled;
        self
    }

    #[must_use]
    pub fn with_max_seed(mut self, max_seed: u16) -> Self {
        self.max_seed = max_seed;
        self
    }

    /// Replace the override table.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Vec<LayoutOverride>) -> Self {
        self.overrides = overrides;
        self
    }

    #[must_use]
    pub fn overrides(&self) -> &[LayoutOverride] {
        &self.overrides
    }

    /// Layout for a normalized seed.
    #[must_use]
    pub fn select(&self, seed: Seed) -> &'static LayoutConfig {
        self.explain(seed).0
    }

    /// Layout for a raw seed; anything outside the domain is canonical.
    #[must_use]
    pub fn select_raw(&self, raw: Option<i64>) -> &'static LayoutConfig {
        self.select(Seed::normalize_in(raw, self.max_seed))
    }

    /// Layout plus how it was chosen.
    #[must_use]
    pub fn explain(&self, seed: Seed) -> (&'static LayoutConfig, LayoutSource) {
        let seed = seed.within(self.max_seed);
        if !self.variation || seed.is_canonical() {
            return (canonical_layout(), LayoutSource::Canonical);
        }
        let pinned = self
            .overrides
            .iter()
            .find_map(|rule| rule.matches(seed.get()));
        let (index, source) = match pinned {
            Some(index) => (index, LayoutSource::Override),
            None => (formula_index(seed.get()), LayoutSource::Formula),
        };
        let config = layout(index).unwrap_or_else(|| {
            tracing::warn!(index, seed = seed.get(), "override points outside the catalog");
            canonical_layout()
        });
        tracing::trace!(seed = seed.get(), layout = config.index, ?source, "layout selected");
        (config, source)
    }
}

/// Select with the built-in overrides and variation enabled.
#[must_use]
pub fn select_layout(seed: Seed) -> &'static LayoutConfig {
    LayoutSelector::new().select(seed)
}
