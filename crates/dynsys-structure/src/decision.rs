#![forbid(unsafe_code)]

//! Per-component wrapper/decoy decisions.
//!
//! Each decision draws two independent picks: `"{key}-wrapper"` over two
//! slots (wrap when the pick is non-zero) and `"{key}-decoy"` over
//! [`DecoyPosition::ALL`]. Disabled or canonical inputs short-circuit to
//! [`StructureDecision::NONE`] before any hashing.

use std::fmt;

use dynsys_core::{Seed, pick_variant_index};
use serde::Serialize;

/// Where a decoy sibling goes relative to the real element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DecoyPosition {
    #[default]
    None,
    Before,
    After,
}

impl DecoyPosition {
    /// Pick order; index `0` is the no-op.
    pub const ALL: [Self; 3] = [Self::None, Self::Before, Self::After];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Before => "before",
            Self::After => "after",
        }
    }
}

impl fmt::Display for DecoyPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural change for one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct StructureDecision {
    pub wrap: bool,
    pub decoy: DecoyPosition,
}

impl StructureDecision {
    /// Leave the element untouched.
    pub const NONE: Self = Self {
        wrap: false,
        decoy: DecoyPosition::None,
    };

    #[must_use]
    pub const fn is_noop(&self) -> bool {
        !self.wrap && matches!(self.decoy, DecoyPosition::None)
    }
}

/// Suffix appended to the component key for the wrap pick.
pub const WRAPPER_SUFFIX: &str = "-wrapper";

/// Suffix appended to the component key for the decoy pick.
pub const DECOY_SUFFIX: &str = "-decoy";

/// Decide wrapper/decoy for `key`. `enabled` is the structure flag.
#[must_use]
pub fn decide_structure(seed: Seed, key: &str, enabled: bool) -> StructureDecision {
    if !enabled || seed.is_canonical() {
        return StructureDecision::NONE;
    }
    let wrap = pick_variant_index(seed, &format!("{key}{WRAPPER_SUFFIX}"), 2) > 0;
    let slot = pick_variant_index(seed, &format!("{key}{DECOY_SUFFIX}"), DecoyPosition::ALL.len());
    let decision = StructureDecision {
        wrap,
        decoy: DecoyPosition::ALL[slot],
    };
    tracing::trace!(seed = seed.get(), key, wrap, decoy = %decision.decoy, "structure decided");
    decision
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(value: i64) -> Seed {
        Seed::normalize(Some(value))
    }

    #[test]
    fn disabled_is_noop() {
        for value in 1..=300 {
            assert!(decide_structure(seed(value), "search-button", false).is_noop());
        }
    }

    #[test]
    fn canonical_is_noop() {
        assert_eq!(
            decide_structure(Seed::CANONICAL, "search-button", true),
            StructureDecision::NONE
        );
    }

    #[test]
    fn search_button_seed_five() {
        let decision = decide_structure(seed(5), "search-button", true);
        assert_eq!(
            decision,
            StructureDecision {
                wrap: true,
                decoy: DecoyPosition::None,
            }
        );
        assert_eq!(decision, decide_structure(seed(5), "search-button", true));
    }

    #[test]
    fn picks_follow_suffixed_keys() {
        for value in 2..=40 {
            let s = seed(value);
            let decision = decide_structure(s, "cart-item-card", true);
            assert_eq!(decision.wrap, pick_variant_index(s, "cart-item-card-wrapper", 2) == 1);
            assert_eq!(
                decision.decoy,
                DecoyPosition::ALL[pick_variant_index(s, "cart-item-card-decoy", 3)]
            );
        }
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&StructureDecision {
            wrap: false,
            decoy: DecoyPosition::After,
        })
        .expect("serialize");
        assert_eq!(json, r#"{"wrap":false,"decoy":"after"}"#);
    }
}
