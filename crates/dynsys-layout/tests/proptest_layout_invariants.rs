//! Property-based invariant tests for layout selection.
//!
//! 1. Selection is deterministic
//! 2. Every selected layout is in the catalog
//! 3. Out-of-domain raw seeds select the canonical layout
//! 4. Overrides always win over the formula
//! 5. Variation off always selects the canonical layout
//! 6. The canonical seed is canonical whatever the override table pins

use dynsys_core::Seed;
use dynsys_layout::{
    DEFAULT_OVERRIDES, LAYOUTS, LayoutOverride, LayoutSelector, layout, select_layout,
};
use proptest::prelude::*;

fn any_seed() -> impl Strategy<Value = Seed> {
    (1i64..=300).prop_map(|value| Seed::normalize(Some(value)))
}

proptest! {
    #[test]
    fn deterministic(seed in any_seed()) {
        prop_assert_eq!(select_layout(seed), select_layout(seed));
    }

    #[test]
    fn in_catalog(seed in any_seed()) {
        let config = select_layout(seed);
        prop_assert!(LAYOUTS.iter().any(|entry| std::ptr::eq(entry, config)));
    }

    #[test]
    fn out_of_domain_is_canonical(raw in prop_oneof![i64::MIN..=0, 301i64..=i64::MAX]) {
        prop_assert!(LayoutSelector::new().select_raw(Some(raw)).is_canonical());
    }

    #[test]
    fn overrides_win(seed in any_seed()) {
        if let Some(pinned) = DEFAULT_OVERRIDES.iter().find_map(|rule| rule.matches(seed.get())) {
            prop_assert_eq!(Some(select_layout(seed)), layout(pinned));
        }
    }

    #[test]
    fn variation_off(seed in any_seed()) {
        prop_assert!(LayoutSelector::new().with_variation(false).select(seed).is_canonical());
    }

    #[test]
    fn canonical_seed_beats_overrides(pinned in 1u8..=10, variation in any::<bool>()) {
        let selector = LayoutSelector::new()
            .with_overrides(vec![LayoutOverride::Seed { seed: 1, layout: pinned }])
            .with_variation(variation);
        prop_assert!(selector.select(Seed::CANONICAL).is_canonical());
    }
}
