//! End-to-end checks of the engine surface.
//!
//! Covers determinism, canonical-seed behavior, seed normalization,
//! permutation validity, flag gating, the layout table, variant fallback,
//! the cart reorder and the search-button structure decision.
//!
//! Run with: `cargo test -p dynsys --test e2e_engine`

use dynsys::prelude::*;
use dynsys::{OrderStrategy, candidate_pool, generate_order, pick_variant_index, select_layout};
use dynsys_core::is_permutation;

fn seed(value: i64) -> Seed {
    Seed::normalize(Some(value))
}

fn enabled() -> DynamicSystem {
    DynamicSystem::new(EngineConfig::ENABLED)
}

const KEYS: &[&str] = &["search-input", "cart-items", "listing-cards", "post-card", "x"];

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn every_operation_is_deterministic() {
    let a = enabled();
    let b = enabled();
    for value in 1..=300 {
        let s = seed(value);
        for key in KEYS {
            assert_eq!(a.pick_variant_index(s, key, 5), b.pick_variant_index(s, key, 5));
            assert_eq!(a.get_variant(s, key, None, None), b.get_variant(s, key, None, None));
            assert_eq!(a.generate_order(s, key, 6), b.generate_order(s, key, 6));
            assert_eq!(a.decide_structure(s, key), b.decide_structure(s, key));
        }
        assert_eq!(a.seed_layout(s), b.seed_layout(s));
    }
}

// ============================================================================
// Canonical seed
// ============================================================================

#[test]
fn canonical_seed_is_original() {
    let system = enabled();
    for key in KEYS {
        for count in 0..12 {
            assert_eq!(system.pick_variant_index(Seed::CANONICAL, key, count), 0);
            let order = system.generate_order(Seed::CANONICAL, key, count);
            assert_eq!(order, (0..count).collect::<Vec<_>>());
        }
        assert!(system.decide_structure(Seed::CANONICAL, key).is_noop());
    }
    assert!(system.seed_layout(Seed::CANONICAL).is_canonical());
    assert_eq!(
        system.get_variant(Seed::CANONICAL, "checkout-label", None, None),
        "Checkout"
    );
}

// ============================================================================
// Normalization
// ============================================================================

#[test]
fn invalid_seeds_select_canonical_layout() {
    let system = enabled();
    let canonical = system.seed_layout_raw(Some(1));
    for raw in [Some(0), Some(-5), Some(301), None] {
        assert_eq!(system.seed_layout_raw(raw), canonical, "raw {raw:?}");
    }
    assert_eq!(SeedParams::from_query("seed=abc").seed, Seed::CANONICAL);
}

// ============================================================================
// Permutations
// ============================================================================

#[test]
fn orders_are_permutations() {
    for value in 1..=300 {
        for count in 1..10 {
            let order = generate_order(seed(value), "listing-cards", count);
            assert!(is_permutation(&order, count), "seed {value} count {count}: {order:?}");
        }
    }
}

#[test]
fn pool_strategies_are_all_reachable_shapes() {
    let pool = candidate_pool(seed(2), "cart-items", 4);
    for strategy in OrderStrategy::ALL {
        assert!(
            (0..pool.len()).any(|i| pool.strategy_at(i) == Some(strategy)),
            "{}",
            strategy.as_str()
        );
    }
    assert!(pool.iter().all(|p| is_permutation(&p, 4)));
}

// ============================================================================
// Flag gating
// ============================================================================

#[test]
fn structure_flag_gates_decisions() {
    let system = DynamicSystem::new(EngineConfig::ENABLED.with_structure(false));
    for value in 1..=300 {
        assert!(system.decide_structure(seed(value), "search-button").is_noop());
    }
}

#[test]
fn variation_flag_gates_variants_layouts_and_orders() {
    let system = DynamicSystem::new(EngineConfig::ENABLED.with_variation(false));
    for value in 1..=300 {
        let s = seed(value);
        assert_eq!(system.get_variant(s, "search-input", None, None), "search-input");
        assert_eq!(system.get_variant(s, "search-button-label", None, None), "Search");
        assert!(system.seed_layout(s).is_canonical());
        assert_eq!(system.generate_order(s, "cart-items", 4), [0, 1, 2, 3]);
    }
}

// ============================================================================
// Layout table
// ============================================================================

#[test]
fn documented_layout_table() {
    let system = enabled();
    for (raw, expected) in [(1, 1), (8, 1), (31, 2), (76, 7), (300, 1)] {
        assert_eq!(system.seed_layout(seed(raw)).index, expected, "seed {raw}");
        assert_eq!(select_layout(seed(raw)).index, expected, "seed {raw}");
    }
}

// ============================================================================
// Fallback
// ============================================================================

#[test]
fn unknown_key_returns_fallback_for_every_seed() {
    let system = enabled();
    for value in 1..=300 {
        assert_eq!(
            system.get_variant(seed(value), "nonexistent-key", None, Some("fallbackValue")),
            "fallbackValue"
        );
    }
}

// ============================================================================
// Cart reorder
// ============================================================================

#[test]
fn cart_reorder_is_stable() {
    let system = enabled();
    let order = system.generate_order(seed(2), "cart-items", 4);
    assert_eq!(order, [0, 1, 3, 2]);
    assert_eq!(order, generate_order(seed(2), "cart-items", 4));

    let items = ["mug", "lamp", "rug", "chair"];
    let reordered = system.change_order_elements(seed(2), "cart-items", &items);
    assert_eq!(reordered, [&"mug", &"lamp", &"chair", &"rug"]);
}

// ============================================================================
// Structure decision
// ============================================================================

#[test]
fn search_button_structure_is_stable() {
    let system = DynamicSystem::new(EngineConfig::DISABLED.with_structure(true));
    let decision = system.decide_structure(seed(5), "search-button");
    assert_eq!(
        decision,
        StructureDecision {
            wrap: true,
            decoy: DecoyPosition::None,
        }
    );
    for _ in 0..10 {
        assert_eq!(system.decide_structure(seed(5), "search-button"), decision);
    }
}

#[test]
fn rendered_page_fragment() {
    let system = enabled();
    let s = seed(5);
    let button = system.apply_identity(
        Element::new("button").child(Node::text(system.get_variant(s, "search-button-label", None, None))),
        s,
        "search-button",
    );
    let html = system.add_wrap_decoy(s, "search-button", button.into()).to_html();
    assert!(html.starts_with(r#"<span style="display:contents""#), "{html}");
    assert_eq!(pick_variant_index(Seed::CANONICAL, "search-button", 5), 0);
}
