#![forbid(unsafe_code)]

//! Applying a [`StructureDecision`] to a node.
//!
//! Wrappers never change the child's box: inline content gets a
//! `display:contents` span, block content a full-width block div. Decoys are
//! hidden from layout and assistive tech and carry only `data-*` diagnostics.

use dynsys_core::{Seed, pick_variant_index};

use crate::decision::{DecoyPosition, StructureDecision, decide_structure};
use crate::node::{Element, Node};

/// Tags a decoy may use; picked per component so decoys do not share a tag.
pub const DECOY_TAGS: &[&str] = &["span", "div", "i", "small"];

/// Style of an inline wrapper.
pub const INLINE_WRAPPER_STYLE: &str = "display:contents";

/// Style of a block wrapper.
pub const BLOCK_WRAPPER_STYLE: &str = "display:block;width:100%";

/// A hidden, non-interactive sibling.
#[must_use]
pub fn decoy_element(seed: Seed, key: &str, position: DecoyPosition) -> Element {
    let tag = DECOY_TAGS[pick_variant_index(seed, &format!("{key}-decoy-tag"), DECOY_TAGS.len())];
    Element::new(tag)
        .flag("hidden")
        .attr("aria-hidden", "true")
        .attr("style", "display:none")
        .attr("data-decoy", key)
        .attr("data-seed", seed.to_string())
        .attr("data-variant", position.as_str())
}

/// A layout-neutral wrapper around `child`.
#[must_use]
pub fn wrapper_element(key: &str, child: Node) -> Element {
    let (tag, style) = if child.is_block_level() {
        ("div", BLOCK_WRAPPER_STYLE)
    } else {
        ("span", INLINE_WRAPPER_STYLE)
    };
    Element::new(tag)
        .attr("style", style)
        .attr("data-wrapper", key)
        .child(child)
}

/// Apply `decision` to `node`. A no-op decision returns `node` unchanged.
#[must_use]
pub fn apply_structure(decision: StructureDecision, seed: Seed, key: &str, node: Node) -> Node {
    if decision.is_noop() {
        return node;
    }
    let core = if decision.wrap {
        Node::from(wrapper_element(key, node))
    } else {
        node
    };
    let decoy = || Node::from(decoy_element(seed, key, decision.decoy));
    match decision.decoy {
        DecoyPosition::None => core,
        DecoyPosition::Before => Node::fragment(vec![decoy(), core]),
        DecoyPosition::After => Node::fragment(vec![core, decoy()]),
    }
}

/// Decide and apply in one step. `enabled` is the structure flag.
#[must_use]
pub fn wrap_decoy(seed: Seed, key: &str, node: Node, enabled: bool) -> Node {
    apply_structure(decide_structure(seed, key, enabled), seed, key, node)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(value: i64) -> Seed {
        Seed::normalize(Some(value))
    }

    fn button() -> Node {
        Element::new("button")
            .attr("id", "search-button")
            .child(Node::text("Search"))
            .into()
    }

    #[test]
    fn noop_returns_input() {
        assert_eq!(wrap_decoy(seed(5), "search-button", button(), false), button());
        assert_eq!(wrap_decoy(Seed::CANONICAL, "search-button", button(), true), button());
    }

    #[test]
    fn inline_wrapper_uses_contents() {
        let wrapped = wrapper_element("k", button());
        assert_eq!(wrapped.tag(), "span");
        assert_eq!(wrapped.get_attr("style"), Some(INLINE_WRAPPER_STYLE));
        assert_eq!(wrapped.children(), [button()]);
    }

    #[test]
    fn block_wrapper_is_full_width() {
        let wrapped = wrapper_element("k", Element::new("section").into());
        assert_eq!(wrapped.tag(), "div");
        assert_eq!(wrapped.get_attr("style"), Some(BLOCK_WRAPPER_STYLE));
    }

    #[test]
    fn decoy_is_hidden() {
        let decoy = decoy_element(seed(9), "cart-item-card", DecoyPosition::Before);
        assert!(DECOY_TAGS.contains(&decoy.tag()));
        assert_eq!(decoy.get_attr("hidden"), Some(""));
        assert_eq!(decoy.get_attr("aria-hidden"), Some("true"));
        assert_eq!(decoy.get_attr("style"), Some("display:none"));
        assert_eq!(decoy.get_attr("data-decoy"), Some("cart-item-card"));
        assert_eq!(decoy.get_attr("data-seed"), Some("9"));
        assert_eq!(decoy.get_attr("data-variant"), Some("before"));
        assert!(decoy.children().is_empty());
    }

    #[test]
    fn decoy_positions() {
        let before = StructureDecision {
            wrap: false,
            decoy: DecoyPosition::Before,
        };
        let Node::Fragment(children) = apply_structure(before, seed(4), "k", button()) else {
            panic!("expected fragment");
        };
        assert_eq!(children.len(), 2);
        assert!(children[0].as_element().is_some_and(|e| e.get_attr("data-decoy").is_some()));
        assert_eq!(children[1], button());

        let after = StructureDecision {
            wrap: true,
            decoy: DecoyPosition::After,
        };
        let Node::Fragment(children) = apply_structure(after, seed(4), "k", button()) else {
            panic!("expected fragment");
        };
        assert!(children[0].as_element().is_some_and(|e| e.get_attr("data-wrapper") == Some("k")));
        assert!(children[1].as_element().is_some_and(|e| e.get_attr("data-decoy") == Some("k")));
    }

    #[test]
    fn search_button_seed_five_is_wrapped_only() {
        let node = wrap_decoy(seed(5), "search-button", button(), true);
        assert_eq!(
            node.to_html(),
            concat!(
                r#"<span style="display:contents" data-wrapper="search-button">"#,
                r#"<button id="search-button">Search</button></span>"#
            )
        );
    }
}
