#![no_main]

use arbitrary::Arbitrary;
use dynsys_core::Seed;
use dynsys_structure::{Element, Node, wrap_decoy};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    seed: u16,
    key: String,
    text: String,
    block: bool,
}

fuzz_target!(|input: Input| {
    let seed = Seed::normalize(Some(i64::from(input.seed)));
    let tag = if input.block { "div" } else { "span" };
    let original = Node::from(Element::new(tag).child(Node::text(input.text)));
    let original_html = original.to_html();

    let node = wrap_decoy(seed, &input.key, original.clone(), true);
    let html = node.to_html();
    assert!(html.contains(&original_html), "original element lost");
    assert!(node.element_count() <= original.element_count() + 2);
    assert_eq!(wrap_decoy(seed, &input.key, original, false).to_html(), original_html);
});
