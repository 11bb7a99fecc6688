#![no_main]

use arbitrary::Arbitrary;
use dynsys_core::{Seed, change_order_elements, generate_order, is_permutation, pick_variant_index};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    seed: i64,
    key: String,
    count: u16,
}

fuzz_target!(|input: Input| {
    let seed = Seed::normalize(Some(input.seed));
    // Cost is linear in count; the cap only keeps iterations fast.
    let count = usize::from(input.count % 4096);

    let order = generate_order(seed, &input.key, count);
    assert!(is_permutation(&order, count), "not a permutation: {order:?}");
    assert_eq!(order, generate_order(seed, &input.key, count), "non-deterministic");
    if seed.is_canonical() {
        assert!(order.iter().enumerate().all(|(i, &v)| i == v), "canonical not identity");
    }

    let items: Vec<usize> = (0..count).collect();
    let reordered: Vec<usize> = change_order_elements(seed, &input.key, &items)
        .into_iter()
        .copied()
        .collect();
    assert_eq!(reordered, order);

    let index = pick_variant_index(seed, &input.key, count);
    assert!((count == 0 && index == 0) || index < count);
});
