#![no_main]

use dynsys_core::{DEFAULT_MAX_SEED, Seed, SeedParams};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let params = SeedParams::from_query(text);
    assert!((1..=DEFAULT_MAX_SEED).contains(&params.seed.get()));
    assert!((1..=DEFAULT_MAX_SEED).contains(&params.structure_seed.get()));

    let lossy = Seed::parse_lossy(text);
    assert!((1..=DEFAULT_MAX_SEED).contains(&lossy.get()));
    match text.trim().parse::<i64>() {
        Ok(value) if (1..=i64::from(DEFAULT_MAX_SEED)).contains(&value) => {
            assert_eq!(i64::from(lossy.get()), value);
        }
        _ => assert!(lossy.is_canonical()),
    }
});
