#![forbid(unsafe_code)]

//! Caller-owned caches for seeded mock content.
//!
//! Generators are pure functions of the seed. [`SeededCache`] keeps the
//! output for the most recent seed so pages re-rendering with the same seed
//! do not regenerate; asking for another seed replaces it.

use dynsys_core::Seed;

/// Something that produces content from a seed.
pub trait SeededContent {
    type Output;

    fn generate(&self, seed: Seed) -> Self::Output;
}

impl<F, T> SeededContent for F
where
    F: Fn(Seed) -> T,
{
    type Output = T;

    fn generate(&self, seed: Seed) -> T {
        self(seed)
    }
}

/// Single-slot cache keyed by seed.
pub struct SeededCache<G: SeededContent> {
    generator: G,
    current: Option<(Seed, G::Output)>,
}

impl<G: SeededContent> SeededCache<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            current: None,
        }
    }

    /// Content for `seed`, generating it if the cached seed differs.
    pub fn get(&mut self, seed: Seed) -> &G::Output {
        if self.current.as_ref().is_some_and(|(cached, _)| *cached != seed) {
            self.current = None;
        }
        let generator = &self.generator;
        &self
            .current
            .get_or_insert_with(|| {
                tracing::trace!(seed = seed.get(), "generating seeded content");
                (seed, generator.generate(seed))
            })
            .1
    }

    /// Regenerate for `seed` even if it is cached.
    pub fn reload(&mut self, seed: Seed) -> &G::Output {
        self.current = None;
        self.get(seed)
    }

    /// Seed of the cached content, if any.
    #[must_use]
    pub fn current_seed(&self) -> Option<Seed> {
        self.current.as_ref().map(|(seed, _)| *seed)
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn seed(value: i64) -> Seed {
        Seed::normalize(Some(value))
    }

    struct Products {
        calls: Cell<usize>,
    }

    impl SeededContent for Products {
        type Output = Vec<String>;

        fn generate(&self, seed: Seed) -> Vec<String> {
            self.calls.set(self.calls.get() + 1);
            (0..3).map(|i| format!("product-{seed}-{i}")).collect()
        }
    }

    fn cache() -> SeededCache<Products> {
        SeededCache::new(Products {
            calls: Cell::new(0),
        })
    }

    #[test]
    fn same_seed_generates_once() {
        let mut cache = cache();
        assert_eq!(cache.get(seed(4))[0], "product-4-0");
        cache.get(seed(4));
        assert_eq!(cache.generator().calls.get(), 1);
        assert_eq!(cache.current_seed(), Some(seed(4)));
    }

    #[test]
    fn new_seed_replaces() {
        let mut cache = cache();
        cache.get(seed(4));
        assert_eq!(cache.get(seed(5))[0], "product-5-0");
        assert_eq!(cache.generator().calls.get(), 2);
        assert_eq!(cache.current_seed(), Some(seed(5)));
    }

    #[test]
    fn reload_forces_regeneration() {
        let mut cache = cache();
        cache.get(seed(4));
        cache.reload(seed(4));
        assert_eq!(cache.generator().calls.get(), 2);
    }

    #[test]
    fn clear_drops_content() {
        let mut cache = cache();
        cache.get(seed(4));
        cache.clear();
        assert_eq!(cache.current_seed(), None);
    }

    #[test]
    fn closures_are_generators() {
        let mut cache = SeededCache::new(|seed: Seed| seed.get() * 2);
        assert_eq!(*cache.get(seed(21)), 42);
    }
}
