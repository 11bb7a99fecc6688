#![forbid(unsafe_code)]

//! The engine facade.
//!
//! [`DynamicSystem`] owns the feature flags, the variant registry, the layout
//! override table and the ordering memo. Flags live in an [`ArcSwap`] so a
//! toggle from any thread applies to the next call without locking readers.
//!
//! Every decision resolves its *effective* seed first:
//!
//! - variation decisions (variants, orderings, layouts) see
//!   [`Seed::CANONICAL`] when `variation` is off;
//! - structure decisions see no-ops when `structure` is off.
//!
//! The canonical seed short-circuits before any hashing, so a disabled engine
//! reproduces the original output exactly.

use std::sync::Arc;

use arc_swap::ArcSwap;
use dynsys_core::{EngineConfig, Seed};
use dynsys_layout::{LayoutConfig, LayoutOverride, LayoutSelector};
use dynsys_structure::{Element, Node, StructureDecision};
use dynsys_variants::{VariantCatalog, VariantKind, VariantRegistry};

use crate::error::Result;
use crate::memo::OrderMemo;

pub struct DynamicSystem {
    config: ArcSwap<EngineConfig>,
    registry: Arc<VariantRegistry>,
    layouts: LayoutSelector,
    memo: OrderMemo,
}

impl Default for DynamicSystem {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl std::fmt::Debug for DynamicSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicSystem")
            .field("config", &self.config())
            .field("coverage", &self.registry.coverage())
            .field("overrides", &self.layouts.overrides())
            .field("memoized", &self.memo.len())
            .finish()
    }
}

impl DynamicSystem {
    /// Engine over the built-in dictionaries and layout overrides.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config: ArcSwap::from_pointee(config),
            registry: Arc::new(VariantRegistry::builtin().clone()),
            // The seed domain is enforced here, not by the selector.
            layouts: LayoutSelector::new().with_max_seed(u16::MAX),
            memo: OrderMemo::default(),
        }
    }

    /// Engine configured from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(EngineConfig::from_env())
    }

    /// Engine configured from a TOML or JSON file.
    #[cfg(feature = "config")]
    pub fn from_config_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        Ok(Self::new(EngineConfig::from_file(path)?))
    }

    /// Replace the variant registry.
    #[must_use]
    pub fn with_registry(mut self, registry: impl Into<Arc<VariantRegistry>>) -> Self {
        self.registry = registry.into();
        self.memo.clear();
        self
    }

    /// Overlay a JSON catalog onto one dictionary kind.
    pub fn with_catalog_file(
        mut self,
        kind: VariantKind,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self> {
        let overlay = VariantCatalog::from_json_file(path)?;
        let registry = (*self.registry).clone().with_overlay(kind, overlay);
        self.registry = Arc::new(registry);
        Ok(self)
    }

    /// Replace the layout override table.
    #[must_use]
    pub fn with_layout_overrides(mut self, overrides: Vec<LayoutOverride>) -> Self {
        self.layouts = self.layouts.with_overrides(overrides);
        self
    }

    // -----------------------------------------------------------------------
    // Flags
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn config(&self) -> EngineConfig {
        **self.config.load()
    }

    pub fn set_config(&self, config: EngineConfig) {
        tracing::info!(
            structure = config.structure,
            variation = config.variation,
            max_seed = config.max_seed,
            "engine config updated"
        );
        self.config.store(Arc::new(config));
    }

    pub fn set_structure(&self, enabled: bool) {
        self.config
            .rcu(|current| Arc::new(current.with_structure(enabled)));
    }

    pub fn set_variation(&self, enabled: bool) {
        self.config
            .rcu(|current| Arc::new(current.with_variation(enabled)));
    }

    #[must_use]
    pub fn registry(&self) -> &VariantRegistry {
        &self.registry
    }

    #[must_use]
    pub fn memo(&self) -> &OrderMemo {
        &self.memo
    }

    /// Normalize a raw seed against the configured domain.
    #[must_use]
    pub fn normalize_seed(&self, raw: Option<i64>) -> Seed {
        self.config().normalize_seed(raw)
    }

    fn variation_seed(&self, seed: Seed) -> Seed {
        self.config().variation_seed(seed)
    }

    // -----------------------------------------------------------------------
    // Variation
    // -----------------------------------------------------------------------

    /// Seeded index into a list of `count` variants.
    #[must_use]
    pub fn pick_variant_index(&self, seed: Seed, key: &str, count: usize) -> usize {
        dynsys_core::pick_variant_index(self.variation_seed(seed), key, count)
    }

    /// Resolve `key` to a variant; see [`VariantRegistry::resolve`].
    #[must_use]
    pub fn get_variant(
        &self,
        seed: Seed,
        key: &str,
        dictionary: Option<&VariantCatalog>,
        fallback: Option<&str>,
    ) -> String {
        self.registry
            .resolve(self.variation_seed(seed), key, dictionary, fallback)
    }

    /// Resolve `key` against one dictionary kind.
    #[must_use]
    pub fn get_variant_of(
        &self,
        kind: VariantKind,
        seed: Seed,
        key: &str,
        fallback: Option<&str>,
    ) -> String {
        self.registry
            .resolve_kind(kind, self.variation_seed(seed), key, fallback)
    }

    /// Seeded permutation of `0..count`.
    #[must_use]
    pub fn generate_order(&self, seed: Seed, key: &str, count: usize) -> Vec<usize> {
        self.generate_order_shared(seed, key, count).to_vec()
    }

    /// Memoized [`generate_order`](Self::generate_order).
    #[must_use]
    pub fn generate_order_shared(&self, seed: Seed, key: &str, count: usize) -> Arc<[usize]> {
        self.memo
            .get_or_generate(self.variation_seed(seed), key, count)
    }

    /// Borrow `items` in seeded order.
    #[must_use]
    pub fn change_order_elements<'a, T>(&self, seed: Seed, key: &str, items: &'a [T]) -> Vec<&'a T> {
        let order = self.generate_order_shared(seed, key, items.len());
        dynsys_core::apply_order(items, &order)
    }

    /// Layout for `seed`.
    #[must_use]
    pub fn seed_layout(&self, seed: Seed) -> &'static LayoutConfig {
        let config = self.config();
        if !config.variation {
            return dynsys_layout::canonical_layout();
        }
        self.layouts.select(config.variation_seed(seed))
    }

    /// Layout for a raw, unnormalized seed.
    #[must_use]
    pub fn seed_layout_raw(&self, raw: Option<i64>) -> &'static LayoutConfig {
        self.seed_layout(self.normalize_seed(raw))
    }

    /// Set the variant `id` and append variant classes for `key`.
    ///
    /// Only dictionaries that know `key` contribute; nothing is logged for the
    /// others.
    #[must_use]
    pub fn apply_identity(&self, mut element: Element, seed: Seed, key: &str) -> Element {
        let seed = self.variation_seed(seed);
        if let Some(list) = self.registry.catalog(VariantKind::Id).get(key) {
            element.set_attr("id", list.pick(seed, key));
        }
        if let Some(list) = self.registry.catalog(VariantKind::Class).get(key) {
            element.add_class(list.pick(seed, key));
        }
        element
    }

    // -----------------------------------------------------------------------
    // Structure
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn decide_structure(&self, seed: Seed, key: &str) -> StructureDecision {
        let config = self.config();
        dynsys_structure::decide_structure(config.structure_seed(seed), key, config.structure)
    }

    /// Wrap `node` and add a decoy as [`decide_structure`](Self::decide_structure) says.
    #[must_use]
    pub fn add_wrap_decoy(&self, seed: Seed, key: &str, node: Node) -> Node {
        let config = self.config();
        let seed = config.structure_seed(seed);
        let decision = dynsys_structure::decide_structure(seed, key, config.structure);
        dynsys_structure::apply_structure(decision, seed, key, node)
    }
}
