#![forbid(unsafe_code)]

//! Seed-driven deterministic variant selection and layout scrambling.
//!
//! A page reads a seed, then asks the engine for decisions about each
//! semantically named element: which identifier, class or text to render,
//! what order to list items in, whether to wrap an element or add a hidden
//! decoy beside it, and which page arrangement to use. Every answer is a
//! pure function of `(seed, key)`, and seed `1` always reproduces the
//! original page.
//!
//! # Quick start
//!
//! ```
//! use dynsys::prelude::*;
//!
//! let system = DynamicSystem::new(EngineConfig::ENABLED);
//! let params = SeedParams::from_query("?seed=2");
//!
//! let order = system.generate_order(params.seed, "cart-items", 4);
//! assert_eq!(order, [0, 1, 3, 2]);
//!
//! let layout = system.seed_layout(SeedParams::from_query("seed=31").seed);
//! assert_eq!(layout.index, 2);
//! ```
//!
//! # Crates
//!
//! | Crate | Role |
//! |-------|------|
//! | `dynsys-core` | seeds, selection hash, orderings, flags |
//! | `dynsys-variants` | identifier/class/text dictionaries |
//! | `dynsys-layout` | layout catalog and selector |
//! | `dynsys-structure` | node model, wrapper/decoy injection |

pub mod content;
pub mod error;
pub mod memo;
pub mod prelude;
pub mod system;

pub use content::{SeededCache, SeededContent};
pub use error::{Error, Result};
pub use memo::{DEFAULT_MEMO_CAPACITY, OrderMemo};
pub use system::DynamicSystem;

pub use dynsys_core::{
    CandidatePool, ConfigError, DEFAULT_MAX_SEED, EngineConfig, OrderStrategy, Seed, SeedParams,
    candidate_pool, change_order_elements, generate_order, pick_variant_index, seed_from_env,
};
pub use dynsys_layout::{
    ContainerKind, LAYOUTS, LayoutConfig, LayoutOverride, LayoutSelector, Region, select_layout,
};
pub use dynsys_structure::{
    DecoyPosition, Element, Node, StructureDecision, apply_structure, decide_structure,
    wrap_decoy,
};
pub use dynsys_variants::{
    CatalogError, VariantCatalog, VariantKind, VariantList, VariantRegistry, get_variant,
};
