#![forbid(unsafe_code)]

//! Core of the dynsys engine: seeds, seeded selection, ordering, and flags.
//!
//! # Role in dynsys
//! `dynsys-core` owns every piece of seed arithmetic. The variant, layout and
//! structure crates build on [`pick_variant_index`]; the `dynsys` facade
//! wires them together behind an [`EngineConfig`].
//!
//! # Primary responsibilities
//! - **Seed**: normalization into `[1, max]`, query/env parsing.
//! - **Selection**: bit-exact rolling hash of `"{seed}-{key}"`.
//! - **Ordering**: seeded permutations drawn from a deduplicated pool.
//! - **Config**: the two feature flags and the seed domain.
//!
//! Every function here is pure; nothing reads the clock, the environment
//! (except the explicit `from_env` loaders), or shared mutable state.

pub mod config;
pub mod hash;
pub mod order;
pub mod seed;

pub use config::{ConfigError, EngineConfig};
pub use hash::{pick_variant_index, rolling_hash, seed_key_hash};
pub use order::{
    CandidatePool, OrderStrategy, apply_order, candidate_pool, change_order_elements, generate_order,
    is_permutation,
};
pub use seed::{DEFAULT_MAX_SEED, Seed, SeedParams, seed_from_env};
