#![forbid(unsafe_code)]

//! Seeded identifier, class and text variants.
//!
//! ```
//! use dynsys_core::Seed;
//! use dynsys_variants::get_variant;
//!
//! // The canonical seed always yields the original value.
//! assert_eq!(get_variant(Seed::CANONICAL, "search-input", None, None), "search-input");
//! // Unknown keys fall back without failing.
//! assert_eq!(get_variant(Seed::CANONICAL, "missing", None, Some("x")), "x");
//! ```

pub mod builtin;
pub mod catalog;
pub mod registry;

pub use catalog::{CatalogError, VariantCatalog, VariantList};
pub use registry::{CoverageReport, VariantKind, VariantRegistry, get_variant};
