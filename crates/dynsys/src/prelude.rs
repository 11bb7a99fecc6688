//! Everything a page needs to ask for decisions.

pub use crate::content::{SeededCache, SeededContent};
pub use crate::system::DynamicSystem;
pub use dynsys_core::{EngineConfig, Seed, SeedParams};
pub use dynsys_layout::{LayoutConfig, Region};
pub use dynsys_structure::{DecoyPosition, Element, Node, StructureDecision};
pub use dynsys_variants::{VariantCatalog, VariantKind};
