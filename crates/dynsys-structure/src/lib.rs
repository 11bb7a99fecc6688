#![forbid(unsafe_code)]

//! Seeded wrapper and decoy injection.
//!
//! [`decide_structure`] answers "wrap this component? add a decoy where?";
//! [`apply_structure`] turns that answer into nodes. Both are no-ops with the
//! structure flag off or the canonical seed.

pub mod decision;
pub mod inject;
pub mod node;

pub use decision::{DecoyPosition, StructureDecision, decide_structure};
pub use inject::{apply_structure, decoy_element, wrap_decoy, wrapper_element};
pub use node::{Element, Node};
