#![forbid(unsafe_code)]

//! Seeded page layouts.
//!
//! A seed picks one of ten static [`LayoutConfig`] records through
//! [`LayoutSelector`]. The canonical seed (and any invalid seed) always lands
//! on the original arrangement.

pub mod catalog;
pub mod selector;

pub use catalog::{
    CANONICAL_LAYOUT_INDEX, ContainerKind, LAYOUTS, LayoutConfig, Region, RegionClasses,
    canonical_layout, layout,
};
pub use selector::{
    DEFAULT_OVERRIDES, LayoutOverride, LayoutSelector, LayoutSource, formula_index, select_layout,
};
