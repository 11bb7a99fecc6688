#![forbid(unsafe_code)]

//! The fixed catalog of page arrangements.
//!
//! Every page is split into four regions (header, sidebar, content, footer).
//! A [`LayoutConfig`] says which container drives them, the order the regions
//! are emitted in, the grid template for grid containers, and the class
//! bundle applied to each region. Layout `1` is the original arrangement.

use std::fmt;

use serde::Serialize;

/// Number of entries in [`LAYOUTS`].
pub const LAYOUT_COUNT: u8 = 10;

/// Index of the original arrangement.
pub const CANONICAL_LAYOUT_INDEX: u8 = 1;

/// Container driving region placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerKind {
    /// Regions stacked in a column.
    FlexColumn,
    /// Regions side by side.
    FlexRow,
    /// Named grid areas.
    Grid,
}

impl ContainerKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FlexColumn => "flex-column",
            Self::FlexRow => "flex-row",
            Self::Grid => "grid",
        }
    }
}

/// One of the four page regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Header,
    Sidebar,
    Content,
    Footer,
}

impl Region {
    pub const ALL: [Self; 4] = [Self::Header, Self::Sidebar, Self::Content, Self::Footer];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Sidebar => "sidebar",
            Self::Content => "content",
            Self::Footer => "footer",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CSS classes per region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionClasses {
    pub container: &'static str,
    pub header: &'static str,
    pub sidebar: &'static str,
    pub content: &'static str,
    pub footer: &'static str,
}

impl RegionClasses {
    #[must_use]
    pub const fn for_region(&self, region: Region) -> &'static str {
        match region {
            Region::Header => self.header,
            Region::Sidebar => self.sidebar,
            Region::Content => self.content,
            Region::Footer => self.footer,
        }
    }
}

/// A page arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutConfig {
    /// 1-based catalog index.
    pub index: u8,
    pub name: &'static str,
    pub container: ContainerKind,
    /// Emission order of the regions.
    pub regions: [Region; 4],
    /// `grid-template-areas` value; only set for [`ContainerKind::Grid`].
    pub grid_template: Option<&'static str>,
    pub classes: RegionClasses,
}

impl LayoutConfig {
    #[must_use]
    pub const fn is_canonical(&self) -> bool {
        self.index == CANONICAL_LAYOUT_INDEX
    }

    /// Position of `region` in emission order.
    #[must_use]
    pub fn position(&self, region: Region) -> usize {
        self.regions
            .iter()
            .position(|r| *r == region)
            .unwrap_or(Region::ALL.len())
    }

    /// Inline style for the outer container.
    #[must_use]
    pub fn container_style(&self) -> String {
        match (self.container, self.grid_template) {
            (ContainerKind::FlexColumn, _) => "display:flex;flex-direction:column".to_owned(),
            (ContainerKind::FlexRow, _) => "display:flex;flex-direction:row;flex-wrap:wrap".to_owned(),
            (ContainerKind::Grid, Some(areas)) => {
                format!("display:grid;grid-template-areas:{areas}")
            }
            (ContainerKind::Grid, None) => "display:grid".to_owned(),
        }
    }
}

use ContainerKind::{FlexColumn, FlexRow, Grid};
use Region::{Content, Footer, Header, Sidebar};

/// The catalog, indexed by `index - 1`.
pub static LAYOUTS: [LayoutConfig; LAYOUT_COUNT as usize] = [
    LayoutConfig {
        index: 1,
        name: "classic",
        container: FlexColumn,
        regions: [Header, Sidebar, Content, Footer],
        grid_template: None,
        classes: RegionClasses {
            container: "layout-classic",
            header: "site-header",
            sidebar: "site-sidebar",
            content: "site-content",
            footer: "site-footer",
        },
    },
    LayoutConfig {
        index: 2,
        name: "sidebar-right",
        container: Grid,
        regions: [Header, Content, Sidebar, Footer],
        grid_template: Some("'header header' 'content sidebar' 'footer footer'"),
        classes: RegionClasses {
            container: "layout-grid sidebar-end",
            header: "top-header",
            sidebar: "aside-right",
            content: "main-area",
            footer: "bottom-footer",
        },
    },
    LayoutConfig {
        index: 3,
        name: "content-first",
        container: FlexColumn,
        regions: [Content, Header, Sidebar, Footer],
        grid_template: None,
        classes: RegionClasses {
            container: "stack content-lead",
            header: "header-bar",
            sidebar: "side-block",
            content: "primary-content",
            footer: "page-end",
        },
    },
    LayoutConfig {
        index: 4,
        name: "split-row",
        container: FlexRow,
        regions: [Sidebar, Content, Header, Footer],
        grid_template: None,
        classes: RegionClasses {
            container: "row-split",
            header: "masthead",
            sidebar: "rail-left",
            content: "body-pane",
            footer: "colophon",
        },
    },
    LayoutConfig {
        index: 5,
        name: "holy-grail",
        container: Grid,
        regions: [Header, Sidebar, Content, Footer],
        grid_template: Some("'header header header' 'sidebar content content' 'footer footer footer'"),
        classes: RegionClasses {
            container: "grail-grid",
            header: "grail-header",
            sidebar: "grail-nav",
            content: "grail-main",
            footer: "grail-footer",
        },
    },
    LayoutConfig {
        index: 6,
        name: "footer-top",
        container: FlexColumn,
        regions: [Footer, Header, Content, Sidebar],
        grid_template: None,
        classes: RegionClasses {
            container: "column inverted-chrome",
            header: "title-strip",
            sidebar: "trailing-panel",
            content: "center-stage",
            footer: "info-strip",
        },
    },
    LayoutConfig {
        index: 7,
        name: "sidebar-top",
        container: Grid,
        regions: [Sidebar, Header, Content, Footer],
        grid_template: Some("'sidebar' 'header' 'content' 'footer'"),
        classes: RegionClasses {
            container: "grid-stack",
            header: "banner",
            sidebar: "tool-strip",
            content: "workspace",
            footer: "base",
        },
    },
    LayoutConfig {
        index: 8,
        name: "reverse",
        container: FlexColumn,
        regions: [Footer, Content, Sidebar, Header],
        grid_template: None,
        classes: RegionClasses {
            container: "column reversed",
            header: "head-region",
            sidebar: "aux-region",
            content: "core-region",
            footer: "tail-region",
        },
    },
    LayoutConfig {
        index: 9,
        name: "wide-content",
        container: Grid,
        regions: [Content, Sidebar, Header, Footer],
        grid_template: Some("'content content sidebar' 'header header header' 'footer footer footer'"),
        classes: RegionClasses {
            container: "wide-grid",
            header: "sub-header",
            sidebar: "narrow-aside",
            content: "wide-main",
            footer: "wide-footer",
        },
    },
    LayoutConfig {
        index: 10,
        name: "row-reverse",
        container: FlexRow,
        regions: [Content, Sidebar, Footer, Header],
        grid_template: None,
        classes: RegionClasses {
            container: "row-flip",
            header: "cap",
            sidebar: "flank",
            content: "middle",
            footer: "sole",
        },
    },
];

/// Layout by 1-based index; `None` outside `1..=10`.
#[must_use]
pub fn layout(index: u8) -> Option<&'static LayoutConfig> {
    index
        .checked_sub(1)
        .and_then(|slot| LAYOUTS.get(usize::from(slot)))
}

/// The original arrangement.
#[must_use]
pub fn canonical_layout() -> &'static LayoutConfig {
    &LAYOUTS[0]
}
