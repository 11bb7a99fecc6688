#![forbid(unsafe_code)]

//! Variant lookup across the identifier, class and text dictionaries.
//!
//! [`VariantRegistry::resolve`] implements the lookup contract:
//!
//! 1. An explicit dictionary is consulted first when supplied.
//! 2. Otherwise the dictionaries are searched in [`VariantKind::PRIORITY`]
//!    order (ids, classes, texts); the first hit wins.
//! 3. A miss returns the caller's fallback, else the key itself, and logs a
//!    warning in debug builds. It never fails.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use dynsys_core::Seed;
use serde::Serialize;

use crate::builtin;
use crate::catalog::{VariantCatalog, VariantList};

/// Which dictionary a variant comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
    Id,
    Class,
    Text,
}

impl VariantKind {
    /// Search order used when no dictionary is named.
    pub const PRIORITY: [Self; 3] = [Self::Id, Self::Class, Self::Text];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Class => "class",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariantKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "id" | "ids" => Ok(Self::Id),
            "class" | "classes" => Ok(Self::Class),
            "text" | "texts" => Ok(Self::Text),
            other => Err(format!("unknown variant kind: {other}")),
        }
    }
}

/// Key counts per dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CoverageReport {
    pub ids: usize,
    pub classes: usize,
    pub texts: usize,
    /// Keys present in more than one dictionary; these resolve to the
    /// higher-priority dictionary when no kind is named.
    pub shadowed: usize,
}

impl CoverageReport {
    #[must_use]
    pub fn total(&self) -> usize {
        self.ids + self.classes + self.texts
    }
}

/// The three variant dictionaries.
#[derive(Debug, Clone, Default)]
pub struct VariantRegistry {
    ids: VariantCatalog,
    classes: VariantCatalog,
    texts: VariantCatalog,
}

static BUILTIN: OnceLock<VariantRegistry> = OnceLock::new();

impl VariantRegistry {
    #[must_use]
    pub fn new(ids: VariantCatalog, classes: VariantCatalog, texts: VariantCatalog) -> Self {
        Self {
            ids,
            classes,
            texts,
        }
    }

    /// Process-wide registry of the built-in dictionaries.
    pub fn builtin() -> &'static Self {
        BUILTIN.get_or_init(|| {
            Self::new(
                builtin::ids().clone(),
                builtin::classes().clone(),
                builtin::texts().clone(),
            )
        })
    }

    #[must_use]
    pub fn catalog(&self, kind: VariantKind) -> &VariantCatalog {
        match kind {
            VariantKind::Id => &self.ids,
            VariantKind::Class => &self.classes,
            VariantKind::Text => &self.texts,
        }
    }

    /// Replace or extend one dictionary; `overlay` wins on shared keys.
    #[must_use]
    pub fn with_overlay(mut self, kind: VariantKind, overlay: VariantCatalog) -> Self {
        let target = match kind {
            VariantKind::Id => &mut self.ids,
            VariantKind::Class => &mut self.classes,
            VariantKind::Text => &mut self.texts,
        };
        target.extend(overlay);
        self
    }

    /// First dictionary containing `key`, in priority order.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<(VariantKind, &VariantList)> {
        VariantKind::PRIORITY
            .into_iter()
            .find_map(|kind| self.catalog(kind).get(key).map(|list| (kind, list)))
    }

    /// Resolve `key` to a string for `seed`.
    ///
    /// Pass [`Seed::CANONICAL`] to force the original value.
    #[must_use]
    pub fn resolve(
        &self,
        seed: Seed,
        key: &str,
        dictionary: Option<&VariantCatalog>,
        fallback: Option<&str>,
    ) -> String {
        let list = match dictionary {
            Some(dictionary) => dictionary.get(key),
            None => self.lookup(key).map(|(_, list)| list),
        };
        match list {
            Some(list) => list.pick(seed, key).to_owned(),
            None => missing(key, fallback),
        }
    }

    /// Resolve `key` against a single dictionary kind.
    #[must_use]
    pub fn resolve_kind(
        &self,
        kind: VariantKind,
        seed: Seed,
        key: &str,
        fallback: Option<&str>,
    ) -> String {
        self.resolve(seed, key, Some(self.catalog(kind)), fallback)
    }

    #[must_use]
    pub fn coverage(&self) -> CoverageReport {
        let shadowed = self
            .classes
            .keys()
            .chain(self.texts.keys())
            .filter(|key| self.ids.contains(key))
            .chain(self.texts.keys().filter(|key| {
                self.classes.contains(key) && !self.ids.contains(key)
            }))
            .count();
        CoverageReport {
            ids: self.ids.len(),
            classes: self.classes.len(),
            texts: self.texts.len(),
            shadowed,
        }
    }
}

fn missing(key: &str, fallback: Option<&str>) -> String {
    #[cfg(debug_assertions)]
    tracing::warn!(key, fallback, "no variant list for key");
    fallback.unwrap_or(key).to_owned()
}

/// Resolve `key` against the built-in registry (or `dictionary` when given).
#[must_use]
pub fn get_variant(
    seed: Seed,
    key: &str,
    dictionary: Option<&VariantCatalog>,
    fallback: Option<&str>,
) -> String {
    VariantRegistry::builtin().resolve(seed, key, dictionary, fallback)
}
