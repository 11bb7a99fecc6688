#![forbid(unsafe_code)]

//! Typed variant dictionaries.
//!
//! A [`VariantCatalog`] maps a component key to a [`VariantList`]. Lists are
//! never empty and index `0` is always the original value, so the canonical
//! seed reproduces the unscrambled page.
//!
//! # Invariants
//!
//! 1. `VariantList::canonical()` is `values[0]` and always exists.
//! 2. `VariantList::pick(Seed::CANONICAL, _)` returns the canonical value.
//! 3. Catalog iteration is ordered by key.
//!
//! # Failure Modes
//!
//! Loading rejects empty lists ([`CatalogError::EmptyList`]); lookups never
//! fail, they return `None`.

use std::collections::BTreeMap;
use std::path::Path;

use dynsys_core::{Seed, pick_variant_index};
use serde::Serialize;
use thiserror::Error;

/// Errors from building or loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("variant list for key `{key}` is empty")]
    EmptyList { key: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// VariantList
// ---------------------------------------------------------------------------

/// Ordered, non-empty candidates for one key. Index `0` is canonical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VariantList {
    values: Vec<String>,
}

impl VariantList {
    /// Build from a canonical value and its alternatives.
    pub fn new<I, S>(canonical: impl Into<String>, alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values = vec![canonical.into()];
        values.extend(alternatives.into_iter().map(Into::into));
        Self { values }
    }

    /// Build from a full list; `None` if it is empty.
    #[must_use]
    pub fn from_vec(values: Vec<String>) -> Option<Self> {
        (!values.is_empty()).then_some(Self { values })
    }

    /// The original value.
    #[must_use]
    pub fn canonical(&self) -> &str {
        &self.values[0]
    }

    /// Seeded pick for `key`.
    #[must_use]
    pub fn pick(&self, seed: Seed, key: &str) -> &str {
        &self.values[pick_variant_index(seed, key, self.values.len())]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; present for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.values
    }
}

// ---------------------------------------------------------------------------
// VariantCatalog
// ---------------------------------------------------------------------------

/// Key → variant list mapping. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VariantCatalog {
    entries: BTreeMap<String, VariantList>,
}

impl VariantCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from static `(key, canonical, alternatives)` rows.
    #[must_use]
    pub fn from_rows(rows: &[(&str, &str, &[&str])]) -> Self {
        let mut catalog = Self::new();
        for (key, canonical, alternatives) in rows {
            catalog.insert(*key, VariantList::new(*canonical, alternatives.iter().copied()));
        }
        catalog
    }

    /// Insert or replace the list for `key`.
    pub fn insert(&mut self, key: impl Into<String>, list: VariantList) -> Option<VariantList> {
        self.entries.insert(key.into(), list)
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, list: VariantList) -> Self {
        self.insert(key, list);
        self
    }

    /// Overlay `other` on top of this catalog; `other` wins on shared keys.
    pub fn extend(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&VariantList> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariantList)> {
        self.entries.iter().map(|(key, list)| (key.as_str(), list))
    }

    /// Load from a JSON object of `key -> [canonical, alternatives...]`.
    pub fn from_json_str(s: &str) -> Result<Self, CatalogError> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(s)?;
        let mut catalog = Self::new();
        for (key, values) in raw {
            let Some(list) = VariantList::from_vec(values) else {
                return Err(CatalogError::EmptyList { key });
            };
            catalog.insert(key, list);
        }
        Ok(catalog)
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.as_ref().display(),
            keys = catalog.len(),
            "variant catalog loaded"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(value: i64) -> Seed {
        Seed::normalize(Some(value))
    }

    #[test]
    fn canonical_is_first() {
        let list = VariantList::new("search-input", ["query-field", "search-box"]);
        assert_eq!(list.canonical(), "search-input");
        assert_eq!(list.len(), 3);
        assert!(!list.is_empty());
        assert_eq!(list.pick(Seed::CANONICAL, "search-input"), "search-input");
    }

    #[test]
    fn pick_follows_selection_primitive() {
        let list = VariantList::new("a", ["b", "c", "d"]);
        let index = pick_variant_index(seed(2), "search-input", 4);
        assert_eq!(list.pick(seed(2), "search-input"), list.as_slice()[index]);
    }

    #[test]
    fn empty_vec_is_rejected() {
        assert!(VariantList::from_vec(Vec::new()).is_none());
        assert!(VariantList::from_vec(vec!["x".into()]).is_some());
    }

    #[test]
    fn json_loading() {
        let catalog = VariantCatalog::from_json_str(
            r#"{"search-input": ["search-input", "q"], "cart-page": ["cart-page"]}"#,
        )
        .expect("valid catalog");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.keys().collect::<Vec<_>>(), ["cart-page", "search-input"]);
        assert_eq!(catalog.get("search-input").map(VariantList::len), Some(2));
    }

    #[test]
    fn json_empty_list_names_the_key() {
        match VariantCatalog::from_json_str(r#"{"broken": []}"#) {
            Err(CatalogError::EmptyList { key }) => assert_eq!(key, "broken"),
            other => panic!("expected EmptyList, got {other:?}"),
        }
    }

    #[test]
    fn json_shape_errors() {
        assert!(matches!(
            VariantCatalog::from_json_str(r#"{"k": "not-a-list"}"#),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn json_file_loading() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ids.json");
        std::fs::write(&path, r#"{"nav-bar": ["nav-bar", "top-nav"]}"#).expect("write");
        let catalog = VariantCatalog::from_json_file(&path).expect("load");
        assert!(catalog.contains("nav-bar"));

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            VariantCatalog::from_json_file(&missing),
            Err(CatalogError::Io(_))
        ));
    }

    #[test]
    fn extend_overrides_shared_keys() {
        let mut base = VariantCatalog::new()
            .with("a", VariantList::new("a", ["a1"]))
            .with("b", VariantList::new("b", ["b1"]));
        base.extend(VariantCatalog::new().with("b", VariantList::new("b", ["b2", "b3"])));
        assert_eq!(base.get("b").map(VariantList::len), Some(3));
        assert_eq!(base.get("a").map(VariantList::len), Some(2));
    }

    #[test]
    fn serializes_as_plain_object() {
        let catalog = VariantCatalog::from_rows(&[("k", "v0", &["v1"])]);
        let json = serde_json::to_string(&catalog).expect("serialize");
        assert_eq!(json, r#"{"k":["v0","v1"]}"#);
    }
}
