#![forbid(unsafe_code)]

//! Engine feature flags and seed domain.
//!
//! [`EngineConfig`] gates every decision: `structure` enables wrapper/decoy
//! injection, `variation` enables identifier/class/text substitution, element
//! reordering and layout variation. Both default to off, which reproduces the
//! original markup exactly.
//!
//! # Loading
//!
//! ```toml
//! # dynsys.toml
//! structure = true
//! variation = true
//! max_seed = 300
//! ```
//!
//! ```rust,ignore
//! let config = EngineConfig::from_toml_file("dynsys.toml")?;
//! let config = EngineConfig::from_env();
//! ```

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::seed::{DEFAULT_MAX_SEED, Seed, env_get};

/// Env keys enabling structural scrambling, highest priority first.
pub const STRUCTURE_ENV_KEYS: &[&str] = &["DYNSYS_ENABLE_STRUCTURE", "ENABLE_DYNAMIC_HTML_STRUCTURE"];

/// Env keys enabling identifier/text/layout variation, highest priority first.
pub const VARIATION_ENV_KEYS: &[&str] = &["DYNSYS_ENABLE_VARIATION", "ENABLE_DYNAMIC_HTML"];

/// Env key overriding the seed domain upper bound.
pub const MAX_SEED_ENV_KEY: &str = "DYNSYS_MAX_SEED";

/// Feature flags and seed domain for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct EngineConfig {
    /// Wrapper/decoy injection.
    pub structure: bool,
    /// Variant substitution, reordering and layout variation.
    pub variation: bool,
    /// Largest accepted seed; larger seeds normalize to canonical.
    pub max_seed: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::DISABLED
    }
}

impl EngineConfig {
    /// Everything off: output identical to having no engine at all.
    pub const DISABLED: Self = Self {
        structure: false,
        variation: false,
        max_seed: DEFAULT_MAX_SEED,
    };

    /// Every flag on with the default seed domain.
    pub const ENABLED: Self = Self {
        structure: true,
        variation: true,
        max_seed: DEFAULT_MAX_SEED,
    };

    #[must_use]
    pub const fn with_structure(mut self, enabled: bool) -> Self {
        self.structure = enabled;
        self
    }

    #[must_use]
    pub const fn with_variation(mut self, enabled: bool) -> Self {
        self.variation = enabled;
        self
    }

    #[must_use]
    pub const fn with_max_seed(mut self, max_seed: u16) -> Self {
        self.max_seed = max_seed;
        self
    }

    /// Normalize a raw seed against this config's domain.
    #[must_use]
    pub fn normalize_seed(&self, raw: Option<i64>) -> Seed {
        Seed::normalize_in(raw, self.max_seed)
    }

    /// Seed to use for variation decisions: canonical when variation is off.
    #[must_use]
    pub fn variation_seed(&self, seed: Seed) -> Seed {
        if self.variation {
            seed.within(self.max_seed)
        } else {
            Seed::CANONICAL
        }
    }

    /// Seed to use for structure decisions: canonical when structure is off.
    #[must_use]
    pub fn structure_seed(&self, seed: Seed) -> Seed {
        if self.structure {
            seed.within(self.max_seed)
        } else {
            Seed::CANONICAL
        }
    }

    /// Validate parameters. An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.max_seed == 0 {
            errors.push("max_seed must be >= 1".into());
        }
        errors
    }

    #[cfg_attr(not(feature = "config"), allow(dead_code))]
    fn checked(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.checked()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.checked()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Load from a file, picking the format from its extension (`.json` or TOML).
    #[cfg(feature = "config")]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json_file(path)?
        } else {
            Self::from_toml_file(path)?
        };
        tracing::info!(
            path = %path.display(),
            structure = config.structure,
            variation = config.variation,
            max_seed = config.max_seed,
            "engine config loaded"
        );
        Ok(config)
    }

    /// Read flags from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(&env_get)
    }

    /// Read flags through an injectable getter.
    ///
    /// Flags accept `1` or `true` (case-insensitive). An unparseable or zero
    /// `DYNSYS_MAX_SEED` keeps the default domain.
    pub fn from_env_with<F: Fn(&str) -> Option<String>>(get: &F) -> Self {
        let structure = STRUCTURE_ENV_KEYS.iter().any(|key| env_flag_with(key, get));
        let variation = VARIATION_ENV_KEYS.iter().any(|key| env_flag_with(key, get));
        let max_seed = get(MAX_SEED_ENV_KEY)
            .and_then(|raw| raw.trim().parse::<u16>().ok())
            .filter(|value| *value > 0)
            .unwrap_or(DEFAULT_MAX_SEED);
        Self {
            structure,
            variation,
            max_seed,
        }
    }
}

fn env_flag_with<F: Fn(&str) -> Option<String>>(name: &str, get: &F) -> bool {
    get(name)
        .map(|v| {
            let v = v.trim();
            v == "1" || v.eq_ignore_ascii_case("true")
        })
        .unwrap_or(false)
}

/// Errors from loading an [`EngineConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "config")]
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[cfg(feature = "config")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid engine config: {}", .0.join("; "))]
    Validation(Vec<String>),
}
