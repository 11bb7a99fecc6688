use thiserror::Error;

use dynsys_core::ConfigError;
use dynsys_variants::CatalogError;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors from building a [`DynamicSystem`](crate::DynamicSystem).
///
/// Decisions never fail; only loading configuration or catalogs can.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
