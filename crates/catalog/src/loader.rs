//! Loading a `Catalog` from disk.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::Catalog;
use std::path::Path;

impl Catalog {
    /// Load a catalog from a JSON file.
    ///
    /// Products keep the order they have in the file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!("Reading catalog from {}", path.display());

        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let products = parser::parse_products(&json)?;

        tracing::info!("Loaded {} products from {}", products.len(), path.display());
        Ok(Catalog::from(products))
    }
}
