//! Error types for the catalog crate.
//!
//! Filtering itself cannot fail, so every error here comes from the
//! boundary: reading a catalog file or turning text into a `Color`/`Size`.

use thiserror::Error;

/// Errors that can occur while loading or parsing a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading a catalog file
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not a JSON array of products
    #[error("Malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A color name that does not match any `Color`
    #[error("Unknown color: {0}")]
    UnknownColor(String),

    /// A size name that does not match any `Size`
    #[error("Unknown size: {0}")]
    UnknownSize(String),

    /// A product whose name is empty or only whitespace
    #[error("Product name is empty")]
    EmptyName,

    /// A catalog entry that failed validation, tagged with its position in the file
    #[error("Invalid product at index {index}: {source}")]
    InvalidProduct {
        index: usize,
        #[source]
        source: Box<CatalogError>,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
