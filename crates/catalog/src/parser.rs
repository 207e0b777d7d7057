//! Parsing for catalog data.
//!
//! Handles two things:
//! - `Color` / `Size` from their names (case-insensitive), via `FromStr`
//! - JSON catalog documents: an array of `{ "name", "color", "size" }`
//!
//! Attribute values in JSON are read as plain strings and then parsed with
//! the same `FromStr` impls the CLI uses, so both paths accept the same
//! spellings and report the same errors.

use crate::error::{CatalogError, Result};
use crate::types::*;
use serde::Deserialize;
use std::str::FromStr;

impl FromStr for Color {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            _ => Err(CatalogError::UnknownColor(s.to_string())),
        }
    }
}

impl FromStr for Size {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Size::Small),
            "medium" => Ok(Size::Medium),
            "large" => Ok(Size::Large),
            _ => Err(CatalogError::UnknownSize(s.to_string())),
        }
    }
}

/// One product as it appears in a catalog file, before validation
#[derive(Debug, Deserialize)]
pub(crate) struct RawProduct {
    name: String,
    color: String,
    size: String,
}

/// The single validation step shared by `parse_products` and
/// `Product`'s `Deserialize` impl.
impl TryFrom<RawProduct> for Product {
    type Error = CatalogError;

    fn try_from(raw: RawProduct) -> Result<Self> {
        let name = raw.name.trim();
        if name.is_empty() {
            return Err(CatalogError::EmptyName);
        }
        let color = raw.color.parse::<Color>()?;
        let size = raw.size.parse::<Size>()?;

        Ok(Product::new(name, color, size))
    }
}

/// Parse a JSON catalog document into products, keeping file order.
///
/// Fails on the first entry with an empty name or an unknown color/size;
/// the error carries that entry's index and the underlying cause.
pub fn parse_products(json: &str) -> Result<Vec<Product>> {
    let raw: Vec<RawProduct> = serde_json::from_str(json)?;

    raw.into_iter()
        .enumerate()
        .map(|(index, entry)| {
            Product::try_from(entry).map_err(|source| CatalogError::InvalidProduct {
                index,
                source: Box::new(source),
            })
        })
        .collect()
}
