//! # Catalog Crate
//!
//! Item types for the filtering crate: products with a color and a size,
//! and a `Catalog` that owns them.
//!
//! ## Main Components
//!
//! - **types**: `Color`, `Size`, `Product`, `Catalog`
//! - **parser**: `FromStr` for attributes, JSON catalog parsing
//! - **loader**: `Catalog::load_from_file`
//! - **error**: `CatalogError`
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("products.json"))?;
//! for product in catalog.products() {
//!     println!("{product}");
//! }
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Catalog, Color, Product, Size};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.refs().is_empty());
    }

    #[test]
    fn test_demo_catalog() {
        let catalog = Catalog::demo();
        let names: Vec<&str> = catalog.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "Tree", "House"]);

        let apple = &catalog.products()[0];
        assert_eq!(apple.color, Color::Green);
        assert_eq!(apple.size, Size::Small);
    }

    #[test]
    fn test_refs_point_into_catalog() {
        let mut catalog = Catalog::new();
        catalog.push(Product::new("Kettle", Color::Red, Size::Medium));

        let refs = catalog.refs();
        assert_eq!(refs.len(), 1);
        assert!(std::ptr::eq(refs[0], &catalog.products()[0]));
    }

    #[test]
    fn test_product_display() {
        let product = Product::new("Tree", Color::Green, Size::Large);
        assert_eq!(product.to_string(), "Tree (green, large)");
    }
}
