//! Match products by name.
//!
//! Added alongside color and size without any change to the traits,
//! combinators or filters.

use crate::traits::Specification;
use catalog::Product;

/// Satisfied by products whose name contains a substring, ignoring case.
///
/// ## Algorithm
/// The needle is lowercased once at construction; each check lowercases
/// the product name and does a substring search. An empty needle matches
/// every product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSpecification {
    needle: String,
}

impl NameSpecification {
    /// Create a new NameSpecification.
    ///
    /// # Arguments
    /// * `needle` - Substring to look for in product names
    pub fn new(needle: impl AsRef<str>) -> Self {
        Self {
            needle: needle.as_ref().to_lowercase(),
        }
    }
}

impl Specification<Product> for NameSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.name.to_lowercase().contains(&self.needle)
    }

    fn name(&self) -> &str {
        "NameSpecification"
    }

    fn describe(&self) -> String {
        format!("name contains {:?}", self.needle)
    }
}
