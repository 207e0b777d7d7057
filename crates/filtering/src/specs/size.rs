//! Match products of one size.

use crate::traits::Specification;
use catalog::{Product, Size};

/// Satisfied by products whose size equals the configured one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.size
    }

    fn name(&self) -> &str {
        "SizeSpecification"
    }

    fn describe(&self) -> String {
        format!("size == {}", self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Color;

    #[test]
    fn test_size_specification() {
        let large = SizeSpecification::new(Size::Large);

        assert!(large.is_satisfied(&Product::new("Tree", Color::Green, Size::Large)));
        assert!(!large.is_satisfied(&Product::new("Apple", Color::Green, Size::Small)));
        assert!(!large.is_satisfied(&Product::new("Chair", Color::Red, Size::Medium)));
    }
}
