//! Per-attribute product filter.
//!
//! Every new criterion, or combination of criteria, needs another method
//! here: two attributes already need three methods, three would need
//! seven. This is the design the specification filters replace; it stays
//! so the two can be compared side by side.

use catalog::{Color, Product, Size};

/// Filters products with one hard-coded method per query.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFilter;

impl ProductFilter {
    pub fn by_color<'a>(&self, items: &[&'a Product], color: Color) -> Vec<&'a Product> {
        items.iter().copied().filter(|p| p.color == color).collect()
    }

    pub fn by_size<'a>(&self, items: &[&'a Product], size: Size) -> Vec<&'a Product> {
        items.iter().copied().filter(|p| p.size == size).collect()
    }

    pub fn by_size_and_color<'a>(
        &self,
        items: &[&'a Product],
        size: Size,
        color: Color,
    ) -> Vec<&'a Product> {
        items
            .iter()
            .copied()
            .filter(|p| p.size == size && p.color == color)
            .collect()
    }
}
