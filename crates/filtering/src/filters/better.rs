//! Sequential specification filter.
//!
//! This is the filter to reach for by default: one pass over the input,
//! no threads, no state.

use crate::traits::{Filter, Specification};

/// Keeps the items that satisfy a specification, in input order.
///
/// ## Algorithm
/// Single pass over `items`, pushing every reference for which
/// `spec.is_satisfied` returns true.
#[derive(Debug, Clone, Copy, Default)]
pub struct BetterFilter;

impl<T> Filter<T> for BetterFilter {
    fn name(&self) -> &str {
        "BetterFilter"
    }

    fn filter<'a>(&self, items: &[&'a T], spec: &dyn Specification<T>) -> Vec<&'a T> {
        tracing::debug!(
            "Applying specification: {} (input count: {})",
            spec.describe(),
            items.len()
        );
        let filtered: Vec<&'a T> = items
            .iter()
            .copied()
            .filter(|item| spec.is_satisfied(item))
            .collect();
        tracing::debug!(
            "Specification applied: {} (output count: {})",
            spec.name(),
            filtered.len()
        );
        filtered
    }
}
