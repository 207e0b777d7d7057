//! Filter implementations.
//!
//! `BetterFilter` and `ParallelFilter` take any specification.
//! `ProductFilter` is the older per-attribute design, kept for comparison.

pub mod better;
pub mod legacy;
pub mod parallel;

// Re-export for convenience
pub use better::BetterFilter;
pub use legacy::ProductFilter;
pub use parallel::ParallelFilter;
