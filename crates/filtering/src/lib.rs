//! Open/closed filtering of in-memory items.
//!
//! This crate provides:
//! - The `Specification` trait: a reusable boolean test over one item
//! - Product specifications (color, size, name) and closure-backed ones
//! - Combinators: `AndSpecification`, `AllOf`, `.and(..)`
//! - The `Filter` trait with sequential and parallel implementations
//!
//! ## Architecture
//! Callers build specifications, optionally combine them, and pass the
//! result with a slice of item references to a filter. Filters return the
//! matching references in input order. Nothing here owns or mutates items.
//!
//! ## Example Usage
//! ```ignore
//! use catalog::{Catalog, Color, Size};
//! use filtering::prelude::*;
//!
//! let catalog = Catalog::demo();
//! let items = catalog.refs();
//!
//! let green = ColorSpecification::new(Color::Green);
//! let large = SizeSpecification::new(Size::Large);
//!
//! let green_things = BetterFilter.filter(&items, &green);
//! let big_green_things = BetterFilter.filter(&items, &(&green).and(&large));
//! ```

pub mod traits;
pub mod combinators;
pub mod specs;
pub mod filters;

// Re-export main types
pub use traits::{Filter, Specification};
pub use combinators::{and, AllOf, AndSpecification, SpecificationExt};
pub use filters::{BetterFilter, ParallelFilter, ProductFilter};
pub use specs::{from_fn, ColorSpecification, FnSpecification, NameSpecification, SizeSpecification};

/// Everything needed to build and apply specifications.
pub mod prelude {
    pub use crate::combinators::{and, AllOf, AndSpecification, SpecificationExt};
    pub use crate::filters::{BetterFilter, ParallelFilter};
    pub use crate::specs::{from_fn, ColorSpecification, NameSpecification, SizeSpecification};
    pub use crate::traits::{Filter, Specification};
}
