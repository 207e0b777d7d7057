//! Specification implementations.
//!
//! Each file adds one kind of test. None of them is referenced by the
//! traits, the combinators or the filters, which is what lets new ones be
//! added here without touching anything else.

pub mod color;
pub mod name;
pub mod predicate;
pub mod size;

// Re-export for convenience
pub use color::ColorSpecification;
pub use name::NameSpecification;
pub use predicate::{from_fn, FnSpecification};
pub use size::SizeSpecification;
