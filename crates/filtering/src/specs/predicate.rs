//! Ad-hoc specifications from closures.

use crate::traits::Specification;

/// A specification backed by a closure.
///
/// Built with [`from_fn`]. The closure must be pure for the result to
/// behave like any other specification.
#[derive(Clone)]
pub struct FnSpecification<F> {
    name: &'static str,
    test: F,
}

/// Wrap a closure as a named specification.
///
/// ```ignore
/// let heavy = from_fn("heavy", |p: &Product| p.size == Size::Large);
/// ```
pub fn from_fn<T, F>(name: &'static str, test: F) -> FnSpecification<F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    FnSpecification { name, test }
}

impl<T, F> Specification<T> for FnSpecification<F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn is_satisfied(&self, item: &T) -> bool {
        (self.test)(item)
    }

    fn name(&self) -> &str {
        self.name
    }
}

impl<F> std::fmt::Debug for FnSpecification<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSpecification")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
