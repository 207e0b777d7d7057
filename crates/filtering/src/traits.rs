//! Core traits for specification filtering.
//!
//! `Specification` is the test applied to one item; `Filter` applies a
//! specification to a sequence of items. New kinds of test or new ways of
//! filtering are added by implementing these traits on new types, never by
//! editing the existing ones.

use std::sync::Arc;

/// A boolean test over a single item.
///
/// ## Design Note
/// - Implementations hold configuration only (a target color, a size, ...)
///   and must be deterministic with no side effects.
/// - `Send + Sync` lets one specification be shared read-only by several
///   filter calls running at once.
pub trait Specification<T>: Send + Sync {
    /// Does `item` pass this test?
    fn is_satisfied(&self, item: &T) -> bool;

    /// Returns the name of this specification (for logging/debugging)
    fn name(&self) -> &str;

    /// Human-readable form including configuration, e.g. `color == green`.
    ///
    /// Defaults to [`Specification::name`].
    fn describe(&self) -> String {
        self.name().to_string()
    }
}

impl<T, S> Specification<T> for &S
where
    S: Specification<T> + ?Sized,
{
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T, S> Specification<T> for Box<S>
where
    S: Specification<T> + ?Sized,
{
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T, S> Specification<T> for Arc<S>
where
    S: Specification<T> + ?Sized,
{
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Selects the items of a sequence that satisfy a specification.
///
/// Implementations must return matches in input order and must not keep
/// any state between calls.
pub trait Filter<T>: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply `spec` to `items`.
    ///
    /// # Arguments
    /// * `items` - Borrowed items, in the order results should come back
    /// * `spec` - The test each item must pass
    ///
    /// # Returns
    /// A newly allocated vector of the matching references. The references
    /// borrow from the caller's items, not from `items` itself.
    fn filter<'a>(&self, items: &[&'a T], spec: &dyn Specification<T>) -> Vec<&'a T>;
}
