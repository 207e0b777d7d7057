//! Combining specifications.
//!
//! - [`AndSpecification`]: exactly two children, satisfied iff both are
//! - [`AllOf`]: any number of children, satisfied iff all are
//! - [`SpecificationExt::and`] and [`and`]: shorthand for building an
//!   `AndSpecification` from two existing specifications
//!
//! ## Ownership
//! `AndSpecification<A, B>` stores whatever it is given. Hand it
//! references (`&green`, `&large`) and it borrows, so the borrow checker
//! refuses any composite that would outlive its children. Hand it values
//! and it owns them, which is what composing two temporaries needs.

use crate::traits::Specification;

/// Satisfied only if both `first` and `second` are.
///
/// `second` is not evaluated when `first` fails.
#[derive(Debug, Clone, Copy)]
pub struct AndSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A, B> Specification<T> for AndSpecification<A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }

    fn name(&self) -> &str {
        "AndSpecification"
    }

    fn describe(&self) -> String {
        format!("({} AND {})", self.first.describe(), self.second.describe())
    }
}

/// Compose two specifications into an [`AndSpecification`].
///
/// Same as `AndSpecification::new(first, second)`.
pub fn and<A, B>(first: A, second: B) -> AndSpecification<A, B> {
    AndSpecification::new(first, second)
}

/// Adds `.and(..)` to every specification.
///
/// ```ignore
/// let green = ColorSpecification::new(Color::Green);
/// let large = SizeSpecification::new(Size::Large);
///
/// // borrows both
/// let green_and_large = (&green).and(&large);
///
/// // owns both, so temporaries are fine
/// let large_blue = SizeSpecification::new(Size::Large)
///     .and(ColorSpecification::new(Color::Blue));
/// ```
pub trait SpecificationExt<T>: Specification<T> + Sized {
    fn and<S>(self, other: S) -> AndSpecification<Self, S>
    where
        S: Specification<T>,
    {
        AndSpecification::new(self, other)
    }
}

impl<T, S> SpecificationExt<T> for S where S: Specification<T> {}

/// Satisfied only if every child is.
///
/// An empty `AllOf` is satisfied by every item. Children are checked in
/// the order they were added and evaluation stops at the first failure.
///
/// ## Usage
/// ```ignore
/// let spec = AllOf::new()
///     .with(ColorSpecification::new(Color::Green))
///     .with(SizeSpecification::new(Size::Large));
/// ```
pub struct AllOf<'a, T> {
    specs: Vec<Box<dyn Specification<T> + 'a>>,
}

impl<'a, T> AllOf<'a, T> {
    /// Create a new empty AllOf.
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    /// Add a specification (builder pattern).
    pub fn with(mut self, spec: impl Specification<T> + 'a) -> Self {
        self.specs.push(Box::new(spec));
        self
    }

    /// Add a specification in place.
    pub fn push(&mut self, spec: impl Specification<T> + 'a) {
        self.specs.push(Box::new(spec));
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<T> Default for AllOf<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Specification<T> for AllOf<'_, T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.specs.iter().all(|spec| spec.is_satisfied(item))
    }

    fn name(&self) -> &str {
        "AllOf"
    }

    fn describe(&self) -> String {
        if self.specs.is_empty() {
            "all".to_string()
        } else {
            let parts: Vec<String> = self.specs.iter().map(|s| s.describe()).collect();
            format!("({})", parts.join(" AND "))
        }
    }
}

impl<T> std::fmt::Debug for AllOf<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AllOf")
            .field("specs", &self.describe())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::{from_fn, ColorSpecification, SizeSpecification};
    use catalog::{Color, Product, Size};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn products() -> Vec<Product> {
        vec![
            Product::new("Apple", Color::Green, Size::Small),
            Product::new("Tree", Color::Green, Size::Large),
            Product::new("House", Color::Blue, Size::Large),
        ]
    }

    #[test]
    fn test_and_matches_both_children() {
        let green = ColorSpecification::new(Color::Green);
        let large = SizeSpecification::new(Size::Large);
        let spec = AndSpecification::new(&green, &large);

        for product in &products() {
            assert_eq!(
                spec.is_satisfied(product),
                green.is_satisfied(product) && large.is_satisfied(product),
                "mismatch for {}",
                product.name
            );
        }
    }

    #[test]
    fn test_and_is_commutative() {
        let green = ColorSpecification::new(Color::Green);
        let large = SizeSpecification::new(Size::Large);

        let forward = and(&green, &large);
        let backward = and(&large, &green);

        for product in &products() {
            assert_eq!(forward.is_satisfied(product), backward.is_satisfied(product));
        }
    }

    #[test]
    fn test_and_short_circuits() {
        let calls = AtomicUsize::new(0);
        let never = from_fn("never", |_: &Product| false);
        let counting = from_fn("counting", |_: &Product| {
            calls.fetch_add(1, Ordering::SeqCst);
            true
        });

        let spec = (&never).and(&counting);
        for product in &products() {
            assert!(!spec.is_satisfied(product));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let spec = (&counting).and(&never);
        for product in &products() {
            assert!(!spec.is_satisfied(product));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_owned_composition_of_temporaries() {
        let spec = SizeSpecification::new(Size::Large).and(ColorSpecification::new(Color::Blue));
        let items = products();

        let matched: Vec<&str> = items
            .iter()
            .filter(|p| Specification::<Product>::is_satisfied(&spec, p))
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(matched, vec!["House"]);
    }

    #[test]
    fn test_describe() {
        let spec = ColorSpecification::new(Color::Green).and(SizeSpecification::new(Size::Large));
        assert_eq!(
            Specification::<Product>::describe(&spec),
            "(color == green AND size == large)"
        );
        assert_eq!(Specification::<Product>::name(&spec), "AndSpecification");
    }

    #[test]
    fn test_all_of_empty_matches_everything() {
        let spec: AllOf<Product> = AllOf::new();
        assert!(spec.is_empty());
        assert!(products().iter().all(|p| spec.is_satisfied(p)));
        assert_eq!(spec.describe(), "all");
    }

    #[test]
    fn test_all_of_agrees_with_and() {
        let green = ColorSpecification::new(Color::Green);
        let large = SizeSpecification::new(Size::Large);

        let all = AllOf::new().with(&green).with(&large);
        let pair = and(&green, &large);

        assert_eq!(all.len(), 2);
        for product in &products() {
            assert_eq!(all.is_satisfied(product), pair.is_satisfied(product));
        }
    }

    #[test]
    fn test_all_of_push() {
        let mut spec: AllOf<Product> = AllOf::new();
        spec.push(ColorSpecification::new(Color::Blue));
        spec.push(SizeSpecification::new(Size::Small));

        assert!(!products().iter().any(|p| spec.is_satisfied(p)));
    }
}
