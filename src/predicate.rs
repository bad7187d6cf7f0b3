//! Reusable predicates for element and value checks
//!
//! [`Accumulator::check_that`](crate::Accumulator::check_that) and
//! [`Accumulator::check_all`](crate::Accumulator::check_all) take a
//! [`Predicate`] instead of a precomputed boolean, so one rule can be named
//! once and applied to many values. Any `Fn(&T) -> bool` is a predicate.
//!
//! Checks run synchronously on the caller's thread, so predicates may capture
//! `Rc`, `Cell` or other non-thread-safe state.
//!
//! # Example
//!
//! ```rust
//! use tally::predicate::{any_of, PredicateExt};
//! use tally::validate;
//!
//! let catalogued = |sku: &&str| sku.starts_with("SKU-");
//! let discontinued = |sku: &&str| sku.ends_with("-OLD");
//! let orderable = catalogued.and(discontinued.not());
//! let promo = any_of(["GIFT", "SAMPLE"].map(|code| move |s: &&str| *s == code));
//!
//! let acc = validate("cart", |v| {
//!     v.check_all(Some(["SKU-1", "SKU-2-OLD"]), orderable, || "item cannot be ordered");
//!     v.check_that(&"GIFT", promo, || "unknown promo code");
//! });
//! assert_eq!(acc.len(), 1);
//! ```

/// A named test over values of type `T`.
pub trait Predicate<T: ?Sized> {
    /// Whether `value` satisfies the predicate.
    fn test(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        self(value)
    }
}

/// Builds compound predicates by chaining.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Holds when both `self` and `other` hold. `other` is skipped once
    /// `self` fails.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And {
            first: self,
            second: other,
        }
    }

    /// Holds when either predicate holds. `other` is skipped once `self`
    /// passes.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or {
            first: self,
            second: other,
        }
    }

    /// Holds when `self` does not.
    fn not(self) -> Not<Self> {
        Not { inner: self }
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// See [`PredicateExt::and`].
#[derive(Clone, Copy, Debug)]
pub struct And<A, B> {
    first: A,
    second: B,
}

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for And<A, B> {
    fn test(&self, value: &T) -> bool {
        self.first.test(value) && self.second.test(value)
    }
}

/// See [`PredicateExt::or`].
#[derive(Clone, Copy, Debug)]
pub struct Or<A, B> {
    first: A,
    second: B,
}

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for Or<A, B> {
    fn test(&self, value: &T) -> bool {
        self.first.test(value) || self.second.test(value)
    }
}

/// See [`PredicateExt::not`].
#[derive(Clone, Copy, Debug)]
pub struct Not<P> {
    inner: P,
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    fn test(&self, value: &T) -> bool {
        !self.inner.test(value)
    }
}

/// Holds when every predicate in the list holds; an empty list always holds.
#[derive(Clone, Debug)]
pub struct AllOf<P> {
    rules: Vec<P>,
}

/// Holds when at least one predicate holds; an empty list never holds.
#[derive(Clone, Debug)]
pub struct AnyOf<P> {
    rules: Vec<P>,
}

/// Combine a list of rules that must all pass.
///
/// Mixed closure types can be listed as `Box<dyn Fn(&T) -> bool>`.
///
/// # Examples
///
/// ```
/// use tally::predicate::{all_of, Predicate};
///
/// let rules: Vec<Box<dyn Fn(&u32) -> bool>> = vec![
///     Box::new(|qty: &u32| *qty > 0),
///     Box::new(|qty: &u32| qty % 6 == 0),
/// ];
/// let case_quantity = all_of(rules);
/// assert!(case_quantity.test(&12));
/// assert!(!case_quantity.test(&7));
/// ```
pub fn all_of<I>(rules: I) -> AllOf<I::Item>
where
    I: IntoIterator,
{
    AllOf {
        rules: rules.into_iter().collect(),
    }
}

/// Combine a list of rules where one passing is enough.
pub fn any_of<I>(rules: I) -> AnyOf<I::Item>
where
    I: IntoIterator,
{
    AnyOf {
        rules: rules.into_iter().collect(),
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for AllOf<P> {
    fn test(&self, value: &T) -> bool {
        self.rules.iter().all(|rule| rule.test(value))
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for AnyOf<P> {
    fn test(&self, value: &T) -> bool {
        self.rules.iter().any(|rule| rule.test(value))
    }
}
