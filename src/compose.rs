//! Merging accumulators
//!
//! Composition copies violations from one accumulator into another. The source
//! is never modified, and merged violations keep the key they were recorded
//! under, so a parent that folds in its children reports each child failure
//! against the child's key.
//!
//! # Examples
//!
//! ```
//! use tally::{reduce_invalid, validate};
//!
//! let lines: Vec<u32> = vec![];
//! let order = validate("order", |v| {
//!     v.check_positive(10, || "amount must be positive");
//!     v.add(&reduce_invalid(
//!         lines.iter().map(|qty| validate(format!("line {qty}"), |l| {
//!             l.check_positive(*qty, || "quantity must be positive");
//!         })),
//!         || "lines cannot be empty",
//!     ));
//! });
//!
//! assert_eq!(order.len(), 1);
//! assert_eq!(order.violations()[0].message(), "lines cannot be empty");
//! ```

use std::borrow::Borrow;

use crate::Accumulator;

impl Accumulator {
    /// Append copies of `other`'s violations after this accumulator's own.
    ///
    /// Returns `self` for chaining. `other` is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::{validate, Accumulator};
    ///
    /// let first = validate("first", |v| { v.fail(|| "one"); });
    /// let second = validate("second", |v| { v.fail(|| "two"); });
    ///
    /// let mut combined = Accumulator::new("parent");
    /// combined.add(&first).add(&second);
    ///
    /// assert_eq!(
    ///     combined.to_result().unwrap_err().to_string(),
    ///     "first - one, second - two"
    /// );
    /// assert_eq!(first.len(), 1);
    /// ```
    pub fn add(&mut self, other: &Accumulator) -> &mut Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            key = %self.key(),
            from = %other.key(),
            merged = other.len(),
            "merging violations"
        );
        self.push_all(other.violations().iter().cloned());
        self
    }

    /// Move `other`'s violations into this accumulator without cloning them.
    pub fn absorb(&mut self, other: Accumulator) -> &mut Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            key = %self.key(),
            from = %other.key(),
            merged = other.len(),
            "absorbing violations"
        );
        self.push_all(other.into_violations());
        self
    }

    /// [`add`](Self::add) every accumulator in `others`, left to right.
    ///
    /// An empty iterator leaves this accumulator unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::{validate, Accumulator};
    ///
    /// let children = vec![
    ///     validate("a", |v| { v.fail(|| "x"); }),
    ///     validate("b", |v| { v.fail(|| "y"); }),
    /// ];
    /// let mut parent = Accumulator::new("parent");
    /// parent.add_all(&children);
    /// assert_eq!(parent.len(), 2);
    ///
    /// parent.add_all(Vec::<Accumulator>::new());
    /// assert_eq!(parent.len(), 2);
    /// ```
    pub fn add_all<I>(&mut self, others: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Borrow<Accumulator>,
    {
        for other in others {
            self.add(other.borrow());
        }
        self
    }

    /// [`add_all`](Self::add_all) over an optional list; `None` is a no-op.
    ///
    /// Accepts the same lists as `add_all`, owned or borrowed.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::{validate, Accumulator};
    ///
    /// let lines: Option<Vec<Accumulator>> = Some(vec![validate("line 1", |v| {
    ///     v.fail(|| "quantity must be positive");
    /// })]);
    /// let mut order = Accumulator::new("order");
    /// order.add_all_opt(lines.as_ref()).add_all_opt(None::<Vec<Accumulator>>);
    /// assert_eq!(order.len(), 1);
    /// ```
    pub fn add_all_opt<I>(&mut self, others: Option<I>) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Borrow<Accumulator>,
    {
        match others {
            Some(others) => self.add_all(others),
            None => self,
        }
    }
}

/// Fallbacks for an accumulator that may not exist.
///
/// # Examples
///
/// ```
/// use tally::{Accumulator, OptionAccumulatorExt};
///
/// let missing: Option<Accumulator> = None;
/// assert!(missing.clone().or_valid().is_valid());
/// assert_eq!(missing.or_invalid(|| "missing").len(), 1);
/// ```
pub trait OptionAccumulatorExt {
    /// The accumulator, or a fresh valid one when absent.
    fn or_valid(self) -> Accumulator;

    /// The accumulator, or a fresh one holding a single failure with
    /// `message` when absent.
    fn or_invalid<F, S>(self, message: F) -> Accumulator
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl OptionAccumulatorExt for Option<Accumulator> {
    fn or_valid(self) -> Accumulator {
        self.unwrap_or_default()
    }

    fn or_invalid<F, S>(self, message: F) -> Accumulator
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        match self {
            Some(acc) => acc,
            None => Accumulator::invalid(message),
        }
    }
}

/// Fold accumulators into a fresh valid accumulator.
///
/// An empty input reduces to a valid accumulator.
///
/// # Examples
///
/// ```
/// use tally::{reduce_valid, validate};
///
/// let reduced = reduce_valid(vec![
///     validate("first", |v| { v.fail(|| "one"); }),
///     validate("second", |v| { v.fail(|| "two"); }),
/// ]);
/// assert_eq!(reduced.len(), 2);
///
/// let lines: Option<Vec<tally::Accumulator>> = None;
/// assert!(reduce_valid(lines.into_iter().flatten()).is_valid());
/// ```
pub fn reduce_valid<I>(accumulators: I) -> Accumulator
where
    I: IntoIterator,
    I::Item: Borrow<Accumulator>,
{
    let mut reduced = Accumulator::valid();
    reduced.add_all(accumulators);
    reduced
}

/// Like [`reduce_valid`], but an empty input yields a single failure with
/// `message`.
///
/// Use it to require that a collection of sub-validations is non-empty. When
/// the input has elements `message` is never evaluated.
///
/// # Examples
///
/// ```
/// use tally::{reduce_invalid, Accumulator};
///
/// let reduced = reduce_invalid(Vec::<Accumulator>::new(), || "missing validators");
/// assert_eq!(
///     reduced.violations()[0].message(),
///     "missing validators"
/// );
/// ```
pub fn reduce_invalid<I, F, S>(accumulators: I, message: F) -> Accumulator
where
    I: IntoIterator,
    I::Item: Borrow<Accumulator>,
    F: FnOnce() -> S,
    S: Into<String>,
{
    let mut accumulators = accumulators.into_iter().peekable();
    if accumulators.peek().is_none() {
        return Accumulator::invalid(message);
    }
    reduce_valid(accumulators)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{validate, Violation};

    fn failing(key: &str, message: &str) -> Accumulator {
        let mut acc = Accumulator::new(key);
        acc.fail(|| message.to_string());
        acc
    }

    #[test]
    fn test_add_appends_after_existing() {
        let mut parent = failing("parent", "own");
        parent.add(&failing("child", "inherited"));
        assert_eq!(
            parent.violations(),
            &[
                Violation::new("parent", "own"),
                Violation::new("child", "inherited")
            ]
        );
    }

    #[test]
    fn test_add_leaves_source_untouched() {
        let child = failing("child", "m");
        let mut parent = Accumulator::new("parent");
        parent.add(&child).add(&child);
        assert_eq!(parent.len(), 2);
        assert_eq!(child.violations(), &[Violation::new("child", "m")]);
    }

    #[test]
    fn test_add_grouping_does_not_matter() {
        let (a, b, c) = (failing("a", "1"), failing("b", "2"), failing("c", "3"));

        let mut left = a.clone();
        left.add(&b).add(&c);

        let mut bc = b.clone();
        bc.add(&c);
        let mut right = a.clone();
        right.add(&bc);

        assert_eq!(left.violations(), right.violations());
    }

    #[test]
    fn test_absorb_moves_violations() {
        let mut parent = Accumulator::new("parent");
        parent.absorb(failing("child", "m"));
        assert_eq!(parent.violations(), &[Violation::new("child", "m")]);
    }

    #[test]
    fn test_add_all_empty_is_noop() {
        let mut acc = failing("k", "m");
        let before = acc.clone();
        acc.add_all(Vec::<Accumulator>::new());
        acc.add_all_opt(None::<Vec<Accumulator>>);
        acc.add_all_opt(Some(Vec::<Accumulator>::new()));
        assert_eq!(acc, before);
    }

    #[test]
    fn test_add_all_opt_takes_any_list_form() {
        let children = vec![failing("a", "x"), failing("b", "y")];

        let mut from_vec = Accumulator::new("k");
        from_vec.add_all_opt(Some(children.clone()));

        let mut from_ref = Accumulator::new("k");
        from_ref.add_all_opt(Some(&children));

        let mut from_slice = Accumulator::new("k");
        from_slice.add_all_opt(Some(children.as_slice()));

        let mut from_iter = Accumulator::new("k");
        from_iter.add_all_opt(Some(children.iter().filter(|c| !c.is_valid())));

        let mut expected = Accumulator::new("k");
        expected.add_all(&children);
        for acc in [from_vec, from_ref, from_slice, from_iter] {
            assert_eq!(acc, expected);
        }
    }

    #[test]
    fn test_add_all_equals_chained_add() {
        let (v1, v2) = (failing("v1", "x"), failing("v2", "y"));

        let mut via_all = Accumulator::new("k");
        via_all.add_all([&v1, &v2]);

        let mut via_add = Accumulator::new("k");
        via_add.add(&v1).add(&v2);

        assert_eq!(via_all, via_add);
    }

    #[test]
    fn test_or_valid_passes_through_present() {
        let present = Some(failing("k", "m"));
        assert_eq!(present.clone().or_valid(), failing("k", "m"));
        assert_eq!(present.or_invalid(|| "unused").len(), 1);
    }

    #[test]
    fn test_or_invalid_substitutes_single_failure() {
        let acc = None::<Accumulator>.or_invalid(|| "missing");
        assert_eq!(acc.len(), 1);
        assert!(acc.to_result().unwrap_err().to_string().contains("missing"));
    }

    #[test]
    fn test_reduce_valid_empty_is_valid() {
        assert!(reduce_valid(Vec::<Accumulator>::new()).is_valid());
    }

    #[test]
    fn test_reduce_invalid_non_empty_ignores_message() {
        let reduced = reduce_invalid(
            vec![validate("ok", |_| {}), failing("bad", "m")],
            || -> String { panic!("message must not be evaluated") },
        );
        assert_eq!(reduced.violations(), &[Violation::new("bad", "m")]);
    }

    #[test]
    fn test_reduce_invalid_all_valid_children_is_valid() {
        let reduced = reduce_invalid(vec![validate("ok", |_| {})], || "empty");
        assert!(reduced.is_valid());
    }

    #[test]
    fn test_reduce_invalid_empty_fails() {
        let reduced = reduce_invalid(Vec::<Accumulator>::new(), || "Lines cannot be empty");
        assert_eq!(reduced.len(), 1);
        assert_eq!(reduced.violations()[0].message(), "Lines cannot be empty");
    }
}
