//! Emptiness, size, and element checks
//!
//! These work on anything [`Measured`]: strings, slices, arrays, `Vec`, maps,
//! sets, and `Option`s of those.

use crate::check::Measured;
use crate::predicate::Predicate;
use crate::Accumulator;

impl Accumulator {
    /// Fails unless `value` is missing or has size zero.
    pub fn check_empty<M, F, S>(&mut self, value: &M, message: F) -> &mut Self
    where
        M: Measured + ?Sized,
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let ok = value.measure().is_none_or(|size| size == 0);
        self.check(ok, message)
    }

    /// Fails when `value` is missing or has size zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::validate;
    ///
    /// let tags: Vec<&str> = vec![];
    /// let name: Option<String> = Some("Ada".into());
    /// let acc = validate("post", |v| {
    ///     v.check_not_empty(&tags, || "at least one tag is required");
    ///     v.check_not_empty(&name, || "unused");
    /// });
    /// assert_eq!(acc.len(), 1);
    /// ```
    pub fn check_not_empty<M, F, S>(&mut self, value: &M, message: F) -> &mut Self
    where
        M: Measured + ?Sized,
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let ok = value.measure().is_some_and(|size| size > 0);
        self.check(ok, message)
    }

    /// Fails unless `value` is present with exactly `size` elements.
    ///
    /// A missing collection fails; it is not treated as size zero.
    pub fn check_collection_size<M, F, S>(
        &mut self,
        value: &M,
        size: usize,
        message: F,
    ) -> &mut Self
    where
        M: Measured + ?Sized,
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let ok = value.measure() == Some(size);
        self.check(ok, message)
    }

    /// Fails when `items` is missing or any element fails `predicate`.
    ///
    /// An empty collection passes.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::validate;
    ///
    /// let acc = validate("numbers", |v| {
    ///     v.check_all(Some(vec![2, 4, 6]), |n: &i32| n % 2 == 0, || "unused");
    ///     v.check_all(Some([2, 3, 6]), |n: &i32| n % 2 == 0, || "all even");
    ///     v.check_all(None::<Vec<i32>>, |_: &i32| true, || "missing");
    /// });
    /// assert_eq!(
    ///     acc.to_result().unwrap_err().to_string(),
    ///     "numbers - all even, numbers - missing"
    /// );
    /// ```
    pub fn check_all<I, P, F, S>(
        &mut self,
        items: Option<I>,
        predicate: P,
        message: F,
    ) -> &mut Self
    where
        I: IntoIterator,
        P: Predicate<I::Item>,
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let ok = items.is_some_and(|items| items.into_iter().all(|item| predicate.test(&item)));
        self.check(ok, message)
    }

    /// Fails unless `value` satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::predicate::PredicateExt;
    /// use tally::validate;
    ///
    /// let port = |p: &u16| *p >= 1024;
    /// let not_dev = |p: &u16| *p != 8080;
    /// let acc = validate("server", |v| {
    ///     v.check_that(&8080, port.and(not_dev), || "port not allowed");
    /// });
    /// assert_eq!(acc.len(), 1);
    /// ```
    pub fn check_that<T, P, F, S>(
        &mut self,
        value: &T,
        predicate: P,
        message: F,
    ) -> &mut Self
    where
        T: ?Sized,
        P: Predicate<T>,
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.check(predicate.test(value), message)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::check::support::{failure, passes};
    use crate::predicate::PredicateExt;

    #[test]
    fn test_collection_size() {
        assert!(passes(|v| {
            v.check_collection_size(&vec![1, 2], 2, || "wrong size");
        }));
        assert_eq!(
            failure(|v| {
                v.check_collection_size(&vec![1, 2], 3, || "wrong size");
            }),
            "fail - wrong size"
        );
    }

    #[test]
    fn test_collection_size_missing_fails_even_for_zero() {
        assert!(!passes(|v| {
            v.check_collection_size(&None::<Vec<i32>>, 0, || "missing");
        }));
    }

    #[test]
    fn test_not_empty_for_strings_and_collections() {
        assert!(passes(|v| {
            v.check_not_empty("value", || "empty");
            v.check_not_empty(&vec![1], || "empty");
        }));
        assert_eq!(
            failure(|v| {
                v.check_not_empty("", || "empty");
                v.check_not_empty(&Vec::<i32>::new(), || "empty");
                v.check_not_empty(&None::<String>, || "empty");
            }),
            "fail - empty, fail - empty, fail - empty"
        );
    }

    #[test]
    fn test_empty_for_strings_and_collections() {
        assert!(passes(|v| {
            v.check_empty("", || "not empty");
            v.check_empty(&Vec::<i32>::new(), || "not empty");
            v.check_empty(&None::<Vec<i32>>, || "not empty");
            v.check_empty(&HashMap::<String, i32>::new(), || "not empty");
        }));
        assert_eq!(
            failure(|v| {
                v.check_empty("value", || "not empty");
                v.check_empty(&vec![1], || "not empty");
            }),
            "fail - not empty, fail - not empty"
        );
    }

    #[test]
    fn test_all_requires_every_element() {
        assert!(passes(|v| {
            v.check_all(Some(vec![2, 4, 6]), |n: &i32| n % 2 == 0, || "all even");
            v.check_all(Some(Vec::<i32>::new()), |_: &i32| false, || "empty passes");
        }));
        assert_eq!(
            failure(|v| {
                v.check_all(Some(vec![2, 3, 6]), |n: &i32| n % 2 == 0, || "all even");
            }),
            "fail - all even"
        );
    }

    #[test]
    fn test_all_over_borrowed_items() {
        let names = vec!["ada".to_string(), "grace".to_string()];
        assert!(passes(|v| {
            v.check_all(Some(&names), |n: &&String| !n.is_empty(), || "blank name");
        }));
    }

    #[test]
    fn test_check_that_with_combinators() {
        let even = |n: &i32| n % 2 == 0;
        let small = |n: &i32| *n < 10;
        assert!(passes(|v| {
            v.check_that(&4, even.and(small), || "small even");
        }));
        assert_eq!(
            failure(|v| {
                v.check_that(&12, even.and(small), || "small even");
            }),
            "fail - small even"
        );
    }

    #[test]
    fn test_check_that_unsized() {
        assert!(passes(|v| {
            v.check_that("abc", |s: &str| s.is_ascii(), || "ascii");
        }));
    }
}
