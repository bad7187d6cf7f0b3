//! Numeric comparison checks
//!
//! Operands go through [`IntoNumber`], so any mix of integer and float types
//! (and `Option`s of them) compares by value. A missing or NaN operand fails.

use std::cmp::Ordering;

use crate::number::{compare, IntoNumber, Number};
use crate::Accumulator;

fn ordering_is(
    value: impl IntoNumber,
    other: impl IntoNumber,
    accept: fn(Ordering) -> bool,
) -> bool {
    compare(value, other).is_some_and(accept)
}

impl Accumulator {
    /// Fails unless `value > threshold`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::validate;
    ///
    /// let amount: Option<f64> = Some(0.0);
    /// let acc = validate("order", |v| {
    ///     v.check_greater(amount, 0, || "amount must be greater than zero");
    /// });
    /// assert_eq!(acc.len(), 1);
    /// ```
    pub fn check_greater<F, S>(
        &mut self,
        value: impl IntoNumber,
        threshold: impl IntoNumber,
        message: F,
    ) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.check(ordering_is(value, threshold, Ordering::is_gt), message)
    }

    /// Fails unless `value >= threshold`.
    pub fn check_greater_or_equal<F, S>(
        &mut self,
        value: impl IntoNumber,
        threshold: impl IntoNumber,
        message: F,
    ) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.check(ordering_is(value, threshold, Ordering::is_ge), message)
    }

    /// Fails unless `value < threshold`.
    pub fn check_lesser<F, S>(
        &mut self,
        value: impl IntoNumber,
        threshold: impl IntoNumber,
        message: F,
    ) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.check(ordering_is(value, threshold, Ordering::is_lt), message)
    }

    /// Fails unless `value <= threshold`.
    pub fn check_lesser_or_equal<F, S>(
        &mut self,
        value: impl IntoNumber,
        threshold: impl IntoNumber,
        message: F,
    ) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.check(ordering_is(value, threshold, Ordering::is_le), message)
    }

    /// Fails unless both operands are present and equal by value.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::validate;
    ///
    /// let acc = validate("k", |v| {
    ///     v.check_equals(1, 1.0, || "unused");
    ///     v.check_equals(None::<i32>, 1, || "must equal");
    /// });
    /// assert_eq!(acc.to_result().unwrap_err().to_string(), "k - must equal");
    /// ```
    pub fn check_equals<F, S>(
        &mut self,
        value: impl IntoNumber,
        other: impl IntoNumber,
        message: F,
    ) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.check(ordering_is(value, other, Ordering::is_eq), message)
    }

    /// Fails unless `min <= value <= max`.
    pub fn check_in_range<F, S>(
        &mut self,
        value: impl IntoNumber,
        min: impl IntoNumber,
        max: impl IntoNumber,
        message: F,
    ) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let ok = match value.into_number() {
            Some(n) => {
                ordering_is(n, min, Ordering::is_ge) && ordering_is(n, max, Ordering::is_le)
            }
            None => false,
        };
        self.check(ok, message)
    }

    /// Same as [`check_in_range`](Self::check_in_range).
    pub fn check_between<F, S>(
        &mut self,
        value: impl IntoNumber,
        min: impl IntoNumber,
        max: impl IntoNumber,
        message: F,
    ) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.check_in_range(value, min, max, message)
    }

    /// Fails unless `min < value < max`.
    pub fn check_in_range_exclusive<F, S>(
        &mut self,
        value: impl IntoNumber,
        min: impl IntoNumber,
        max: impl IntoNumber,
        message: F,
    ) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let ok = match value.into_number() {
            Some(n) => {
                ordering_is(n, min, Ordering::is_gt) && ordering_is(n, max, Ordering::is_lt)
            }
            None => false,
        };
        self.check(ok, message)
    }

    /// Fails unless `value > 0`.
    pub fn check_positive<F, S>(&mut self, value: impl IntoNumber, message: F) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.check_greater(value, Number::ZERO, message)
    }

    /// Fails unless `value >= 0`.
    pub fn check_non_negative<F, S>(&mut self, value: impl IntoNumber, message: F) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.check_greater_or_equal(value, Number::ZERO, message)
    }

    /// Fails unless `value < 0`.
    pub fn check_negative<F, S>(&mut self, value: impl IntoNumber, message: F) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.check_lesser(value, Number::ZERO, message)
    }
}
