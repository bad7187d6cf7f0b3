//! Temporal checks
//!
//! Any `PartialOrd` value works; in practice these are `chrono` dates and
//! timestamps. The comparison is strict.

use crate::Accumulator;

impl Accumulator {
    /// Fails unless `value` is present and strictly before `cutoff`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use tally::validate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
    /// let acc = validate("booking", |v| {
    ///     v.check_before(today.pred_opt(), today, || "unused");
    ///     v.check_before(today, today, || "date too late");
    /// });
    /// assert_eq!(acc.violations()[0].message(), "date too late");
    /// ```
    pub fn check_before<T, F, S>(
        &mut self,
        value: impl Into<Option<T>>,
        cutoff: T,
        message: F,
    ) -> &mut Self
    where
        T: PartialOrd,
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let ok = value.into().is_some_and(|value| value < cutoff);
        self.check(ok, message)
    }

    /// Fails unless `value` is present and strictly after `cutoff`.
    pub fn check_after<T, F, S>(
        &mut self,
        value: impl Into<Option<T>>,
        cutoff: T,
        message: F,
    ) -> &mut Self
    where
        T: PartialOrd,
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let ok = value.into().is_some_and(|value| value > cutoff);
        self.check(ok, message)
    }
}
