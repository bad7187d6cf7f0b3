//! The violation accumulator
//!
//! An [`Accumulator`] collects every failed check instead of stopping at the
//! first one. All checks route through [`Accumulator::check`], which appends a
//! [`Violation`] carrying the accumulator's key when its predicate is false.
//!
//! # Examples
//!
//! ```
//! use tally::Accumulator;
//!
//! let mut acc = Accumulator::new("signup");
//! acc.check("bob".len() >= 5, || "username too short")
//!     .check(17 >= 18, || "must be an adult");
//!
//! assert_eq!(acc.len(), 2);
//! assert_eq!(
//!     acc.to_result().unwrap_err().to_string(),
//!     "signup - username too short, signup - must be an adult"
//! );
//! ```
//!
//! # Threading
//!
//! Every mutating method takes `&mut self`, so an accumulator has exactly one
//! writer at a time. It is `Send + Sync` and can be handed to another thread
//! or read concurrently once checking is done.

use uuid::Uuid;

use crate::error::ValidationError;
use crate::Violation;

/// Collector of constraint violations for one validation context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accumulator {
    key: String,
    violations: Vec<Violation>,
}

impl Accumulator {
    /// Create an empty accumulator.
    ///
    /// A blank `key` (empty or whitespace only) is replaced with a generated
    /// UUID so every accumulator has a usable key.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::Accumulator;
    ///
    /// assert_eq!(Accumulator::new("order").key(), "order");
    /// assert!(!Accumulator::new("  ").key().trim().is_empty());
    /// ```
    pub fn new(key: impl AsRef<str>) -> Self {
        Accumulator {
            key: resolve_key(key.as_ref()),
            violations: Vec::new(),
        }
    }

    /// A fresh accumulator with a generated key and no violations.
    pub fn valid() -> Self {
        Accumulator::default()
    }

    /// A fresh accumulator holding exactly one unconditional failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::Accumulator;
    ///
    /// let acc = Accumulator::invalid(|| "lines cannot be empty");
    /// assert_eq!(acc.len(), 1);
    /// assert_eq!(acc.violations()[0].message(), "lines cannot be empty");
    /// ```
    pub fn invalid<F, S>(message: F) -> Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let mut acc = Accumulator::default();
        acc.fail(message);
        acc
    }

    /// Record a violation when `predicate` is false.
    ///
    /// `message` is only called on failure, so formatting costs nothing on the
    /// success path.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::Accumulator;
    ///
    /// let mut acc = Accumulator::new("k");
    /// acc.check(true, || "not evaluated");
    /// acc.check(false, || format!("{} is not allowed", 42));
    /// assert_eq!(acc.violations()[0].message(), "42 is not allowed");
    /// ```
    pub fn check<F, S>(&mut self, predicate: bool, message: F) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        if !predicate {
            let message = message().into();
            #[cfg(feature = "tracing")]
            tracing::debug!(key = %self.key, message = %message, "constraint violated");
            self.violations.push(Violation::new(self.key.clone(), message));
        }
        self
    }

    /// Record a violation unconditionally.
    pub fn fail<F, S>(&mut self, message: F) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.check(false, message)
    }

    /// The key violations recorded here are tagged with.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Recorded violations in insertion order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// `true` when nothing has been recorded.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of recorded violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Same as [`is_valid`](Self::is_valid).
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Apply `transform` to the recorded violations.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::validate;
    ///
    /// let count = validate("k", |v| {
    ///     v.fail(|| "one");
    /// })
    /// .map(|violations| violations.len());
    /// assert_eq!(count, 1);
    /// ```
    pub fn map<R, F>(&self, transform: F) -> R
    where
        F: FnOnce(&[Violation]) -> R,
    {
        transform(&self.violations)
    }

    /// Consume the accumulator and return its violations.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Project into a result.
    ///
    /// `Ok(true)` when valid. Otherwise the error message lists every
    /// violation as `"<key> - <message>"`, joined with `", "` in insertion
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::validate;
    ///
    /// let ok = validate("ok", |v| {
    ///     v.check_not_blank("value", || "should not be blank");
    /// });
    /// assert_eq!(ok.to_result(), Ok(true));
    ///
    /// let failed = validate("field", |v| {
    ///     v.check_not_null(&None::<String>, || "missing");
    /// });
    /// assert_eq!(failed.to_result().unwrap_err().to_string(), "field - missing");
    /// ```
    pub fn to_result(&self) -> Result<bool, ValidationError> {
        if self.is_valid() {
            return Ok(true);
        }
        self.log_failure();
        Err(ValidationError::from_violations(self.violations.clone()))
    }

    /// Project into a result, replacing the failure message with `message`.
    ///
    /// The violations are still carried by the error.
    pub fn to_result_with(&self, message: impl Into<String>) -> Result<bool, ValidationError> {
        if self.is_valid() {
            return Ok(true);
        }
        self.log_failure();
        Err(ValidationError::with_message(
            message,
            self.violations.clone(),
        ))
    }

    /// Consuming form of [`to_result`](Self::to_result).
    pub fn into_result(self) -> Result<bool, ValidationError> {
        if self.is_valid() {
            return Ok(true);
        }
        self.log_failure();
        Err(ValidationError::from_violations(self.violations))
    }

    #[inline]
    fn log_failure(&self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            key = %self.key,
            violations = self.violations.len(),
            "validation failed"
        );
    }

    pub(crate) fn push_all<I>(&mut self, violations: I)
    where
        I: IntoIterator<Item = Violation>,
    {
        self.violations.extend(violations);
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Accumulator::new("")
    }
}

fn resolve_key(key: &str) -> String {
    if key.trim().is_empty() {
        Uuid::new_v4().to_string()
    } else {
        key.to_string()
    }
}
