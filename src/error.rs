//! The error produced when an accumulator is projected to a failed result
//!
//! [`ValidationError`] is the only error type in the crate. Its message is either
//! every violation joined as `"<key> - <message>"` with `", "`, or a message
//! supplied by the caller. The violations themselves travel with the error so
//! callers can still inspect them individually.
//!
//! # Examples
//!
//! ```
//! use tally::validate_to_result;
//!
//! let err = validate_to_result("form", |v| {
//!     v.fail(|| "first");
//!     v.fail(|| "second");
//! })
//! .unwrap_err();
//!
//! assert_eq!(err.to_string(), "form - first, form - second");
//! assert_eq!(err.violations().len(), 2);
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::Violation;

/// Aggregate failure of an accumulator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationError {
    message: String,
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Build an error whose message is the default rendering of `violations`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::{ValidationError, Violation};
    ///
    /// let err = ValidationError::from_violations(vec![
    ///     Violation::new("a", "x"),
    ///     Violation::new("b", "y"),
    /// ]);
    /// assert_eq!(err.message(), "a - x, b - y");
    /// ```
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        let message = join_violations(&violations);
        ValidationError {
            message,
            violations,
        }
    }

    /// Build an error with an explicit message, keeping the violations for inspection.
    pub fn with_message(message: impl Into<String>, violations: Vec<Violation>) -> Self {
        ValidationError {
            message: message.into(),
            violations,
        }
    }

    /// The rendered failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The violations behind this error, in insertion order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consume the error and return its violations.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for ValidationError {}

/// Render violations as `"<key> - <message>"` joined by `", "`.
pub(crate) fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_violations_joins_in_order() {
        let err = ValidationError::from_violations(vec![
            Violation::new("first", "one"),
            Violation::new("second", "two"),
            Violation::new("first", "three"),
        ]);
        assert_eq!(err.message(), "first - one, second - two, first - three");
        assert_eq!(err.to_string(), err.message());
    }

    #[test]
    fn test_with_message_overrides_rendering() {
        let err = ValidationError::with_message("order is invalid", vec![Violation::new("k", "m")]);
        assert_eq!(err.to_string(), "order is invalid");
        assert_eq!(err.violations().len(), 1);
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn StdError> =
            Box::new(ValidationError::from_violations(vec![Violation::new("k", "m")]));
        assert_eq!(err.to_string(), "k - m");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_into_violations() {
        let err = ValidationError::from_violations(vec![Violation::new("k", "m")]);
        let violations = err.into_violations();
        assert_eq!(violations, vec![Violation::new("k", "m")]);
    }

    #[test]
    fn test_join_empty() {
        assert_eq!(join_violations(&[]), "");
    }
}
