//! Constraint violations
//!
//! A [`Violation`] is the record left behind by a failed check: the key of the
//! accumulator that ran the check and the rendered failure message.
//!
//! # Examples
//!
//! ```
//! use tally::validate;
//!
//! let acc = validate("user", |v| {
//!     v.check(false, || "name is required");
//! });
//!
//! let violation = &acc.violations()[0];
//! assert_eq!(violation.key(), "user");
//! assert_eq!(violation.message(), "name is required");
//! assert_eq!(violation.to_string(), "user - name is required");
//! ```

use std::fmt;

/// How serious a violation is.
///
/// Only [`Severity::Error`] exists today; the enum is non-exhaustive so more
/// levels can be added without breaking matches downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Severity {
    /// The constraint failed and the value must be rejected.
    #[default]
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// One failed constraint.
///
/// Violations are immutable once created. The fields are only reachable
/// through getters so a violation always reflects the check that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Violation {
    key: String,
    message: String,
    severity: Severity,
}

impl Violation {
    /// Create an error-level violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::{Severity, Violation};
    ///
    /// let v = Violation::new("order", "amount must be positive");
    /// assert_eq!(v.severity(), Severity::Error);
    /// ```
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Violation {
            key: key.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Key of the accumulator the violation was recorded in.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Rendered failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Severity tag.
    pub fn severity(&self) -> Severity {
        self.severity
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.key, self.message)
    }
}
