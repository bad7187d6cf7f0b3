//! Equality and membership checks

use crate::Accumulator;

/// A closed set of labels, typically the variant names of a fieldless enum.
///
/// Labels are matched case-exactly and listed in declaration order in failure
/// messages.
///
/// # Examples
///
/// ```
/// use tally::{validate_to_result, EnumLabels};
///
/// enum Color {
///     Red,
///     Green,
/// }
///
/// impl EnumLabels for Color {
///     const LABELS: &'static [&'static str] = &["RED", "GREEN"];
/// }
///
/// let err = validate_to_result("color", |v| {
///     v.check_enum_member::<Color, _, _>("BLUE", || "invalid color");
/// })
/// .unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "color - invalid color and valid values are RED, GREEN"
/// );
/// ```
pub trait EnumLabels {
    /// Every valid label, in declaration order.
    const LABELS: &'static [&'static str];
}

impl Accumulator {
    /// Fails unless both values are present and equal.
    pub fn check_equals_and_not_null<T, F, S>(
        &mut self,
        first: Option<&T>,
        second: Option<&T>,
        message: F,
    ) -> &mut Self
    where
        T: PartialEq + ?Sized,
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let ok = matches!((first, second), (Some(a), Some(b)) if a == b);
        self.check(ok, message)
    }

    /// Fails when `value` is missing or not one of `allowed`.
    pub fn check_in<T, F, S>(
        &mut self,
        value: Option<&T>,
        allowed: &[T],
        message: F,
    ) -> &mut Self
    where
        T: PartialEq,
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let ok = value.is_some_and(|value| allowed.contains(value));
        self.check(ok, message)
    }

    /// Fails when `value` is one of `denied`. A missing value passes.
    pub fn check_not_in<T, F, S>(
        &mut self,
        value: Option<&T>,
        denied: &[T],
        message: F,
    ) -> &mut Self
    where
        T: PartialEq,
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let ok = value.is_none_or(|value| !denied.contains(value));
        self.check(ok, message)
    }

    /// Fails unless `value` exactly matches one of `labels`.
    ///
    /// The failure message is suffixed with
    /// `" and valid values are "` followed by `labels` joined with `", "`.
    pub fn check_one_of<'a, F, S>(
        &mut self,
        value: impl Into<Option<&'a str>>,
        labels: &[&str],
        message: F,
    ) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let value = value.into();
        let ok = value.is_some_and(|value| labels.iter().any(|label| *label == value));
        self.check(ok, || {
            format!(
                "{} and valid values are {}",
                message().into(),
                labels.join(", ")
            )
        })
    }

    /// [`check_one_of`](Self::check_one_of) against the labels of `E`.
    pub fn check_enum_member<'a, E, F, S>(
        &mut self,
        value: impl Into<Option<&'a str>>,
        message: F,
    ) -> &mut Self
    where
        E: EnumLabels,
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.check_one_of(value, E::LABELS, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::support::{failure, passes};

    enum Color {}

    impl EnumLabels for Color {
        const LABELS: &'static [&'static str] = &["RED", "GREEN"];
    }

    #[test]
    fn test_enum_member_lists_valid_values() {
        assert_eq!(
            failure(|v| {
                v.check_enum_member::<Color, _, _>("BLUE", || "invalid color");
            }),
            "fail - invalid color and valid values are RED, GREEN"
        );
        assert!(passes(|v| {
            v.check_enum_member::<Color, _, _>("RED", || "invalid color");
        }));
    }

    #[test]
    fn test_enum_member_is_case_exact() {
        assert!(!passes(|v| {
            v.check_enum_member::<Color, _, _>("red", || "invalid color");
        }));
        assert!(!passes(|v| {
            v.check_enum_member::<Color, _, _>(None::<&str>, || "invalid color");
        }));
    }

    #[test]
    fn test_one_of_keeps_declared_order() {
        assert_eq!(
            failure(|v| {
                v.check_one_of("x", &["b", "a", "c"], || "bad");
            }),
            "fail - bad and valid values are b, a, c"
        );
    }

    #[test]
    fn test_equals_and_not_null() {
        assert!(passes(|v| {
            v.check_equals_and_not_null(Some(&"a"), Some(&"a"), || "must match");
        }));
        assert_eq!(
            failure(|v| {
                v.check_equals_and_not_null(None, Some(&"a"), || "must match");
                v.check_equals_and_not_null(None::<&i32>, None, || "must match");
                v.check_equals_and_not_null(Some(&1), Some(&2), || "must match");
            }),
            "fail - must match, fail - must match, fail - must match"
        );
    }

    #[test]
    fn test_in() {
        assert!(passes(|v| {
            v.check_in(Some(&"a"), &["a", "b"], || "not allowed");
        }));
        assert_eq!(
            failure(|v| {
                v.check_in(Some(&"c"), &["a", "b"], || "not allowed");
                v.check_in(None, &["a", "b"], || "not allowed");
            }),
            "fail - not allowed, fail - not allowed"
        );
    }

    #[test]
    fn test_not_in() {
        assert_eq!(
            failure(|v| {
                v.check_not_in(Some(&"A"), &["A", "B", "C"], || "value not allowed");
            }),
            "fail - value not allowed"
        );
        assert!(passes(|v| {
            v.check_not_in(Some(&"Z"), &["A", "B", "C"], || "value not allowed");
            v.check_not_in(None, &["A"], || "value not allowed");
        }));
    }
}
