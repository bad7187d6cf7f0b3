//! Testing utilities and helpers
//!
//! Assertion macros for accumulators, plus property-based testing support
//! behind the `proptest` feature.
//!
//! # Examples
//!
//! ```rust
//! use tally::{assert_invalid, assert_valid, assert_violation_messages, validate};
//!
//! let ok = validate("ok", |v| {
//!     v.check_not_blank("value", || "blank");
//! });
//! assert_valid!(ok);
//!
//! let failed = validate("failed", |v| {
//!     v.check_not_blank("", || "blank");
//!     v.check_positive(-1, || "negative");
//! });
//! assert_invalid!(failed);
//! assert_violation_messages!(failed, ["blank", "negative"]);
//! ```

/// Assert that an accumulator holds no violations.
///
/// Panics with the recorded violations otherwise.
///
/// # Example
///
/// ```rust
/// use tally::{assert_valid, Accumulator};
///
/// assert_valid!(Accumulator::new("empty"));
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($acc:expr) => {{
        let acc = &$acc;
        if !$crate::Accumulator::is_valid(acc) {
            panic!(
                "Expected no violations, got: {:?}",
                $crate::Accumulator::violations(acc)
            );
        }
    }};
}

/// Assert that an accumulator holds at least one violation.
///
/// # Example
///
/// ```rust
/// use tally::{assert_invalid, Accumulator};
///
/// assert_invalid!(Accumulator::invalid(|| "always"));
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($acc:expr) => {
        if $crate::Accumulator::is_valid(&$acc) {
            panic!("Expected violations, got none");
        }
    };
}

/// Assert the exact violation messages of an accumulator, in order.
///
/// Keys are ignored; use [`Accumulator::violations`](crate::Accumulator::violations)
/// when they matter.
///
/// # Example
///
/// ```rust
/// use tally::{assert_violation_messages, Accumulator};
///
/// let mut acc = Accumulator::new("k");
/// acc.fail(|| "first").fail(|| "second");
/// assert_violation_messages!(acc, ["first", "second"]);
/// ```
#[macro_export]
macro_rules! assert_violation_messages {
    ($acc:expr, $expected:expr) => {{
        let acc = &$acc;
        let expected = $expected;
        let actual: ::std::vec::Vec<&str> = $crate::Accumulator::violations(acc)
            .iter()
            .map($crate::Violation::message)
            .collect();
        let expected: ::std::vec::Vec<&str> = expected
            .iter()
            .map(|m| ::std::convert::AsRef::<str>::as_ref(m))
            .collect();
        if actual.is_empty() && !expected.is_empty() {
            panic!("Expected violations {:?}, got none", expected);
        }
        assert_eq!(actual, expected);
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::{Accumulator, Violation};

#[cfg(feature = "proptest")]
impl Arbitrary for Violation {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        ("[A-Za-z][A-Za-z0-9 :-]{0,15}", "[a-z ]{1,24}")
            .prop_map(|(key, message)| Violation::new(key, message))
            .boxed()
    }
}

/// Strategy for accumulators holding up to `max_violations` violations.
///
/// Violations carry arbitrary keys, as if merged in from other accumulators.
#[cfg(feature = "proptest")]
pub fn accumulator(max_violations: usize) -> impl Strategy<Value = Accumulator> {
    (
        "[A-Za-z][A-Za-z0-9 ]{0,15}",
        proptest::collection::vec(any::<Violation>(), 0..=max_violations),
    )
        .prop_map(|(key, violations)| {
            let mut acc = Accumulator::new(key);
            acc.push_all(violations);
            acc
        })
}

#[cfg(feature = "proptest")]
impl Arbitrary for Accumulator {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        accumulator(8).boxed()
    }
}
