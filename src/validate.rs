//! Entry points
//!
//! [`validate`] allocates an accumulator, runs a block of checks against it
//! once, and hands it back. The `_to_result` and `_and_throw` forms project
//! straight to a result. Domain types implement [`Validate`] and fold their
//! children in with [`Accumulator::add`].
//!
//! # Examples
//!
//! ```rust
//! use tally::{validate, Accumulator, Validate};
//!
//! struct Line {
//!     id: u32,
//!     quantity: i32,
//! }
//!
//! struct Order {
//!     id: u32,
//!     lines: Vec<Line>,
//! }
//!
//! impl Validate for Line {
//!     fn validate(&self) -> Accumulator {
//!         validate(format!("Line Id: {}", self.id), |v| {
//!             v.check_positive(self.quantity, || "quantity must be positive");
//!         })
//!     }
//! }
//!
//! impl Validate for Order {
//!     fn validate(&self) -> Accumulator {
//!         validate(format!("Order Id: {}", self.id), |v| {
//!             v.add_all(self.lines.iter().map(Validate::validate));
//!         })
//!     }
//! }
//!
//! let order = Order {
//!     id: 7,
//!     lines: vec![Line { id: 1, quantity: 2 }, Line { id: 2, quantity: 0 }],
//! };
//! let err = order.validate().to_result().unwrap_err();
//! assert_eq!(err.to_string(), "Line Id: 2 - quantity must be positive");
//! ```

use crate::error::ValidationError;
use crate::Accumulator;

/// Run `block` against a fresh accumulator keyed `key` and return it.
///
/// A blank key is replaced with a generated one, as in [`Accumulator::new`].
pub fn validate<B>(key: impl AsRef<str>, block: B) -> Accumulator
where
    B: FnOnce(&mut Accumulator),
{
    let mut acc = Accumulator::new(key);
    block(&mut acc);
    acc
}

/// [`validate`] followed by [`Accumulator::into_result`].
///
/// # Examples
///
/// ```
/// use tally::validate_to_result;
///
/// let name: Option<&str> = None;
/// let result = validate_to_result("user", |v| {
///     v.check_not_blank(name, || "name is required");
/// });
/// assert_eq!(result.unwrap_err().to_string(), "user - name is required");
/// ```
pub fn validate_to_result<B>(key: impl AsRef<str>, block: B) -> Result<bool, ValidationError>
where
    B: FnOnce(&mut Accumulator),
{
    validate(key, block).into_result()
}

/// [`validate`], discarding the success value so failures propagate with `?`.
///
/// # Examples
///
/// ```
/// use tally::{validate_and_throw, ValidationError};
///
/// fn register(age: u32) -> Result<u32, ValidationError> {
///     validate_and_throw("registration", |v| {
///         v.check_greater_or_equal(age, 18, || "must be an adult");
///     })?;
///     Ok(age)
/// }
///
/// assert_eq!(register(30), Ok(30));
/// assert!(register(12).is_err());
/// ```
pub fn validate_and_throw<B>(key: impl AsRef<str>, block: B) -> Result<(), ValidationError>
where
    B: FnOnce(&mut Accumulator),
{
    validate_to_result(key, block).map(|_| ())
}

/// Types that know how to check themselves.
///
/// Implementations usually call [`validate`] with a key identifying the
/// instance and, for aggregates, [`add`](Accumulator::add) the accumulators of
/// their parts.
pub trait Validate {
    /// Run every check for `self` and return the accumulator.
    fn validate(&self) -> Accumulator;

    /// Shorthand for `self.validate().into_result()`.
    fn validate_to_result(&self) -> Result<bool, ValidationError> {
        self.validate().into_result()
    }
}

impl<T: Validate + ?Sized> Validate for &T {
    fn validate(&self) -> Accumulator {
        (**self).validate()
    }
}

impl<T: Validate> Validate for Box<T> {
    fn validate(&self) -> Accumulator {
        (**self).validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_validate_runs_block_once() {
        let runs = Cell::new(0);
        let acc = validate("once", |v| {
            runs.set(runs.get() + 1);
            v.fail(|| "m");
        });
        assert_eq!(runs.get(), 1);
        assert_eq!(acc.key(), "once");
        assert_eq!(acc.len(), 1);
    }

    #[test]
    fn test_validate_blank_key_is_generated() {
        let acc = validate("", |_| {});
        assert!(!acc.key().is_empty());
        assert!(acc.is_valid());
    }

    #[test]
    fn test_validate_to_result_success() {
        assert_eq!(
            validate_to_result("ok", |v| {
                v.check_not_blank("value", || "should not be blank");
            }),
            Ok(true)
        );
    }

    #[test]
    fn test_validate_to_result_reports_in_check_order() {
        let missing: Option<String> = None;
        let err = validate_to_result("Order Id: 1", |v| {
            v.check_not_null(&missing, || "name is required");
            v.check_in_range(150, 0, 100, || "score out of range");
        })
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Order Id: 1 - name is required, Order Id: 1 - score out of range"
        );
    }

    #[test]
    fn test_validate_and_throw() {
        assert_eq!(validate_and_throw("ok", |_| {}), Ok(()));
        let err = validate_and_throw("k", |v| {
            v.fail(|| "boom");
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "k - boom");
    }

    struct Named(&'static str);

    impl Validate for Named {
        fn validate(&self) -> Accumulator {
            validate("named", |v| {
                v.check_not_blank(self.0, || "name is blank");
            })
        }
    }

    #[test]
    fn test_validate_trait_through_references_and_boxes() {
        assert!(Named("ada").validate().is_valid());
        assert!(!(&Named(" ")).validate().is_valid());
        assert!(Box::new(Named("")).validate_to_result().is_err());
    }
}
