//! # Tally
//!
//! > *"Report every problem, not just the first"*
//!
//! A Rust library for collecting constraint violations.
//!
//! ## Philosophy
//!
//! A validation run should tell the caller **everything** that is wrong with a
//! value in one pass:
//! - **Checks** never short-circuit. A failed check records a violation and
//!   the next check runs.
//! - **Accumulators** compose. A parent folds in its children's violations,
//!   each still tagged with the key it was recorded under.
//!
//! ## Quick Example
//!
//! ```rust
//! use tally::validate_to_result;
//!
//! let email: Option<&str> = Some("ada@example");
//! let age: Option<u32> = Some(12);
//!
//! // Collect all violations at once
//! let result = validate_to_result("signup", |v| {
//!     v.check_not_blank(email, || "email is required")
//!         .check_contains(email, ".", || "email must have a domain")
//!         .check_greater_or_equal(age, 18, || "must be 18 or older");
//! });
//!
//! match result {
//!     Ok(_) => println!("valid"),
//!     Err(err) => {
//!         assert_eq!(
//!             err.to_string(),
//!             "signup - email must have a domain, signup - must be 18 or older"
//!         );
//!     }
//! }
//! ```
//!
//! ## Cargo features
//!
//! - `tracing`: emit `tracing` events when violations are recorded, merged
//!   and projected.
//! - `serde`: derive `Serialize`/`Deserialize` for [`Violation`],
//!   [`Severity`] and [`ValidationError`].
//! - `proptest`: `Arbitrary` support in [`testing`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod accumulator;
pub mod check;
pub mod compose;
pub mod error;
pub mod number;
pub mod predicate;
pub mod testing;
pub mod validate;
pub mod violation;

// Re-exports
pub use accumulator::Accumulator;
pub use check::{EnumLabels, Measured, WholeRegex};
pub use compose::{reduce_invalid, reduce_valid, OptionAccumulatorExt};
pub use error::ValidationError;
pub use number::{IntoNumber, Number};
pub use predicate::{Predicate, PredicateExt};
pub use validate::{validate, validate_and_throw, validate_to_result, Validate};
pub use violation::{Severity, Violation};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::accumulator::Accumulator;
    pub use crate::check::{EnumLabels, Measured, WholeRegex};
    pub use crate::compose::{reduce_invalid, reduce_valid, OptionAccumulatorExt};
    pub use crate::error::ValidationError;
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::validate::{validate, validate_and_throw, validate_to_result, Validate};
    pub use crate::violation::Violation;
}
