//! The built-in check catalogue
//!
//! Every check here is an inherent method on [`Accumulator`](crate::Accumulator)
//! that evaluates one boolean and hands it to
//! [`Accumulator::check`](crate::Accumulator::check) together with the caller's
//! message closure. They differ only in the predicate they compute.
//!
//! Missing values are modelled as `Option`. Unless a check is about absence
//! itself (`check_null`, `check_blank`, `check_empty`, `check_not_in`), a
//! missing value fails.
//!
//! | Module | Checks |
//! |---|---|
//! | presence | `check_not_null`, `check_null` |
//! | string | blank, length, contains/prefix/suffix, [`WholeRegex`], alpha, alphanumeric |
//! | number | greater/lesser, equals, ranges, sign |
//! | collection | empty/not empty, size, all |
//! | membership | equality, `in`/`not in`, label sets and enums |
//! | format | `check_url` |
//! | temporal | `check_before`, `check_after` |
//!
//! # Example
//!
//! ```rust
//! use tally::validate_to_result;
//!
//! let email: Option<&str> = Some("ada@example.com");
//! let age: Option<u32> = None;
//!
//! let err = validate_to_result("user", |v| {
//!     v.check_not_blank(email, || "email is required");
//!     v.check_max_length(email, 64, || "email is too long");
//!     v.check_in_range(age, 18, 130, || "age must be between 18 and 130");
//! })
//! .unwrap_err();
//!
//! assert_eq!(err.to_string(), "user - age must be between 18 and 130");
//! ```

mod collection;
mod format;
mod membership;
mod number;
mod presence;
mod string;
mod temporal;

pub use membership::EnumLabels;
pub use string::WholeRegex;

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Values with a size, used by the emptiness and size checks.
///
/// Strings measure their length in `char`s; collections their element count.
/// `None` measures as absent.
pub trait Measured {
    /// The size, or `None` when the value is absent.
    fn measure(&self) -> Option<usize>;
}

impl Measured for str {
    fn measure(&self) -> Option<usize> {
        Some(self.chars().count())
    }
}

impl Measured for String {
    fn measure(&self) -> Option<usize> {
        self.as_str().measure()
    }
}

impl<T> Measured for [T] {
    fn measure(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T, const N: usize> Measured for [T; N] {
    fn measure(&self) -> Option<usize> {
        Some(N)
    }
}

impl<T> Measured for Vec<T> {
    fn measure(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Measured for VecDeque<T> {
    fn measure(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<K, V, S> Measured for HashMap<K, V, S> {
    fn measure(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T, S> Measured for HashSet<T, S> {
    fn measure(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<K, V> Measured for BTreeMap<K, V> {
    fn measure(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Measured for BTreeSet<T> {
    fn measure(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<M: Measured + ?Sized> Measured for &M {
    fn measure(&self) -> Option<usize> {
        (**self).measure()
    }
}

impl<M: Measured> Measured for Option<M> {
    fn measure(&self) -> Option<usize> {
        self.as_ref().and_then(Measured::measure)
    }
}

#[cfg(test)]
pub(crate) mod support {
    use crate::{validate, Accumulator};

    /// `true` when the block records nothing.
    pub(crate) fn passes(block: impl FnOnce(&mut Accumulator)) -> bool {
        validate("ok", block).is_valid()
    }

    /// The joined failure message of the block, keyed `"fail"`.
    pub(crate) fn failure(block: impl FnOnce(&mut Accumulator)) -> String {
        match validate("fail", block).to_result() {
            Ok(_) => panic!("Expected violations, got none"),
            Err(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings_measure_chars() {
        assert_eq!("héllo".measure(), Some(5));
        assert_eq!(String::new().measure(), Some(0));
    }

    #[test]
    fn test_collections_measure_len() {
        assert_eq!(vec![1, 2, 3].measure(), Some(3));
        assert_eq!([0u8; 4].measure(), Some(4));
        assert_eq!(HashSet::<i32>::new().measure(), Some(0));
        assert_eq!(BTreeMap::from([(1, 'a')]).measure(), Some(1));
    }

    #[test]
    fn test_option_measures_absent() {
        assert_eq!(None::<Vec<i32>>.measure(), None);
        assert_eq!(Some("ab").measure(), Some(2));
    }
}
