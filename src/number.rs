//! Numeric normalisation for comparison checks
//!
//! Numeric checks accept any primitive integer or float, or an `Option` of one,
//! and compare by value: `1_i32` and `1.0_f64` are equal. Operands are first
//! converted to a [`Number`], which keeps integers exact. An integer compared
//! with a float is compared against the float's exact value, never rounded to
//! `f64` first, so `2^53 + 1` is greater than `2^53 as f64`.
//!
//! # Examples
//!
//! ```
//! use tally::number::IntoNumber;
//!
//! assert_eq!(1_u8.into_number(), 1.0_f32.into_number());
//! assert!(None::<i64>.into_number().is_none());
//! ```

use std::cmp::Ordering;

/// A normalised numeric operand.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Any integer that fits in an `i128`.
    Int(i128),
    /// Floats, and `u128` values beyond `i128::MAX`.
    Float(f64),
}

impl Number {
    /// Zero, used by the sign checks.
    pub const ZERO: Number = Number::Int(0);
}

/// 2^127, the first float above every `i128`.
const I128_BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// Exact ordering of an integer against a float; `None` for NaN.
fn cmp_int_float(int: i128, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= I128_BOUND {
        return Some(Ordering::Less);
    }
    if float < -I128_BOUND {
        return Some(Ordering::Greater);
    }
    // in range, so the truncated float is an exact i128
    let whole = float.trunc();
    let ordering = int.cmp(&(whole as i128)).then_with(|| {
        if float > whole {
            Ordering::Less
        } else if float < whole {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
    Some(ordering)
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    /// `None` when either side is NaN.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (Number::Int(a), Number::Float(b)) => cmp_int_float(a, b),
            (Number::Float(a), Number::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(&b),
        }
    }
}

/// Conversion of a possibly-absent numeric value into a [`Number`].
///
/// Implemented for every primitive numeric type, for references to them, and
/// for `Option` of any implementor. `None` means the value is missing, which
/// every numeric check treats as a failure.
pub trait IntoNumber {
    /// Normalise, or `None` if the value is absent.
    fn into_number(self) -> Option<Number>;
}

macro_rules! impl_into_number_int {
    ($($t:ty),+) => {
        $(
            impl IntoNumber for $t {
                #[inline]
                fn into_number(self) -> Option<Number> {
                    Some(Number::Int(self as i128))
                }
            }
        )+
    };
}

macro_rules! impl_into_number_float {
    ($($t:ty),+) => {
        $(
            impl IntoNumber for $t {
                #[inline]
                fn into_number(self) -> Option<Number> {
                    Some(Number::Float(self as f64))
                }
            }
        )+
    };
}

impl_into_number_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);
impl_into_number_float!(f32, f64);

impl IntoNumber for u128 {
    #[inline]
    fn into_number(self) -> Option<Number> {
        Some(match i128::try_from(self) {
            Ok(i) => Number::Int(i),
            Err(_) => Number::Float(self as f64),
        })
    }
}

impl IntoNumber for Number {
    #[inline]
    fn into_number(self) -> Option<Number> {
        Some(self)
    }
}

impl<T: IntoNumber + Copy> IntoNumber for &T {
    #[inline]
    fn into_number(self) -> Option<Number> {
        (*self).into_number()
    }
}

impl<T: IntoNumber> IntoNumber for Option<T> {
    #[inline]
    fn into_number(self) -> Option<Number> {
        self.and_then(IntoNumber::into_number)
    }
}

/// Compare two operands; `None` if either is missing or NaN.
pub(crate) fn compare(a: impl IntoNumber, b: impl IntoNumber) -> Option<Ordering> {
    a.into_number()?.partial_cmp(&b.into_number()?)
}
