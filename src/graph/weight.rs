//! Edge weight abstraction.
//!
//! The shortest-path and spanning-tree algorithms are generic over the weight
//! type. [`Weight`] collects the arithmetic they need and adds an
//! overflow-checked addition, so relaxation never wraps around on integer
//! weights and "unreachable" never has to be encoded as a sentinel value.

use std::fmt::Debug;
use std::ops::Add;

use num_traits::{CheckedAdd, One, Zero};

/// Numeric type usable as an edge weight.
///
/// Implemented for every primitive integer type and for `f32`/`f64`.
///
/// Unweighted edges carry [`One::one`]. Floating point weights must not be NaN;
/// comparisons involving NaN are treated as equal, which makes every ordering
/// based result meaningless.
///
/// # Examples
///
/// ```rust
/// use graphscope::Weight;
///
/// assert_eq!(3i32.checked_sum(4), Some(7));
/// assert_eq!(i32::MAX.checked_sum(1), None);
/// assert!((-1i64).is_negative());
/// assert!(!0.5f64.is_negative());
/// assert!((-100i8).sum_underflows(-100));
/// ```
pub trait Weight: Copy + PartialOrd + Debug + Zero + One + Add<Output = Self> {
    /// Adds two weights, returning `None` if the sum is not representable.
    ///
    /// Integer types return `None` on overflow. Floating point types only
    /// return `None` when the sum is NaN.
    fn checked_sum(self, other: Self) -> Option<Self>;

    /// Returns `true` if the weight is strictly less than zero.
    fn is_negative(self) -> bool {
        self < Self::zero()
    }

    /// Returns `true` if `self + other` falls below the smallest representable value.
    ///
    /// Only two negative operands can underflow; a positive overflow returns `false`.
    fn sum_underflows(self, other: Self) -> bool {
        self.is_negative() && other.is_negative() && self.checked_sum(other).is_none()
    }
}

macro_rules! impl_integer_weight {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Weight for $ty {
                #[inline]
                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Weight for $ty {
                #[inline]
                fn checked_sum(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    if sum.is_nan() {
                        None
                    } else {
                        Some(sum)
                    }
                }
            }
        )*
    };
}

impl_integer_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_weight!(f32, f64);

/// Total order over weights used when sorting; NaN compares equal.
pub(crate) fn compare<W: Weight>(a: &W, b: &W) -> std::cmp::Ordering {
    a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_checked_sum() {
        assert_eq!(2u8.checked_sum(3), Some(5));
        assert_eq!(u8::MAX.checked_sum(1), None);
        assert_eq!(i64::MIN.checked_sum(-1), None);
        assert_eq!((-5i32).checked_sum(2), Some(-3));
    }

    #[test]
    fn test_float_checked_sum() {
        assert_eq!(1.5f64.checked_sum(2.0), Some(3.5));
        assert_eq!(f64::INFINITY.checked_sum(f64::NEG_INFINITY), None);
    }

    #[test]
    fn test_is_negative() {
        assert!(Weight::is_negative(-1i8));
        assert!(!Weight::is_negative(0u32));
        assert!(Weight::is_negative(-0.25_f32));
        assert!(!Weight::is_negative(0.0_f64));
    }

    #[test]
    fn test_sum_underflows() {
        assert!((-100i8).sum_underflows(-100));
        assert!(i64::MIN.sum_underflows(-1));
        assert!(!(-50i8).sum_underflows(-50));
        assert!(!i64::MAX.sum_underflows(1));
        assert!(!u8::MAX.sum_underflows(1));
        assert!(!f64::NEG_INFINITY.sum_underflows(-1.0));
    }

    #[test]
    fn test_compare_total_order() {
        use std::cmp::Ordering;
        assert_eq!(compare(&1, &2), Ordering::Less);
        assert_eq!(compare(&2.0, &2.0), Ordering::Equal);
        assert_eq!(compare(&f64::NAN, &1.0), Ordering::Equal);
    }
}
