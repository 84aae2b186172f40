//! Trait system for rational arithmetic over signed primitive integers.
//!
//! This module provides the foundational traits that let `Ratio<T>` work with
//! any signed primitive from `i8` to `i64`.
//!
//! # Architecture
//!
//! The trait system uses two levels:
//!
//! - [`WideInteger`]: checked operations and GCD, enough to normalize a fraction
//! - [`RatioInteger`]: types that can back a `Ratio<T>`, each paired with a
//!   wide type holding the exact product of any two of its values
//!
//! Every intermediate product is formed in the wide type, reduced there, and
//! only then narrowed back. A result that still does not fit after reduction
//! is reported as an overflow instead of wrapping.
//!
//! # Example
//!
//! ```
//! use exact_ratio::{RatioInteger, WideInteger};
//!
//! let product = 3_000_000_000i64.mul_wide(&4_000_000_000i64);
//! assert_eq!(product, 12_000_000_000_000_000_000i128);
//! assert_eq!(i64::from_wide_checked(&product), None);
//! assert_eq!(WideInteger::gcd(48i128, 18i128), 6);
//! ```

use core::fmt::{Debug, Display};
use core::hash::Hash;

/// Operations needed to normalize a fraction.
///
/// Every `RatioInteger` also implements `WideInteger`, and so does its `Wide`
/// type. `i128` is terminal: it is only ever used as a wide type.
pub trait WideInteger:
    Copy + Debug + Display + PartialEq + Eq + PartialOrd + Ord + Hash + Sized + 'static
{
    /// Number of bits in this integer type.
    const BITS: u32;

    /// The zero value.
    const ZERO: Self;

    /// The one value.
    const ONE: Self;

    /// Returns the number of significant bits of a non-negative value.
    fn bits_u32(&self) -> u32;

    /// Returns the number of trailing zero bits.
    fn trailing_zeros_u32(&self) -> u32;

    /// Arithmetic right shift.
    fn shr_u32(&self, shift: u32) -> Self;

    /// Left shift. The caller guarantees the result fits.
    fn shl_u32(&self, shift: u32) -> Self;

    /// Returns `true` if this value is zero.
    fn is_zero(&self) -> bool;

    /// Returns `true` if this value is strictly negative.
    fn is_negative(&self) -> bool;

    /// Add, returning `None` on overflow.
    fn checked_add(&self, other: &Self) -> Option<Self>;

    /// Subtract, returning `None` on overflow.
    fn checked_sub(&self, other: &Self) -> Option<Self>;

    /// Multiply, returning `None` on overflow.
    fn checked_mul(&self, other: &Self) -> Option<Self>;

    /// Negate, returning `None` for the minimum value.
    fn checked_neg(&self) -> Option<Self>;

    /// Absolute value, returning `None` for the minimum value.
    fn checked_abs(&self) -> Option<Self>;

    /// Truncating division. The caller guarantees a non-zero divisor and a
    /// representable quotient.
    fn div_exact(&self, other: &Self) -> Self;

    /// Remainder. The caller guarantees a non-zero divisor.
    fn rem_exact(&self, other: &Self) -> Self;

    /// Greatest common divisor of two non-negative values.
    fn gcd(a: Self, b: Self) -> Self;

    /// Widen losslessly to `i128`.
    fn to_i128(&self) -> i128;

    /// Nearest `f64`, for approximations.
    fn to_f64(&self) -> f64;
}

/// Integer type suitable for use in `Ratio<T>`.
///
/// # Associated Type: Wide
///
/// `Wide::BITS >= Self::BITS * 2`, so the product of any two values of
/// `Self` is exact in `Wide`, and so is the sum of two such products except
/// at the very edge of the range (which is then reported as an overflow).
///
/// # Implemented Types
///
/// `i8` (wide `i16`), `i16` (wide `i32`), `i32` (wide `i64`), `i64`
/// (wide `i128`).
pub trait RatioInteger: WideInteger {
    /// The wide type for exact intermediate products.
    type Wide: WideInteger;

    /// Convert to the wide type.
    fn to_wide(&self) -> Self::Wide;

    /// Try to convert from the wide type, returning `None` if the value doesn't fit.
    fn from_wide_checked(wide: &Self::Wide) -> Option<Self>;

    /// Exact product in the wide type.
    fn mul_wide(&self, other: &Self) -> Self::Wide;
}

/// Macro to implement WideInteger for a signed primitive.
macro_rules! impl_wide_integer {
    ($type:ty) => {
        impl WideInteger for $type {
            const BITS: u32 = <$type>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline(always)]
            fn bits_u32(&self) -> u32 {
                <$type>::BITS - self.leading_zeros()
            }

            #[inline(always)]
            fn trailing_zeros_u32(&self) -> u32 {
                <$type>::trailing_zeros(*self)
            }

            #[inline(always)]
            fn shr_u32(&self, shift: u32) -> Self {
                *self >> shift
            }

            #[inline(always)]
            fn shl_u32(&self, shift: u32) -> Self {
                *self << shift
            }

            #[inline(always)]
            fn is_zero(&self) -> bool {
                *self == 0
            }

            #[inline(always)]
            fn is_negative(&self) -> bool {
                *self < 0
            }

            #[inline(always)]
            fn checked_add(&self, other: &Self) -> Option<Self> {
                <$type>::checked_add(*self, *other)
            }

            #[inline(always)]
            fn checked_sub(&self, other: &Self) -> Option<Self> {
                <$type>::checked_sub(*self, *other)
            }

            #[inline(always)]
            fn checked_mul(&self, other: &Self) -> Option<Self> {
                <$type>::checked_mul(*self, *other)
            }

            #[inline(always)]
            fn checked_neg(&self) -> Option<Self> {
                <$type>::checked_neg(*self)
            }

            #[inline(always)]
            fn checked_abs(&self) -> Option<Self> {
                <$type>::checked_abs(*self)
            }

            #[inline(always)]
            fn div_exact(&self, other: &Self) -> Self {
                *self / *other
            }

            #[inline(always)]
            fn rem_exact(&self, other: &Self) -> Self {
                *self % *other
            }

            #[inline]
            fn gcd(a: Self, b: Self) -> Self {
                gcd_generic(a, b)
            }

            #[inline(always)]
            fn to_i128(&self) -> i128 {
                *self as i128
            }

            #[inline(always)]
            fn to_f64(&self) -> f64 {
                *self as f64
            }
        }
    };
}

/// Macro to implement RatioInteger for a (narrow, wide) type pair.
macro_rules! impl_ratio_integer {
    ($narrow:ty, $wide:ty) => {
        impl_wide_integer!($narrow);

        impl RatioInteger for $narrow {
            type Wide = $wide;

            #[inline(always)]
            fn to_wide(&self) -> Self::Wide {
                <$wide>::from(*self)
            }

            #[inline(always)]
            fn from_wide_checked(wide: &Self::Wide) -> Option<Self> {
                <$narrow>::try_from(*wide).ok()
            }

            #[inline(always)]
            fn mul_wide(&self, other: &Self) -> Self::Wide {
                <$wide>::from(*self) * <$wide>::from(*other)
            }
        }
    };
}

impl_ratio_integer!(i8, i16);
impl_ratio_integer!(i16, i32);
impl_ratio_integer!(i32, i64);
impl_ratio_integer!(i64, i128);

// i128 is terminal - only WideInteger
impl_wide_integer!(i128);

/// Compute the GCD of two non-negative values.
///
/// Values of very different magnitude are first brought together with
/// Euclidean steps; the rest is handled by binary (Stein) GCD, which only
/// needs shifts and subtraction.
///
/// `gcd(0, b) == b`, so `gcd(0, 0) == 0`; callers normalize a zero numerator
/// before ever asking for it.
///
/// # Examples
///
/// ```
/// use exact_ratio::ratio_trait::gcd_generic;
///
/// assert_eq!(gcd_generic(48i64, 18i64), 6);
/// assert_eq!(gcd_generic(0i32, 7i32), 7);
/// ```
pub fn gcd_generic<T: WideInteger>(mut a: T, mut b: T) -> T {
    debug_assert!(!a.is_negative() && !b.is_negative());

    if a == b {
        return a;
    }
    if a == T::ONE || b == T::ONE {
        return T::ONE;
    }
    if a.is_zero() {
        return b;
    }
    if b.is_zero() {
        return a;
    }

    if a < b {
        core::mem::swap(&mut a, &mut b);
    }

    let size_diff_threshold = T::BITS / 16;

    while !b.is_zero() && a.bits_u32() > b.bits_u32() + size_diff_threshold {
        let rem = a.rem_exact(&b);
        a = b;
        b = rem;
    }

    if b.is_zero() {
        return a;
    }

    let shift = a.trailing_zeros_u32().min(b.trailing_zeros_u32());
    a = a.shr_u32(a.trailing_zeros_u32());
    b = b.shr_u32(b.trailing_zeros_u32());

    loop {
        if a > b {
            core::mem::swap(&mut a, &mut b);
        }
        // b >= a >= 1 here, so the difference cannot underflow.
        b = b.checked_sub(&a).unwrap_or(T::ZERO);
        if b.is_zero() {
            return a.shl_u32(shift);
        }
        b = b.shr_u32(b.trailing_zeros_u32());
    }
}
