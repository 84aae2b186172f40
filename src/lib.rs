//! Exact rational number arithmetic over checked primitive integers.
//!
//! This library provides `Ratio<T>`, a rational number type generic over the
//! signed primitives `i8` through `i64`, together with a memoized factorial
//! and a few series helpers built on top of it.
//!
//! # Features
//!
//! - **Always reduced**: every value is stored in lowest terms with a positive
//!   denominator, so equality and hashing are structural
//! - **Exact intermediates**: products are formed in a wider integer type and
//!   reduced before narrowing back
//! - **Checked**: overflow, zero denominators and division by zero are
//!   reported as [`RatioError`] values, never wrapped
//! - **Exact ordering**: comparison by cross-multiplication, no floating point
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use exact_ratio::Rational;
//!
//! let a = Rational::new(8, -24).unwrap();
//! assert_eq!((a.numer(), a.denom()), (-1, 3));
//!
//! let b = Rational::new(-123, -456).unwrap();
//! assert_eq!(b.to_string(), "41/152");
//!
//! assert_eq!(2 * b, Rational::new(41, 76).unwrap());
//! assert_eq!(a + b, Rational::new(-29, 456).unwrap());
//! ```
//!
//! ## Checked Arithmetic
//!
//! ```
//! use exact_ratio::{Rational, RatioError};
//!
//! let half = Rational::new(1, 2).unwrap();
//! assert_eq!(Rational::new(5, 0), Err(RatioError::ZeroDenominator));
//! assert_eq!(half.checked_div(&Rational::zero()), Err(RatioError::DivisionByZero));
//! assert!(half.to_integer().is_err());
//! ```
//!
//! ## Series
//!
//! ```
//! use exact_ratio::{series, FactorialCache};
//!
//! let cache = FactorialCache::new();
//! let e = series::approximate_e(&cache, 20).unwrap();
//! assert!((e - std::f64::consts::E).abs() < 1e-12);
//! ```

pub mod error;
pub mod factorial;
pub mod ratio_trait;
pub mod series;

pub use crate::error::{RatioError, Result};
pub use crate::factorial::{factorial, FactorialCache};
pub use crate::ratio_trait::{RatioInteger, WideInteger};

use core::cmp::Ordering;
use core::fmt;
use core::iter::{Product, Sum};

/// A rational number in lowest terms.
///
/// # Type Parameter
///
/// `T` must implement [`RatioInteger`]: `i8`, `i16`, `i32` or `i64`.
///
/// # Invariants
///
/// - Denominator is never zero and always positive
/// - Sign is carried by the numerator
/// - `gcd(|numer|, denom) == 1`; zero is always `0/1`
///
/// # Examples
///
/// ```
/// use exact_ratio::Ratio;
///
/// let r = Ratio::<i32>::new(6, -8).unwrap();
/// assert_eq!(r.numer(), -3);
/// assert_eq!(r.denom(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ratio<T: RatioInteger> {
    numer: T,
    denom: T,
}

impl<T: RatioInteger> Ratio<T> {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a ratio reduced to lowest terms.
    ///
    /// # Errors
    ///
    /// - [`RatioError::ZeroDenominator`] if `denom` is zero
    /// - [`RatioError::Overflow`] if the reduced value is not representable,
    ///   e.g. `i64::MIN / -1`
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_ratio::{Ratio, RatioError};
    ///
    /// let r = Ratio::<i64>::new(4, 6).unwrap();
    /// assert_eq!((r.numer(), r.denom()), (2, 3));
    ///
    /// assert_eq!(Ratio::<i64>::new(0, -7).unwrap(), Ratio::zero());
    /// assert!(matches!(Ratio::new(i64::MIN, -1), Err(RatioError::Overflow { .. })));
    /// ```
    pub fn new(numer: T, denom: T) -> Result<Self> {
        Self::from_wide(numer.to_wide(), denom.to_wide(), "construction")
    }

    /// Promote an integer to `n/1`.
    #[inline]
    pub fn from_integer(n: T) -> Self {
        Self {
            numer: n,
            denom: T::ONE,
        }
    }

    /// Create a ratio representing 1.
    #[inline(always)]
    pub fn one() -> Self {
        Self {
            numer: T::ONE,
            denom: T::ONE,
        }
    }

    /// Create a ratio representing 0.
    #[inline(always)]
    pub fn zero() -> Self {
        Self {
            numer: T::ZERO,
            denom: T::ONE,
        }
    }

    /// Reduce a wide numerator/denominator pair and narrow it back to `T`.
    fn from_wide(numer: T::Wide, denom: T::Wide, operation: &'static str) -> Result<Self> {
        if denom.is_zero() {
            return Err(RatioError::ZeroDenominator);
        }
        if numer.is_zero() {
            return Ok(Self::zero());
        }

        let overflow = || RatioError::overflow(operation);

        let g = <T::Wide as WideInteger>::gcd(
            numer.checked_abs().ok_or_else(overflow)?,
            denom.checked_abs().ok_or_else(overflow)?,
        );
        let (mut numer, mut denom) = (numer.div_exact(&g), denom.div_exact(&g));

        if denom.is_negative() {
            numer = numer.checked_neg().ok_or_else(overflow)?;
            denom = denom.checked_neg().ok_or_else(overflow)?;
        }

        Ok(Self {
            numer: T::from_wide_checked(&numer).ok_or_else(overflow)?,
            denom: T::from_wide_checked(&denom).ok_or_else(overflow)?,
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// The numerator, carrying the sign.
    #[inline(always)]
    pub fn numer(&self) -> T {
        self.numer
    }

    /// The denominator, always positive.
    #[inline(always)]
    pub fn denom(&self) -> T {
        self.denom
    }

    /// Check if the ratio is zero.
    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    /// Check if the ratio is positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.numer.is_negative() && !self.numer.is_zero()
    }

    /// Check if the ratio is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    /// Check if the ratio represents an integer (denominator is 1).
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom == T::ONE
    }

    // ========================================================================
    // CONVERSIONS
    // ========================================================================

    /// The integer value of a ratio with denominator 1.
    ///
    /// # Errors
    ///
    /// [`RatioError::NotAnInteger`] if the denominator is not 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_ratio::Rational;
    ///
    /// assert_eq!(Rational::new(-12, 4).unwrap().to_integer(), Ok(-3));
    /// assert!(Rational::new(1, 2).unwrap().to_integer().is_err());
    /// ```
    pub fn to_integer(&self) -> Result<T> {
        if !self.is_integer() {
            return Err(RatioError::NotAnInteger {
                numer: self.numer.to_i128(),
                denom: self.denom.to_i128(),
            });
        }
        Ok(self.numer)
    }

    /// Floating-point quotient `numer / denom`.
    ///
    /// Precision is lost for values that have no exact binary representation.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.numer.to_f64() / self.denom.to_f64()
    }

    /// Render integers without the `/1` suffix, other values as `n/d`.
    ///
    /// [`Display`](fmt::Display) always prints both parts.
    ///
    /// ```
    /// use exact_ratio::Rational;
    ///
    /// assert_eq!(Rational::from_integer(-4).display_compact(), "-4");
    /// assert_eq!(Rational::from_integer(-4).to_string(), "-4/1");
    /// assert_eq!(Rational::new(3, 9).unwrap().display_compact(), "1/3");
    /// ```
    pub fn display_compact(&self) -> String {
        if self.is_integer() {
            self.numer.to_string()
        } else {
            self.to_string()
        }
    }

    // ========================================================================
    // ARITHMETIC
    // ========================================================================

    /// Negate the ratio.
    ///
    /// # Errors
    ///
    /// [`RatioError::Overflow`] when the numerator is `T::MIN`.
    #[inline]
    pub fn checked_neg(&self) -> Result<Self> {
        let numer = self
            .numer
            .checked_neg()
            .ok_or_else(|| RatioError::overflow("negation"))?;
        Ok(Self {
            numer,
            denom: self.denom,
        })
    }

    /// Absolute value.
    ///
    /// # Errors
    ///
    /// [`RatioError::Overflow`] when the numerator is `T::MIN`.
    #[inline]
    pub fn abs(&self) -> Result<Self> {
        if self.is_negative() {
            self.checked_neg()
        } else {
            Ok(*self)
        }
    }

    /// Add two ratios: `(a*d + c*b) / (b*d)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_ratio::Rational;
    ///
    /// let a = Rational::new(1, 2).unwrap();
    /// let b = Rational::new(1, 3).unwrap();
    /// assert_eq!(a.checked_add(&b).unwrap(), Rational::new(5, 6).unwrap());
    /// ```
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.add_sub(other, false)
    }

    /// Subtract another ratio: `(a*d - c*b) / (b*d)`.
    ///
    /// Equivalent to adding the negation of `other`, but formed in the wide
    /// type so `T::MIN` numerators do not overflow early.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.add_sub(other, true)
    }

    fn add_sub(&self, other: &Self, subtract: bool) -> Result<Self> {
        let operation = if subtract { "subtraction" } else { "addition" };
        let overflow = || RatioError::overflow(operation);

        if self.denom == other.denom {
            let a = self.numer.to_wide();
            let c = other.numer.to_wide();
            let numer = if subtract {
                a.checked_sub(&c)
            } else {
                a.checked_add(&c)
            }
            .ok_or_else(overflow)?;
            return Self::from_wide(numer, self.denom.to_wide(), operation);
        }

        let ad = self.numer.mul_wide(&other.denom);
        let cb = other.numer.mul_wide(&self.denom);
        let bd = self.denom.mul_wide(&other.denom);

        let numer = if subtract {
            ad.checked_sub(&cb)
        } else {
            ad.checked_add(&cb)
        }
        .ok_or_else(overflow)?;

        Self::from_wide(numer, bd, operation)
    }

    /// Multiply two ratios: `(a*c) / (b*d)`.
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        Self::from_wide(
            self.numer.mul_wide(&other.numer),
            self.denom.mul_wide(&other.denom),
            "multiplication",
        )
    }

    /// Divide by another ratio: `(a*d) / (c*b)`.
    ///
    /// # Errors
    ///
    /// [`RatioError::DivisionByZero`] if `other` is zero.
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        if other.is_zero() {
            return Err(RatioError::DivisionByZero);
        }
        Self::from_wide(
            self.numer.mul_wide(&other.denom),
            other.numer.mul_wide(&self.denom),
            "division",
        )
    }

    /// Get the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// [`RatioError::DivisionByZero`] if the ratio is zero.
    pub fn recip(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(RatioError::DivisionByZero);
        }
        Self::from_wide(self.denom.to_wide(), self.numer.to_wide(), "reciprocal")
    }

    // ========================================================================
    // COMPARISONS
    // ========================================================================

    /// Compare through [`to_f64`](Ratio::to_f64), by the sign of the
    /// difference.
    ///
    /// Distinct values closer together than `f64` can resolve compare as
    /// equal; [`Ord`] compares exactly and is what sorting uses.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use exact_ratio::Rational;
    ///
    /// let a = Rational::new(i64::MAX - 1, i64::MAX).unwrap();
    /// let b = Rational::new(i64::MAX - 2, i64::MAX - 1).unwrap();
    /// assert_eq!(a.cmp_approx(&b), Ordering::Equal);
    /// assert_eq!(a.cmp(&b), Ordering::Greater);
    /// ```
    pub fn cmp_approx(&self, other: &Self) -> Ordering {
        let diff = self.to_f64() - other.to_f64();
        if diff < 0.0 {
            Ordering::Less
        } else if diff > 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

impl<T: RatioInteger> Default for Ratio<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: RatioInteger> From<T> for Ratio<T> {
    fn from(n: T) -> Self {
        Self::from_integer(n)
    }
}

impl<T: RatioInteger> fmt::Display for Ratio<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

impl<T: RatioInteger> PartialOrd for Ratio<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: RatioInteger> Ord for Ratio<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplying preserves order.
        let ad = self.numer.mul_wide(&other.denom);
        let cb = other.numer.mul_wide(&self.denom);
        ad.cmp(&cb)
    }
}

use core::ops::{Add, Div, Mul, Neg, Sub};

impl<T: RatioInteger> Neg for Ratio<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.checked_neg().unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T: RatioInteger> Neg for &Ratio<T> {
    type Output = Ratio<T>;
    #[inline]
    fn neg(self) -> Ratio<T> {
        self.checked_neg().unwrap_or_else(|err| panic!("{err}"))
    }
}

/// Forward an operator trait to a checked method for every combination of
/// owned and borrowed operands. Errors panic with their message.
macro_rules! forward_binop {
    ($imp:ident, $method:ident, $checked:ident) => {
        impl<T: RatioInteger> $imp for Ratio<T> {
            type Output = Self;
            #[inline]
            fn $method(self, other: Self) -> Self {
                Ratio::$checked(&self, &other).unwrap_or_else(|err| panic!("{err}"))
            }
        }

        impl<T: RatioInteger> $imp for &Ratio<T> {
            type Output = Ratio<T>;
            #[inline]
            fn $method(self, other: Self) -> Ratio<T> {
                Ratio::$checked(self, other).unwrap_or_else(|err| panic!("{err}"))
            }
        }

        impl<T: RatioInteger> $imp<&Ratio<T>> for Ratio<T> {
            type Output = Ratio<T>;
            #[inline]
            fn $method(self, other: &Ratio<T>) -> Ratio<T> {
                Ratio::$checked(&self, other).unwrap_or_else(|err| panic!("{err}"))
            }
        }

        impl<T: RatioInteger> $imp<Ratio<T>> for &Ratio<T> {
            type Output = Ratio<T>;
            #[inline]
            fn $method(self, other: Ratio<T>) -> Ratio<T> {
                Ratio::$checked(self, &other).unwrap_or_else(|err| panic!("{err}"))
            }
        }
    };
}

forward_binop!(Add, add, checked_add);
forward_binop!(Sub, sub, checked_sub);
forward_binop!(Mul, mul, checked_mul);
forward_binop!(Div, div, checked_div);

/// Mixed arithmetic with a plain integer, by promoting it to `n/1`.
///
/// Addition and multiplication are commutative, so the integer-first forms
/// flip their operands; subtraction and division keep the written order.
macro_rules! impl_integer_ops {
    ($($t:ty),*) => {
        $(
            impl Add<$t> for Ratio<$t> {
                type Output = Ratio<$t>;
                fn add(self, rhs: $t) -> Ratio<$t> {
                    self + Ratio::from_integer(rhs)
                }
            }

            impl Sub<$t> for Ratio<$t> {
                type Output = Ratio<$t>;
                fn sub(self, rhs: $t) -> Ratio<$t> {
                    self - Ratio::from_integer(rhs)
                }
            }

            impl Mul<$t> for Ratio<$t> {
                type Output = Ratio<$t>;
                fn mul(self, rhs: $t) -> Ratio<$t> {
                    self * Ratio::from_integer(rhs)
                }
            }

            impl Div<$t> for Ratio<$t> {
                type Output = Ratio<$t>;
                fn div(self, rhs: $t) -> Ratio<$t> {
                    self / Ratio::from_integer(rhs)
                }
            }

            impl Add<Ratio<$t>> for $t {
                type Output = Ratio<$t>;
                fn add(self, rhs: Ratio<$t>) -> Ratio<$t> {
                    rhs + self
                }
            }

            impl Sub<Ratio<$t>> for $t {
                type Output = Ratio<$t>;
                fn sub(self, rhs: Ratio<$t>) -> Ratio<$t> {
                    Ratio::from_integer(self) - rhs
                }
            }

            impl Mul<Ratio<$t>> for $t {
                type Output = Ratio<$t>;
                fn mul(self, rhs: Ratio<$t>) -> Ratio<$t> {
                    rhs * self
                }
            }

            impl Div<Ratio<$t>> for $t {
                type Output = Ratio<$t>;
                fn div(self, rhs: Ratio<$t>) -> Ratio<$t> {
                    Ratio::from_integer(self) / rhs
                }
            }
        )*
    };
}

impl_integer_ops!(i8, i16, i32, i64);

impl<T: RatioInteger> Sum for Ratio<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, r| acc + r)
    }
}

impl<'a, T: RatioInteger> Sum<&'a Ratio<T>> for Ratio<T> {
    fn sum<I: Iterator<Item = &'a Ratio<T>>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, r| acc + r)
    }
}

impl<T: RatioInteger> Product for Ratio<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, r| acc * r)
    }
}

impl<'a, T: RatioInteger> Product<&'a Ratio<T>> for Ratio<T> {
    fn product<I: Iterator<Item = &'a Ratio<T>>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, r| acc * r)
    }
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Ratio using 8-bit integers.
pub type Rational8 = Ratio<i8>;

/// Ratio using 16-bit integers.
pub type Rational16 = Ratio<i16>;

/// Ratio using 32-bit integers.
pub type Rational32 = Ratio<i32>;

/// Ratio using 64-bit integers.
pub type Rational64 = Ratio<i64>;

/// The default rational type (64-bit).
pub type Rational = Rational64;
