//! Sequences and series built from [`Rational`] values.
//!
//! These are the classic limit demonstrations: the factorial series for `e`,
//! the halving series approaching 2, and the telescoping product
//! `1/2 * 2/3 * ... * (n-1)/n`.

use core::ops::Range;

use rand::Rng;
use tracing::trace;

use crate::error::{RatioError, Result};
use crate::factorial::FactorialCache;
use crate::Rational;

/// The terms `1/0!, 1/1!, ..., 1/(count-1)!`.
///
/// # Errors
///
/// [`RatioError::Overflow`] once `k!` no longer fits the `i64` denominator
/// (`k >= 21`).
pub fn e_terms(cache: &FactorialCache, count: usize) -> Result<Vec<Rational>> {
    (0..count)
        .map(|k| {
            let k = i64::try_from(k).map_err(|_| RatioError::overflow("e series"))?;
            let denom =
                i64::try_from(cache.get(k)?).map_err(|_| RatioError::overflow("e series"))?;
            Rational::new(1, denom)
        })
        .collect()
}

/// Approximate `e` by summing the floating values of the first `count`
/// terms of the factorial series.
///
/// ```
/// use exact_ratio::{series, FactorialCache};
///
/// let cache = FactorialCache::new();
/// assert_eq!(series::approximate_e(&cache, 3).unwrap(), 2.5);
/// ```
pub fn approximate_e(cache: &FactorialCache, count: usize) -> Result<f64> {
    Ok(e_terms(cache, count)?.iter().map(Rational::to_f64).sum())
}

/// Exact sum `1 + 1/2 + 1/4 + ... + 1/2^(count-1)`, which equals
/// `2 - 1/2^(count-1)`.
///
/// # Errors
///
/// [`RatioError::Overflow`] when `2^k` does not fit `i64` (`count > 63`).
///
/// ```
/// use exact_ratio::{series, Rational};
///
/// assert_eq!(series::halving_sum(4).unwrap(), Rational::new(15, 8).unwrap());
/// ```
pub fn halving_sum(count: u32) -> Result<Rational> {
    (0..count).try_fold(Rational::zero(), |acc, k| {
        let denom = 2i64
            .checked_pow(k)
            .ok_or_else(|| RatioError::overflow("halving series"))?;
        acc.checked_add(&Rational::new(1, denom)?)
    })
}

/// Exact product `1/2 * 2/3 * ... * (n-1)/n`, which telescopes to `1/n`.
///
/// For `n <= 1` the product is empty and equals 1.
///
/// ```
/// use exact_ratio::{series, Rational};
///
/// assert_eq!(series::telescoping_product(20).unwrap(), Rational::new(1, 20).unwrap());
/// ```
pub fn telescoping_product(n: i64) -> Result<Rational> {
    (1..n).try_fold(Rational::one(), |acc, t| {
        acc.checked_mul(&Rational::new(t, t + 1)?)
    })
}

/// Draw `count` random ratios with numerators from `numer_range` and
/// denominators from `denom_range`, discarding zero denominators.
///
/// # Errors
///
/// - [`RatioError::ZeroDenominator`] if `denom_range` holds no non-zero value
/// - [`RatioError::Overflow`] if a sampled pair is `i64::MIN / -1`
///
/// # Panics
///
/// Panics if `numer_range` is empty.
pub fn random_ratios<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    numer_range: Range<i64>,
    denom_range: Range<i64>,
) -> Result<Vec<Rational>> {
    if denom_range.is_empty() || denom_range == (0..1) {
        return Err(RatioError::ZeroDenominator);
    }

    let mut ratios = Vec::with_capacity(count);
    while ratios.len() < count {
        let denom = rng.random_range(denom_range.clone());
        if denom == 0 {
            trace!("discarded zero denominator");
            continue;
        }
        let numer = rng.random_range(numer_range.clone());
        ratios.push(Rational::new(numer, denom)?);
    }
    Ok(ratios)
}

/// `|expected - actual| / expected`.
pub fn relative_error(expected: f64, actual: f64) -> f64 {
    (expected - actual).abs() / expected
}
