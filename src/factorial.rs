//! Memoized factorial.
//!
//! [`FactorialCache`] keeps every `n!` it has computed, contiguously from
//! `0!`, so that a lookup only multiplies from the last cached entry up to
//! `n`. Values are `u128`; `34!` is the largest one that fits.

use std::sync::{Mutex, MutexGuard, OnceLock};

use tracing::{debug, trace};

use crate::error::{RatioError, Result};

/// Largest `n` whose factorial fits in `u128`.
pub const MAX_FACTORIAL_INPUT: i64 = 34;

/// Compute-once table of factorials.
///
/// Lookups and extensions happen under a single lock, so one cache can be
/// shared by reference between threads without duplicating work.
///
/// # Examples
///
/// ```
/// use exact_ratio::FactorialCache;
///
/// let cache = FactorialCache::new();
/// assert_eq!(cache.get(5).unwrap(), 120);
/// assert_eq!(cache.cached(4), Some(24));
/// assert_eq!(cache.get(-3).unwrap(), 0);
/// ```
#[derive(Debug)]
pub struct FactorialCache {
    entries: Mutex<Vec<u128>>,
}

impl FactorialCache {
    /// Create a cache holding only `0! = 1`.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(vec![1]),
        }
    }

    /// Return `n!`, computing and caching every missing entry up to `n`.
    ///
    /// Negative input yields `0` rather than an error.
    ///
    /// # Errors
    ///
    /// [`RatioError::Overflow`] when `n!` does not fit in `u128`
    /// (`n > MAX_FACTORIAL_INPUT`). Entries below the overflow point stay
    /// cached.
    pub fn get(&self, n: i64) -> Result<u128> {
        if n < 0 {
            return Ok(0);
        }
        if n > MAX_FACTORIAL_INPUT {
            debug!(n, "factorial overflows u128");
            return Err(RatioError::overflow("factorial"));
        }

        let n = n as usize;
        let mut entries = self.lock();
        if let Some(&value) = entries.get(n) {
            return Ok(value);
        }

        let start = entries.len();
        let mut value = entries[start - 1];
        for k in start..=n {
            value = value
                .checked_mul(k as u128)
                .ok_or_else(|| RatioError::overflow("factorial"))?;
            entries.push(value);
        }
        trace!(from = start, to = n, "extended factorial cache");

        Ok(value)
    }

    /// Return `n!` only if it has already been computed.
    pub fn cached(&self, n: i64) -> Option<u128> {
        let index = usize::try_from(n).ok()?;
        self.lock().get(index).copied()
    }

    /// Number of cached entries (`0!` through `(len - 1)!`).
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// A cache always holds `0!`, so this is never `true`.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // The table only ever holds fully computed entries, so a poisoned lock
    // is still consistent.
    fn lock(&self) -> MutexGuard<'_, Vec<u128>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for FactorialCache {
    fn default() -> Self {
        Self::new()
    }
}

/// `n!` from a process-wide [`FactorialCache`].
///
/// Returns `Ok(0)` for negative `n`.
///
/// # Examples
///
/// ```
/// use exact_ratio::factorial;
///
/// assert_eq!(factorial(10).unwrap(), 3_628_800);
/// assert!(factorial(40).is_err());
/// ```
pub fn factorial(n: i64) -> Result<u128> {
    static SHARED: OnceLock<FactorialCache> = OnceLock::new();
    SHARED.get_or_init(FactorialCache::new).get(n)
}
