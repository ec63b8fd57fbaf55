use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::memo::{fib_memo, MemoCache};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FibonacciError {
    #[error("invalid argument: index must be non-negative, got {0}")]
    InvalidArgument(i64),
}

// Validate the caller-supplied index and move it into the unsigned domain
// used internally. The only failure mode in the crate originates here.
fn valid_index(n: i64) -> Result<u64, FibonacciError> {
    u64::try_from(n).map_err(|_| FibonacciError::InvalidArgument(n))
}

/// Computes the nth Fibonacci number (0-indexed) iteratively.
///
/// This maintains a rolling pair of the two most recent terms, starting from
/// (0, 1), and advances it `n` times. It runs in O(n) time and O(1) auxiliary
/// space, and is the reference against which the other strategies are checked.
///
/// # Parameters
/// - `n`: The index of the Fibonacci number to compute (0-indexed).
///
/// # Returns
/// The nth Fibonacci number, or `FibonacciError::InvalidArgument` if `n` is
/// negative.
///
/// # Example
/// ```
/// use fibonacci_strategies::fibonacci;
/// use num_bigint::BigUint;
/// assert_eq!(fibonacci::nth_iterative(0).unwrap(), BigUint::from(0u32));
/// assert_eq!(fibonacci::nth_iterative(10).unwrap(), BigUint::from(55u32));
/// ```
pub fn nth_iterative(n: i64) -> Result<BigUint, FibonacciError> {
    let n = valid_index(n)?;
    let mut a = BigUint::zero();
    let mut b = BigUint::one();
    for _ in 0..n {
        let next = &a + &b;
        a = b;
        b = next;
    }
    Ok(a)
}

/// Generates the first `n` Fibonacci numbers iteratively.
///
/// Uses the same rolling pair as [`nth_iterative`], appending each term as it
/// is produced. O(n) time, O(n) space for the result vector.
///
/// # Parameters
/// - `n`: The number of terms to generate. Zero yields an empty vector.
///
/// # Returns
/// A vector containing the first `n` Fibonacci numbers, or
/// `FibonacciError::InvalidArgument` if `n` is negative.
///
/// # Example
/// ```
/// use fibonacci_strategies::fibonacci;
/// use num_bigint::BigUint;
/// let seq = fibonacci::seq_iterative(5).unwrap();
/// assert_eq!(seq, vec![
///     BigUint::from(0u32),
///     BigUint::from(1u32),
///     BigUint::from(1u32),
///     BigUint::from(2u32),
///     BigUint::from(3u32),
/// ]);
/// assert!(fibonacci::seq_iterative(0).unwrap().is_empty());
/// ```
pub fn seq_iterative(n: i64) -> Result<Vec<BigUint>, FibonacciError> {
    let count = usize::try_from(n).map_err(|_| FibonacciError::InvalidArgument(n))?;
    let mut seq = Vec::with_capacity(count);
    let mut a = BigUint::zero();
    let mut b = BigUint::one();
    for _ in 0..count {
        let next = &a + &b;
        seq.push(a);
        a = b;
        b = next;
    }
    Ok(seq)
}

/// Computes the nth Fibonacci number (0-indexed) by naive recursion.
///
/// WARNING: exponential cost. Each call recomputes identical sub-calls with
/// no caching, giving O(φ^n) time (~2^n calls) at O(n) stack depth. This is
/// the deliberately bad example kept for comparison with the other
/// strategies; do not use it for n much above 35, and do not "fix" it with a
/// cache; that is what [`nth_memoized`] is for.
///
/// # Example
/// ```
/// use fibonacci_strategies::fibonacci;
/// use num_bigint::BigUint;
/// assert_eq!(fibonacci::nth_naive(10).unwrap(), BigUint::from(55u32));
/// ```
pub fn nth_naive(n: i64) -> Result<BigUint, FibonacciError> {
    let n = valid_index(n)?;
    Ok(fib_naive(n))
}

fn fib_naive(n: u64) -> BigUint {
    match n {
        0 => BigUint::zero(),
        1 => BigUint::one(),
        _ => fib_naive(n - 1) + fib_naive(n - 2),
    }
}

/// Computes the nth Fibonacci number (0-indexed) by memoized recursion.
///
/// A fresh [`MemoCache`] is created for this call and dropped with it.
/// Callers wanting cross-call reuse own the cache instead and use
/// [`nth_memoized_with`]. No global or static cache backs this function.
///
/// # Example
/// ```
/// use fibonacci_strategies::fibonacci;
/// use num_bigint::BigUint;
/// assert_eq!(
///     fibonacci::nth_memoized(50).unwrap(),
///     BigUint::from(12586269025u64),
/// );
/// ```
pub fn nth_memoized(n: i64) -> Result<BigUint, FibonacciError> {
    let mut cache = MemoCache::new();
    nth_memoized_with(n, &mut cache)
}

/// Computes the nth Fibonacci number against a caller-owned cache.
///
/// The cache is consulted before any computation and populated as a side
/// effect, base cases included. Across the lifetime of one cache instance
/// each index is computed at most once, so repeated or descending call
/// patterns stay O(n) overall.
///
/// # Example
/// ```
/// use fibonacci_strategies::fibonacci;
/// use fibonacci_strategies::memo::MemoCache;
/// use num_bigint::BigUint;
///
/// let mut cache = MemoCache::new();
/// assert_eq!(
///     fibonacci::nth_memoized_with(10, &mut cache).unwrap(),
///     BigUint::from(55u32),
/// );
/// // The second call is a pure cache hit.
/// assert_eq!(
///     fibonacci::nth_memoized_with(10, &mut cache).unwrap(),
///     BigUint::from(55u32),
/// );
/// ```
pub fn nth_memoized_with(n: i64, cache: &mut MemoCache) -> Result<BigUint, FibonacciError> {
    let n = valid_index(n)?;
    Ok(fib_memo(n, cache))
}

/// Generates the first `n` Fibonacci numbers via memoized recursion.
///
/// Computes indices 0..n in order through one shared cache, so each term
/// after the base cases is a single cache-backed addition: O(n) time and
/// space in total. Agrees elementwise with [`seq_iterative`].
///
/// # Example
/// ```
/// use fibonacci_strategies::fibonacci;
/// let seq = fibonacci::seq_memoized(7).unwrap();
/// assert_eq!(seq, fibonacci::seq_iterative(7).unwrap());
/// ```
pub fn seq_memoized(n: i64) -> Result<Vec<BigUint>, FibonacciError> {
    let count = valid_index(n)?;
    let mut cache = MemoCache::new();
    let mut seq = Vec::with_capacity(count as usize);
    for i in 0..count {
        seq.push(fib_memo(i, &mut cache));
    }
    Ok(seq)
}
