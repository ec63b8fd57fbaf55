use std::collections::HashMap;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Cache mapping a sequence index to its previously computed Fibonacci value.
///
/// A cache instance is confined to one logical call tree unless the caller
/// deliberately shares it across calls via
/// [`nth_memoized_with`](crate::fibonacci::nth_memoized_with). Entries are
/// written once and never evicted or overwritten; sharing an instance across
/// threads requires external serialization.
pub type MemoCache = HashMap<u64, BigUint>;

// Recursive core of the memoized strategy. Indices are validated by the
// public wrappers before this is called.
//
// Cache check first, then base cases (also written to the cache), then the
// recurrence with both sub-calls consulting the same cache instance. Each
// index is therefore computed at most once per cache lifetime: O(n) time and
// O(n) space (cache plus recursion stack).
pub fn fib_memo(n: u64, cache: &mut MemoCache) -> BigUint {
    if let Some(value) = cache.get(&n) {
        return value.clone();
    }

    let value = match n {
        0 => BigUint::zero(),
        1 => BigUint::one(),
        _ => {
            let left = fib_memo(n - 1, cache);
            let right = fib_memo(n - 2, cache);
            left + right
        }
    };

    cache.insert(n, value.clone());
    value
}
