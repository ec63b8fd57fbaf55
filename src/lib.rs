//! # Fibonacci Strategy Library
//!
//! This library provides three interchangeable strategies for computing Fibonacci
//! numbers (iterative, naive-recursive, and memoized-recursive) behind a single
//! consistent contract. The strategies differ only in algorithmic approach and
//! performance characteristics; for every valid index they agree bit-for-bit, with
//! the iterative strategy serving as the reference.
//!
//! Terms are `num_bigint::BigUint` values, so results stay correct well past the
//! point where Fibonacci numbers overflow native integers (index 93 for `u64`).
//!
//! ## Key Features
//! - **Iterative computation**: a rolling pair of terms advanced in a loop; O(n)
//!   time, O(1) auxiliary space for single terms.
//! - **Naive recursion**: the textbook recursive definition, kept deliberately
//!   uncached as the exponential-time "bad example" for comparison.
//! - **Memoized recursion**: the same recursive definition backed by an index-to-term
//!   cache, bringing the cost back to O(n). The cache may be caller-owned and reused
//!   across calls.
//! - **Sequence generation**: wrappers producing the first `n` terms from either the
//!   iterative or the memoized strategy.
//!
//! ## Overview of Functions
//!
//! ### Errors
//! - `FibonacciError`: the single failure mode of the crate. Every operation rejects
//!   a negative index or count with `FibonacciError::InvalidArgument` before any
//!   computation happens.
//!
//! ### Fibonacci Computation Strategies
//!
//! #### `nth_iterative`
//! Computes the nth Fibonacci number (0-indexed) by advancing a rolling pair of
//! terms. O(n) time, O(1) auxiliary space.
//!
//! #### `seq_iterative`
//! Generates the first `n` Fibonacci numbers with the same rolling pair, appending
//! each term as it is produced. O(n) time and space.
//!
//! #### `nth_naive`
//! Computes the nth Fibonacci number by direct recursion on the defining
//! recurrence. Exponential time; see the per-function warning.
//!
//! #### `nth_memoized` / `nth_memoized_with`
//! Memoized recursion. `nth_memoized` owns a fresh cache scoped to the call;
//! `nth_memoized_with` consults and populates a caller-owned [`memo::MemoCache`],
//! so repeated calls against the same cache never recompute an index.
//!
//! #### `seq_memoized`
//! Generates the first `n` Fibonacci numbers by computing indices 0..n in order
//! through one shared cache, an O(n) sequence built from the memoized strategy.
//!
//! ## Usage Example
//! ```rust
//! use fibonacci_strategies::fibonacci;
//! use num_bigint::BigUint;
//! let fib_sequence = fibonacci::seq_iterative(10).unwrap();
//! assert_eq!(fib_sequence[9], BigUint::from(34u32));
//! ```

pub mod fibonacci;
pub mod memo;
