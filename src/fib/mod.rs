//! Fibonacci computation
//!
//! Values are `u128`, which holds every term up to and including
//! [`MAX_INDEX`]. Anything past that is reported as an overflow.

mod cache;
mod sequence;

pub use cache::FibonacciCache;
pub use sequence::FibonacciSequence;

use crate::common::Result;

/// Fibonacci value type
pub type Value = u128;

/// Largest index whose value fits in a [`Value`]
pub const MAX_INDEX: u32 = 186;

/// Compute F(n) with a cache owned by this call
pub fn fibonacci(n: i64) -> Result<Value> {
    FibonacciCache::new().get(n)
}

/// Compute F(0)..=F(n) with a cache owned by this call
pub fn fibonacci_range(n: i64) -> Result<Vec<Value>> {
    FibonacciCache::new().compute_range(n)
}

/// First `count` values of the sequence
///
/// Fewer than `count` values are returned when the sequence runs past
/// [`MAX_INDEX`].
pub fn take(count: usize) -> Vec<Value> {
    FibonacciSequence::new().take(count).collect()
}
