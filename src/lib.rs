//! Memoized Fibonacci computation
//!
//! [`FibonacciCache`] computes each index at most once, growing bottom-up
//! from F(0) and F(1). [`FibonacciSequence`] yields the same values lazily.
//! The `fib` binary wraps both behind a small CLI.

pub mod cli;
pub mod commands;
pub mod common;
pub mod fib;
pub mod testing;

pub use common::{Error, Result};
pub use fib::{fibonacci, fibonacci_range, FibonacciCache, FibonacciSequence, Value, MAX_INDEX};
