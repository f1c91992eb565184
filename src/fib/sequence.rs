//! Bounded, restartable Fibonacci iterator
//!
//! Steps the pair `(a, b) -> (b, a + b)` and yields `a`. Ends on its own
//! once the next term would not fit in a [`Value`], otherwise the caller
//! bounds it with `take`.

use super::Value;

/// Iterator over F(0), F(1), F(2), ...
#[derive(Debug, Clone)]
pub struct FibonacciSequence {
    current: Option<Value>,
    next: Option<Value>,
}

impl Default for FibonacciSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl FibonacciSequence {
    pub fn new() -> Self {
        Self {
            current: Some(0),
            next: Some(1),
        }
    }

    /// Rewind to F(0)
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Iterator for FibonacciSequence {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let current = self.current.take()?;
        // `next` is None once the pair has overflowed; `current` is then the last term
        if let Some(next) = self.next.take() {
            self.next = current.checked_add(next);
            self.current = Some(next);
        }
        Some(current)
    }
}

impl std::iter::FusedIterator for FibonacciSequence {}
