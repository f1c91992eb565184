//! Memoizing lookup table for Fibonacci values
//!
//! Entries are stored densely by index, so holding entry `i` implies
//! holding every entry below it. The table only ever grows, and an entry
//! is never rewritten once pushed.

use tracing::{debug, trace};

use super::{Value, MAX_INDEX};
use crate::common::{Error, Result};

/// Cache of computed Fibonacci values, seeded with F(0) and F(1)
#[derive(Debug, Clone)]
pub struct FibonacciCache {
    values: Vec<Value>,
}

impl Default for FibonacciCache {
    fn default() -> Self {
        Self::new()
    }
}

impl FibonacciCache {
    /// Create a cache holding only the two base entries
    pub fn new() -> Self {
        Self { values: vec![0, 1] }
    }

    /// Get F(index), computing and storing any missing entries up to it
    pub fn get(&mut self, index: i64) -> Result<Value> {
        let slot = self.ensure(index)?;
        Ok(self.values[slot])
    }

    /// Get F(0)..=F(n) in order
    pub fn compute_range(&mut self, n: i64) -> Result<Vec<Value>> {
        let last = self.ensure(n)?;
        Ok(self.values[..=last].to_vec())
    }

    /// Number of entries currently held
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false, the base entries are present from construction
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether F(index) has already been computed
    pub fn contains(&self, index: i64) -> bool {
        usize::try_from(index).is_ok_and(|i| i < self.values.len())
    }

    /// Validate `index` and grow the table bottom-up until it covers it.
    /// Returns the slot holding F(index).
    fn ensure(&mut self, index: i64) -> Result<usize> {
        if index < 0 {
            return Err(Error::InvalidIndex(index));
        }
        if index > i64::from(MAX_INDEX) {
            return Err(Error::Overflow { index });
        }
        let target = index as usize;

        if target >= self.values.len() {
            debug!(from = self.values.len(), to = target, "Extending Fibonacci cache");
            self.values.reserve(target + 1 - self.values.len());
        }

        while self.values.len() <= target {
            let i = self.values.len();
            let value = self.values[i - 1]
                .checked_add(self.values[i - 2])
                .ok_or(Error::Overflow { index: i as i64 })?;
            trace!(index = i, %value, "Computed entry");
            self.values.push(value);
        }

        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_entries() {
        let mut cache = FibonacciCache::new();
        assert_eq!(cache.len(), 2);
        assert!(!cache.is_empty());
        assert_eq!(cache.get(0).unwrap(), 0);
        assert_eq!(cache.get(1).unwrap(), 1);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_get_ten() {
        let mut cache = FibonacciCache::new();
        assert_eq!(cache.get(10).unwrap(), 55);
        assert_eq!(cache.len(), 11);
    }

    #[test]
    fn test_get_is_idempotent() {
        let mut cache = FibonacciCache::new();
        let first = cache.get(42).unwrap();
        let len = cache.len();
        let second = cache.get(42).unwrap();
        assert_eq!(first, second);
        assert_eq!(cache.len(), len);
    }

    #[test]
    fn test_negative_index_rejected() {
        let mut cache = FibonacciCache::new();
        match cache.get(-1) {
            Err(Error::InvalidIndex(-1)) => {}
            other => panic!("Expected InvalidIndex, got {:?}", other),
        }
        assert!(matches!(cache.compute_range(-5), Err(Error::InvalidIndex(-5))));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_recurrence_holds() {
        let mut cache = FibonacciCache::new();
        for n in 2..=i64::from(MAX_INDEX) {
            let expected = cache.get(n - 1).unwrap() + cache.get(n - 2).unwrap();
            assert_eq!(cache.get(n).unwrap(), expected, "F({n})");
        }
    }

    #[test]
    fn test_compute_range() {
        let mut cache = FibonacciCache::new();
        assert_eq!(cache.compute_range(5).unwrap(), vec![0, 1, 1, 2, 3, 5]);
        assert_eq!(cache.compute_range(0).unwrap(), vec![0]);
        assert_eq!(cache.compute_range(1).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_compute_range_ends_with_get() {
        for n in [2, 17, 93, 120] {
            let range = FibonacciCache::new().compute_range(n).unwrap();
            assert_eq!(range.len(), n as usize + 1);
            assert_eq!(*range.last().unwrap(), FibonacciCache::new().get(n).unwrap());
        }
    }

    #[test]
    fn test_cache_grows_monotonically() {
        let mut cache = FibonacciCache::new();
        cache.get(30).unwrap();
        assert!(cache.contains(30));
        assert!(!cache.contains(31));
        cache.get(5).unwrap();
        assert_eq!(cache.len(), 31);
        assert!(!cache.contains(-1));
    }

    #[test]
    fn test_max_index_and_overflow() {
        let mut cache = FibonacciCache::new();
        assert_eq!(
            cache.get(i64::from(MAX_INDEX)).unwrap(),
            332_825_110_087_067_562_321_196_029_789_634_457_848
        );
        assert!(matches!(
            cache.get(i64::from(MAX_INDEX) + 1),
            Err(Error::Overflow { index: 187 })
        ));
    }
}
