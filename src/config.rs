//! Construction settings for [`BinaryHeap`](crate::BinaryHeap)

use crate::error::{HeapError, Result};

/// Initial capacity used when none is given
pub const DEFAULT_CAPACITY: usize = 8;

/// Settings applied when a heap is created
///
/// # Example
///
/// ```rust
/// use min_priority_queue::{BinaryHeap, HeapConfig, NaturalOrder};
///
/// let config = HeapConfig::default().with_initial_capacity(32);
/// let heap: BinaryHeap<u32> = BinaryHeap::from_config(config, NaturalOrder).unwrap();
/// assert_eq!(heap.capacity(), 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapConfig {
    /// Number of slots allocated up front, must be at least 1
    pub initial_capacity: usize,
}

impl HeapConfig {
    /// Returns a copy with a different initial capacity
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Checks the settings, returning [`HeapError::InvalidCapacity`] for a zero capacity
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity < 1 {
            return Err(HeapError::InvalidCapacity {
                requested: self.initial_capacity,
            });
        }
        Ok(())
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = HeapConfig::default();
        assert_eq!(config.initial_capacity, DEFAULT_CAPACITY);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = HeapConfig::default().with_initial_capacity(0);
        assert_eq!(
            config.validate(),
            Err(HeapError::InvalidCapacity { requested: 0 })
        );
    }
}
