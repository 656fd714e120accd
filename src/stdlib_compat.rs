//! Standard library compatibility layer
//!
//! Two bridges between this crate and `std::collections::BinaryHeap`:
//!
//! - [`StdHeap`]: a `BinaryHeap`-shaped facade (`push`/`pop`/`peek`) over the
//!   engine, for `T: Ord` callers who want infallible pushes.
//! - A [`PriorityQueue`] impl for `std::collections::BinaryHeap<Reverse<T>>`,
//!   so the standard heap can serve as a reference queue in tests.
//!
//! # Differences from BinaryHeap
//!
//! - **Min-heap vs Max-heap**: This is a min-heap, while `BinaryHeap` is a max-heap.
//!   Use `std::cmp::Reverse<T>` to get max-heap behavior.
//! - **Growth**: capacity follows [`crate::growth`] rather than `Vec` doubling.
//!
//! # Example
//!
//! ```rust
//! use min_priority_queue::stdlib_compat::StdHeap;
//!
//! let mut heap = StdHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(7);
//! assert_eq!(heap.peek(), Some(&3)); // min-heap, unlike BinaryHeap's max-heap
//! assert_eq!(heap.pop(), Some(3));
//! ```

use std::cmp::Reverse;
use std::collections::BinaryHeap as StdBinaryHeap;

use crate::binary::BinaryHeap;
use crate::error::{HeapError, Result};
use crate::ordering::NaturalOrder;
use crate::traits::PriorityQueue;

/// A drop-in replacement for `std::collections::BinaryHeap` with min-heap order
///
/// # Panics
///
/// `push` panics if the storage cannot grow, as `Vec::push` does.
#[derive(Debug, Clone)]
pub struct StdHeap<T: Ord> {
    heap: BinaryHeap<T, NaturalOrder>,
}

impl<T: Ord> StdHeap<T> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item onto the heap
    pub fn push(&mut self, item: T) {
        if let Err(err) = self.heap.add(item) {
            push_failed(err);
        }
    }

    /// Returns a reference to the smallest item without removing it
    ///
    /// This is equivalent to `BinaryHeap::peek`, but returns the minimum (not maximum).
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Removes and returns the smallest item
    ///
    /// This is equivalent to `BinaryHeap::pop`, but returns the minimum (not maximum).
    pub fn pop(&mut self) -> Option<T> {
        self.heap.poll()
    }

    /// Consumes the heap, returning its items in ascending order
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.heap.into_sorted_vec()
    }
}

/// `NaturalOrder` never rejects an element, so the only failure is growth
#[cold]
#[track_caller]
fn push_failed(err: HeapError) -> ! {
    panic!("capacity overflow: {err}")
}

impl<T: Ord> Default for StdHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for StdHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for StdHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord> PriorityQueue<T> for StdBinaryHeap<Reverse<T>> {
    fn add(&mut self, element: T) -> Result<bool> {
        self.push(Reverse(element));
        Ok(true)
    }

    fn poll(&mut self) -> Option<T> {
        self.pop().map(|Reverse(element)| element)
    }

    fn peek(&self) -> Option<&T> {
        StdBinaryHeap::peek(self).map(|Reverse(element)| element)
    }

    fn size(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_heap_min_order() {
        let heap: StdHeap<i32> = [4, 1, 3, 2].into_iter().collect();
        assert_eq!(heap.len(), 4);
        assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    #[should_panic(expected = "capacity overflow: required capacity 9 is too large")]
    fn test_push_failure_message() {
        push_failed(HeapError::CapacityOverflow { required: 9 });
    }

    #[test]
    fn test_std_binary_heap_as_priority_queue() {
        let mut reference: StdBinaryHeap<Reverse<i32>> = StdBinaryHeap::new();
        assert!(PriorityQueue::is_empty(&reference));
        PriorityQueue::add(&mut reference, 13).unwrap();
        PriorityQueue::add(&mut reference, 5).unwrap();
        assert_eq!(PriorityQueue::peek(&reference), Some(&5));
        assert_eq!(PriorityQueue::poll(&mut reference), Some(5));
        assert_eq!(PriorityQueue::size(&reference), 1);
    }
}
