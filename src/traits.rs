//! Common trait for priority queues
//!
//! [`PriorityQueue`] is the operation surface shared by this crate's
//! [`BinaryHeap`] and, through [`crate::stdlib_compat`], by the standard
//! library's `BinaryHeap<Reverse<T>>`. Code written against the trait can
//! check one queue against the other.
//!
//! # Example
//!
//! ```rust
//! use min_priority_queue::{BinaryHeap, PriorityQueue};
//!
//! fn drain<Q: PriorityQueue<u32>>(queue: &mut Q) -> Vec<u32> {
//!     let mut out = Vec::new();
//!     while let Some(value) = queue.poll() {
//!         out.push(value);
//!     }
//!     out
//! }
//!
//! let mut heap = BinaryHeap::new();
//! heap.add(2).unwrap();
//! heap.add(1).unwrap();
//! assert_eq!(drain(&mut heap), vec![1, 2]);
//! ```

use crate::binary::BinaryHeap;
use crate::error::Result;
use crate::ordering::Comparator;

/// A min-priority queue
///
/// Reading from an empty queue yields `None` rather than an error; invalid
/// input to `add` is an error.
pub trait PriorityQueue<T> {
    /// Inserts `element`, returning `Ok(true)` on success
    fn add(&mut self, element: T) -> Result<bool>;

    /// Removes and returns the minimum element
    fn poll(&mut self) -> Option<T>;

    /// Returns the minimum element without removing it
    fn peek(&self) -> Option<&T>;

    /// Returns the number of elements
    fn size(&self) -> usize;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<T, C: Comparator<T>> PriorityQueue<T> for BinaryHeap<T, C> {
    fn add(&mut self, element: T) -> Result<bool> {
        BinaryHeap::add(self, element)
    }

    fn poll(&mut self) -> Option<T> {
        BinaryHeap::poll(self)
    }

    fn peek(&self) -> Option<&T> {
        BinaryHeap::peek(self)
    }

    fn size(&self) -> usize {
        BinaryHeap::size(self)
    }

    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }
}
