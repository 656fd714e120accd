//! Array-backed binary min-heap
//!
//! [`BinaryHeap`] keeps its elements in a single `Vec` laid out as an
//! implicit binary tree: the children of index `i` live at `2i + 1` and
//! `2i + 2`, and every parent compares not greater than its children. The
//! root at index 0 is therefore always the minimum.
//!
//! Ordering comes from a [`Comparator`]: [`NaturalOrder`] by default, or any
//! closure / comparator passed at construction. Capacity is grown explicitly
//! by the policy in [`crate::growth`].
//!
//! # Time Complexity
//!
//! | Operation | Complexity         |
//! |-----------|--------------------|
//! | `add`     | O(log n) amortized |
//! | `poll`    | O(log n)           |
//! | `peek`    | O(1)               |
//! | `size`    | O(1)               |
//!
//! # Thread Safety
//!
//! The heap does no internal locking. It is `Send`/`Sync` when its element
//! and comparator types are, and every mutation takes `&mut self`; sharing a
//! heap between threads for mutation needs external synchronization such as
//! a `Mutex`.
//!
//! # Example
//!
//! ```rust
//! use min_priority_queue::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new();
//! heap.add(13).unwrap();
//! heap.add(5).unwrap();
//! heap.add(32).unwrap();
//!
//! assert_eq!(heap.peek(), Some(&5));
//! assert_eq!(heap.poll(), Some(5));
//! assert_eq!(heap.poll(), Some(13));
//! assert_eq!(heap.poll(), Some(32));
//! assert_eq!(heap.poll(), None);
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace, warn};

use crate::config::{HeapConfig, DEFAULT_CAPACITY};
use crate::error::{HeapError, Result};
use crate::growth;
use crate::ordering::{Comparator, NaturalOrder};

/// A binary min-heap ordered by a [`Comparator`]
#[derive(Clone)]
pub struct BinaryHeap<T, C = NaturalOrder> {
    /// Live elements in heap order; `data.capacity()` is the slot count
    data: Vec<T>,
    comparator: C,
}

impl<T> BinaryHeap<T, NaturalOrder> {
    /// Creates an empty heap using the natural ordering of `T`
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Creates an empty heap using the natural ordering with room for
    /// `capacity` elements
    ///
    /// # Errors
    ///
    /// [`HeapError::InvalidCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_comparator_and_capacity(NaturalOrder, capacity)
    }
}

impl<T> Default for BinaryHeap<T, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `comparator`
    pub fn with_comparator(comparator: C) -> Self {
        trace!(capacity = DEFAULT_CAPACITY, "creating heap");
        Self {
            data: Vec::with_capacity(DEFAULT_CAPACITY),
            comparator,
        }
    }

    /// Creates an empty heap ordered by `comparator` with room for `capacity` elements
    ///
    /// # Errors
    ///
    /// [`HeapError::InvalidCapacity`] if `capacity` is zero.
    pub fn with_comparator_and_capacity(comparator: C, capacity: usize) -> Result<Self> {
        Self::from_config(
            HeapConfig::default().with_initial_capacity(capacity),
            comparator,
        )
    }

    /// Creates an empty heap from `config`, ordered by `comparator`
    ///
    /// # Errors
    ///
    /// - [`HeapError::InvalidCapacity`] if the configured capacity is zero
    /// - [`HeapError::CapacityOverflow`] if the storage cannot be allocated
    pub fn from_config(config: HeapConfig, comparator: C) -> Result<Self> {
        config.validate()?;
        trace!(capacity = config.initial_capacity, "creating heap");
        let mut data = Vec::new();
        data.try_reserve_exact(config.initial_capacity)
            .map_err(|_| HeapError::CapacityOverflow {
                required: config.initial_capacity,
            })?;
        Ok(Self { data, comparator })
    }

    /// Returns the number of elements in the heap
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the heap can hold before growing
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the minimum element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the comparator ordering this heap
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Drops every element, keeping the allocated capacity
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T, C: Comparator<T>> BinaryHeap<T, C> {
    /// Inserts `element`, returning `Ok(true)`
    ///
    /// The comparator's ordering check runs before the heap is touched, so
    /// a failed add leaves the heap unchanged.
    ///
    /// # Errors
    ///
    /// - [`HeapError::MissingOrderingCapability`] if the comparator cannot order `element`
    /// - [`HeapError::CapacityOverflow`] if the storage cannot grow any further
    pub fn add(&mut self, element: T) -> Result<bool> {
        if let Err(err) = self.comparator.ensure_orderable(&element, self.data.first()) {
            warn!(size = self.data.len(), error = %err, "rejected element");
            return Err(err);
        }

        let index = self.data.len();
        if index >= self.data.capacity() {
            let required = index
                .checked_add(1)
                .ok_or(HeapError::CapacityOverflow {
                    required: usize::MAX,
                })?;
            self.grow(required)?;
        }
        self.data.push(element);
        self.sift_up(index);
        Ok(true)
    }

    /// Inserts an element that may be absent
    ///
    /// # Errors
    ///
    /// [`HeapError::NullElement`] for `None`, otherwise as [`add`](Self::add).
    pub fn offer(&mut self, element: Option<T>) -> Result<bool> {
        match element {
            Some(element) => self.add(element),
            None => {
                warn!(size = self.data.len(), "rejected absent element");
                Err(HeapError::NullElement)
            }
        }
    }

    /// Removes and returns the minimum element, or `None` if the heap is empty
    pub fn poll(&mut self) -> Option<T> {
        let last = self.data.pop()?;
        if self.data.is_empty() {
            return Some(last);
        }

        let root = std::mem::replace(&mut self.data[0], last);
        self.sift_down(0);
        Some(root)
    }

    /// Consumes the heap, returning its elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(element) = self.poll() {
            sorted.push(element);
        }
        sorted
    }

    /// Returns true if every parent compares not greater than its children
    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|i| {
            let parent = (i - 1) / 2;
            self.comparator.compare(&self.data[parent], &self.data[i]) != Ordering::Greater
        })
    }

    /// Grows the storage to hold at least `required` elements
    fn grow(&mut self, required: usize) -> Result<()> {
        let old = self.data.capacity();
        let new = growth::new_capacity(old, required, growth::max_len::<T>())?;
        self.data
            .try_reserve_exact(new - self.data.len())
            .map_err(|_| HeapError::CapacityOverflow { required: new })?;
        debug!(old, new, "grew heap storage");
        Ok(())
    }

    /// Moves the element at `index` up until its parent is not greater
    ///
    /// Equal elements stop the climb.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.comparator.compare(&self.data[index], &self.data[parent]) != Ordering::Less {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    /// Moves the element at `index` down until no child is smaller
    fn sift_down(&mut self, mut index: usize) {
        let end = self.data.len();
        let half = end / 2;
        while index < half {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut child = left;
            if right < end
                && self.comparator.compare(&self.data[left], &self.data[right]) == Ordering::Greater
            {
                child = right;
            }
            if self.comparator.compare(&self.data[index], &self.data[child]) != Ordering::Greater {
                break;
            }
            self.data.swap(index, child);
            index = child;
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("data", &self.data)
            .field("capacity", &self.data.capacity())
            .finish_non_exhaustive()
    }
}
