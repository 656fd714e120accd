//! Array-backed binary min-heap priority queue
//!
//! This crate provides [`BinaryHeap`], a priority queue that always hands back
//! its smallest element first. Ordering is supplied either by an explicit
//! comparator or by the elements' own natural ordering.
//!
//! # Features
//!
//! - **Explicit or natural ordering**: closures, [`KeyComparator`](ordering::KeyComparator),
//!   [`NaturalOrder`] for `T: Ord`, and [`RuntimeOrder`](ordering::RuntimeOrder)
//!   for values whose ordering is only known at runtime
//! - **Explicit growth policy**: small heaps roughly double, large heaps grow by
//!   half, with overflow reported as [`HeapError::CapacityOverflow`]
//! - **Standard-library shapes**: [`StdHeap`](stdlib_compat::StdHeap) and a
//!   [`PriorityQueue`] impl for `std::collections::BinaryHeap<Reverse<T>>`
//!
//! Reading from an empty heap returns `None`; invalid input (a zero
//! capacity, an absent element, an unorderable element) returns a
//! [`HeapError`].
//!
//! # Example
//!
//! ```rust
//! use min_priority_queue::BinaryHeap;
//!
//! #[derive(Debug, PartialEq)]
//! struct Person {
//!     name: String,
//!     id: u32,
//! }
//!
//! let mut heap = BinaryHeap::with_comparator(|a: &Person, b: &Person| a.name.cmp(&b.name));
//! heap.add(Person { name: "C".into(), id: 2 }).unwrap();
//! heap.add(Person { name: "A".into(), id: 1 }).unwrap();
//! heap.add(Person { name: "D".into(), id: 3 }).unwrap();
//!
//! assert_eq!(heap.peek().map(|p| p.id), Some(1));
//! assert_eq!(heap.poll().map(|p| p.id), Some(1));
//! assert_eq!(heap.peek().map(|p| p.id), Some(2));
//! assert_eq!(heap.size(), 2);
//! ```

pub mod binary;
pub mod config;
pub mod error;
pub mod growth;
pub mod ordering;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use binary::BinaryHeap;
pub use config::{HeapConfig, DEFAULT_CAPACITY};
pub use error::{HeapError, Result};
pub use ordering::{Comparator, NaturalOrder};
pub use traits::PriorityQueue;
