//! Error type for priority queue operations

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, HeapError>;

/// Errors returned by heap construction and insertion
///
/// Reading from an empty heap is not an error: `poll` and `peek` return `None`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The requested initial capacity was zero
    #[error("capacity can not be < 1 (requested {requested})")]
    InvalidCapacity { requested: usize },

    /// `offer` was called without an element
    #[error("element must not be absent")]
    NullElement,

    /// No comparator was supplied and the element has no natural ordering
    #[error("element has no natural ordering and no comparator was supplied")]
    MissingOrderingCapability,

    /// The storage cannot be grown to hold the required number of elements
    #[error("required capacity {required} is too large")]
    CapacityOverflow { required: usize },
}
