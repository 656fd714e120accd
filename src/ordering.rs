//! Ordering resolution for heap comparisons
//!
//! Every comparison the heap makes goes through the [`Comparator`] trait, so
//! the sift routines never care where the ordering comes from. Three sources
//! are provided:
//!
//! - **Explicit comparators**: any `Fn(&T, &T) -> Ordering` closure, plus
//!   [`KeyComparator`] (compare by an extracted key) and [`Reversed`].
//! - **[`NaturalOrder`]**: uses `T: Ord`. The ordering capability is checked by
//!   the compiler, so a type without one cannot be put in such a heap.
//! - **[`RuntimeOrder`]**: uses [`Comparable`], a fallible comparison that is
//!   checked when an element is added. Elements without an ordering (for
//!   example `f64::NAN`) are rejected with
//!   [`HeapError::MissingOrderingCapability`] before the heap is touched.
//!
//! # Example
//!
//! ```rust
//! use min_priority_queue::BinaryHeap;
//! use min_priority_queue::ordering::{KeyComparator, RuntimeOrder};
//! use min_priority_queue::HeapError;
//!
//! let mut by_len = BinaryHeap::with_comparator(KeyComparator(|s: &&str| s.len()));
//! by_len.add("three").unwrap();
//! by_len.add("a").unwrap();
//! assert_eq!(by_len.poll(), Some("a"));
//!
//! let mut floats = BinaryHeap::with_comparator(RuntimeOrder);
//! floats.add(2.5_f64).unwrap();
//! assert_eq!(floats.add(f64::NAN), Err(HeapError::MissingOrderingCapability));
//! assert_eq!(floats.size(), 1);
//! ```

use std::cmp::Ordering;

use tracing::trace;

use crate::error::{HeapError, Result};

/// A total order over `T` used by the heap
pub trait Comparator<T: ?Sized> {
    /// Three-way comparison of `a` against `b`
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Checks that `element` can be ordered before it is inserted
    ///
    /// `root` is the current minimum, if any. The default accepts everything,
    /// which is right for any comparator that is total by construction.
    fn ensure_orderable(&self, _element: &T, _root: Option<&T>) -> Result<()> {
        Ok(())
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// A boxed comparator, for storing heaps with different closures in one type
pub type DynComparator<T> = Box<dyn Fn(&T, &T) -> Ordering>;

/// Natural ordering of `T: Ord`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// A comparison that may be undefined for some values
///
/// Implemented for every `PartialOrd` type. Types that are not `PartialOrd`
/// can implement it directly, returning `None` where no order exists.
pub trait Comparable {
    /// Compares `self` with `other`, or `None` if they have no order
    fn try_compare(&self, other: &Self) -> Option<Ordering>;
}

impl<T: PartialOrd + ?Sized> Comparable for T {
    #[inline]
    fn try_compare(&self, other: &Self) -> Option<Ordering> {
        self.partial_cmp(other)
    }
}

/// Natural ordering discovered at runtime through [`Comparable`]
///
/// Each added element must compare with itself and with the current root;
/// otherwise the add fails with [`HeapError::MissingOrderingCapability`].
/// The check assumes comparability is shared by every element that passes it.
/// Two stored elements that still turn out incomparable compare as equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuntimeOrder;

impl<T: Comparable + ?Sized> Comparator<T> for RuntimeOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.try_compare(b).unwrap_or_else(|| {
            trace!("incomparable elements, treating as equal");
            Ordering::Equal
        })
    }

    fn ensure_orderable(&self, element: &T, root: Option<&T>) -> Result<()> {
        element
            .try_compare(element)
            .ok_or(HeapError::MissingOrderingCapability)?;
        if let Some(root) = root {
            element
                .try_compare(root)
                .ok_or(HeapError::MissingOrderingCapability)?;
        }
        Ok(())
    }
}

/// Orders elements by a key extracted from each of them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyComparator<F>(pub F);

impl<T: ?Sized, K: Ord, F> Comparator<T> for KeyComparator<F>
where
    F: Fn(&T) -> K,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

/// Reverses another comparator, turning the min-heap into a max-heap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }

    fn ensure_orderable(&self, element: &T, root: Option<&T>) -> Result<()> {
        self.0.ensure_orderable(element, root)
    }
}
