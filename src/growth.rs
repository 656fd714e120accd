//! Capacity growth policy for the heap's backing storage
//!
//! The heap manages its capacity explicitly instead of relying on `Vec`'s
//! own amortized doubling. When an insert finds the storage full, the new
//! capacity is computed here:
//!
//! - small storage (fewer than 64 slots) grows by `old + 2`, so it roughly doubles;
//! - larger storage grows by half its size;
//! - the growth is never less than what the caller needs.
//!
//! Lengths are kept a few slots below the hard maximum when possible.
//! Only when even the required minimum does not fit is
//! [`HeapError::CapacityOverflow`] returned.

use crate::error::{HeapError, Result};

/// Slots kept free below the hard maximum when clamping a preferred length
pub const SAFETY_MARGIN: usize = 8;

/// Below this capacity the preferred growth is `old + 2`, above it `old / 2`
pub const SMALL_CAPACITY_THRESHOLD: usize = 64;

/// The largest number of `T` values a `Vec<T>` can hold
pub fn max_len<T>() -> usize {
    match std::mem::size_of::<T>() {
        0 => usize::MAX,
        size => isize::MAX as usize / size,
    }
}

/// Computes the capacity needed to hold at least `required` elements,
/// given the current capacity `old`
///
/// `max` is the hard limit on the number of elements, usually [`max_len`].
pub fn new_capacity(old: usize, required: usize, max: usize) -> Result<usize> {
    let min_growth = required.saturating_sub(old);
    let pref_growth = if old < SMALL_CAPACITY_THRESHOLD {
        old + 2
    } else {
        old >> 1
    };
    new_length(old, min_growth, pref_growth, max)
}

/// Grows `old` by the larger of `min_growth` and `pref_growth`, clamping to
/// the soft maximum (`max - SAFETY_MARGIN`) when the preferred length is too large
///
/// # Errors
///
/// [`HeapError::CapacityOverflow`] when `old + min_growth` exceeds `max`.
pub fn new_length(old: usize, min_growth: usize, pref_growth: usize, max: usize) -> Result<usize> {
    let soft_max = max.saturating_sub(SAFETY_MARGIN);
    match old.checked_add(min_growth.max(pref_growth)) {
        Some(pref_len) if pref_len <= soft_max => Ok(pref_len),
        _ => huge_length(old, min_growth, max),
    }
}

fn huge_length(old: usize, min_growth: usize, max: usize) -> Result<usize> {
    let soft_max = max.saturating_sub(SAFETY_MARGIN);
    let min_len = old
        .checked_add(min_growth)
        .ok_or(HeapError::CapacityOverflow {
            required: usize::MAX,
        })?;

    if min_len <= soft_max {
        Ok(soft_max)
    } else if min_len <= max {
        Ok(min_len)
    } else {
        Err(HeapError::CapacityOverflow { required: min_len })
    }
}
