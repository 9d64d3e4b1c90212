//! Insertion-point (lower-bound) search in ascending sequences.
//!
//! ## Purpose
//!
//! This module finds the lower-bound insertion index for a probe value in an
//! ascending sequence: the minimal index `p` such that every element before
//! `p` is strictly less than the probe and every element from `p` on compares
//! greater-or-equal.
//!
//! ## Design notes
//!
//! * **Clamped**: The result is always a valid point in `[0, n]`; the search
//!   itself never fails on a non-empty sequence.
//! * **Duplicates**: Runs of equal values always collapse to the first
//!   matching index, which anchors the stability bookkeeping of the
//!   permutation layer.
//! * **Fail-fast**: Empty input is rejected explicitly instead of reading
//!   position 0 unconditionally.
//!
//! ## Invariants
//!
//! * The input must be ascending under the comparator in use; this
//!   precondition is not verified.
//! * For the returned point `p`: `p == 0` or `seq[p - 1] < probe`, and
//!   `p == n` or `seq[p] >= probe`.
//!
//! ## Non-goals
//!
//! * This module does not insert anything; it only locates the index.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::errors::SearchError;
use crate::primitives::order::{Comparator, NaturalOrder};
use crate::primitives::validate::Validator;

// ============================================================================
// Insertion Point
// ============================================================================

/// Lower-bound insertion index for `probe` under the natural order.
///
/// Runs in O(log n) with no allocation.
///
/// # Errors
///
/// [`SearchError::EmptyInput`] when `seq` is empty.
#[inline]
pub fn insertion_point<T: PartialOrd>(seq: &[T], probe: &T) -> Result<usize, SearchError> {
    insertion_point_by(seq, probe, &NaturalOrder)
}

/// Lower-bound insertion index for `probe` under a supplied comparator.
///
/// # Errors
///
/// [`SearchError::EmptyInput`] when `seq` is empty.
pub fn insertion_point_by<T, C>(seq: &[T], probe: &T, cmp: &C) -> Result<usize, SearchError>
where
    C: Comparator<T>,
{
    Validator::ensure_nonempty(seq)?;
    let n = seq.len();

    // Boundary clamping: at or below the first element, above the last.
    if cmp.compare(probe, &seq[0]) != Ordering::Greater {
        return Ok(0);
    }
    if cmp.compare(probe, &seq[n - 1]) == Ordering::Greater {
        return Ok(n);
    }

    // Narrow [lo, hi] maintaining seq[lo] < probe <= seq[hi].
    let mut lo = 0;
    let mut hi = n - 1;
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if cmp.compare(&seq[mid], probe) == Ordering::Less {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Ok(hi)
}

// ============================================================================
// Next In Order
// ============================================================================

/// The element at the insertion point, or `None` when the probe exceeds
/// every element.
///
/// # Errors
///
/// [`SearchError::EmptyInput`] when `seq` is empty.
#[inline]
pub fn next_in_order<'a, T: PartialOrd>(
    seq: &'a [T],
    probe: &T,
) -> Result<Option<&'a T>, SearchError> {
    next_in_order_by(seq, probe, &NaturalOrder)
}

/// Comparator form of [`next_in_order`].
///
/// # Errors
///
/// [`SearchError::EmptyInput`] when `seq` is empty.
pub fn next_in_order_by<'a, T, C>(
    seq: &'a [T],
    probe: &T,
    cmp: &C,
) -> Result<Option<&'a T>, SearchError>
where
    C: Comparator<T>,
{
    let point = insertion_point_by(seq, probe, cmp)?;
    Ok(seq.get(point))
}
