//! Run-boundary search: first index of a run of equal values.
//!
//! ## Purpose
//!
//! This module locates the *first* index of the run of elements equal to a
//! probe value in a sorted sequence with possible duplicates. The permutation
//! layer uses it to anchor stable placement of duplicate values.
//!
//! ## Design notes
//!
//! * **Two phases**: An exact-match binary search lands anywhere inside the
//!   run; a leftward narrowing pass then finds the run's first index, and
//!   only runs when the landed index's left neighbor is equal.
//! * **Absent probes fail loudly**: A probe that is not present returns
//!   [`SearchError::NotFound`]. The historical behavior fell through to
//!   index 0, indistinguishable from a genuine match at the front; this
//!   rewrite rejects that outcome deliberately.
//!
//! ## Invariants
//!
//! * The input must be ascending under the comparator in use; this
//!   precondition is not verified.
//! * On success the returned index holds an element equal to the probe, and
//!   no earlier index does.
//!
//! ## Non-goals
//!
//! * This module does not report the run's length or last index.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::errors::SearchError;
use crate::primitives::order::{Comparator, NaturalOrder};
use crate::primitives::validate::Validator;

// ============================================================================
// Run Start
// ============================================================================

/// First index of the run of elements equal to `probe`, natural order.
///
/// # Errors
///
/// * [`SearchError::EmptyInput`] when `seq` is empty.
/// * [`SearchError::NotFound`] when no element equals `probe`.
#[inline]
pub fn run_start<T: PartialOrd>(seq: &[T], probe: &T) -> Result<usize, SearchError> {
    run_start_by(seq, probe, &NaturalOrder)
}

/// Comparator form of [`run_start`].
///
/// # Errors
///
/// * [`SearchError::EmptyInput`] when `seq` is empty.
/// * [`SearchError::NotFound`] when no element compares equal to `probe`.
pub fn run_start_by<T, C>(seq: &[T], probe: &T, cmp: &C) -> Result<usize, SearchError>
where
    C: Comparator<T>,
{
    Validator::ensure_nonempty(seq)?;

    let landed = exact_match(seq, probe, cmp).ok_or(SearchError::NotFound)?;

    // Single-position run, or already at the run's first index.
    if landed == 0 || cmp.compare(&seq[landed - 1], probe) != Ordering::Equal {
        return Ok(landed);
    }
    if cmp.compare(&seq[0], probe) == Ordering::Equal {
        return Ok(0);
    }

    // Narrow [lo, hi] within [0, landed] maintaining
    // seq[lo] < probe == seq[hi].
    let mut lo = 0;
    let mut hi = landed;
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if cmp.compare(&seq[mid], probe) == Ordering::Equal {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    Ok(hi)
}

/// Land anywhere inside the run of elements equal to `probe`.
fn exact_match<T, C>(seq: &[T], probe: &T, cmp: &C) -> Option<usize>
where
    C: Comparator<T>,
{
    let mut lo = 0;
    let mut hi = seq.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match cmp.compare(&seq[mid], probe) {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
            Ordering::Equal => return Some(mid),
        }
    }
    None
}
