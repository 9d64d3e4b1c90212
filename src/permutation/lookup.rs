//! Binary search through an externally supplied permutation.
//!
//! ## Purpose
//!
//! This module finds an index of a probe value in a sequence whose sorted
//! order is described by a permutation, without ever materializing a sorted
//! copy: the binary narrowing reads `seq[perm[slot]]` in permuted order.
//!
//! ## Design notes
//!
//! * **Boundary first**: Probes outside `[seq[perm[0]], seq[perm[n-1]]]`
//!   are rejected immediately as [`SearchError::NotFound`].
//! * **Checked access**: Permutation entries index the caller's sequence, so
//!   each access is bounds-checked and reported as
//!   [`SearchError::IndexOutOfRange`] rather than panicking.
//!
//! ## Invariants
//!
//! * `seq[perm[0]] <= seq[perm[1]] <= ..` under the comparator in use; this
//!   precondition is not verified.
//!
//! ## Non-goals
//!
//! * This module does not verify that `perm` is a bijection; see
//!   [`crate::permutation::rank::invert`] for full validation.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::errors::SearchError;
use crate::primitives::order::{Comparator, NaturalOrder};
use crate::primitives::validate::Validator;

// ============================================================================
// Permuted Lookup
// ============================================================================

/// Index `i` into `seq` with `seq[i] == probe`, located through `perm`.
///
/// # Errors
///
/// * [`SearchError::EmptyInput`] when `seq` is empty.
/// * [`SearchError::PermutationLengthMismatch`] when lengths differ.
/// * [`SearchError::IndexOutOfRange`] for permutation entries outside the
///   sequence.
/// * [`SearchError::NotFound`] when no element equals `probe`.
#[inline]
pub fn find_permuted<T: PartialOrd>(
    seq: &[T],
    perm: &[usize],
    probe: &T,
) -> Result<usize, SearchError> {
    find_permuted_by(seq, perm, probe, &NaturalOrder)
}

/// Comparator form of [`find_permuted`].
///
/// # Errors
///
/// Same conditions as [`find_permuted`].
pub fn find_permuted_by<T, C>(
    seq: &[T],
    perm: &[usize],
    probe: &T,
    cmp: &C,
) -> Result<usize, SearchError>
where
    C: Comparator<T>,
{
    Validator::ensure_nonempty(seq)?;
    Validator::ensure_matching_lengths(perm.len(), seq.len())?;
    let n = seq.len();

    let first = permuted(seq, perm, 0)?;
    let last = permuted(seq, perm, n - 1)?;
    if cmp.compare(probe, first) == Ordering::Less
        || cmp.compare(probe, last) == Ordering::Greater
    {
        return Err(SearchError::NotFound);
    }
    if cmp.compare(probe, first) != Ordering::Greater {
        // In range and not greater than the first element: exact match there.
        return Ok(perm[0]);
    }

    // Narrow [lo, hi] over permuted slots maintaining
    // seq[perm[lo]] < probe <= seq[perm[hi]].
    let mut lo = 0;
    let mut hi = n - 1;
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if cmp.compare(permuted(seq, perm, mid)?, probe) == Ordering::Less {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    if cmp.compare(permuted(seq, perm, hi)?, probe) == Ordering::Equal {
        Ok(perm[hi])
    } else {
        Err(SearchError::NotFound)
    }
}

/// The element at permuted slot `slot`, with the permutation entry
/// bounds-checked against the sequence.
fn permuted<'a, T>(seq: &'a [T], perm: &[usize], slot: usize) -> Result<&'a T, SearchError> {
    let index = perm[slot];
    seq.get(index).ok_or(SearchError::IndexOutOfRange {
        index,
        len: seq.len(),
    })
}
