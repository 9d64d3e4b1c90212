//! Stable sort permutations: computation, inversion, and application.
//!
//! ## Purpose
//!
//! This module computes the permutation that sorts a sequence ascending
//! without mutating it, and the structural dual that records where each
//! original position's value lands in the sorted order. A caller can then
//! reorder, restore, or index through the permutation at will.
//!
//! ## Design notes
//!
//! * **Two named duals**: [`sorting_permutation`] yields `P` with
//!   `seq[P[0]] <= .. <= seq[P[n-1]]`; [`unsorting_permutation`] yields its
//!   exact inverse, mapping each original position to its sorted slot. They
//!   are distinct, independently tested operations; the historical library
//!   reused one name for both across a semantic change, which this crate
//!   deliberately does not inherit.
//! * **Stability**: Equal elements keep their original relative order. The
//!   placement walks original indices in order and anchors each value at the
//!   first index of its run in a sorted scratch copy, advancing a per-run
//!   repetition counter. Earlier original indices therefore claim earlier
//!   slots of the run.
//! * **Scratch sort**: The scratch copy may be sorted unstably; only the
//!   values matter, the placement pass supplies the stability.
//!
//! ## Invariants
//!
//! * The input sequence is never mutated.
//! * Results are bijections of `0..n`.
//! * Cost is O(n log n) time and O(n) extra space.
//!
//! ## Non-goals
//!
//! * This module does not sort the caller's sequence in place.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::errors::SearchError;
use crate::primitives::order::{Comparator, NaturalOrder};
use crate::primitives::validate::Validator;
use crate::search::runs::run_start_by;

// ============================================================================
// Sorting Permutation
// ============================================================================

/// Permutation `P` such that `seq[P[0]] <= seq[P[1]] <= ..`, natural order.
///
/// Stable: for `i < j` with `seq[i] == seq[j]`, `i` appears before `j` in
/// `P`. The input is not mutated.
///
/// # Errors
///
/// [`SearchError::EmptyInput`] when `seq` is empty.
#[inline]
pub fn sorting_permutation<T>(seq: &[T]) -> Result<Vec<usize>, SearchError>
where
    T: PartialOrd + Clone,
{
    sorting_permutation_by(seq, &NaturalOrder)
}

/// Comparator form of [`sorting_permutation`].
///
/// # Errors
///
/// [`SearchError::EmptyInput`] when `seq` is empty.
pub fn sorting_permutation_by<T, C>(seq: &[T], cmp: &C) -> Result<Vec<usize>, SearchError>
where
    T: Clone,
    C: Comparator<T>,
{
    Validator::ensure_nonempty(seq)?;
    let n = seq.len();

    let scratch = sorted_scratch(seq, cmp);
    let mut repetition = vec![0usize; n];
    let mut perm = vec![0usize; n];

    for (index, value) in seq.iter().enumerate() {
        // Every value is present in the scratch copy by construction.
        let first = run_start_by(&scratch, value, cmp)?;
        perm[first + repetition[first]] = index;
        repetition[first] += 1;
    }

    Ok(perm)
}

// ============================================================================
// Unsorting Permutation
// ============================================================================

/// For each original position, the slot its value occupies in sorted order.
///
/// The exact inverse of [`sorting_permutation`]: with `U = unsorting` and
/// `P = sorting`, `U[P[k]] == k` for every slot `k`. Intended for callers
/// that sorted a copy in place and kept the original: `U[i]` locates
/// `seq[i]` inside the sorted copy, with duplicates resolved stably.
///
/// # Errors
///
/// [`SearchError::EmptyInput`] when `seq` is empty.
#[inline]
pub fn unsorting_permutation<T>(seq: &[T]) -> Result<Vec<usize>, SearchError>
where
    T: PartialOrd + Clone,
{
    unsorting_permutation_by(seq, &NaturalOrder)
}

/// Comparator form of [`unsorting_permutation`].
///
/// # Errors
///
/// [`SearchError::EmptyInput`] when `seq` is empty.
pub fn unsorting_permutation_by<T, C>(seq: &[T], cmp: &C) -> Result<Vec<usize>, SearchError>
where
    T: Clone,
    C: Comparator<T>,
{
    Validator::ensure_nonempty(seq)?;
    let n = seq.len();

    let scratch = sorted_scratch(seq, cmp);
    let mut repetition = vec![0usize; n];
    let mut slots = vec![0usize; n];

    for (index, value) in seq.iter().enumerate() {
        let first = run_start_by(&scratch, value, cmp)?;
        slots[index] = first + repetition[first];
        repetition[first] += 1;
    }

    Ok(slots)
}

/// Sorted scratch copy of the input; the caller's slice is untouched.
fn sorted_scratch<T, C>(seq: &[T], cmp: &C) -> Vec<T>
where
    T: Clone,
    C: Comparator<T>,
{
    let mut scratch: Vec<T> = seq.to_vec();
    scratch.sort_unstable_by(|a, b| cmp.compare(a, b));
    scratch
}

// ============================================================================
// Inversion and Application
// ============================================================================

/// Inverse of a permutation: `invert(perm)[perm[k]] == k`.
///
/// # Errors
///
/// * [`SearchError::EmptyInput`] when `perm` is empty.
/// * [`SearchError::IndexOutOfRange`] for entries outside `0..len`.
/// * [`SearchError::DuplicateIndex`] for repeated entries.
pub fn invert(perm: &[usize]) -> Result<Vec<usize>, SearchError> {
    Validator::ensure_nonempty(perm)?;
    let n = perm.len();

    let mut inverse = vec![0usize; n];
    let mut seen = vec![false; n];
    for (slot, &index) in perm.iter().enumerate() {
        Validator::ensure_index(index, n)?;
        if seen[index] {
            return Err(SearchError::DuplicateIndex { index });
        }
        seen[index] = true;
        inverse[index] = slot;
    }

    Ok(inverse)
}

/// Materialize the reordering `[seq[perm[0]], seq[perm[1]], ..]`.
///
/// Applying [`sorting_permutation`]'s result produces an ascending copy of
/// `seq` without ever mutating the original.
///
/// # Errors
///
/// * [`SearchError::EmptyInput`] when `seq` is empty.
/// * [`SearchError::PermutationLengthMismatch`] when lengths differ.
/// * [`SearchError::IndexOutOfRange`] for entries outside `0..len`.
pub fn apply<T: Clone>(seq: &[T], perm: &[usize]) -> Result<Vec<T>, SearchError> {
    Validator::ensure_nonempty(seq)?;
    Validator::ensure_matching_lengths(perm.len(), seq.len())?;

    let mut reordered = Vec::with_capacity(seq.len());
    for &index in perm {
        let item = seq.get(index).ok_or(SearchError::IndexOutOfRange {
            index,
            len: seq.len(),
        })?;
        reordered.push(item.clone());
    }

    Ok(reordered)
}
