//! Nearest-neighbor search under a distance metric.
//!
//! ## Purpose
//!
//! This module locates the element of a sequence that minimizes a
//! [`DistanceMetric`] to a probe value. Two entry points are provided: a
//! linear scan with no ordering precondition, and an accelerated form for
//! sequences already sorted consistently with the metric.
//!
//! ## Design notes
//!
//! * **Linear**: Evaluates the metric once per element and keeps the strict
//!   minimum, so the first-encountered candidate wins exact ties. O(n)
//!   metric evaluations.
//! * **Sorted**: Finds the probe's insertion point in O(log n), then compares
//!   only the two boundary candidates on either side of it, clamped at the
//!   sequence ends. Equal distances resolve through the metric's tie-break
//!   hook, which defaults to the left candidate.
//! * **Precision**: The default metric's per-type policy (wide doubles,
//!   heuristic singles, exact integers) is documented in
//!   [`crate::metric::absolute`].
//!
//! ## Invariants
//!
//! * The sorted entry points require `seq` ascending in natural order,
//!   consistent with the metric; this precondition is not verified.
//!
//! ## Non-goals
//!
//! * This module does not deduplicate candidates or report distances.

// Internal dependencies
use crate::metric::absolute::AbsoluteDifference;
use crate::metric::distance::{DistanceMetric, TieBreak};
use crate::primitives::errors::SearchError;
use crate::primitives::validate::Validator;
use crate::search::insertion::insertion_point;

// ============================================================================
// Linear Scan
// ============================================================================

/// Index of the element nearest to `probe` under the default metric.
///
/// No ordering precondition; the first of several equidistant elements wins.
///
/// # Errors
///
/// [`SearchError::EmptyInput`] when `seq` is empty.
#[inline]
pub fn nearest_index<T>(seq: &[T], probe: &T) -> Result<usize, SearchError>
where
    AbsoluteDifference: DistanceMetric<T>,
{
    nearest_index_with(seq, probe, &AbsoluteDifference)
}

/// Index of the element nearest to `probe` under a supplied metric.
///
/// # Errors
///
/// [`SearchError::EmptyInput`] when `seq` is empty.
pub fn nearest_index_with<T, M>(seq: &[T], probe: &T, metric: &M) -> Result<usize, SearchError>
where
    M: DistanceMetric<T>,
{
    Validator::ensure_nonempty(seq)?;

    let mut best = 0;
    let mut best_distance = metric.distance(probe, &seq[0]);
    for (index, item) in seq.iter().enumerate().skip(1) {
        let candidate = metric.distance(probe, item);
        if candidate < best_distance {
            best = index;
            best_distance = candidate;
        }
    }

    Ok(best)
}

/// The element nearest to `probe` under the default metric.
///
/// # Errors
///
/// [`SearchError::EmptyInput`] when `seq` is empty.
#[inline]
pub fn nearest<'a, T>(seq: &'a [T], probe: &T) -> Result<&'a T, SearchError>
where
    AbsoluteDifference: DistanceMetric<T>,
{
    nearest_with(seq, probe, &AbsoluteDifference)
}

/// The element nearest to `probe` under a supplied metric.
///
/// # Errors
///
/// [`SearchError::EmptyInput`] when `seq` is empty.
#[inline]
pub fn nearest_with<'a, T, M>(seq: &'a [T], probe: &T, metric: &M) -> Result<&'a T, SearchError>
where
    M: DistanceMetric<T>,
{
    let index = nearest_index_with(seq, probe, metric)?;
    Ok(&seq[index])
}

// ============================================================================
// Sorted Acceleration
// ============================================================================

/// Index of the nearest element in an ascending sequence, default metric.
///
/// # Errors
///
/// [`SearchError::EmptyInput`] when `seq` is empty.
#[inline]
pub fn nearest_in_sorted_index<T>(seq: &[T], probe: &T) -> Result<usize, SearchError>
where
    T: PartialOrd,
    AbsoluteDifference: DistanceMetric<T>,
{
    nearest_in_sorted_index_with(seq, probe, &AbsoluteDifference)
}

/// Index of the nearest element in an ascending sequence, supplied metric.
///
/// Only the two candidates bracketing the probe's insertion point are
/// evaluated; on equal distances the metric's tie-break hook decides,
/// defaulting to the left candidate.
///
/// # Errors
///
/// [`SearchError::EmptyInput`] when `seq` is empty.
pub fn nearest_in_sorted_index_with<T, M>(
    seq: &[T],
    probe: &T,
    metric: &M,
) -> Result<usize, SearchError>
where
    T: PartialOrd,
    M: DistanceMetric<T>,
{
    let point = insertion_point(seq, probe)?;

    // Clamp at the ends: only one candidate exists.
    if point == 0 {
        return Ok(0);
    }
    if point == seq.len() {
        return Ok(seq.len() - 1);
    }

    let lower = &seq[point - 1];
    let upper = &seq[point];
    let lower_distance = metric.distance(probe, lower);
    let upper_distance = metric.distance(probe, upper);

    if upper_distance < lower_distance {
        return Ok(point);
    }
    if lower_distance < upper_distance {
        return Ok(point - 1);
    }
    match metric.break_tie(probe, lower, upper) {
        TieBreak::Lower => Ok(point - 1),
        TieBreak::Upper => Ok(point),
    }
}

/// The nearest element in an ascending sequence, default metric.
///
/// # Errors
///
/// [`SearchError::EmptyInput`] when `seq` is empty.
#[inline]
pub fn nearest_in_sorted<'a, T>(seq: &'a [T], probe: &T) -> Result<&'a T, SearchError>
where
    T: PartialOrd,
    AbsoluteDifference: DistanceMetric<T>,
{
    nearest_in_sorted_with(seq, probe, &AbsoluteDifference)
}

/// The nearest element in an ascending sequence, supplied metric.
///
/// # Errors
///
/// [`SearchError::EmptyInput`] when `seq` is empty.
#[inline]
pub fn nearest_in_sorted_with<'a, T, M>(
    seq: &'a [T],
    probe: &T,
    metric: &M,
) -> Result<&'a T, SearchError>
where
    T: PartialOrd,
    M: DistanceMetric<T>,
{
    let index = nearest_in_sorted_index_with(seq, probe, metric)?;
    Ok(&seq[index])
}
