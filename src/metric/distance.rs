//! Distance capability for nearest-neighbor search.
//!
//! ## Purpose
//!
//! This module defines the interface between the search layer and
//! user-supplied notions of dissimilarity. Search algorithms only ever
//! *compare* distances, so the distance type is an associated type with a
//! partial order rather than a fixed scalar.
//!
//! ## Design notes
//!
//! * **Symmetry**: `distance(a, b)` must equal `distance(b, a)`.
//! * **Non-negativity**: Distances must be non-negative.
//! * **Unverified**: The triangle inequality is assumed, never checked.
//! * **Tie-break hook**: Metrics may refine the choice between two candidates
//!   whose computed distances compare equal; the default keeps the lower
//!   (left) candidate.
//!
//! ## Non-goals
//!
//! * This module provides no implementations; see [`crate::metric::absolute`].

/// Which of two equidistant candidates a metric considers closer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TieBreak {
    /// The lower candidate (smaller index or smaller value) wins.
    Lower,
    /// The upper candidate wins.
    Upper,
}

/// A symmetric, non-negative distance between two elements.
pub trait DistanceMetric<T> {
    /// Ordered distance representation produced by this metric.
    type Distance: PartialOrd;

    /// Compute the distance between `a` and `b`.
    fn distance(&self, a: &T, b: &T) -> Self::Distance;

    /// Decide between two candidates whose computed distances to `probe`
    /// compare equal.
    ///
    /// `lower` and `upper` are ordered by the caller (lower index or value
    /// first). The default resolution keeps the lower candidate, which gives
    /// the first-encountered-wins and ties-left behavior of the search
    /// entry points.
    #[inline]
    fn break_tie(&self, probe: &T, lower: &T, upper: &T) -> TieBreak {
        let _ = (probe, lower, upper);
        TieBreak::Lower
    }
}
