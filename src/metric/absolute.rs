//! Absolute-difference metrics for built-in types.
//!
//! ## Purpose
//!
//! This module provides [`AbsoluteDifference`], the default
//! [`DistanceMetric`] for the built-in integer, floating-point, and character
//! types, together with the precision machinery the floating-point
//! implementations rely on.
//!
//! ## Design notes
//!
//! * **Integers and `char`**: exact `abs_diff` widening into the unsigned
//!   counterpart; no pair of values can overflow.
//! * **`f64`**: separations are evaluated at half magnitude inside
//!   [`WideDistance`], so the subtraction cannot overflow for any pair of
//!   finite doubles. Halving is exact for normal doubles; subnormal
//!   separations may round by one unit in the last place.
//! * **`f32`**: native subtraction without a widening safeguard. When two
//!   candidate distances compare numerically equal, the
//!   [`midpoint_tie_break`] fallback decides from the positions of the
//!   candidates and the probe instead of the distances themselves. The
//!   fallback is reliable to roughly 8 significant digits; beyond that the
//!   midpoint itself rounds.
//!
//! The two floating-point policies are deliberately split and named rather
//! than letting behavior vary silently by element type: the double path pays
//! for overflow safety uniformly, the single path keeps the historical
//! heuristic.
//!
//! ## Invariants
//!
//! * All distances are symmetric and non-negative.
//! * Distance comparisons are monotone in the true separation.
//!
//! ## Non-goals
//!
//! * No metric here validates the triangle inequality.
//! * NaN inputs produce unspecified ordering, consistent with
//!   [`NaturalOrder`](crate::primitives::order::NaturalOrder).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::metric::distance::{DistanceMetric, TieBreak};

// ============================================================================
// Float Helpers
// ============================================================================

/// Halve a float exactly (normal values) without changing its sign.
#[inline]
fn half<T: Float>(value: T) -> T {
    value * T::from(0.5).unwrap()
}

/// Midpoint of two floats, evaluated at half magnitude so the sum cannot
/// overflow.
#[inline]
fn overflow_free_midpoint<T: Float>(lower: T, upper: T) -> T {
    half(lower) + half(upper)
}

// ============================================================================
// Wide Distance
// ============================================================================

/// Absolute separation between two doubles, stored at half magnitude.
///
/// `f64::MAX - (-f64::MAX)` overflows native subtraction to infinity, which
/// collapses distinct large separations into a single incomparable value.
/// Storing `|a/2 - b/2|` keeps every separation between finite doubles
/// representable and totally comparable. Use [`WideDistance::widen`] for the
/// conventional value, which may saturate to infinity.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct WideDistance(f64);

impl WideDistance {
    /// Measure the separation between `a` and `b`.
    #[inline]
    pub fn between(a: f64, b: f64) -> Self {
        WideDistance((half(a) - half(b)).abs())
    }

    /// The separation at full scale; `f64::INFINITY` when the true value
    /// exceeds `f64::MAX`.
    #[inline]
    pub fn widen(self) -> f64 {
        self.0 * 2.0
    }
}

// ============================================================================
// Single-Precision Tie-Break
// ============================================================================

/// Positional fallback for equidistant single-precision candidates.
///
/// When `|probe - lower|` and `|upper - probe|` compare equal in `f32`, the
/// equality is usually a symptom of insufficient precision rather than a true
/// tie. This fallback ignores the computed distances and compares the probe
/// against the midpoint of the two candidates (evaluated at half magnitude,
/// so overflowing separations are still resolved): a probe above the midpoint
/// is closer to `upper`, otherwise `lower` wins.
///
/// The midpoint itself is subject to `f32` rounding, so the verdict is
/// reliable to roughly 8 significant digits; probes closer to the midpoint
/// than that resolve to `lower`.
#[inline]
pub fn midpoint_tie_break(probe: f32, lower: f32, upper: f32) -> TieBreak {
    if probe > overflow_free_midpoint(lower, upper) {
        TieBreak::Upper
    } else {
        TieBreak::Lower
    }
}

// ============================================================================
// Absolute Difference
// ============================================================================

/// The default metric: absolute difference in natural units.
///
/// Implemented for the built-in integer types, `char`, `f32`, and `f64`.
/// See the module documentation for the per-type precision policy.
#[derive(Copy, Clone, Debug, Default)]
pub struct AbsoluteDifference;

macro_rules! absolute_difference_int {
    ($($t:ty => $d:ty),* $(,)?) => {
        $(
            impl DistanceMetric<$t> for AbsoluteDifference {
                type Distance = $d;

                #[inline]
                fn distance(&self, a: &$t, b: &$t) -> $d {
                    a.abs_diff(*b)
                }
            }
        )*
    };
}

absolute_difference_int!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    u128 => u128,
    usize => usize,
);

impl DistanceMetric<char> for AbsoluteDifference {
    type Distance = u32;

    #[inline]
    fn distance(&self, a: &char, b: &char) -> u32 {
        (*a as u32).abs_diff(*b as u32)
    }
}

impl DistanceMetric<f64> for AbsoluteDifference {
    type Distance = WideDistance;

    #[inline]
    fn distance(&self, a: &f64, b: &f64) -> WideDistance {
        WideDistance::between(*a, *b)
    }
}

impl DistanceMetric<f32> for AbsoluteDifference {
    type Distance = f32;

    /// Native single-precision separation; overflows to infinity for
    /// separations beyond `f32::MAX`.
    #[inline]
    fn distance(&self, a: &f32, b: &f32) -> f32 {
        (a - b).abs()
    }

    /// Equidistant candidates fall back to [`midpoint_tie_break`].
    #[inline]
    fn break_tie(&self, probe: &f32, lower: &f32, upper: &f32) -> TieBreak {
        midpoint_tie_break(*probe, *lower, *upper)
    }
}
