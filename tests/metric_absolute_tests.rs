#![cfg(feature = "dev")]
//! Tests for the absolute-difference metric family.
//!
//! These tests verify the default metric's per-type precision policy:
//! - Exact widened distances for integers and `char`
//! - Overflow-free wide distances for doubles
//! - Native single-precision distances and the positional tie-break fallback
//!
//! ## Test Organization
//!
//! 1. **Integer Distances** - exactness across the full value range
//! 2. **Wide Doubles** - ordering and widening under extreme separations
//! 3. **Single Precision** - native path and the midpoint fallback
//! 4. **Tie-Break Defaults** - the lower candidate wins unless overridden

use approx::assert_relative_eq;

use ordseek::internals::metric::absolute::{
    midpoint_tie_break, AbsoluteDifference, WideDistance,
};
use ordseek::internals::metric::distance::{DistanceMetric, TieBreak};

// ============================================================================
// Integer Distance Tests
// ============================================================================

/// Test exactness across the full signed range.
///
/// The separation between `i32::MIN` and `i32::MAX` does not fit in `i32`;
/// the widened distance must represent it exactly.
#[test]
fn test_integer_distance_full_range() {
    let metric = AbsoluteDifference;

    assert_eq!(metric.distance(&i32::MIN, &i32::MAX), u32::MAX);
    assert_eq!(metric.distance(&i32::MIN, &1), 2_147_483_649_u32);
    assert_eq!(metric.distance(&0_u64, &u64::MAX), u64::MAX);
}

/// Test symmetry of the integer distance.
#[test]
fn test_integer_distance_symmetry() {
    let metric = AbsoluteDifference;

    assert_eq!(metric.distance(&-7_i64, &13), metric.distance(&13_i64, &-7));
}

/// Test character distance in code-point units.
#[test]
fn test_char_distance() {
    let metric = AbsoluteDifference;

    assert_eq!(metric.distance(&'a', &'e'), 4);
    assert_eq!(metric.distance(&'e', &'a'), 4);
    assert_eq!(metric.distance(&'x', &'x'), 0);
}

// ============================================================================
// Wide Double Tests
// ============================================================================

/// Test that widening recovers the conventional separation.
#[test]
fn test_wide_distance_widen() {
    assert_relative_eq!(WideDistance::between(1.0, 4.0).widen(), 3.0);
    assert_relative_eq!(WideDistance::between(-2.5, 2.5).widen(), 5.0);
}

/// Test ordering under separations that overflow native subtraction.
///
/// `f64::MAX - (-f64::MAX)` is infinite natively; the wide representation
/// must still order it strictly above a three-quarter-range separation.
#[test]
fn test_wide_distance_overflow_ordering() {
    let full = WideDistance::between(-f64::MAX, f64::MAX);
    let three_quarters = WideDistance::between(-f64::MAX, f64::MAX / 2.0);

    assert!(three_quarters < full);
    assert!(full.widen().is_infinite(), "Full-scale value saturates");
    assert!(!three_quarters.widen().is_infinite());
}

/// Test equality of equal separations at opposite signs.
#[test]
fn test_wide_distance_symmetry() {
    assert_eq!(
        WideDistance::between(3.0, 10.0),
        WideDistance::between(10.0, 3.0)
    );
}

/// Test the metric surface for doubles.
#[test]
fn test_double_metric_uses_wide_distance() {
    let metric = AbsoluteDifference;

    let near = metric.distance(&0.0_f64, &1.0);
    let far = metric.distance(&0.0_f64, &2.0);

    assert!(near < far);
    assert_relative_eq!(near.widen(), 1.0);
}

// ============================================================================
// Single Precision Tests
// ============================================================================

/// Test the native single-precision distance.
#[test]
fn test_single_distance_native() {
    let metric = AbsoluteDifference;

    assert_relative_eq!(metric.distance(&1.0_f32, &4.0), 3.0);
}

/// Test that the unguarded single path overflows to infinity.
///
/// Documented behavior of the fast path; the fallback, not the distance,
/// resolves such candidates.
#[test]
fn test_single_distance_overflow() {
    let metric = AbsoluteDifference;

    assert!(metric.distance(&f32::MAX, &f32::MIN).is_infinite());
}

/// Test the midpoint fallback on true ties.
///
/// A probe at or below the midpoint keeps the lower candidate.
#[test]
fn test_midpoint_tie_break_true_tie() {
    assert_eq!(midpoint_tie_break(2.0, 1.0, 3.0), TieBreak::Lower);
    assert_eq!(midpoint_tie_break(1.9, 1.0, 3.0), TieBreak::Lower);
    assert_eq!(midpoint_tie_break(2.1, 1.0, 3.0), TieBreak::Upper);
}

/// Test the fallback resolving sub-ulp differences.
///
/// Both computed distances round to 16_777_216, yet the true separations
/// differ by one unit; the midpoint verdict recovers the closer side.
#[test]
fn test_midpoint_tie_break_sub_ulp() {
    let lower = -16_777_215.0_f32;
    let upper = 16_777_218.0_f32;

    assert_eq!(midpoint_tie_break(1.0, lower, upper), TieBreak::Lower);
    assert_eq!(midpoint_tie_break(2.0, lower, upper), TieBreak::Upper);
}

/// Test the fallback surviving separations whose sum overflows.
///
/// A naive `(lower + upper) / 2` midpoint would be infinite here.
#[test]
fn test_midpoint_tie_break_overflowing_sum() {
    let lower = 3.0e38_f32;
    let upper = 3.4e38_f32;

    assert_eq!(midpoint_tie_break(3.3e38, lower, upper), TieBreak::Upper);
    assert_eq!(midpoint_tie_break(3.1e38, lower, upper), TieBreak::Lower);
}

// ============================================================================
// Tie-Break Default Tests
// ============================================================================

/// Test that non-float metrics keep the default lower-candidate verdict.
#[test]
fn test_default_tie_break_is_lower() {
    let metric = AbsoluteDifference;

    assert_eq!(
        DistanceMetric::<i32>::break_tie(&metric, &5, &4, &6),
        TieBreak::Lower
    );
}

/// Test that the single-precision metric routes ties through the fallback.
#[test]
fn test_single_tie_break_routes_to_midpoint() {
    let metric = AbsoluteDifference;

    assert_eq!(
        DistanceMetric::<f32>::break_tie(&metric, &2.1, &1.0, &3.0),
        TieBreak::Upper
    );
}
