#![cfg(feature = "dev")]
//! Tests for binary search through a permutation.
//!
//! These tests verify the permuted lookup for:
//! - Locating probes anywhere in the permuted order
//! - The immediate boundary rejection of out-of-range probes
//! - Absent probes inside the value range
//! - Validation of the supplied permutation
//!
//! ## Test Organization
//!
//! 1. **Lookup** - probes at the ends, in the middle, and on duplicates
//! 2. **Not Found** - outside the range and absent inside it
//! 3. **Validation** - length mismatch and out-of-range entries
//! 4. **Comparators** - descending order through a supplied comparator
//! 5. **Edge Cases** - empty and single-element input

use ordseek::internals::permutation::lookup::{find_permuted, find_permuted_by};
use ordseek::internals::permutation::rank::sorting_permutation;
use ordseek::internals::primitives::errors::SearchError;

// ============================================================================
// Lookup Tests
// ============================================================================

/// Test lookups across a shuffled sequence.
///
/// No sorted copy exists; every probe is located through the permutation.
#[test]
fn test_find_permuted_basic() {
    let seq = [3, 1, 2];
    let perm = sorting_permutation(&seq).unwrap();

    assert_eq!(find_permuted(&seq, &perm, &1), Ok(1));
    assert_eq!(find_permuted(&seq, &perm, &2), Ok(2));
    assert_eq!(find_permuted(&seq, &perm, &3), Ok(0));
}

/// Test every element of a larger shuffled sequence is findable.
#[test]
fn test_find_permuted_all_elements() {
    let seq: Vec<i64> = (0..128).map(|i| (i * 11) % 128).collect();
    let perm = sorting_permutation(&seq).unwrap();

    for (index, value) in seq.iter().enumerate() {
        let found = find_permuted(&seq, &perm, value).expect("value is present");
        assert_eq!(found, index, "Distinct values locate their own index");
    }
}

/// Test a duplicated probe returns an index holding the probe value.
#[test]
fn test_find_permuted_duplicates() {
    let seq = [2, 1, 2];
    let perm = sorting_permutation(&seq).unwrap();

    let found = find_permuted(&seq, &perm, &2).unwrap();
    assert_eq!(seq[found], 2);
}

// ============================================================================
// Not Found Tests
// ============================================================================

/// Test immediate rejection of probes outside the value range.
#[test]
fn test_find_permuted_outside_range() {
    let seq = [3, 1, 2];
    let perm = sorting_permutation(&seq).unwrap();

    assert_eq!(find_permuted(&seq, &perm, &0), Err(SearchError::NotFound));
    assert_eq!(find_permuted(&seq, &perm, &4), Err(SearchError::NotFound));
}

/// Test an absent probe inside the value range.
#[test]
fn test_find_permuted_absent_inside_range() {
    let seq = [10, 40, 20, 30];
    let perm = sorting_permutation(&seq).unwrap();

    assert_eq!(find_permuted(&seq, &perm, &25), Err(SearchError::NotFound));
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test rejection of a permutation with the wrong length.
#[test]
fn test_find_permuted_length_mismatch() {
    let seq = [1, 2, 3];

    assert_eq!(
        find_permuted(&seq, &[0, 1], &2),
        Err(SearchError::PermutationLengthMismatch {
            perm_len: 2,
            data_len: 3,
        })
    );
}

/// Test rejection of a permutation entry outside the sequence.
///
/// The entry is only reached during narrowing, and must surface as a
/// structured bounds error instead of a panic.
#[test]
fn test_find_permuted_entry_out_of_range() {
    let seq = [1, 2, 3];

    assert_eq!(
        find_permuted(&seq, &[0, 9, 2], &2),
        Err(SearchError::IndexOutOfRange { index: 9, len: 3 })
    );
}

// ============================================================================
// Comparator Tests
// ============================================================================

/// Test lookup through a descending permutation.
#[test]
fn test_find_permuted_by_descending() {
    let seq = [1, 3, 2];
    let descending = |a: &i32, b: &i32| b.cmp(a);
    // Permuted order is [3, 2, 1].
    let perm = [1, 2, 0];

    assert_eq!(find_permuted_by(&seq, &perm, &3, &descending), Ok(1));
    assert_eq!(find_permuted_by(&seq, &perm, &1, &descending), Ok(0));
    assert_eq!(
        find_permuted_by(&seq, &perm, &4, &descending),
        Err(SearchError::NotFound)
    );
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test that empty input fails fast.
#[test]
fn test_find_permuted_empty_input() {
    let seq: [i32; 0] = [];

    assert_eq!(find_permuted(&seq, &[], &1), Err(SearchError::EmptyInput));
}

/// Test a single-element sequence.
#[test]
fn test_find_permuted_single_element() {
    let seq = [7];
    let perm = [0];

    assert_eq!(find_permuted(&seq, &perm, &7), Ok(0));
    assert_eq!(find_permuted(&seq, &perm, &8), Err(SearchError::NotFound));
}
