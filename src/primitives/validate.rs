//! Input validation for search and permutation operations.
//!
//! ## Purpose
//!
//! This module centralizes the precondition checks shared by the search and
//! permutation layers: non-empty input, index bounds, and permutation length
//! agreement.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Each check returns at the first violation.
//! * **Explicit**: Empty input is rejected up front rather than surfacing as
//!   an out-of-bounds read inside an algorithm.
//!
//! ## Non-goals
//!
//! * This module does not verify that a sequence is sorted, or that a
//!   permutation is a bijection; those are per-operation concerns.

// Internal dependencies
use crate::primitives::errors::SearchError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for search and permutation inputs.
///
/// All methods return `Result<(), SearchError>` and fail fast upon the first
/// violation.
pub struct Validator;

impl Validator {
    /// Reject zero-length sequences.
    #[inline]
    pub fn ensure_nonempty<T>(seq: &[T]) -> Result<(), SearchError> {
        if seq.is_empty() {
            return Err(SearchError::EmptyInput);
        }
        Ok(())
    }

    /// Reject indices outside `0..len`.
    #[inline]
    pub fn ensure_index(index: usize, len: usize) -> Result<(), SearchError> {
        if index >= len {
            return Err(SearchError::IndexOutOfRange { index, len });
        }
        Ok(())
    }

    /// Reject permutations whose length differs from the sequence length.
    #[inline]
    pub fn ensure_matching_lengths(perm_len: usize, data_len: usize) -> Result<(), SearchError> {
        if perm_len != data_len {
            return Err(SearchError::PermutationLengthMismatch { perm_len, data_len });
        }
        Ok(())
    }
}
