//! Public API surface.
//!
//! ## Purpose
//!
//! This module gathers the crate's user-facing operations and types from the
//! internal layers into one flat namespace, which the crate `prelude`
//! re-exports.
//!
//! ## Key concepts
//!
//! * **Default / parameterized pairs**: every operation has a
//!   default-capability entry point and a `_by` (comparator) or `_with`
//!   (metric) variant. Capabilities are always explicit call parameters;
//!   there is no process-wide default to mutate.

// Publicly re-exported types and operations
pub use crate::metric::absolute::{midpoint_tie_break, AbsoluteDifference, WideDistance};
pub use crate::metric::distance::{DistanceMetric, TieBreak};
pub use crate::permutation::lookup::{find_permuted, find_permuted_by};
pub use crate::permutation::rank::{
    apply, invert, sorting_permutation, sorting_permutation_by, unsorting_permutation,
    unsorting_permutation_by,
};
pub use crate::primitives::errors::SearchError;
pub use crate::primitives::order::{Comparator, NaturalOrder};
pub use crate::search::insertion::{
    insertion_point, insertion_point_by, next_in_order, next_in_order_by,
};
pub use crate::search::nearest::{
    nearest, nearest_in_sorted, nearest_in_sorted_index, nearest_in_sorted_index_with,
    nearest_in_sorted_with, nearest_index, nearest_index_with, nearest_with,
};
pub use crate::search::runs::{run_start, run_start_by};
