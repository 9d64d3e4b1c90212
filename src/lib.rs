//! # ordseek — ordered search and permutations for Rust
//!
//! Binary-search variants over read-only slices: insertion points
//! (lower bounds), nearest-neighbor matches with pluggable distance metrics,
//! first-occurrence search in duplicate runs, and stable sort permutations
//! that let a caller reorder without mutating or copying.
//!
//! ## Quick Start
//!
//! ```rust
//! use ordseek::prelude::*;
//!
//! let readings = [1.0_f64, 10.0, 15.0, 50.0];
//!
//! // Where would 25.0 land while keeping ascending order?
//! let point = insertion_point(&readings, &25.0)?;
//! assert_eq!(point, 3);
//!
//! // Which reading is closest to 25.0?
//! let closest = nearest_in_sorted(&readings, &25.0)?;
//! assert_eq!(*closest, 15.0);
//! # Result::<(), SearchError>::Ok(())
//! ```
//!
//! ## Permutations
//!
//! [`prelude::sorting_permutation`] computes the reordering that sorts a
//! sequence, stable on duplicates, without touching the input:
//!
//! ```rust
//! use ordseek::prelude::*;
//!
//! let values = [3, 1, 2];
//! let perm = sorting_permutation(&values)?;
//! assert_eq!(perm, vec![1, 2, 0]);
//! assert_eq!(apply(&values, &perm)?, vec![1, 2, 3]);
//!
//! // Search through the permutation; no sorted copy is ever built.
//! let index = find_permuted(&values, &perm, &2)?;
//! assert_eq!(values[index], 2);
//! # Result::<(), SearchError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every operation returns `Result<_, SearchError>`. Zero-length input is
//! rejected up front as [`prelude::SearchError::EmptyInput`]; exact-match
//! operations report absent probes as [`prelude::SearchError::NotFound`];
//! malformed permutations surface as structured index errors. The `?`
//! operator is idiomatic:
//!
//! ```rust
//! use ordseek::prelude::*;
//!
//! let empty: [i32; 0] = [];
//! assert_eq!(insertion_point(&empty, &1), Err(SearchError::EmptyInput));
//! assert_eq!(run_start(&[1, 3, 5, 7], &4), Err(SearchError::NotFound));
//! ```
//!
//! ## Capabilities
//!
//! Algorithms are written once against two capability traits and
//! parameterized per call; there are no process-wide defaults:
//!
//! * [`prelude::Comparator`]: total-order comparison, defaulting to
//!   [`prelude::NaturalOrder`]; any `Fn(&T, &T) -> Ordering` closure works.
//! * [`prelude::DistanceMetric`]: symmetric non-negative distance,
//!   defaulting to [`prelude::AbsoluteDifference`] for the built-in numeric
//!   and character types.
//!
//! ### Floating-point precision policy
//!
//! The default metric splits its floating-point behavior explicitly rather
//! than varying it silently by element type: `f64` separations are measured
//! overflow-free at half magnitude ([`prelude::WideDistance`]), while `f32`
//! keeps native subtraction plus the positional
//! [`prelude::midpoint_tie_break`] fallback for equidistant candidates,
//! documented as reliable to roughly 8 significant digits.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments; disable default features to
//! drop the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! ordseek = { version = "0.1", default-features = false }
//! ```
//!
//! All operations are pure, synchronous, and bounded: transient scratch
//! allocations only, no I/O, no blocking, no internal locking.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors, ordering capability, validation.
mod primitives;

// Layer 2: Metric - distance capability and default metrics.
mod metric;

// Layer 3: Search - insertion-point, run-boundary, and nearest-neighbor.
mod search;

// Layer 4: Permutation - stable sort permutations and permuted lookup.
mod permutation;

// Flat public API surface.
mod api;

// Standard ordseek prelude.
pub mod prelude {
    pub use crate::api::{
        apply, find_permuted, find_permuted_by, insertion_point, insertion_point_by, invert,
        midpoint_tie_break, nearest, nearest_in_sorted, nearest_in_sorted_index,
        nearest_in_sorted_index_with, nearest_in_sorted_with, nearest_index, nearest_index_with,
        nearest_with, next_in_order, next_in_order_by, run_start, run_start_by,
        sorting_permutation, sorting_permutation_by, unsorting_permutation,
        unsorting_permutation_by, AbsoluteDifference, Comparator, DistanceMetric, NaturalOrder,
        SearchError, TieBreak, WideDistance,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod metric {
        pub use crate::metric::*;
    }
    pub mod search {
        pub use crate::search::*;
    }
    pub mod permutation {
        pub use crate::permutation::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
