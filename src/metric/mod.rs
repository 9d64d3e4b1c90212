//! Layer 2: Metric
//!
//! # Purpose
//!
//! This layer provides the distance capability used by nearest-neighbor
//! search: the [`distance::DistanceMetric`] trait and the library-supplied
//! absolute-difference defaults for the built-in numeric and character types.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Permutation
//!   ↓
//! Layer 3: Search
//!   ↓
//! Layer 2: Metric ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Distance capability trait and tie-break surface.
pub mod distance;

/// Absolute-difference metrics for built-in types.
pub mod absolute;
