//! Spatial indexing data structures
//!
//! This module contains the spatial index and its supporting arithmetic:
//! - Uniform grid storage with box queries
//! - Box-to-cell-range translation and edge inclusion policies

/// Uniform grid index over 2D points
pub mod grid;
/// Cell range arithmetic and edge inclusion handling
pub mod range;

pub use grid::GridIndex2D;
pub use range::EdgeInclusion;
