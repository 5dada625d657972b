//! Uniform grid spatial index for 2D point data with configurable box queries
//!
//! Points are bucketed into fixed-size cells at insertion time, so a box
//! query touches only the cells the box overlaps instead of every stored
//! point. Queries return conservative candidate sets in a deterministic
//! order, with edge inclusion configurable per query.

#![forbid(unsafe_code)]

/// Input/output operations, demo workload, and error handling
pub mod io;
/// Spatial index and cell range arithmetic
pub mod spatial;

pub use io::error::{GridError, Result};
pub use spatial::{EdgeInclusion, GridIndex2D};
