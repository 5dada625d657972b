//! Demo constants and runtime configuration defaults

// World geometry for the generated point cloud
/// Default world extent along each axis
pub const DEFAULT_WORLD_SIZE: f64 = 1000.0;
/// Default cell size along each axis
pub const DEFAULT_CELL_SIZE: f64 = 10.0;

// Workload sizes for the demo runs
/// Default number of points inserted into the index
pub const DEFAULT_POINT_COUNT: usize = 100_000;
/// Default number of box queries issued per benchmark pass
pub const DEFAULT_QUERY_COUNT: usize = 1000;

// Query box extents exercised by the demo
/// Edge length of the small query boxes
pub const SMALL_QUERY_EXTENT: f64 = 10.0;
/// Edge length of the medium query boxes
pub const MEDIUM_QUERY_EXTENT: f64 = 50.0;

// Default values for configurable parameters
/// Fixed seed for reproducible point generation
pub const DEFAULT_SEED: u64 = 42;

/// Number of naive scan results spot-checked against the index
pub const VERIFICATION_SAMPLES: usize = 10;
