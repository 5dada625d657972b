//! Command-line interface for the grid index demonstration workload

use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_POINT_COUNT, DEFAULT_QUERY_COUNT, DEFAULT_SEED, DEFAULT_WORLD_SIZE,
    MEDIUM_QUERY_EXTENT, SMALL_QUERY_EXTENT, VERIFICATION_SAMPLES,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::{EdgeInclusion, GridIndex2D};
use clap::Parser;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "bucketgrid")]
#[command(
    author,
    version,
    about = "Benchmark uniform grid spatial queries against a naive scan"
)]
/// Command-line arguments for the demonstration workload
pub struct Cli {
    /// Number of random points to insert
    #[arg(short, long, default_value_t = DEFAULT_POINT_COUNT)]
    pub points: usize,

    /// Number of box queries per pass
    #[arg(short = 'n', long, default_value_t = DEFAULT_QUERY_COUNT)]
    pub queries: usize,

    /// World extent along each axis
    #[arg(short, long, default_value_t = DEFAULT_WORLD_SIZE)]
    pub world_size: f64,

    /// Cell size along each axis
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: f64,

    /// Random seed for reproducible runs
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Skip the naive comparison scan
    #[arg(short = 'q', long)]
    pub quick: bool,
}

impl Cli {
    /// Check if query results should be verified against a naive scan
    pub const fn should_verify(&self) -> bool {
        !self.quick
    }
}

/// Orchestrates the demonstration workload with timing reports
pub struct DemoRunner {
    cli: Cli,
    rng: StdRng,
}

impl DemoRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let rng = StdRng::seed_from_u64(cli.seed);

        Self { cli, rng }
    }

    /// Generate the point cloud, build the index, and run the query passes
    ///
    /// # Errors
    ///
    /// Returns an error if the world or cell size arguments are not finite
    /// or do not describe a valid grid
    pub fn run(&mut self) -> Result<()> {
        let world = self.cli.world_size;
        let cell = self.cli.cell_size;
        // The index itself tolerates infinite bounds, but the random point
        // generator cannot sample from a non-finite range
        if !world.is_finite() {
            return Err(invalid_parameter(
                "world_size",
                &world,
                "world extent must be finite",
            ));
        }
        if !cell.is_finite() {
            return Err(invalid_parameter(
                "cell_size",
                &cell,
                "cell size must be finite",
            ));
        }
        // Geometry errors surface before any point generation
        let mut grid = GridIndex2D::new(0.0, world, cell, 0.0, world, cell)?;

        let points = self.generate_points();
        Self::fill_index(&mut grid, &points);
        Self::report_geometry(&grid);

        self.run_query_pass(&grid, &points, "small", SMALL_QUERY_EXTENT);
        self.run_query_pass(&grid, &points, "medium", MEDIUM_QUERY_EXTENT);
        self.compare_delivery_modes(&grid);

        Ok(())
    }

    fn generate_points(&mut self) -> Vec<(f64, f64)> {
        let world = self.cli.world_size;
        (0..self.cli.points)
            .map(|_| {
                (
                    self.rng.random_range(0.0..world),
                    self.rng.random_range(0.0..world),
                )
            })
            .collect()
    }

    /// Random lower-left box origins, placed so the full extent stays in-world
    fn generate_boxes(&mut self, extent: f64) -> Vec<(f64, f64)> {
        let max_origin = (self.cli.world_size - extent).max(0.0);
        (0..self.cli.queries)
            .map(|_| {
                (
                    self.rng.random_range(0.0..=max_origin),
                    self.rng.random_range(0.0..=max_origin),
                )
            })
            .collect()
    }

    // Allow print for timing report output
    #[allow(clippy::print_stdout)]
    fn fill_index(grid: &mut GridIndex2D<f64>, points: &[(f64, f64)]) {
        let start = Instant::now();
        for (id, &(x, y)) in points.iter().enumerate() {
            grid.insert(x, y, id);
        }
        let elapsed = start.elapsed();

        println!(
            "Inserted {} points in {elapsed:.2?} ({:.2} Mpoints/s)",
            points.len(),
            points.len() as f64 / elapsed.as_secs_f64() / 1e6
        );
    }

    // Allow print for timing report output
    #[allow(clippy::print_stdout)]
    fn report_geometry(grid: &GridIndex2D<f64>) {
        let (nx, ny) = grid.dimensions();
        println!(
            "Grid geometry: {nx}x{ny} cells ({} total), {} identifiers stored",
            grid.cell_count(),
            grid.point_count()
        );
    }

    // Allow print for timing report output
    #[allow(clippy::print_stdout)]
    fn run_query_pass(
        &mut self,
        grid: &GridIndex2D<f64>,
        points: &[(f64, f64)],
        label: &str,
        extent: f64,
    ) {
        let boxes = self.generate_boxes(extent);
        let mut found = Vec::new();
        let mut total = 0_usize;

        let start = Instant::now();
        for &(x1, y1) in &boxes {
            grid.query_box_into(
                x1,
                x1 + extent,
                y1,
                y1 + extent,
                EdgeInclusion::CLOSED,
                &mut found,
            );
            total += found.len();
        }
        let elapsed = start.elapsed();

        let per_query_us = elapsed.as_secs_f64() * 1e6 / boxes.len().max(1) as f64;
        let avg_results = total as f64 / boxes.len().max(1) as f64;
        println!(
            "{label} boxes ({extent}x{extent}): {} queries in {elapsed:.2?} \
             ({per_query_us:.2} us/query, {avg_results:.1} candidates/query)",
            boxes.len()
        );

        if self.cli.should_verify() {
            Self::verify_against_naive(grid, points, &boxes, extent);
        }
    }

    // Allow print for timing report output
    #[allow(clippy::print_stdout)]
    fn verify_against_naive(
        grid: &GridIndex2D<f64>,
        points: &[(f64, f64)],
        boxes: &[(f64, f64)],
        extent: f64,
    ) {
        let mut mismatches = 0_usize;

        let start = Instant::now();
        for &(x1, y1) in boxes.iter().take(VERIFICATION_SAMPLES) {
            let (x2, y2) = (x1 + extent, y1 + extent);
            let inside = |x: f64, y: f64| x >= x1 && x <= x2 && y >= y1 && y <= y2;

            let filtered = grid
                .query_box(x1, x2, y1, y2, EdgeInclusion::CLOSED)
                .into_iter()
                .filter(|&id| points.get(id).is_some_and(|&(x, y)| inside(x, y)))
                .count();
            let naive = points.iter().filter(|&&(x, y)| inside(x, y)).count();

            if filtered != naive {
                mismatches += 1;
            }
        }
        let elapsed = start.elapsed();

        let samples = boxes.len().min(VERIFICATION_SAMPLES);
        let verdict = if mismatches == 0 { "all matched" } else { "MISMATCH" };
        println!(
            "  verified {samples} queries against naive scan: {verdict} \
             (naive avg {:.2} us/query)",
            elapsed.as_secs_f64() * 1e6 / samples.max(1) as f64
        );
    }

    // Allow print for timing report output
    #[allow(clippy::print_stdout)]
    fn compare_delivery_modes(&mut self, grid: &GridIndex2D<f64>) {
        let extent = MEDIUM_QUERY_EXTENT;
        let boxes = self.generate_boxes(extent);

        let mut collected = 0_usize;
        let vector_start = Instant::now();
        for &(x1, y1) in &boxes {
            collected += grid
                .query_box(x1, x1 + extent, y1, y1 + extent, EdgeInclusion::CLOSED)
                .len();
        }
        let vector_time = vector_start.elapsed();

        let mut visited = 0_usize;
        let callback_start = Instant::now();
        for &(x1, y1) in &boxes {
            grid.for_each_in_box(x1, x1 + extent, y1, y1 + extent, EdgeInclusion::CLOSED, |_| {
                visited += 1;
            });
        }
        let callback_time = callback_start.elapsed();

        let agreement = if visited == collected { "agree" } else { "DISAGREE" };
        println!(
            "Delivery modes over {} boxes: allocating {vector_time:.2?}, \
             callback {callback_time:.2?}, counts {agreement}",
            boxes.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn demo_cli(world_size: f64, cell_size: f64) -> Cli {
        Cli {
            points: 200,
            queries: 8,
            world_size,
            cell_size,
            seed: 42,
            quick: false,
        }
    }

    #[test]
    fn test_runner_rejects_infinite_world_extent() {
        let Err(err) = DemoRunner::new(demo_cli(f64::INFINITY, 10.0)).run() else {
            unreachable!("an infinite world extent must be rejected");
        };
        assert!(err.to_string().contains("world_size"));
    }

    #[test]
    fn test_runner_rejects_non_finite_cell_size() {
        let Err(err) = DemoRunner::new(demo_cli(1000.0, f64::NAN)).run() else {
            unreachable!("a NaN cell size must be rejected");
        };
        assert!(err.to_string().contains("cell_size"));
    }

    #[test]
    fn test_runner_completes_a_small_workload() {
        let mut runner = DemoRunner::new(demo_cli(1000.0, 10.0));
        assert!(runner.run().is_ok());
    }
}
