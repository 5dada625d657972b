//! Uniform grid storage and box queries over 2D point identifiers
//!
//! Divides a fixed world rectangle into uniform cells, each owning the
//! identifiers of the points inserted into it. Box queries walk every cell
//! the query box touches and report the union of their contents in a single
//! deterministic order. Cells are the query granularity: results form a
//! candidate set that may include points outside the exact box, and exact
//! coordinate filtering is deliberately left to the caller.

use ndarray::Array2;
use num_traits::Float;

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::range::{EdgeInclusion, axis_cell_count, axis_range, clamped_cell};
use std::fmt::Display;

/// 2D spatial index over a regular grid of cells
///
/// Construction fixes the world bounds and cell size; afterwards the index
/// supports appends and box queries only. Identifiers are opaque `usize`
/// values, typically indices into a caller-owned point array: the index never
/// interprets or deduplicates them, and it keeps no reference to the
/// coordinates used to place them.
///
/// Queries report whole cells, so results may include identifiers whose true
/// coordinates lie outside the exact query box (see
/// [`GridIndex2D::query_box`]).
#[derive(Debug, Clone)]
pub struct GridIndex2D<T> {
    x_start: T,
    x_end: T,
    x_step: T,
    y_start: T,
    y_end: T,
    y_step: T,
    nx: usize,
    ny: usize,
    // Row-major buckets: cells[[j, i]] is column i of row j
    cells: Array2<Vec<usize>>,
}

impl<T: Float> GridIndex2D<T> {
    /// Create a grid over `[x_start, x_end] × [y_start, y_end]` with the
    /// given cell size per axis
    ///
    /// Cell counts are `ceil(span / step)` per axis, so a step that does not
    /// evenly divide its span produces a partial trailing cell. Every cell
    /// starts empty.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameter`](crate::GridError::InvalidParameter) if a
    /// step is zero, negative, or NaN, or if an axis start does not lie
    /// strictly below its end. This is the only fallible operation on the
    /// index.
    pub fn new(x_start: T, x_end: T, x_step: T, y_start: T, y_end: T, y_step: T) -> Result<Self>
    where
        T: Display,
    {
        if x_step.is_nan() || x_step <= T::zero() {
            return Err(invalid_parameter(
                "x_step",
                &x_step,
                "cell step must be positive",
            ));
        }
        if y_step.is_nan() || y_step <= T::zero() {
            return Err(invalid_parameter(
                "y_step",
                &y_step,
                "cell step must be positive",
            ));
        }
        if x_start.is_nan() || x_end.is_nan() || x_start >= x_end {
            return Err(invalid_parameter(
                "x_bounds",
                &format!("{x_start}..{x_end}"),
                "axis start must lie below axis end",
            ));
        }
        if y_start.is_nan() || y_end.is_nan() || y_start >= y_end {
            return Err(invalid_parameter(
                "y_bounds",
                &format!("{y_start}..{y_end}"),
                "axis start must lie below axis end",
            ));
        }

        let nx = axis_cell_count(x_start, x_end, x_step);
        let ny = axis_cell_count(y_start, y_end, y_step);

        Ok(Self {
            x_start,
            x_end,
            x_step,
            y_start,
            y_end,
            y_step,
            nx,
            ny,
            cells: Array2::from_elem((ny, nx), Vec::new()),
        })
    }

    /// Insert a point identifier at the given coordinates
    ///
    /// Coordinates outside the grid bounds are clamped to the nearest edge
    /// cell, never rejected, so insertion cannot fail. Identifiers inserted
    /// into the same cell keep their insertion order; the same identifier may
    /// be inserted any number of times.
    pub fn insert(&mut self, x: T, y: T, id: usize) {
        let i = clamped_cell(x, self.x_start, self.x_step, self.nx);
        let j = clamped_cell(y, self.y_start, self.y_step, self.ny);
        if let Some(cell) = self.cells.get_mut([j, i]) {
            cell.push(id);
        }
    }

    /// Collect every identifier stored in cells touched by the query box
    ///
    /// `x1`/`x2` and `y1`/`y2` may be given in either order; reversed boxes
    /// are normalized before the cell range is computed. Identifiers arrive
    /// in row-major cell order (rows outermost, columns innermost) and in
    /// insertion order within each cell.
    ///
    /// The result is a candidate set, not an exact filter: any cell the box
    /// touches contributes all of its identifiers, including points whose
    /// true coordinates fall outside the box. Callers needing exact
    /// containment filter the result against their own coordinate data.
    pub fn query_box(&self, x1: T, x2: T, y1: T, y2: T, edges: EdgeInclusion) -> Vec<usize> {
        let mut found = Vec::new();
        self.scan_box(x1, x2, y1, y2, edges, |id| found.push(id));
        found
    }

    /// Run a box query into a caller-owned buffer, clearing it first
    ///
    /// Reusing one buffer across repeated queries amortizes allocation.
    /// Content and order are identical to [`GridIndex2D::query_box`] with the
    /// same arguments.
    pub fn query_box_into(
        &self,
        x1: T,
        x2: T,
        y1: T,
        y2: T,
        edges: EdgeInclusion,
        found: &mut Vec<usize>,
    ) {
        found.clear();
        self.scan_box(x1, x2, y1, y2, edges, |id| found.push(id));
    }

    /// Run a box query, appending results to a caller-owned buffer
    ///
    /// Existing buffer contents are preserved; the appended identifiers match
    /// what [`GridIndex2D::query_box`] would return for the same arguments.
    pub fn query_box_extend(
        &self,
        x1: T,
        x2: T,
        y1: T,
        y2: T,
        edges: EdgeInclusion,
        found: &mut Vec<usize>,
    ) {
        self.scan_box(x1, x2, y1, y2, edges, |id| found.push(id));
    }

    /// Invoke a visitor for each identifier in cells touched by the query box
    ///
    /// No intermediate buffering: the visitor observes identifiers in exactly
    /// the order [`GridIndex2D::query_box`] would return them.
    pub fn for_each_in_box<F>(&self, x1: T, x2: T, y1: T, y2: T, edges: EdgeInclusion, visitor: F)
    where
        F: FnMut(usize),
    {
        self.scan_box(x1, x2, y1, y2, edges, visitor);
    }

    /// Remove every stored identifier, keeping the grid geometry
    ///
    /// Idempotent. Bounds, steps, and cell counts are untouched; cell
    /// capacity is retained for reuse.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    /// Grid dimensions as `(columns, rows)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    /// Total number of cells in the grid
    pub const fn cell_count(&self) -> usize {
        self.nx * self.ny
    }

    /// Total number of identifiers currently stored across all cells
    pub fn point_count(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }

    /// Whether the index currently stores no identifiers
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Vec::is_empty)
    }

    /// World bounds of the x axis as `(start, end)`
    pub const fn x_bounds(&self) -> (T, T) {
        (self.x_start, self.x_end)
    }

    /// World bounds of the y axis as `(start, end)`
    pub const fn y_bounds(&self) -> (T, T) {
        (self.y_start, self.y_end)
    }

    /// Cell size per axis as `(x_step, y_step)`
    pub const fn steps(&self) -> (T, T) {
        (self.x_step, self.y_step)
    }

    /// Walk the cells touched by the box in row-major order, emitting every
    /// stored identifier
    ///
    /// All public query entry points funnel through this routine, which is
    /// what keeps traversal order identical across delivery modes.
    fn scan_box<F>(&self, x1: T, x2: T, y1: T, y2: T, edges: EdgeInclusion, mut emit: F)
    where
        F: FnMut(usize),
    {
        let (x_lo, x_hi) = ordered(x1, x2);
        let (y_lo, y_hi) = ordered(y1, y2);

        let Some((i_min, i_max)) = axis_range(
            x_lo,
            x_hi,
            self.x_start,
            self.x_step,
            self.nx,
            edges.include_min,
            edges.include_max,
        ) else {
            return;
        };
        let Some((j_min, j_max)) = axis_range(
            y_lo,
            y_hi,
            self.y_start,
            self.y_step,
            self.ny,
            edges.include_min,
            edges.include_max,
        ) else {
            return;
        };

        for j in j_min..=j_max {
            for i in i_min..=i_max {
                if let Some(cell) = self.cells.get([j, i]) {
                    for &id in cell {
                        emit(id);
                    }
                }
            }
        }
    }
}

/// Order a coordinate pair so reversed query boxes behave like normal ones
fn ordered<T: Float>(a: T, b: T) -> (T, T) {
    if a > b { (b, a) } else { (a, b) }
}
