//! Box-to-cell-range translation with edge inclusion handling
//!
//! Converts world-coordinate spans into inclusive cell index ranges. Both grid
//! axes share the same arithmetic: a floor mapping from coordinate to cell,
//! an adjustment step for query boundaries that lie exactly on a cell
//! gridline, and a final clamp into the valid index range.

use num_traits::Float;

/// Edge inclusion behavior for query boundaries aligned with cell gridlines
///
/// The flags only matter when a query boundary is exactly aligned with a cell
/// boundary: an excluded aligned boundary skips the flanking row or column.
/// Non-aligned boundaries are unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeInclusion {
    /// Whether the lower boundary of the box includes an aligned gridline
    pub include_min: bool,
    /// Whether the upper boundary of the box includes an aligned gridline
    pub include_max: bool,
}

impl EdgeInclusion {
    /// Fully inclusive box `[min, max]` on both axes
    pub const CLOSED: Self = Self {
        include_min: true,
        include_max: true,
    };

    /// Fully exclusive box `(min, max)` on both axes
    pub const OPEN: Self = Self {
        include_min: false,
        include_max: false,
    };

    /// Half-open box `[min, max)` on both axes
    pub const CLOSED_OPEN: Self = Self {
        include_min: true,
        include_max: false,
    };

    /// Half-open box `(min, max]` on both axes
    pub const OPEN_CLOSED: Self = Self {
        include_min: false,
        include_max: true,
    };
}

impl Default for EdgeInclusion {
    fn default() -> Self {
        Self::CLOSED
    }
}

/// Number of cells covering the span `[start, end]` at the given step
///
/// Rounds the span/step ratio up so a partial trailing cell still gets
/// storage. Ratios with no `usize` representation (infinite spans) fall back
/// to a single cell, keeping construction total.
pub(crate) fn axis_cell_count<T: Float>(start: T, end: T, step: T) -> usize {
    let cells = ((end - start) / step).ceil();
    cells.to_usize().map_or(1, |count| count.max(1))
}

/// Cell index owning `value` on one axis, clamped into `0..cells`
///
/// Coordinates outside the grid bounds land in the nearest edge cell, so the
/// mapping never rejects a point.
pub(crate) fn clamped_cell<T: Float>(value: T, start: T, step: T, cells: usize) -> usize {
    let last = cells.saturating_sub(1) as isize;
    floor_cell(value, start, step).clamp(0, last) as usize
}

/// Inclusive cell index range covered by `[lo, hi]` on one axis
///
/// `lo` and `hi` must already be ordered. Boundary cells are computed before
/// clamping, adjusted for edge exclusion, and only then clamped into
/// `0..cells`. Returns `None` when exclusion inverts the range, which selects
/// no cells at all.
pub(crate) fn axis_range<T: Float>(
    lo: T,
    hi: T,
    start: T,
    step: T,
    cells: usize,
    include_min: bool,
    include_max: bool,
) -> Option<(usize, usize)> {
    let mut lo_cell = floor_cell(lo, start, step);
    let mut hi_cell = floor_cell(hi, start, step);

    if !include_min && lies_on_gridline(lo, start, step) {
        lo_cell = lo_cell.saturating_add(1);
    }
    if !include_max && lies_on_gridline(hi, start, step) {
        hi_cell = hi_cell.saturating_sub(1);
    }

    if lo_cell > hi_cell {
        return None;
    }

    let last = cells.saturating_sub(1) as isize;
    Some((lo_cell.clamp(0, last) as usize, hi_cell.clamp(0, last) as usize))
}

/// Unclamped floor mapping from coordinate to signed cell index
///
/// Saturating conversion keeps degenerate inputs total: NaN maps to cell 0,
/// overlarge magnitudes saturate at the `isize` limits.
fn floor_cell<T: Float>(value: T, start: T, step: T) -> isize {
    let normalized = ((value - start) / step).floor();
    normalized.to_f64().map_or(0, |cell| cell as isize)
}

/// Whether a coordinate sits exactly on a cell gridline
// Alignment means (value - start) / step reproduces an integer with no
// rounding error; there is deliberately no epsilon tolerance.
#[allow(clippy::float_cmp)]
fn lies_on_gridline<T: Float>(value: T, start: T, step: T) -> bool {
    let normalized = (value - start) / step;
    normalized == normalized.floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_cell_maps_coordinates_to_cells() {
        assert_eq!(floor_cell(0.0_f64, 0.0, 10.0), 0);
        assert_eq!(floor_cell(9.9_f64, 0.0, 10.0), 0);
        assert_eq!(floor_cell(10.0_f64, 0.0, 10.0), 1);
        assert_eq!(floor_cell(-5.0_f64, 0.0, 10.0), -1);
        assert_eq!(floor_cell(25.0_f64, 5.0, 10.0), 2);
    }

    #[test]
    fn test_floor_cell_degenerate_inputs_stay_total() {
        assert_eq!(floor_cell(f64::NAN, 0.0, 1.0), 0);
        assert_eq!(floor_cell(f64::INFINITY, 0.0, 1.0), isize::MAX);
        assert_eq!(floor_cell(f64::NEG_INFINITY, 0.0, 1.0), isize::MIN);
    }

    #[test]
    fn test_gridline_detection_is_exact() {
        assert!(lies_on_gridline(5.0_f64, 0.0, 1.0));
        assert!(lies_on_gridline(30.0_f64, 0.0, 10.0));
        assert!(!lies_on_gridline(5.5_f64, 0.0, 1.0));
        assert!(!lies_on_gridline(29.999_999_f64, 0.0, 10.0));
        // Offset grids align relative to their own start
        assert!(lies_on_gridline(7.0_f64, 2.0, 2.5));
        assert!(!lies_on_gridline(7.0_f64, 2.0, 3.0));
    }

    #[test]
    fn test_gridline_detection_rejects_nan() {
        assert!(!lies_on_gridline(f64::NAN, 0.0, 1.0));
    }

    #[test]
    fn test_axis_cell_count_rounds_up_and_stays_positive() {
        assert_eq!(axis_cell_count(0.0_f64, 100.0, 10.0), 10);
        assert_eq!(axis_cell_count(0.0_f64, 95.0, 10.0), 10);
        assert_eq!(axis_cell_count(0.0_f64, 0.5, 10.0), 1);
        assert_eq!(axis_cell_count(0.0_f64, f64::INFINITY, 10.0), 1);
    }

    #[test]
    fn test_clamped_cell_pins_out_of_bounds_to_edges() {
        assert_eq!(clamped_cell(-50.0_f64, 0.0, 10.0, 10), 0);
        assert_eq!(clamped_cell(55.0_f64, 0.0, 10.0, 10), 5);
        assert_eq!(clamped_cell(500.0_f64, 0.0, 10.0, 10), 9);
        assert_eq!(clamped_cell(100.0_f64, 0.0, 10.0, 10), 9);
    }

    #[test]
    fn test_axis_range_inclusive_boundaries() {
        assert_eq!(axis_range(5.0_f64, 6.0, 0.0, 1.0, 10, true, true), Some((5, 6)));
        assert_eq!(axis_range(5.5_f64, 5.7, 0.0, 1.0, 10, true, true), Some((5, 5)));
    }

    #[test]
    fn test_axis_range_exclusion_skips_aligned_cells() {
        // [5, 6) keeps cell 5 only, (5, 6] keeps cell 6 only
        assert_eq!(axis_range(5.0_f64, 6.0, 0.0, 1.0, 10, true, false), Some((5, 5)));
        assert_eq!(axis_range(5.0_f64, 6.0, 0.0, 1.0, 10, false, true), Some((6, 6)));
    }

    #[test]
    fn test_axis_range_full_exclusion_inverts_to_empty() {
        assert_eq!(axis_range(5.0_f64, 6.0, 0.0, 1.0, 10, false, false), None);
    }

    #[test]
    fn test_axis_range_exclusion_ignores_unaligned_boundaries() {
        assert_eq!(
            axis_range(5.1_f64, 6.2, 0.0, 1.0, 10, false, false),
            Some((5, 6))
        );
    }

    #[test]
    fn test_axis_range_clamps_outside_spans_to_edge_cells() {
        assert_eq!(axis_range(-20.0_f64, -5.0, 0.0, 1.0, 10, true, true), Some((0, 0)));
        assert_eq!(axis_range(40.0_f64, 60.0, 0.0, 1.0, 10, true, true), Some((9, 9)));
        assert_eq!(axis_range(-5.0_f64, 50.0, 0.0, 1.0, 10, true, true), Some((0, 9)));
    }

    #[test]
    fn test_axis_range_exclusion_at_far_edge_stays_empty() {
        // (10, 10] on a 10-cell axis inverts before clamping; the clamp must
        // not resurrect the last cell
        assert_eq!(axis_range(10.0_f64, 10.0, 0.0, 1.0, 10, false, true), None);
    }
}
