// SPDX-License-Identifier: MIT
//
// Point field generation — one jittered point per grid cell.
//
// The canvas is padded by `bleed` on every side and partitioned into
// `cell_size` squares; each cell receives exactly one point, placed
// uniformly at random inside the cell's padded sub-rectangle and rounded
// to integer coordinates. Padding keeps points away from cell boundaries,
// which prevents the near-degenerate slivers a triangulation produces
// when points align on grid lines. The bleed margin guarantees the mesh
// reaches past every visible edge, so edge triangles have no gaps.

use rand::Rng;

use crate::point::Point;

/// Grid parameters for point scattering.
///
/// Invariants (enforced by the caller's configuration validation, and
/// debug-asserted here): `cell_size > 0`, `bleed ≥ 0`, and
/// `0 ≤ padding < cell_size / 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Grid pitch: the side length of one cell.
    pub cell_size: f64,
    /// Extra margin beyond each canvas edge covered by the grid.
    pub bleed: f64,
    /// Inset within each cell that bounds where a point may land.
    pub padding: f64,
}

impl GridSpec {
    /// Number of grid columns and rows covering the padded canvas:
    /// `ceil((extent + 2·bleed) / cell_size)` per axis.
    #[must_use]
    pub fn cells(&self, width: f64, height: f64) -> (usize, usize) {
        let cells = |extent: f64| ((extent + 2.0 * self.bleed) / self.cell_size).ceil() as usize;
        (cells(width), cells(height))
    }

    /// Scatter one point per cell, row-major, for a `width × height`
    /// canvas. The result always has exactly `cells_x × cells_y` points.
    pub fn scatter<R: Rng + ?Sized>(&self, rng: &mut R, width: f64, height: f64) -> Vec<Point> {
        debug_assert!(self.cell_size > 0.0);
        debug_assert!(self.bleed >= 0.0);
        debug_assert!(
            self.padding >= 0.0 && 2.0 * self.padding < self.cell_size,
            "padding must leave a non-empty jitter range"
        );

        let (cells_x, cells_y) = self.cells(width, height);
        let lo = self.padding;
        let hi = self.cell_size - self.padding;

        (0..cells_x * cells_y)
            .map(|i| {
                let col = (i % cells_x) as f64;
                let row = (i / cells_x) as f64;
                let x = col.mul_add(self.cell_size, -self.bleed) + rng.gen_range(lo..hi);
                let y = row.mul_add(self.cell_size, -self.bleed) + rng.gen_range(lo..hi);
                Point::new(x.round() as i32, y.round() as i32)
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
