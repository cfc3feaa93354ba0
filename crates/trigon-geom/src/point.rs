// SPDX-License-Identifier: MIT
//
// Point and Triangle — the mesh value types.

use std::fmt;

/// A 2D point with integer-rounded coordinates.
///
/// Points are rounded when scattered; sub-pixel jitter adds nothing
/// visually and integer coordinates keep the serialized path data short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    /// `x,y` — the form used inside SVG path data.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// A mesh triangle: three vertices in triangulation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle(pub [Point; 3]);

impl Triangle {
    /// The three vertices.
    #[must_use]
    pub const fn vertices(&self) -> &[Point; 3] {
        &self.0
    }

    /// Arithmetic mean of the three vertices — where the gradient is
    /// sampled for this triangle's fill color.
    #[must_use]
    pub fn centroid(&self) -> (f64, f64) {
        let [a, b, c] = self.0;
        (
            f64::from(a.x + b.x + c.x) / 3.0,
            f64::from(a.y + b.y + c.y) / 3.0,
        )
    }

    /// Unsigned area (shoelace formula).
    #[must_use]
    pub fn area(&self) -> f64 {
        let [a, b, c] = self.0;
        let cross = f64::from(b.x - a.x) * f64::from(c.y - a.y)
            - f64::from(c.x - a.x) * f64::from(b.y - a.y);
        cross.abs() / 2.0
    }

    /// `true` if all three vertices are pairwise distinct.
    #[must_use]
    pub fn has_distinct_vertices(&self) -> bool {
        let [a, b, c] = self.0;
        a != b && b != c && a != c
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
