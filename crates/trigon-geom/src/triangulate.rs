// SPDX-License-Identifier: MIT
//
// The Triangulator capability and its default Delaunay implementation.
//
// Planar triangulation is an external collaborator: given at least three
// non-collinear points it returns a triangulation covering their convex
// hull with no gaps and no overlaps. That invariant belongs to the
// collaborator; this module only supplies points, maps index triples back
// to vertices, and rejects inputs the collaborator cannot handle.

use thiserror::Error;

use crate::point::{Point, Triangle};

/// Errors from point-field meshing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Triangulation needs at least 3 points.
    #[error("triangulation requires at least 3 points, got {0}")]
    TooFewPoints(usize),

    /// The point set admits no triangulation (collinear or coincident).
    #[error("point set is degenerate; no triangulation exists")]
    Degenerate,
}

/// A planar triangulation capability.
///
/// Implementations must cover the convex hull of the input with
/// non-overlapping triangles whose vertices are input points.
pub trait Triangulator {
    /// Triangulate a point set.
    ///
    /// # Errors
    ///
    /// [`GeometryError::TooFewPoints`] for fewer than 3 points;
    /// [`GeometryError::Degenerate`] when no triangulation exists.
    fn triangulate(&self, points: &[Point]) -> Result<Vec<Triangle>, GeometryError>;
}

/// The default triangulator, backed by the `delaunator` crate's
/// sweep-circle Delaunay algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct Delaunay;

impl Triangulator for Delaunay {
    fn triangulate(&self, points: &[Point]) -> Result<Vec<Triangle>, GeometryError> {
        if points.len() < 3 {
            return Err(GeometryError::TooFewPoints(points.len()));
        }

        let sites: Vec<delaunator::Point> = points
            .iter()
            .map(|p| delaunator::Point { x: f64::from(p.x), y: f64::from(p.y) })
            .collect();
        let mesh = delaunator::triangulate(&sites);
        if mesh.triangles.is_empty() {
            return Err(GeometryError::Degenerate);
        }

        let triangles: Vec<Triangle> = mesh
            .triangles
            .chunks_exact(3)
            .map(|t| Triangle([points[t[0]], points[t[1]], points[t[2]]]))
            .collect();

        // Boundary check on the collaborator's contract: vertices of every
        // returned triangle must be distinct.
        if triangles.iter().any(|t| !t.has_distinct_vertices()) {
            return Err(GeometryError::Degenerate);
        }
        Ok(triangles)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
