// SPDX-License-Identifier: MIT
//
// trigon-geom — jittered point fields and Delaunay meshing.
//
// The geometry half of the pattern pipeline: partition a padded canvas
// into a uniform grid, drop one randomly jittered point into each cell,
// and hand the point field to a triangulation capability that returns
// the covering mesh. The triangulation algorithm itself is an external
// collaborator (the `delaunator` crate) behind the `Triangulator` trait;
// this crate supplies points and consumes triangles, nothing more.

// Geometry math moves between integer coordinates and f64 freely.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

pub mod grid;
pub mod point;
pub mod triangulate;

pub use grid::GridSpec;
pub use point::{Point, Triangle};
pub use triangulate::{Delaunay, GeometryError, Triangulator};
