//! The crate-level error type.
//!
//! Three kinds, matching where in the pipeline a failure can occur:
//! configuration (rejected before any geometry is produced), geometry
//! (the point field cannot be meshed), and environment (serialization or
//! host attachment failed). Generation is one-shot and deterministic —
//! errors are raised at the point of detection and never retried.

use thiserror::Error;

use trigon_geom::GeometryError;

use crate::config::ConfigError;

/// Any failure from pattern generation or attachment.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Malformed configuration or canvas dimensions.
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    /// The generated point field could not be triangulated.
    #[error("geometry: {0}")]
    Geometry(#[from] GeometryError),

    /// A collaborator outside the core failed: writing the document to
    /// disk, or attaching it to a host.
    #[error("environment: {0}")]
    Environment(String),
}
