//! # trigon-color — color scales and palettes for mesh patterns
//!
//! Everything color-side of the pattern pipeline lives here:
//!
//! ```text
//! brewer.rs: named palette catalog + random palette selection
//!     │
//!     ▼
//! rgb.rs:    the Rgb value type (hex, lerp, brighten)
//!     │
//!     ▼
//! scale.rs:  1D linear color scales → the 2D gradient function
//! ```
//!
//! All interpolation happens per-channel in 8-bit RGB, which is what the
//! output format (SVG hex colors) ultimately stores. Scales clamp
//! out-of-domain queries to the nearest stop, so coordinates in the bleed
//! margin (negative, or past the canvas edge) always resolve to a color.

// Color math mixes u8 channels and f64 interpolation factors.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

pub mod brewer;
pub mod rgb;
pub mod scale;

pub use rgb::Rgb;
pub use scale::{Gradient2d, LinearScale};

use thiserror::Error;

/// Errors produced by color parsing and scale construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A hex color string could not be parsed.
    #[error("invalid hex color {0:?}")]
    BadHex(String),

    /// A gradient was built from an empty color sequence.
    #[error("gradient must contain at least one color")]
    EmptyGradient,
}
