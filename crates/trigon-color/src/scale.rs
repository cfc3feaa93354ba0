//! Linear color scales and the two-axis gradient function.
//!
//! A [`LinearScale`] maps a numeric domain onto an ordered color sequence
//! by piecewise-linear interpolation: `n` colors get `n` evenly spaced
//! domain stops at `i * extent / n`, and queries between stops blend the
//! two neighboring colors. Queries outside the domain clamp to the nearest
//! stop — bleed-margin coordinates (negative, or past the canvas edge) are
//! expected callers, not errors.
//!
//! [`Gradient2d`] pairs one scale per canvas axis and blends the two
//! evaluations 50/50 to produce the color at any point.

use crate::ColorError;
use crate::rgb::Rgb;

// ─── LinearScale ─────────────────────────────────────────────────────────────

/// A 1D piecewise-linear color scale over `[0, extent)`.
#[derive(Debug, Clone)]
pub struct LinearScale {
    /// Distance between consecutive domain stops (`extent / colors.len()`).
    step: f64,
    colors: Vec<Rgb>,
}

impl LinearScale {
    /// Build a scale mapping `[0, extent)` onto `colors`.
    ///
    /// Stop `i` sits at `i * extent / colors.len()`. `extent` must be
    /// positive.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::EmptyGradient`] if `colors` is empty.
    pub fn new(colors: &[Rgb], extent: f64) -> Result<Self, ColorError> {
        if colors.is_empty() {
            return Err(ColorError::EmptyGradient);
        }
        debug_assert!(extent > 0.0, "scale extent must be positive");
        Ok(Self {
            step: extent / colors.len() as f64,
            colors: colors.to_vec(),
        })
    }

    /// Number of colors (and domain stops) in this scale.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// `true` when the scale has no colors. Never the case for a
    /// constructed scale; present for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Evaluate the scale at `v`.
    ///
    /// A single-color scale returns its color for every input. Inputs
    /// below the first stop or above the last clamp to that stop's color.
    /// Evaluation exactly at a stop returns the stop's color unblended.
    #[must_use]
    pub fn eval(&self, v: f64) -> Rgb {
        let n = self.colors.len();
        if n == 1 {
            return self.colors[0];
        }
        let last = self.step * (n - 1) as f64;
        let v = v.clamp(0.0, last);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let seg = ((v / self.step) as usize).min(n - 2);
        let t = (v - seg as f64 * self.step) / self.step;
        Rgb::lerp(self.colors[seg], self.colors[seg + 1], t)
    }
}

// ─── Gradient2d ──────────────────────────────────────────────────────────────

/// A two-axis color gradient: one [`LinearScale`] along x, one along y.
///
/// Pure and deterministic for fixed gradients and dimensions; the
/// assembler queries it once per triangle centroid.
#[derive(Debug, Clone)]
pub struct Gradient2d {
    x: LinearScale,
    y: LinearScale,
}

impl Gradient2d {
    /// Build a gradient for a `width × height` canvas.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::EmptyGradient`] if either color sequence is
    /// empty.
    pub fn new(
        x_colors: &[Rgb],
        y_colors: &[Rgb],
        width: f64,
        height: f64,
    ) -> Result<Self, ColorError> {
        Ok(Self {
            x: LinearScale::new(x_colors, width)?,
            y: LinearScale::new(y_colors, height)?,
        })
    }

    /// The color at `(x, y)`: a 50/50 RGB blend of the two axis scales.
    #[must_use]
    pub fn color_at(&self, x: f64, y: f64) -> Rgb {
        Rgb::lerp(self.x.eval(x), self.y.eval(y), 0.5)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
