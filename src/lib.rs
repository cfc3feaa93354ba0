//! # trigon — triangulated gradient mesh backgrounds
//!
//! Procedurally generates a triangulated, gradient-colored mesh pattern
//! as a self-contained SVG, suitable for decorative backgrounds. One
//! fixed visual grammar, one pipeline:
//!
//! ```text
//! Options + width/height
//!     │
//!     ▼
//! config.rs:          resolve defaults, validate        (trigon)
//!     │
//!     ▼
//! trigon-geom::grid:  scatter one jittered point per cell
//!     │
//!     ▼
//! trigon-geom::triangulate:  Delaunay mesh over the point field
//!     │
//!     ▼
//! trigon-color::scale:       two-axis gradient at each centroid
//!     │
//!     ▼
//! assemble.rs:        SVG tree (noise layer + one path per triangle)
//!     │
//!     ▼
//! pattern.rs:         markup, base64, data: URI, css url(...)
//! ```
//!
//! Generation is synchronous and one-shot: a [`Pattern`] is fully
//! computed during construction and immutable afterwards. Randomness
//! (cell jitter, default palette) is an injectable seam — every entry
//! point has a `_with`/`with_rng` variant taking a caller-supplied
//! [`rand::Rng`] for deterministic output.
//!
//! # Example
//!
//! ```
//! use trigon::{Generator, Options};
//!
//! let generator = Generator::new(&Options::default())?;
//! let pattern = generator.generate(800, 600)?;
//!
//! assert!(pattern.markup().starts_with("<svg"));
//! assert!(pattern.data_uri().starts_with("data:image/svg+xml;base64,"));
//! # Ok::<(), trigon::Error>(())
//! ```

mod assemble;
pub mod config;
pub mod error;
pub mod pattern;

pub use config::{Config, ConfigError, Format, Options};
pub use error::Error;
pub use pattern::{Host, Pattern};

pub use trigon_color::{Gradient2d, LinearScale, Rgb, brewer};
pub use trigon_geom::{Delaunay, GeometryError, GridSpec, Point, Triangle, Triangulator};

use rand::Rng;

/// The pattern generator: a resolved configuration plus a triangulation
/// capability.
///
/// Configuration is resolved once at construction (including the random
/// default palette, when no gradient is supplied), so every pattern from
/// one generator shares a palette. The triangulator defaults to
/// [`Delaunay`]; swap it with [`Generator::with_triangulator`] to plug in
/// a different planar triangulation.
#[derive(Debug, Clone)]
pub struct Generator<T: Triangulator = Delaunay> {
    config: Config,
    triangulator: T,
}

impl Generator<Delaunay> {
    /// Resolve `options` against the defaults and build a generator,
    /// drawing any random defaults from the thread-local RNG.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if the options fail validation.
    pub fn new(options: &Options) -> Result<Self, Error> {
        Self::with_rng(options, &mut rand::thread_rng())
    }

    /// Like [`new`](Self::new), with a caller-supplied random source for
    /// the default-palette draw.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if the options fail validation.
    pub fn with_rng<R: Rng + ?Sized>(options: &Options, rng: &mut R) -> Result<Self, Error> {
        Ok(Self {
            config: Config::resolve(options, rng)?,
            triangulator: Delaunay,
        })
    }
}

impl<T: Triangulator> Generator<T> {
    /// Build a generator with a custom triangulation capability.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if the options fail validation.
    pub fn with_triangulator<R: Rng + ?Sized>(
        options: &Options,
        rng: &mut R,
        triangulator: T,
    ) -> Result<Self, Error> {
        Ok(Self {
            config: Config::resolve(options, rng)?,
            triangulator,
        })
    }

    /// The resolved configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Generate a pattern for a `width × height` canvas, jittering with
    /// the thread-local RNG.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] for non-positive dimensions, [`Error::Geometry`]
    /// if the point field cannot be meshed.
    pub fn generate(&self, width: u32, height: u32) -> Result<Pattern, Error> {
        self.generate_with(&mut rand::thread_rng(), width, height)
    }

    /// Like [`generate`](Self::generate), with a caller-supplied random
    /// source. Same seed, same pattern.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] for non-positive dimensions, [`Error::Geometry`]
    /// if the point field cannot be meshed.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        width: u32,
        height: u32,
    ) -> Result<Pattern, Error> {
        if width == 0 || height == 0 {
            return Err(ConfigError::Dimensions { width, height }.into());
        }
        Pattern::build(&self.config, &self.triangulator, rng, width, height)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// A triangulator that records how many points it was handed.
    struct CountingTriangulator {
        delegate: Delaunay,
        seen: std::cell::Cell<usize>,
    }

    impl Triangulator for CountingTriangulator {
        fn triangulate(&self, points: &[Point]) -> Result<Vec<Triangle>, GeometryError> {
            self.seen.set(points.len());
            self.delegate.triangulate(points)
        }
    }

    #[test]
    fn custom_triangulator_is_used() {
        let mut rng = StdRng::seed_from_u64(8);
        let options = Options {
            x_gradient: Some(vec![Rgb::new(10, 20, 30)]),
            ..Options::default()
        };
        let counting = CountingTriangulator {
            delegate: Delaunay,
            seen: std::cell::Cell::new(0),
        };
        let generator = Generator::with_triangulator(&options, &mut rng, counting).unwrap();
        let pattern = generator.generate_with(&mut rng, 300, 300).unwrap();
        assert_eq!(generator.triangulator.seen.get(), pattern.points().len());
    }

    #[test]
    fn generator_palette_is_stable_across_patterns() {
        let mut rng = StdRng::seed_from_u64(21);
        let generator = Generator::with_rng(&Options::default(), &mut rng).unwrap();
        let before = generator.config().x_gradient.clone();
        let _ = generator.generate_with(&mut rng, 300, 300).unwrap();
        let _ = generator.generate_with(&mut rng, 300, 300).unwrap();
        assert_eq!(generator.config().x_gradient, before);
    }

    #[test]
    fn invalid_options_fail_at_construction() {
        let options = Options {
            cell_size: Some(-1.0),
            ..Options::default()
        };
        assert!(Generator::new(&options).is_err());
    }
}
