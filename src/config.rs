//! Configuration — user-supplied options, resolved defaults, validation.
//!
//! [`Options`] is the partial, user-facing record: every field optional,
//! absent fields fall back to the defaults table below. [`Config`] is the
//! resolved, validated, immutable record the rest of the pipeline reads.
//! Resolution happens once per [`Generator`](crate::Generator); the random
//! default palette is drawn at that point, so one generator produces
//! patterns in a consistent family.
//!
//! | field | default |
//! |---|---|
//! | `cell_size` | 150.0 |
//! | `bleed` | the resolved `cell_size` |
//! | `cell_padding` | 10% of the resolved `cell_size` |
//! | `noise_intensity` | 0.0 (disabled) |
//! | `x_gradient` | a random palette from [`brewer`] |
//! | `y_gradient` | `x_gradient` with each color brightened by 0.5 |
//! | `format` | [`Format::Svg`] |
//! | `fill_opacity`, `stroke_opacity` | 1.0 |

use rand::Rng;
use thiserror::Error;

use trigon_color::{ColorError, Rgb, brewer};

/// Default grid pitch.
pub const DEFAULT_CELL_SIZE: f64 = 150.0;

/// Fixed brightening factor used to derive a y gradient from the x
/// gradient when the caller supplies none.
pub const Y_GRADIENT_BRIGHTEN: f64 = 0.5;

/// Output kind. Only vector markup is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Svg,
}

/// User-supplied generation options; `None` fields take their defaults.
///
/// ```
/// use trigon::Options;
///
/// let options = Options {
///     cell_size: Some(80.0),
///     noise_intensity: Some(0.3),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub cell_size: Option<f64>,
    pub bleed: Option<f64>,
    pub cell_padding: Option<f64>,
    pub noise_intensity: Option<f64>,
    pub x_gradient: Option<Vec<Rgb>>,
    pub y_gradient: Option<Vec<Rgb>>,
    pub format: Option<Format>,
    pub fill_opacity: Option<f64>,
    pub stroke_opacity: Option<f64>,
}

/// Errors from configuration resolution and validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("cell size must be a positive finite number, got {0}")]
    CellSize(f64),

    #[error("bleed must be a non-negative finite number, got {0}")]
    Bleed(f64),

    /// Padding at or beyond half the cell size leaves an empty jitter
    /// range and would silently produce degenerate geometry.
    #[error("cell padding {padding} must be in [0, {}) for cell size {cell_size}", .cell_size / 2.0)]
    CellPadding { padding: f64, cell_size: f64 },

    #[error("noise intensity must be within [0, 1], got {0}")]
    NoiseIntensity(f64),

    #[error("{0} gradient must contain at least one color")]
    EmptyGradient(&'static str),

    #[error("{kind} opacity must be within [0, 1], got {value}")]
    Opacity { kind: &'static str, value: f64 },

    #[error("canvas dimensions must be positive, got {width}x{height}")]
    Dimensions { width: u32, height: u32 },

    #[error("invalid color: {0}")]
    BadColor(String),
}

impl From<ColorError> for ConfigError {
    fn from(err: ColorError) -> Self {
        match err {
            ColorError::EmptyGradient => Self::EmptyGradient("supplied"),
            ColorError::BadHex(s) => Self::BadColor(s),
        }
    }
}

/// The resolved, validated configuration. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Grid pitch.
    pub cell_size: f64,
    /// How far the mesh extends beyond each canvas edge.
    ///
    /// Defaults to the *resolved* `cell_size`: supplying a custom cell
    /// size also moves the default bleed, so edge coverage scales with
    /// the grid. Supply `bleed` explicitly to decouple them.
    pub bleed: f64,
    /// Inset inside each cell bounding the jitter range.
    pub cell_padding: f64,
    /// Opacity of the fractal-noise overlay; ≤ 0.01 disables it.
    pub noise_intensity: f64,
    /// Colors along the x axis.
    pub x_gradient: Vec<Rgb>,
    /// Colors along the y axis.
    pub y_gradient: Vec<Rgb>,
    pub format: Format,
    pub fill_opacity: f64,
    pub stroke_opacity: f64,
}

impl Config {
    /// Resolve options against the defaults table and validate.
    ///
    /// The random source is used only when gradients are absent (the
    /// default palette draw); resolution with explicit gradients never
    /// touches it.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from the validation rules: positive finite
    /// cell size, non-negative bleed, padding below half the cell size,
    /// noise and opacities within `[0, 1]`, non-empty gradients.
    pub fn resolve<R: Rng + ?Sized>(options: &Options, rng: &mut R) -> Result<Self, ConfigError> {
        let cell_size = options.cell_size.unwrap_or(DEFAULT_CELL_SIZE);
        let bleed = options.bleed.unwrap_or(cell_size);
        let cell_padding = options.cell_padding.unwrap_or(0.1 * cell_size);

        let x_gradient = match &options.x_gradient {
            Some(colors) => colors.clone(),
            None => brewer::random_palette(rng),
        };
        let y_gradient = match &options.y_gradient {
            Some(colors) => colors.clone(),
            None => x_gradient
                .iter()
                .map(|c| c.brighten(Y_GRADIENT_BRIGHTEN))
                .collect(),
        };

        let config = Self {
            cell_size,
            bleed,
            cell_padding,
            noise_intensity: options.noise_intensity.unwrap_or(0.0),
            x_gradient,
            y_gradient,
            format: options.format.unwrap_or_default(),
            fill_opacity: options.fill_opacity.unwrap_or(1.0),
            stroke_opacity: options.stroke_opacity.unwrap_or(1.0),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        if !self.bleed.is_finite() || self.bleed < 0.0 {
            return Err(ConfigError::Bleed(self.bleed));
        }
        // NaN padding fails the first comparison.
        if !(self.cell_padding >= 0.0) || self.cell_padding >= self.cell_size / 2.0 {
            return Err(ConfigError::CellPadding {
                padding: self.cell_padding,
                cell_size: self.cell_size,
            });
        }
        if !(0.0..=1.0).contains(&self.noise_intensity) {
            return Err(ConfigError::NoiseIntensity(self.noise_intensity));
        }
        if self.x_gradient.is_empty() {
            return Err(ConfigError::EmptyGradient("x"));
        }
        if self.y_gradient.is_empty() {
            return Err(ConfigError::EmptyGradient("y"));
        }
        if !(0.0..=1.0).contains(&self.fill_opacity) {
            return Err(ConfigError::Opacity { kind: "fill", value: self.fill_opacity });
        }
        if !(0.0..=1.0).contains(&self.stroke_opacity) {
            return Err(ConfigError::Opacity { kind: "stroke", value: self.stroke_opacity });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn resolve(options: &Options) -> Result<Config, ConfigError> {
        Config::resolve(options, &mut StdRng::seed_from_u64(42))
    }

    #[test]
    fn defaults_table() {
        let c = resolve(&Options::default()).unwrap();
        assert_eq!(c.cell_size, 150.0);
        assert_eq!(c.bleed, 150.0);
        assert_eq!(c.cell_padding, 15.0);
        assert_eq!(c.noise_intensity, 0.0);
        assert_eq!(c.format, Format::Svg);
        assert_eq!(c.fill_opacity, 1.0);
        assert_eq!(c.stroke_opacity, 1.0);
        assert!((3..=9).contains(&c.x_gradient.len()));
    }

    #[test]
    fn default_y_gradient_is_brightened_x() {
        let c = resolve(&Options::default()).unwrap();
        assert_eq!(c.y_gradient.len(), c.x_gradient.len());
        for (x, y) in c.x_gradient.iter().zip(&c.y_gradient) {
            assert_eq!(*y, x.brighten(Y_GRADIENT_BRIGHTEN));
        }
    }

    #[test]
    fn bleed_and_padding_track_cell_size() {
        let c = resolve(&Options { cell_size: Some(100.0), ..Options::default() }).unwrap();
        assert_eq!(c.bleed, 100.0);
        assert_eq!(c.cell_padding, 10.0);
    }

    #[test]
    fn explicit_bleed_wins() {
        let c = resolve(&Options {
            cell_size: Some(100.0),
            bleed: Some(25.0),
            ..Options::default()
        })
        .unwrap();
        assert_eq!(c.bleed, 25.0);
    }

    #[test]
    fn explicit_gradients_skip_random_draw() {
        let colors = vec![Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)];
        let c = resolve(&Options {
            x_gradient: Some(colors.clone()),
            y_gradient: Some(colors.clone()),
            ..Options::default()
        })
        .unwrap();
        assert_eq!(c.x_gradient, colors);
        assert_eq!(c.y_gradient, colors);
    }

    #[test]
    fn resolution_is_seeded() {
        let a = resolve(&Options::default()).unwrap();
        let b = resolve(&Options::default()).unwrap();
        assert_eq!(a.x_gradient, b.x_gradient);
    }

    #[test]
    fn padding_at_half_cell_rejected() {
        let err = resolve(&Options {
            cell_size: Some(100.0),
            cell_padding: Some(50.0),
            ..Options::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::CellPadding { .. }), "{err}");
    }

    #[test]
    fn negative_padding_rejected() {
        let err = resolve(&Options { cell_padding: Some(-1.0), ..Options::default() }).unwrap_err();
        assert!(matches!(err, ConfigError::CellPadding { .. }), "{err}");
    }

    #[test]
    fn non_positive_cell_size_rejected() {
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = resolve(&Options { cell_size: Some(bad), ..Options::default() });
            assert!(matches!(err, Err(ConfigError::CellSize(_))), "cell_size {bad}");
        }
    }

    #[test]
    fn negative_bleed_rejected() {
        let err = resolve(&Options { bleed: Some(-10.0), ..Options::default() }).unwrap_err();
        assert!(matches!(err, ConfigError::Bleed(_)), "{err}");
    }

    #[test]
    fn noise_out_of_range_rejected() {
        for bad in [-0.1, 1.1] {
            let err = resolve(&Options { noise_intensity: Some(bad), ..Options::default() });
            assert!(matches!(err, Err(ConfigError::NoiseIntensity(_))), "noise {bad}");
        }
    }

    #[test]
    fn empty_gradient_rejected() {
        let err = resolve(&Options { x_gradient: Some(vec![]), ..Options::default() }).unwrap_err();
        assert_eq!(err, ConfigError::EmptyGradient("x"));
    }

    #[test]
    fn opacity_out_of_range_rejected() {
        let err = resolve(&Options { fill_opacity: Some(1.5), ..Options::default() }).unwrap_err();
        assert!(matches!(err, ConfigError::Opacity { kind: "fill", .. }), "{err}");
        let err = resolve(&Options { stroke_opacity: Some(-0.5), ..Options::default() }).unwrap_err();
        assert!(matches!(err, ConfigError::Opacity { kind: "stroke", .. }), "{err}");
    }
}
