//! The `Rgb` value type — 8-bit RGB with the handful of operations the
//! gradient pipeline needs: hex parsing, hex formatting, per-channel
//! linear interpolation, and brightening for derived y-axis gradients.

use std::fmt;

use crate::ColorError;

/// Channel floor applied when brightening very dark colors, so that
/// brightening pure black actually produces a visible change.
const BRIGHTEN_FLOOR: u8 = 30;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value.
    #[inline]
    #[must_use]
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// Parse a hex color string: `#rrggbb`, `#rgb`, or either without
    /// the leading `#`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::BadHex`] if the string is not a valid
    /// 3- or 6-digit hex color.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let bad = || ColorError::BadHex(s.to_owned());
        let hex = s.strip_prefix('#').unwrap_or(s);
        match hex.len() {
            6 => {
                let v = u32::from_str_radix(hex, 16).map_err(|_| bad())?;
                Ok(Self::from_u32(v))
            }
            3 => {
                let v = u32::from_str_radix(hex, 16).map_err(|_| bad())?;
                // Expand each nibble: #abc → #aabbcc.
                let (r, g, b) = ((v >> 8) & 0xf, (v >> 4) & 0xf, v & 0xf);
                Ok(Self::new(
                    (r | (r << 4)) as u8,
                    (g | (g << 4)) as u8,
                    (b | (b << 4)) as u8,
                ))
            }
            _ => Err(bad()),
        }
    }

    /// Linear interpolation between two colors, per channel.
    ///
    /// `t` is clamped to `[0, 1]`; `t = 0` returns `a` exactly and
    /// `t = 1` returns `b` exactly.
    #[must_use]
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |x: u8, y: u8| -> u8 {
            (f64::from(y) - f64::from(x))
                .mul_add(t, f64::from(x))
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Self::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
    }

    /// A brightened copy of this color.
    ///
    /// Follows the d3 `rgb.brighter(k)` rule: each channel is divided by
    /// `0.7^k` and capped at 255. Channels at or near zero are floored at
    /// a small constant first, so brightening black is not a no-op.
    #[must_use]
    pub fn brighten(self, k: f64) -> Self {
        if self.r == 0 && self.g == 0 && self.b == 0 {
            return Self::new(BRIGHTEN_FLOOR, BRIGHTEN_FLOOR, BRIGHTEN_FLOOR);
        }
        let factor = 0.7f64.powf(k);
        let lift = |c: u8| -> u8 {
            let c = if c > 0 && c < BRIGHTEN_FLOOR { BRIGHTEN_FLOOR } else { c };
            (f64::from(c) / factor).min(255.0) as u8
        };
        Self::new(lift(self.r), lift(self.g), lift(self.b))
    }
}

impl fmt::Display for Rgb {
    /// Formats as a lowercase `#rrggbb` hex string, the form emitted
    /// into SVG `fill`/`stroke` attributes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
