//! The generated pattern artifact and its serialized forms.
//!
//! A [`Pattern`] is constructed in one synchronous pass — scatter,
//! triangulate, render, serialize, encode — and is immutable afterwards.
//! No partially built pattern is ever observable. Alongside the in-memory
//! document it owns every derived form a consumer might embed:
//!
//! - the serialized SVG markup,
//! - its base64 payload,
//! - a `data:image/svg+xml;base64,…` URI,
//! - the CSS `url(...)` wrapper of that URI.

use std::fmt;
use std::path::Path as FsPath;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use log::debug;
use rand::Rng;
use svg::Document;

use trigon_color::Gradient2d;
use trigon_geom::{GridSpec, Point, Triangle, Triangulator};

use crate::assemble;
use crate::config::{Config, ConfigError};
use crate::error::Error;

/// A live host document that patterns can be attached to.
///
/// The core never assumes a rendering environment exists; anything that
/// can accept an SVG element tree as a child of its body implements this.
pub trait Host {
    /// Attach the document tree to the host.
    ///
    /// # Errors
    ///
    /// [`Error::Environment`] if the host cannot accept the document.
    fn attach(&mut self, document: &Document) -> Result<(), Error>;
}

/// A generated mesh pattern.
pub struct Pattern {
    config: Config,
    width: u32,
    height: u32,
    points: Vec<Point>,
    triangles: Vec<Triangle>,
    document: Document,
    markup: String,
    base64: String,
    data_uri: String,
    css_url: String,
}

impl Pattern {
    /// Run the full pipeline. Called by [`Generator`](crate::Generator)
    /// after dimension validation.
    pub(crate) fn build<R, T>(
        config: &Config,
        triangulator: &T,
        rng: &mut R,
        width: u32,
        height: u32,
    ) -> Result<Self, Error>
    where
        R: Rng + ?Sized,
        T: Triangulator + ?Sized,
    {
        let grid = GridSpec {
            cell_size: config.cell_size,
            bleed: config.bleed,
            padding: config.cell_padding,
        };
        let (w, h) = (f64::from(width), f64::from(height));

        let points = grid.scatter(rng, w, h);
        debug!(
            "scattered {} points ({:?} cells) for a {width}x{height} canvas",
            points.len(),
            grid.cells(w, h),
        );

        let triangles = triangulator.triangulate(&points)?;
        debug!("meshed {} triangles", triangles.len());

        let gradient = Gradient2d::new(&config.x_gradient, &config.y_gradient, w, h)
            .map_err(ConfigError::from)?;
        let document = assemble::render(&triangles, &gradient, config, width, height);

        let markup = document.to_string();
        let base64 = BASE64.encode(markup.as_bytes());
        let data_uri = format!("data:image/svg+xml;base64,{base64}");
        let css_url = format!("url({data_uri})");
        debug!("serialized {} bytes of markup", markup.len());

        Ok(Self {
            config: config.clone(),
            width,
            height,
            points,
            triangles,
            document,
            markup,
            base64,
            data_uri,
            css_url,
        })
    }

    /// The configuration this pattern was generated with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Canvas width.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The scattered point field (one point per grid cell, row-major).
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The mesh, in triangulation order.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// The in-memory document tree.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// The serialized SVG markup. Re-serializing the document always
    /// yields this exact text.
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Base64 encoding of [`markup`](Self::markup).
    #[must_use]
    pub fn base64(&self) -> &str {
        &self.base64
    }

    /// A self-contained `data:image/svg+xml;base64,…` URI.
    #[must_use]
    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }

    /// The data URI wrapped in `url(...)`, ready for use as a CSS
    /// `background-image` value.
    #[must_use]
    pub fn css_url(&self) -> &str {
        &self.css_url
    }

    /// Attach the document tree to a live host.
    ///
    /// Side-effecting convenience, separate from generation; generation
    /// never requires a host.
    ///
    /// # Errors
    ///
    /// [`Error::Environment`] if the host rejects the document.
    pub fn append(&self, host: &mut dyn Host) -> Result<(), Error> {
        host.attach(&self.document)
    }

    /// Write the markup to a file.
    ///
    /// # Errors
    ///
    /// [`Error::Environment`] wrapping the underlying I/O failure.
    pub fn save<P: AsRef<FsPath>>(&self, path: P) -> Result<(), Error> {
        svg::save(path, &self.document)
            .map_err(|e| Error::Environment(format!("failed to save document: {e}")))
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("points", &self.points.len())
            .field("triangles", &self.triangles.len())
            .field("markup_bytes", &self.markup.len())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
