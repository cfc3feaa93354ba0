//! SVG document assembly.
//!
//! Builds the in-memory element tree for a pattern. Stacking is document
//! order — later children draw on top — so the optional noise layer goes
//! in first, followed by one path per triangle in triangulation order.
//! Triangles never overlap, so no z-sorting is needed; every path uses
//! the same color for fill and stroke, which hides the hairline seams
//! between adjacent triangles.

use svg::Document;
use svg::node::element::{
    Filter, FilterEffectColorMatrix, FilterEffectComponentTransfer, FilterEffectFunctionB,
    FilterEffectFunctionG, FilterEffectFunctionR, FilterEffectTurbulence, Path, Rectangle,
};

use trigon_color::Gradient2d;
use trigon_geom::Triangle;

use crate::config::Config;

/// Noise intensities at or below this are treated as disabled: the
/// overlay would be imperceptible but still cost every consumer a
/// turbulence evaluation per pixel.
pub(crate) const NOISE_THRESHOLD: f64 = 0.01;

/// Luminance-style matrix: collapses RGB to its average, preserves alpha.
const GRAYSCALE_MATRIX: &str = "0.3333 0.3333 0.3333 0 0 \
                                0.3333 0.3333 0.3333 0 0 \
                                0.3333 0.3333 0.3333 0 0 \
                                0 0 0 1 0";

/// Assemble the document for a triangle set on a `width × height` canvas.
pub(crate) fn render(
    triangles: &[Triangle],
    gradient: &Gradient2d,
    config: &Config,
    width: u32,
    height: u32,
) -> Document {
    let mut document = Document::new().set("width", width).set("height", height);

    if config.noise_intensity > NOISE_THRESHOLD {
        document = document.add(noise_filter()).add(
            Rectangle::new()
                .set("width", "100%")
                .set("height", "100%")
                .set("opacity", config.noise_intensity)
                .set("filter", "url(#noise)"),
        );
    }

    for triangle in triangles {
        let (cx, cy) = triangle.centroid();
        let color = gradient.color_at(cx, cy).to_string();
        let [a, b, c] = *triangle.vertices();
        let mut path = Path::new()
            .set("d", format!("M{a}L{b}L{c}Z"))
            .set("fill", color.clone())
            .set("stroke", color);
        if (config.fill_opacity - 1.0).abs() > f64::EPSILON {
            path = path.set("fill-opacity", config.fill_opacity);
        }
        if (config.stroke_opacity - 1.0).abs() > f64::EPSILON {
            path = path.set("stroke-opacity", config.stroke_opacity);
        }
        document = document.add(path);
    }

    document
}

/// The reusable noise definition: fractal turbulence, a per-channel
/// linear contrast stretch (slope 2, intercept −0.5), and a grayscale
/// collapse. Referenced by the overlay rect as `url(#noise)`.
fn noise_filter() -> Filter {
    // Three octaves: more turbulence detail adds nothing visible at
    // background scale but costs render time in every consumer.
    let turbulence = FilterEffectTurbulence::new()
        .set("type", "fractalNoise")
        .set("baseFrequency", 0.7)
        .set("numOctaves", 3)
        .set("stitchTiles", "stitch");

    let stretch = FilterEffectComponentTransfer::new()
        .add(FilterEffectFunctionR::new().set("type", "linear").set("slope", 2).set("intercept", -0.5))
        .add(FilterEffectFunctionG::new().set("type", "linear").set("slope", 2).set("intercept", -0.5))
        .add(FilterEffectFunctionB::new().set("type", "linear").set("slope", 2).set("intercept", -0.5));

    let grayscale = FilterEffectColorMatrix::new()
        .set("type", "matrix")
        .set("values", GRAYSCALE_MATRIX);

    Filter::new()
        .set("id", "noise")
        .add(turbulence)
        .add(stretch)
        .add(grayscale)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use trigon_color::Rgb;
    use trigon_geom::Point;

    fn config(noise: f64, fill_opacity: f64, stroke_opacity: f64) -> Config {
        Config {
            cell_size: 150.0,
            bleed: 150.0,
            cell_padding: 15.0,
            noise_intensity: noise,
            x_gradient: vec![Rgb::new(255, 0, 0)],
            y_gradient: vec![Rgb::new(0, 0, 255)],
            format: crate::config::Format::Svg,
            fill_opacity,
            stroke_opacity,
        }
    }

    fn one_triangle() -> Vec<Triangle> {
        vec![Triangle([Point::new(0, 0), Point::new(100, 0), Point::new(0, 100)])]
    }

    fn gradient() -> Gradient2d {
        Gradient2d::new(&[Rgb::new(255, 0, 0)], &[Rgb::new(0, 0, 255)], 300.0, 300.0).unwrap()
    }

    #[test]
    fn root_has_dimensions_and_namespace() {
        let doc = render(&one_triangle(), &gradient(), &config(0.0, 1.0, 1.0), 300, 200);
        let markup = doc.to_string();
        assert!(markup.contains(r#"width="300""#), "{markup}");
        assert!(markup.contains(r#"height="200""#), "{markup}");
        assert!(markup.contains("http://www.w3.org/2000/svg"), "{markup}");
    }

    #[test]
    fn path_data_traces_triangle() {
        let doc = render(&one_triangle(), &gradient(), &config(0.0, 1.0, 1.0), 300, 300);
        let markup = doc.to_string();
        assert!(markup.contains(r#"d="M0,0L100,0L0,100Z""#), "{markup}");
    }

    #[test]
    fn fill_matches_stroke() {
        let doc = render(&one_triangle(), &gradient(), &config(0.0, 1.0, 1.0), 300, 300);
        let markup = doc.to_string();
        // Constant red along x, constant blue along y → 50/50 blend.
        let expected = Rgb::lerp(Rgb::new(255, 0, 0), Rgb::new(0, 0, 255), 0.5).to_string();
        assert!(markup.contains(&format!(r#"fill="{expected}""#)), "{markup}");
        assert!(markup.contains(&format!(r#"stroke="{expected}""#)), "{markup}");
    }

    #[test]
    fn unit_opacity_omits_attributes() {
        let doc = render(&one_triangle(), &gradient(), &config(0.0, 1.0, 1.0), 300, 300);
        let markup = doc.to_string();
        assert!(!markup.contains("fill-opacity"), "{markup}");
        assert!(!markup.contains("stroke-opacity"), "{markup}");
    }

    #[test]
    fn non_unit_opacity_is_explicit() {
        let doc = render(&one_triangle(), &gradient(), &config(0.0, 0.25, 0.75), 300, 300);
        let markup = doc.to_string();
        assert!(markup.contains(r#"fill-opacity="0.25""#), "{markup}");
        assert!(markup.contains(r#"stroke-opacity="0.75""#), "{markup}");
    }

    #[test]
    fn zero_noise_emits_no_filter() {
        let doc = render(&one_triangle(), &gradient(), &config(0.0, 1.0, 1.0), 300, 300);
        let markup = doc.to_string();
        assert!(!markup.contains("<filter"), "{markup}");
        assert!(!markup.contains("<rect"), "{markup}");
    }

    #[test]
    fn near_zero_noise_is_disabled() {
        let doc = render(&one_triangle(), &gradient(), &config(0.01, 1.0, 1.0), 300, 300);
        assert!(!doc.to_string().contains("<filter"));
    }

    #[test]
    fn noise_layer_precedes_paths() {
        let doc = render(&one_triangle(), &gradient(), &config(0.5, 1.0, 1.0), 300, 300);
        let markup = doc.to_string();
        let filter_at = markup.find("<filter").expect("filter missing");
        let rect_at = markup.find("<rect").expect("rect missing");
        let path_at = markup.find("<path").expect("path missing");
        assert!(filter_at < rect_at && rect_at < path_at, "{markup}");
        assert!(markup.contains(r#"opacity="0.5""#), "{markup}");
        assert!(markup.contains(r#"filter="url(#noise)""#), "{markup}");
    }

    #[test]
    fn noise_filter_primitives() {
        let doc = render(&[], &gradient(), &config(0.8, 1.0, 1.0), 300, 300);
        let markup = doc.to_string();
        for needle in ["feTurbulence", "fractalNoise", "feComponentTransfer", "feFuncR", "feFuncG", "feFuncB", "feColorMatrix"] {
            assert!(markup.contains(needle), "missing {needle} in {markup}");
        }
    }

    #[test]
    fn one_path_per_triangle() {
        let triangles = vec![
            Triangle([Point::new(0, 0), Point::new(10, 0), Point::new(0, 10)]),
            Triangle([Point::new(10, 0), Point::new(10, 10), Point::new(0, 10)]),
            Triangle([Point::new(20, 0), Point::new(30, 0), Point::new(20, 10)]),
        ];
        let doc = render(&triangles, &gradient(), &config(0.0, 1.0, 1.0), 300, 300);
        let markup = doc.to_string();
        assert_eq!(markup.matches("<path").count(), 3, "{markup}");
    }
}
