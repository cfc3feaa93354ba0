//! Named palette catalog — the ColorBrewer sequential families.
//!
//! Each family stores its 9-class ramp as immutable static data and can
//! hand out concrete palettes of 3 to 9 colors by evenly subsampling the
//! ramp. [`random_palette`] draws a family uniformly at random, then a
//! palette size uniformly within the family — the two-level pick the
//! pattern generator uses when the caller supplies no gradient.
//!
//! Only the continuous (sequential) schemes are included; the qualitative
//! ones read poorly as mesh gradients.

use rand::Rng;

use crate::rgb::Rgb;

/// A named ColorBrewer family: a 9-stop ramp from light to dark.
#[derive(Debug, Clone, Copy)]
pub struct Family {
    /// ColorBrewer scheme name, e.g. `"YlGnBu"`.
    pub name: &'static str,
    stops: [Rgb; 9],
}

impl Family {
    /// A concrete palette of `size` colors (clamped to `2..=9`), evenly
    /// subsampled from the family's 9-stop ramp. `ramp(9)` is the full
    /// ramp; smaller sizes keep both endpoints.
    #[must_use]
    pub fn ramp(&self, size: usize) -> Vec<Rgb> {
        let size = size.clamp(2, 9);
        (0..size)
            .map(|i| {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let idx = ((i * 8) as f64 / (size - 1) as f64).round() as usize;
                self.stops[idx]
            })
            .collect()
    }

    /// The full 9-stop ramp.
    #[must_use]
    pub const fn stops(&self) -> &[Rgb; 9] {
        &self.stops
    }
}

/// Unpack a `[0xRRGGBB; 9]` row into a ramp.
const fn ramp9(v: [u32; 9]) -> [Rgb; 9] {
    let mut out = [Rgb::new(0, 0, 0); 9];
    let mut i = 0;
    while i < 9 {
        out[i] = Rgb::from_u32(v[i]);
        i += 1;
    }
    out
}

/// The fixed palette catalog. Read-only process-wide data; lookup is by
/// index or name, never by enumeration-order assumptions.
pub static FAMILIES: &[Family] = &[
    Family { name: "YlGn", stops: ramp9([0xffffe5, 0xf7fcb9, 0xd9f0a3, 0xaddd8e, 0x78c679, 0x41ab5d, 0x238443, 0x006837, 0x004529]) },
    Family { name: "YlGnBu", stops: ramp9([0xffffd9, 0xedf8b1, 0xc7e9b4, 0x7fcdbb, 0x41b6c4, 0x1d91c0, 0x225ea8, 0x253494, 0x081d58]) },
    Family { name: "GnBu", stops: ramp9([0xf7fcf0, 0xe0f3db, 0xccebc5, 0xa8ddb5, 0x7bccc4, 0x4eb3d3, 0x2b8cbe, 0x0868ac, 0x084081]) },
    Family { name: "BuGn", stops: ramp9([0xf7fcfd, 0xe5f5f9, 0xccece6, 0x99d8c9, 0x66c2a4, 0x41ae76, 0x238b45, 0x006d2c, 0x00441b]) },
    Family { name: "PuBu", stops: ramp9([0xfff7fb, 0xece7f2, 0xd0d1e6, 0xa6bddb, 0x74a9cf, 0x3690c0, 0x0570b0, 0x045a8d, 0x023858]) },
    Family { name: "BuPu", stops: ramp9([0xf7fcfd, 0xe0ecf4, 0xbfd3e6, 0x9ebcda, 0x8c96c6, 0x8c6bb1, 0x88419d, 0x810f7c, 0x4d004b]) },
    Family { name: "RdPu", stops: ramp9([0xfff7f3, 0xfde0dd, 0xfcc5c0, 0xfa9fb5, 0xf768a1, 0xdd3497, 0xae017e, 0x7a0177, 0x49006a]) },
    Family { name: "PuRd", stops: ramp9([0xf7f4f9, 0xe7e1ef, 0xd4b9da, 0xc994c7, 0xdf65b0, 0xe7298a, 0xce1256, 0x980043, 0x67001f]) },
    Family { name: "OrRd", stops: ramp9([0xfff7ec, 0xfee8c8, 0xfdd49e, 0xfdbb84, 0xfc8d59, 0xef6548, 0xd7301f, 0xb30000, 0x7f0000]) },
    Family { name: "YlOrRd", stops: ramp9([0xffffcc, 0xffeda0, 0xfed976, 0xfeb24c, 0xfd8d3c, 0xfc4e2a, 0xe31a1c, 0xbd0026, 0x800026]) },
    Family { name: "YlOrBr", stops: ramp9([0xffffe5, 0xfff7bc, 0xfee391, 0xfec44f, 0xfe9929, 0xec7014, 0xcc4c02, 0x993404, 0x662506]) },
    Family { name: "Purples", stops: ramp9([0xfcfbfd, 0xefedf5, 0xdadaeb, 0xbcbddc, 0x9e9ac8, 0x807dba, 0x6a51a3, 0x54278f, 0x3f007d]) },
    Family { name: "Blues", stops: ramp9([0xf7fbff, 0xdeebf7, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x4292c6, 0x2171b5, 0x08519c, 0x08306b]) },
    Family { name: "Greens", stops: ramp9([0xf7fcf5, 0xe5f5e0, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x41ab5d, 0x238b45, 0x006d2c, 0x00441b]) },
    Family { name: "Oranges", stops: ramp9([0xfff5eb, 0xfee6ce, 0xfdd0a2, 0xfdae6b, 0xfd8d3c, 0xf16913, 0xd94801, 0xa63603, 0x7f2704]) },
    Family { name: "Reds", stops: ramp9([0xfff5f0, 0xfee0d2, 0xfcbba1, 0xfc9272, 0xfb6a4a, 0xef3b2c, 0xcb181d, 0xa50f15, 0x67000d]) },
    Family { name: "Greys", stops: ramp9([0xffffff, 0xf0f0f0, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x737373, 0x525252, 0x252525, 0x000000]) },
];

/// Look up a family by its ColorBrewer name (case-sensitive).
#[must_use]
pub fn family(name: &str) -> Option<&'static Family> {
    FAMILIES.iter().find(|f| f.name == name)
}

/// All family names in the catalog.
#[must_use]
pub fn family_names() -> Vec<&'static str> {
    FAMILIES.iter().map(|f| f.name).collect()
}

/// Draw a random palette: a family picked uniformly from the catalog,
/// then a 3–9 color ramp picked uniformly within it.
#[must_use]
pub fn random_palette<R: Rng + ?Sized>(rng: &mut R) -> Vec<Rgb> {
    let fam = &FAMILIES[rng.gen_range(0..FAMILIES.len())];
    fam.ramp(rng.gen_range(3..=9))
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

    #[test]
    fn names_are_unique() {
        let mut names = family_names();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), FAMILIES.len());
    }

    #[test]
    fn lookup_by_name() {
        let blues = family("Blues").unwrap();
        assert_eq!(blues.stops()[0], Rgb::from_u32(0xf7fbff));
        assert!(family("NoSuchFamily").is_none());
    }

    #[test]
    fn full_ramp_is_identity() {
        let f = family("YlGn").unwrap();
        assert_eq!(f.ramp(9), f.stops().to_vec());
    }

    #[test]
    fn subsampled_ramp_keeps_endpoints() {
        for f in FAMILIES {
            for size in 2..=9 {
                let ramp = f.ramp(size);
                assert_eq!(ramp.len(), size, "{} size {size}", f.name);
                assert_eq!(ramp[0], f.stops()[0], "{} first stop", f.name);
                assert_eq!(ramp[size - 1], f.stops()[8], "{} last stop", f.name);
            }
        }
    }

    #[test]
    fn ramp_size_clamps() {
        let f = family("Reds").unwrap();
        assert_eq!(f.ramp(1).len(), 2);
        assert_eq!(f.ramp(100).len(), 9);
    }

    #[test]
    fn random_palette_size_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let p = random_palette(&mut rng);
            assert!((3..=9).contains(&p.len()), "palette size {}", p.len());
        }
    }

    #[test]
    fn random_palette_is_seeded() {
        let a = random_palette(&mut StdRng::seed_from_u64(42));
        let b = random_palette(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_vary() {
        // 100 draws with distinct seeds should not all be identical.
        let first = random_palette(&mut StdRng::seed_from_u64(0));
        let any_different = (1..100)
            .any(|s| random_palette(&mut StdRng::seed_from_u64(s)) != first);
        assert!(any_different);
    }
}
