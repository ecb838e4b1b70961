//! sRGB ↔ OKLab ↔ OKLCH conversion and perceptual interpolation.
//!
//! Matrix constants are Björn Ottosson's published OKLab transform, kept at
//! full precision so results match other OKLCH-based tools.

use super::{hex_to_rgb, linear_to_srgb, rgb_to_hex, srgb_to_linear};

/// Chroma below which a color is treated as achromatic (gray).
pub const ACHROMATIC_CHROMA: f64 = 0.001;

/// A color in OKLCH: lightness `[0, 1]`, chroma `≥ 0`, hue in degrees `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Oklch {
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Whether the chroma is too small for the hue to mean anything.
    pub fn is_achromatic(&self) -> bool {
        self.c < ACHROMATIC_CHROMA
    }
}

fn linear_rgb_to_oklab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let l_ = 0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b;
    let m_ = 0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b;
    let s_ = 0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b;

    let l = l_.cbrt();
    let m = m_.cbrt();
    let s = s_.cbrt();

    (
        0.2104542553 * l + 0.7936177850 * m - 0.0040720468 * s,
        1.9779984951 * l - 2.4285922050 * m + 0.4505937099 * s,
        0.0259040371 * l + 0.7827717662 * m - 0.8086757660 * s,
    )
}

fn oklab_to_linear_rgb(lightness: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let l_ = lightness + 0.3963377774 * a + 0.2158037573 * b;
    let m_ = lightness - 0.1055613458 * a - 0.0638541728 * b;
    let s_ = lightness - 0.0894841775 * a - 1.2914855480 * b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    (
        4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
        -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
        -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
    )
}

fn normalize_degrees(h: f64) -> f64 {
    let h = h % 360.0;
    let h = if h < 0.0 { h + 360.0 } else { h };
    // A tiny negative angle can round up to exactly 360 after the shift.
    if h >= 360.0 { 0.0 } else { h }
}

/// Convert a hex color to OKLCH.
pub fn hex_to_oklch(hex: &str) -> Option<Oklch> {
    let (r, g, b) = hex_to_rgb(hex)?;
    let (l, a, ob) = linear_rgb_to_oklab(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));
    let c = (a * a + ob * ob).sqrt();
    let h = normalize_degrees(ob.atan2(a).to_degrees());
    Some(Oklch { l, c, h })
}

/// Convert OKLCH to a hex color. Out-of-gamut channels are clamped.
pub fn oklch_to_hex(l: f64, c: f64, h: f64) -> String {
    let h_rad = h.to_radians();
    let (r, g, b) = oklab_to_linear_rgb(l, c * h_rad.cos(), c * h_rad.sin());
    rgb_to_hex(linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b))
}

/// Interpolate between two hue angles along the shortest arc.
pub fn lerp_angle(a: f64, b: f64, t: f64) -> f64 {
    let mut diff = b - a;
    if diff > 180.0 {
        diff -= 360.0;
    }
    if diff < -180.0 {
        diff += 360.0;
    }
    normalize_degrees(a + diff * t)
}

/// Blend two hex colors in OKLCH space at position `t`.
///
/// Hue is pinned to 0 when both endpoints are achromatic so grays don't
/// pick up a tint from meaningless hue angles.
pub fn interpolate_oklch(a: &str, b: &str, t: f64) -> Option<String> {
    let from = hex_to_oklch(a)?;
    let to = hex_to_oklch(b)?;

    let l = from.l + (to.l - from.l) * t;
    let c = from.c + (to.c - from.c) * t;
    let h = if from.is_achromatic() && to.is_achromatic() {
        0.0
    } else {
        lerp_angle(from.h, to.h, t)
    };

    Some(oklch_to_hex(l, c, h))
}

/// Format an OKLCH triple as CSS `oklch(L C h)` (4, 4 and 1 decimals).
pub fn format_oklch(color: Oklch) -> String {
    format!("oklch({:.4} {:.4} {:.1})", color.l, color.c, color.h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_white_to_oklch() {
        let white = hex_to_oklch("#ffffff").unwrap();
        assert!((white.l - 1.0).abs() < 0.01);
        assert!(white.c < 0.001);
        assert!(white.is_achromatic());
    }

    #[test]
    fn test_black_to_oklch() {
        let black = hex_to_oklch("#000000").unwrap();
        assert!(black.l.abs() < 0.01);
    }

    #[test]
    fn test_round_trip_white_and_black() {
        for hex in ["#ffffff", "#000000"] {
            let c = hex_to_oklch(hex).unwrap();
            assert_eq!(oklch_to_hex(c.l, c.c, c.h), hex);
        }
    }

    #[test]
    fn test_pure_red_hue() {
        let red = hex_to_oklch("#ff0000").unwrap();
        assert!((red.h - 29.2).abs() < 0.5);
        assert!((red.l - 0.628).abs() < 0.01);
    }

    #[test]
    fn test_lerp_angle_shortest_arc() {
        assert!((lerp_angle(350.0, 10.0, 0.5) - 0.0).abs() < 1e-9);
        assert!((lerp_angle(10.0, 350.0, 0.5) - 0.0).abs() < 1e-9);
        assert!((lerp_angle(0.0, 90.0, 0.5) - 45.0).abs() < 1e-9);
        let wrapped = lerp_angle(340.0, 20.0, 0.75);
        assert!((wrapped - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_interpolate_endpoints() {
        assert_eq!(interpolate_oklch("#000000", "#ffffff", 0.0).unwrap(), "#000000");
        assert_eq!(interpolate_oklch("#000000", "#ffffff", 1.0).unwrap(), "#ffffff");
        assert_eq!(interpolate_oklch("#2563eb", "#dc2626", 0.0).unwrap(), "#2563eb");
        assert_eq!(interpolate_oklch("#2563eb", "#dc2626", 1.0).unwrap(), "#dc2626");
    }

    #[test]
    fn test_interpolate_midpoint_gray() {
        let mid = interpolate_oklch("#000000", "#ffffff", 0.5).unwrap();
        let (r, g, b) = hex_to_rgb(&mid).unwrap();
        assert!(r > 50 && r < 200);
        // Achromatic endpoints stay gray
        assert!(r.abs_diff(g) <= 1 && g.abs_diff(b) <= 1);
    }

    #[test]
    fn test_interpolate_invalid() {
        assert!(interpolate_oklch("#000000", "oops", 0.5).is_none());
    }

    #[test]
    fn test_format_oklch() {
        assert_eq!(format_oklch(Oklch::new(0.5, 0.12346, 250.04)), "oklch(0.5000 0.1235 250.0)");
    }

    proptest! {
        #[test]
        fn prop_hex_oklch_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let hex = rgb_to_hex(r, g, b);
            let c = hex_to_oklch(&hex).unwrap();
            prop_assert!((0.0..360.0).contains(&c.h));
            let back = hex_to_rgb(&oklch_to_hex(c.l, c.c, c.h)).unwrap();
            prop_assert!(back.0.abs_diff(r) <= 1);
            prop_assert!(back.1.abs_diff(g) <= 1);
            prop_assert!(back.2.abs_diff(b) <= 1);
        }
    }
}
