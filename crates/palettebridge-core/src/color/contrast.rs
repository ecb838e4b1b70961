//! WCAG 2.x relative luminance and contrast ratio.

use super::{hex_to_rgb, srgb_to_linear};
use serde::{Deserialize, Serialize};
use std::fmt;

/// WCAG conformance level reached by a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WcagLevel {
    /// Ratio of at least 7:1.
    #[serde(rename = "AAA")]
    Aaa,
    /// Ratio of at least 4.5:1.
    #[serde(rename = "AA")]
    Aa,
    /// Ratio of at least 3:1 (large text only).
    #[serde(rename = "AA-large")]
    AaLarge,
    /// Below 3:1.
    #[serde(rename = "fail")]
    Fail,
}

impl WcagLevel {
    /// Display label as used in contrast badges.
    pub fn as_str(self) -> &'static str {
        match self {
            WcagLevel::Aaa => "AAA",
            WcagLevel::Aa => "AA",
            WcagLevel::AaLarge => "AA-large",
            WcagLevel::Fail => "fail",
        }
    }

    /// Whether the level is good enough for body text.
    pub fn passes_normal_text(self) -> bool {
        matches!(self, WcagLevel::Aaa | WcagLevel::Aa)
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relative luminance of an sRGB color, in `[0, 1]`.
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
}

fn hex_luminance(hex: &str) -> Option<f64> {
    let (r, g, b) = hex_to_rgb(hex)?;
    Some(relative_luminance(r, g, b))
}

/// WCAG contrast ratio between two hex colors, in `[1, 21]`.
///
/// Symmetric in its arguments. Returns `None` if either color is not valid hex.
pub fn contrast_ratio(a: &str, b: &str) -> Option<f64> {
    let la = hex_luminance(a)?;
    let lb = hex_luminance(b)?;
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    Some((lighter + 0.05) / (darker + 0.05))
}

/// Classify a contrast ratio against the WCAG thresholds.
pub fn meets_wcag(ratio: f64) -> WcagLevel {
    if ratio >= 7.0 {
        WcagLevel::Aaa
    } else if ratio >= 4.5 {
        WcagLevel::Aa
    } else if ratio >= 3.0 {
        WcagLevel::AaLarge
    } else {
        WcagLevel::Fail
    }
}

/// Pick black or white text for a background, whichever contrasts more.
pub fn text_color(background: &str) -> Option<&'static str> {
    let on_black = contrast_ratio(background, "#000000")?;
    let on_white = contrast_ratio(background, "#ffffff")?;
    Some(if on_black >= on_white { "#000000" } else { "#ffffff" })
}
