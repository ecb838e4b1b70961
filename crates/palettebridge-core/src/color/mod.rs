//! Color primitives: hex parsing, WCAG contrast scoring and OKLCH math.
//!
//! All colors travel through the crate as canonical `#rrggbb` lowercase
//! strings. Functions here accept hex with or without the leading `#` and
//! return `None` for anything that is not six hex digits.

mod contrast;
mod oklch;

pub use contrast::{WcagLevel, contrast_ratio, meets_wcag, relative_luminance, text_color};
pub use oklch::{
    ACHROMATIC_CHROMA, Oklch, format_oklch, hex_to_oklch, interpolate_oklch, lerp_angle,
    oklch_to_hex,
};

/// Parse a 6-digit hex color into RGB channels (case-insensitive, `#` optional).
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Encode RGB channels as canonical `#rrggbb`.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Normalize a user-supplied hex color to canonical `#rrggbb` lowercase.
pub fn normalize_hex(hex: &str) -> Option<String> {
    let (r, g, b) = hex_to_rgb(hex.trim())?;
    Some(rgb_to_hex(r, g, b))
}

/// Gamma-expand an 8-bit sRGB channel to linear light.
pub(crate) fn srgb_to_linear(channel: u8) -> f64 {
    let s = channel as f64 / 255.0;
    if s <= 0.04045 {
        s / 12.92
    } else {
        ((s + 0.055) / 1.055).powf(2.4)
    }
}

/// Gamma-compress linear light to an 8-bit sRGB channel (clamped, rounded).
pub(crate) fn linear_to_srgb(linear: f64) -> u8 {
    let s = if linear <= 0.0031308 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    };
    (s * 255.0).clamp(0.0, 255.0).round() as u8
}
