//! Free-form palette text parsing.
//!
//! Accepts whatever a user is likely to paste: a plain hex list, labeled
//! lines (`50: #eff6ff`, `'50': '#eff6ff',`, `50 #eff6ff`), CSS custom
//! properties (`--color-primary-50: #eff6ff;`) and `oklch(L C h)` values.

use crate::color::oklch_to_hex;
use crate::palette::ShadeLabel;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static CSS_VAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^--[\w-]+-(\d+)\s*:\s*(.+?);?\s*$").expect("Invalid CSS variable regex")
});

static COLON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^['"]?(\d+)['"]?\s*:\s*(.+?),?\s*$"#).expect("Invalid colon label regex")
});

static SPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\s+(#?[0-9a-fA-F]{6}|oklch\(.+?\))\s*$").expect("Invalid space label regex")
});

/// `oklch(L C h)` with an optional `%` on lightness.
static OKLCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"oklch\(\s*([\d.]+)(%?)\s+([\d.]+)\s+([\d.]+)\s*\)").expect("Invalid oklch regex")
});

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{6}|[0-9a-fA-F]{3})$").expect("Invalid hex regex")
});

/// A successfully classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ParsedLine {
    Labeled(ShadeLabel, String),
    Bare(String),
}

/// Resolve a color value (hex or `oklch(...)`) to `#rrggbb`.
fn resolve_color(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix(';').unwrap_or(trimmed);
    let trimmed = trimmed.trim_end();
    let trimmed = trimmed.strip_suffix(',').unwrap_or(trimmed).trim();

    if let Some(caps) = OKLCH_RE.captures(trimmed) {
        let mut l: f64 = caps[1].parse().ok()?;
        if &caps[2] == "%" {
            l /= 100.0;
        }
        let c: f64 = caps[3].parse().ok()?;
        let h: f64 = caps[4].parse().ok()?;
        return Some(oklch_to_hex(l, c, h));
    }

    let unquoted = trimmed.strip_prefix(['\'', '"']).unwrap_or(trimmed);
    let unquoted = unquoted.strip_suffix(['\'', '"']).unwrap_or(unquoted).trim();
    let digits = HEX_RE.captures(unquoted)?.get(1)?.as_str().to_ascii_lowercase();
    if digits.len() == 3 {
        let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
        Some(format!("#{expanded}"))
    } else {
        Some(format!("#{digits}"))
    }
}

fn labeled(shade: &str, value: &str) -> Option<ParsedLine> {
    let color = resolve_color(value)?;
    let label = ShadeLabel::from(shade);
    label.is_canonical().then_some(ParsedLine::Labeled(label, color))
}

/// Classify one line. The first format that matches decides; a matched line
/// with a bad color or unsupported label is dropped rather than retried.
fn parse_line(line: &str) -> Option<ParsedLine> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    for re in [&*CSS_VAR_RE, &*COLON_RE, &*SPACE_RE] {
        if let Some(caps) = re.captures(trimmed) {
            return labeled(&caps[1], &caps[2]);
        }
    }

    resolve_color(trimmed).map(ParsedLine::Bare)
}

/// Parse pasted text into a shade label → hex map.
///
/// If any line carries a label, only labeled lines count and later
/// duplicates win. Otherwise bare values are assigned to `50`…`950` in
/// order, ignoring any beyond the eleventh. Unparseable input yields an
/// empty map.
pub fn parse_palette_input(text: &str) -> BTreeMap<ShadeLabel, String> {
    let parsed: Vec<ParsedLine> = text
        .lines()
        .filter_map(|line| {
            let result = parse_line(line);
            if result.is_none() && !line.trim().is_empty() {
                log::trace!("Skipping palette line: {line:?}");
            }
            result
        })
        .collect();

    let has_labels = parsed.iter().any(|p| matches!(p, ParsedLine::Labeled(..)));

    if has_labels {
        parsed
            .into_iter()
            .filter_map(|p| match p {
                ParsedLine::Labeled(label, hex) => Some((label, hex)),
                ParsedLine::Bare(_) => None,
            })
            .collect()
    } else {
        ShadeLabel::canonical()
            .zip(parsed)
            .filter_map(|(label, p)| match p {
                ParsedLine::Bare(hex) => Some((label, hex)),
                ParsedLine::Labeled(..) => None,
            })
            .collect()
    }
}
