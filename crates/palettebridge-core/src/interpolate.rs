//! Intermediate shade generation.
//!
//! Fills gaps in a shade ramp (e.g. `75` between `50` and `100`) by blending
//! the bracketing shades in OKLCH.

use crate::color::{format_oklch, hex_to_oklch, interpolate_oklch};
use crate::palette::{InterpolatedShade, PaletteConfig, ShadeLabel, ShadeSource};
use std::collections::BTreeMap;

/// Intermediate steps generated for the neutral palette when interpolation is on.
pub const NEUTRAL_INTERMEDIATE_TARGETS: [u32; 10] = [75, 150, 250, 350, 450, 550, 650, 750, 850, 925];

/// Generate a shade for each target label from the numeric shades in `existing`.
///
/// Each target blends the first adjacent pair that brackets it. A target
/// outside the existing range uses the outermost pair, so its position falls
/// outside `[0, 1]` and the color is extrapolated.
pub fn generate_intermediate_neutrals(
    existing: &BTreeMap<ShadeLabel, String>,
    targets: &[u32],
) -> BTreeMap<ShadeLabel, InterpolatedShade> {
    // BTreeMap order puts numeric labels first, ascending.
    let numeric: Vec<(u32, &str)> = existing
        .iter()
        .filter_map(|(label, hex)| label.numeric().map(|n| (n, hex.as_str())))
        .collect();

    let (Some(&first), Some(&last)) = (numeric.first(), numeric.last()) else {
        return BTreeMap::new();
    };

    let mut result = BTreeMap::new();
    for &target in targets {
        let (lower, upper) = numeric
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .find(|(lower, upper)| lower.0 <= target && target <= upper.0)
            .unwrap_or((first, last));

        let position = if upper.0 == lower.0 {
            0.0
        } else {
            (f64::from(target) - f64::from(lower.0)) / (f64::from(upper.0) - f64::from(lower.0))
        };

        let Some(hex) = interpolate_oklch(lower.1, upper.1, position) else {
            log::warn!("Skipping shade {target}: cannot blend {} and {}", lower.1, upper.1);
            continue;
        };
        let oklch = hex_to_oklch(&hex).map(format_oklch).unwrap_or_default();

        result.insert(
            ShadeLabel::from(target),
            InterpolatedShade {
                hex,
                oklch,
                source: ShadeSource {
                    between: (ShadeLabel::from(lower.0), ShadeLabel::from(upper.0)),
                    position,
                },
            },
        );
    }
    result
}

/// Interpolated neutral shades for every intermediate target not already a base shade.
pub fn neutral_intermediates(config: &PaletteConfig) -> BTreeMap<ShadeLabel, InterpolatedShade> {
    let Some(neutral) = config.palette("neutral") else {
        return BTreeMap::new();
    };
    let base: BTreeMap<ShadeLabel, String> = neutral
        .shades
        .iter()
        .map(|(label, shade)| (label.clone(), shade.hex.clone()))
        .collect();
    let targets: Vec<u32> = NEUTRAL_INTERMEDIATE_TARGETS
        .into_iter()
        .filter(|t| !base.contains_key(&ShadeLabel::from(*t)))
        .collect();
    generate_intermediate_neutrals(&base, &targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hex_to_rgb;

    fn existing() -> BTreeMap<ShadeLabel, String> {
        [("50", "#fafafa"), ("100", "#f5f5f5"), ("200", "#e5e5e5")]
            .into_iter()
            .map(|(label, hex)| (ShadeLabel::from(label), hex.to_string()))
            .collect()
    }

    fn assert_close(actual: &str, expected: &str) {
        let a = hex_to_rgb(actual).unwrap();
        let e = hex_to_rgb(expected).unwrap();
        assert!(a.0.abs_diff(e.0) <= 1 && a.1.abs_diff(e.1) <= 1 && a.2.abs_diff(e.2) <= 1, "{actual} vs {expected}");
    }

    #[test]
    fn test_provenance() {
        let result = generate_intermediate_neutrals(&existing(), &[75, 150]);
        assert_eq!(result.len(), 2);

        let s75 = &result[&ShadeLabel::from(75)];
        assert_eq!(s75.source.between, (ShadeLabel::from(50), ShadeLabel::from(100)));
        assert!((s75.source.position - 0.5).abs() < 1e-9);

        let s150 = &result[&ShadeLabel::from(150)];
        assert_eq!(s150.source.between, (ShadeLabel::from(100), ShadeLabel::from(200)));
        assert!(s150.oklch.starts_with("oklch("));
    }

    #[test]
    fn test_midpoint_is_between_neighbors() {
        let result = generate_intermediate_neutrals(&existing(), &[150]);
        let (r, _, _) = hex_to_rgb(&result[&ShadeLabel::from(150)].hex).unwrap();
        assert!((0xe5..=0xf5).contains(&r));
    }

    #[test]
    fn test_out_of_range_uses_boundary_pair() {
        let result = generate_intermediate_neutrals(&existing(), &[25, 400]);
        for label in [25, 400] {
            let shade = &result[&ShadeLabel::from(label)];
            assert_eq!(shade.source.between, (ShadeLabel::from(50), ShadeLabel::from(200)));
        }
        assert!(result[&ShadeLabel::from(400)].source.position > 1.0);
    }

    #[test]
    fn test_target_on_existing_label() {
        let result = generate_intermediate_neutrals(&existing(), &[100]);
        let shade = &result[&ShadeLabel::from(100)];
        assert_eq!(shade.source.between, (ShadeLabel::from(50), ShadeLabel::from(100)));
        assert_eq!(shade.source.position, 1.0);
        assert_close(&shade.hex, "#f5f5f5");
    }

    #[test]
    fn test_single_label() {
        let mut one = BTreeMap::new();
        one.insert(ShadeLabel::from(500), "#737373".to_string());
        let result = generate_intermediate_neutrals(&one, &[450]);
        let shade = &result[&ShadeLabel::from(450)];
        assert_eq!(shade.source.position, 0.0);
        assert_close(&shade.hex, "#737373");
    }

    #[test]
    fn test_no_numeric_labels() {
        let mut named = BTreeMap::new();
        named.insert(ShadeLabel::from("white"), "#ffffff".to_string());
        assert!(generate_intermediate_neutrals(&named, &[75]).is_empty());
        assert!(generate_intermediate_neutrals(&BTreeMap::new(), &[75]).is_empty());
    }

    #[test]
    fn test_neutral_intermediates_from_sample() {
        let result = neutral_intermediates(&PaletteConfig::sample());
        assert_eq!(result.len(), NEUTRAL_INTERMEDIATE_TARGETS.len());
        let s925 = &result[&ShadeLabel::from(925)];
        assert_eq!(s925.source.between, (ShadeLabel::from(900), ShadeLabel::from(950)));
    }
}
