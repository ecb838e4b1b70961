//! Palette model and shade resolution.
//!
//! A [`PaletteConfig`] holds named palettes of base shades plus a second,
//! lower-priority tier of interpolated shades. [`ShadeRef`]s point into it
//! and are resolved to hex colors on demand; a dangling reference simply
//! resolves to nothing.

use crate::color::normalize_hex;
use crate::mapping::RoleAssignments;
use crate::roles::{Role, SourcePalette};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// The 11 canonical shade labels, light to dark.
pub const SHADE_ORDER: [&str; 11] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

/// Palettes in editor display order.
pub const PALETTE_ORDER: [SourcePalette; 5] = SourcePalette::ALL;

/// Sentinel label for pure white.
pub const WHITE: &str = "white";

/// Sentinel label for pure black.
pub const BLACK: &str = "black";

/// Palette editing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("Unknown palette: {0}")]
    UnknownPalette(String),
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),
}

/// Result type for palette edits.
pub type PaletteResult<T> = Result<T, PaletteError>;

/// Label of a shade within a palette (`"50"`…`"950"`, `"white"`, `"black"`,
/// or an interpolated step such as `"75"`).
///
/// Ordered numerically for numeric labels, which sort before named ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShadeLabel(String);

impl ShadeLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the label, if it is an integer step.
    pub fn numeric(&self) -> Option<u32> {
        self.0.parse().ok()
    }

    /// Whether this is one of the 11 canonical steps.
    pub fn is_canonical(&self) -> bool {
        SHADE_ORDER.contains(&self.0.as_str())
    }

    /// The canonical steps as labels, light to dark.
    pub fn canonical() -> impl Iterator<Item = ShadeLabel> {
        SHADE_ORDER.into_iter().map(ShadeLabel::from)
    }
}

impl Ord for ShadeLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for ShadeLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<&str> for ShadeLabel {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for ShadeLabel {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl From<u32> for ShadeLabel {
    fn from(step: u32) -> Self {
        Self(step.to_string())
    }
}

impl fmt::Display for ShadeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single color entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadeValue {
    /// Canonical `#rrggbb`.
    pub hex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oklch: Option<String>,
}

impl ShadeValue {
    pub fn new(hex: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            oklch: None,
        }
    }
}

/// A named ramp of shades.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub shades: BTreeMap<ShadeLabel, ShadeValue>,
}

impl Palette {
    /// Build a palette from the 11 canonical steps plus the white/black sentinels.
    pub fn from_ramp(ramp: [&str; 11]) -> Self {
        let mut shades: BTreeMap<ShadeLabel, ShadeValue> = ShadeLabel::canonical()
            .zip(ramp)
            .map(|(label, hex)| (label, ShadeValue::new(hex)))
            .collect();
        shades.insert(WHITE.into(), ShadeValue::new("#ffffff"));
        shades.insert(BLACK.into(), ShadeValue::new("#000000"));
        Self { shades }
    }

    pub fn get(&self, shade: &str) -> Option<&ShadeValue> {
        self.shades.get(&ShadeLabel::from(shade))
    }
}

/// Where an interpolated shade came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadeSource {
    /// The two base shades it was blended from, lower first.
    pub between: (ShadeLabel, ShadeLabel),
    /// Blend position from `between.0` toward `between.1`.
    pub position: f64,
}

/// A shade synthesized by OKLCH interpolation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpolatedShade {
    pub hex: String,
    pub oklch: String,
    pub source: ShadeSource,
}

/// A reference to one shade of one palette. May dangle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShadeRef {
    pub palette: String,
    pub shade: ShadeLabel,
}

impl ShadeRef {
    pub fn new(palette: impl Into<String>, shade: impl Into<ShadeLabel>) -> Self {
        Self {
            palette: palette.into(),
            shade: shade.into(),
        }
    }
}

impl fmt::Display for ShadeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.palette, self.shade)
    }
}

/// All palettes plus their interpolated shades.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    pub palettes: BTreeMap<String, Palette>,
    /// Per-palette interpolated shades. Labels never overlap the palette's base shades.
    #[serde(default)]
    pub interpolated: BTreeMap<String, BTreeMap<ShadeLabel, InterpolatedShade>>,
}

impl PaletteConfig {
    /// The bundled sample: Tailwind blue, slate, violet, red and neutral ramps.
    pub fn sample() -> Self {
        const RAMPS: [(SourcePalette, [&str; 11]); 5] = [
            (SourcePalette::Primary, [
                "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6",
                "#2563eb", "#1d4ed8", "#1e40af", "#1e3a8a", "#172554",
            ]),
            (SourcePalette::Secondary, [
                "#f8fafc", "#f1f5f9", "#e2e8f0", "#cbd5e1", "#94a3b8", "#64748b",
                "#475569", "#334155", "#1e293b", "#0f172a", "#020617",
            ]),
            (SourcePalette::Tertiary, [
                "#f5f3ff", "#ede9fe", "#ddd6fe", "#c4b5fd", "#a78bfa", "#8b5cf6",
                "#7c3aed", "#6d28d9", "#5b21b6", "#4c1d95", "#2e1065",
            ]),
            (SourcePalette::Error, [
                "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444",
                "#dc2626", "#b91c1c", "#991b1b", "#7f1d1d", "#450a0a",
            ]),
            (SourcePalette::Neutral, [
                "#fafafa", "#f5f5f5", "#e5e5e5", "#d4d4d4", "#a3a3a3", "#737373",
                "#525252", "#404040", "#262626", "#171717", "#0a0a0a",
            ]),
        ];

        Self {
            palettes: RAMPS
                .into_iter()
                .map(|(name, ramp)| (name.as_str().to_string(), Palette::from_ramp(ramp)))
                .collect(),
            interpolated: BTreeMap::new(),
        }
    }

    pub fn palette(&self, name: &str) -> Option<&Palette> {
        self.palettes.get(name)
    }

    /// Base and interpolated shades of a palette merged into one label → hex map.
    pub fn merged_shades(&self, name: &str) -> BTreeMap<ShadeLabel, String> {
        let mut shades: BTreeMap<ShadeLabel, String> = self
            .palette(name)
            .map(|p| p.shades.iter().map(|(k, v)| (k.clone(), v.hex.clone())).collect())
            .unwrap_or_default();
        if let Some(extra) = self.interpolated.get(name) {
            for (label, shade) in extra {
                shades.entry(label.clone()).or_insert_with(|| shade.hex.clone());
            }
        }
        shades
    }

    /// Return a copy with one shade replaced (or added).
    pub fn with_shade(&self, palette: &str, shade: impl Into<ShadeLabel>, hex: &str) -> PaletteResult<Self> {
        let hex = normalize_hex(hex).ok_or_else(|| PaletteError::InvalidHex(hex.to_string()))?;
        let mut shades = BTreeMap::new();
        shades.insert(shade.into(), hex);
        self.with_pasted_shades(palette, &shades)
    }

    /// Return a copy with every given shade written into the palette.
    pub fn with_pasted_shades(&self, palette: &str, shades: &BTreeMap<ShadeLabel, String>) -> PaletteResult<Self> {
        if !self.palettes.contains_key(palette) {
            return Err(PaletteError::UnknownPalette(palette.to_string()));
        }
        let normalized = shades
            .iter()
            .map(|(label, hex)| {
                normalize_hex(hex)
                    .map(|hex| (label.clone(), hex))
                    .ok_or_else(|| PaletteError::InvalidHex(hex.clone()))
            })
            .collect::<PaletteResult<Vec<_>>>()?;

        let mut next = self.clone();
        if let Some(target) = next.palettes.get_mut(palette) {
            for (label, hex) in &normalized {
                target.shades.insert(label.clone(), ShadeValue::new(hex.clone()));
            }
        }
        if let Some(extra) = next.interpolated.get_mut(palette) {
            for (label, _) in &normalized {
                extra.remove(label);
            }
        }
        log::debug!("Wrote {} shade(s) into palette {}", normalized.len(), palette);
        Ok(next)
    }

    /// Return a copy with the interpolated tier of a palette replaced.
    ///
    /// Labels that already exist as base shades are dropped.
    pub fn with_interpolated(&self, palette: &str, shades: BTreeMap<ShadeLabel, InterpolatedShade>) -> Self {
        let mut next = self.clone();
        let base = self.palette(palette);
        let shades: BTreeMap<_, _> = shades
            .into_iter()
            .filter(|(label, _)| base.is_none_or(|p| !p.shades.contains_key(label)))
            .collect();
        next.interpolated.insert(palette.to_string(), shades);
        next
    }

    /// Return a copy without any interpolated shades for a palette.
    pub fn without_interpolated(&self, palette: &str) -> Self {
        let mut next = self.clone();
        next.interpolated.remove(palette);
        next
    }
}

/// Resolve a reference to a hex color.
///
/// Base shades take priority over interpolated ones. Unknown palettes or
/// shades resolve to `None`.
pub fn resolve_shade_ref<'a>(config: &'a PaletteConfig, shade_ref: &ShadeRef) -> Option<&'a str> {
    let palette = config.palettes.get(&shade_ref.palette)?;
    if let Some(shade) = palette.shades.get(&shade_ref.shade) {
        return Some(&shade.hex);
    }
    config
        .interpolated
        .get(&shade_ref.palette)
        .and_then(|extra| extra.get(&shade_ref.shade))
        .map(|shade| shade.hex.as_str())
}

/// Resolve every assignment, silently omitting roles that don't resolve.
pub fn resolve_all_roles(config: &PaletteConfig, assignments: &RoleAssignments) -> BTreeMap<Role, String> {
    assignments
        .iter()
        .filter_map(|(role, shade_ref)| {
            let hex = resolve_shade_ref(config, shade_ref);
            if hex.is_none() {
                log::trace!("Role {} does not resolve ({})", role, shade_ref);
            }
            hex.map(|hex| (*role, hex.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interpolated(hex: &str) -> InterpolatedShade {
        InterpolatedShade {
            hex: hex.to_string(),
            oklch: "oklch(0.5000 0.0000 0.0)".to_string(),
            source: ShadeSource {
                between: ("50".into(), "100".into()),
                position: 0.5,
            },
        }
    }

    #[test]
    fn test_shade_label_ordering() {
        let mut labels: Vec<ShadeLabel> = ["white", "950", "75", "black", "100", "50"]
            .into_iter()
            .map(ShadeLabel::from)
            .collect();
        labels.sort();
        let sorted: Vec<&str> = labels.iter().map(|l| l.as_str()).collect();
        assert_eq!(sorted, ["50", "75", "100", "950", "black", "white"]);
    }

    #[test]
    fn test_shade_label_canonical() {
        assert!(ShadeLabel::from("500").is_canonical());
        assert!(!ShadeLabel::from("75").is_canonical());
        assert!(!ShadeLabel::from(WHITE).is_canonical());
        assert_eq!(ShadeLabel::from(150).numeric(), Some(150));
        assert_eq!(ShadeLabel::from(WHITE).numeric(), None);
    }

    #[test]
    fn test_resolve_shade() {
        let config = PaletteConfig::sample();
        assert_eq!(resolve_shade_ref(&config, &ShadeRef::new("primary", "600")), Some("#2563eb"));
    }

    #[test]
    fn test_resolve_sentinels() {
        let config = PaletteConfig::sample();
        assert_eq!(resolve_shade_ref(&config, &ShadeRef::new("primary", WHITE)), Some("#ffffff"));
        assert_eq!(resolve_shade_ref(&config, &ShadeRef::new("neutral", BLACK)), Some("#000000"));
    }

    #[test]
    fn test_resolve_missing() {
        let config = PaletteConfig::sample();
        assert_eq!(resolve_shade_ref(&config, &ShadeRef::new("nonexistent", "500")), None);
        assert_eq!(resolve_shade_ref(&config, &ShadeRef::new("primary", "75")), None);
    }

    #[test]
    fn test_resolve_interpolated_fallback() {
        let mut extra = BTreeMap::new();
        extra.insert(ShadeLabel::from("75"), interpolated("#f7f7f7"));
        let config = PaletteConfig::sample().with_interpolated("neutral", extra);
        assert_eq!(resolve_shade_ref(&config, &ShadeRef::new("neutral", "75")), Some("#f7f7f7"));
        // Interpolated tier is per palette
        assert_eq!(resolve_shade_ref(&config, &ShadeRef::new("primary", "75")), None);
    }

    #[test]
    fn test_with_interpolated_drops_base_collisions() {
        let mut extra = BTreeMap::new();
        extra.insert(ShadeLabel::from("100"), interpolated("#123456"));
        extra.insert(ShadeLabel::from("150"), interpolated("#654321"));
        let config = PaletteConfig::sample().with_interpolated("neutral", extra);
        let tier = &config.interpolated["neutral"];
        assert!(!tier.contains_key(&ShadeLabel::from("100")));
        assert!(tier.contains_key(&ShadeLabel::from("150")));
        assert_eq!(resolve_shade_ref(&config, &ShadeRef::new("neutral", "100")), Some("#f5f5f5"));
    }

    #[test]
    fn test_resolve_all_roles_omits_unresolvable() {
        let config = PaletteConfig::sample();
        let mut assignments = RoleAssignments::new();
        assignments.insert(Role::Primary, ShadeRef::new("primary", "600"));
        assignments.insert(Role::OnPrimary, ShadeRef::new("primary", WHITE));
        assignments.insert(Role::Outline, ShadeRef::new("missing", "500"));

        let resolved = resolve_all_roles(&config, &assignments);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[&Role::Primary], "#2563eb");
        assert_eq!(resolved[&Role::OnPrimary], "#ffffff");
        assert!(!resolved.contains_key(&Role::Outline));
    }

    #[test]
    fn test_with_shade_normalizes_and_is_immutable() {
        let original = PaletteConfig::sample();
        let edited = original.with_shade("primary", "500", "ABCDEF").unwrap();
        assert_eq!(resolve_shade_ref(&edited, &ShadeRef::new("primary", "500")), Some("#abcdef"));
        assert_eq!(resolve_shade_ref(&original, &ShadeRef::new("primary", "500")), Some("#3b82f6"));
    }

    #[test]
    fn test_with_shade_errors() {
        let config = PaletteConfig::sample();
        assert_eq!(
            config.with_shade("accent", "500", "#ffffff"),
            Err(PaletteError::UnknownPalette("accent".to_string()))
        );
        assert_eq!(
            config.with_shade("primary", "500", "#fffff"),
            Err(PaletteError::InvalidHex("#fffff".to_string()))
        );
    }

    #[test]
    fn test_pasted_shade_replaces_interpolated_label() {
        let mut extra = BTreeMap::new();
        extra.insert(ShadeLabel::from("75"), interpolated("#f7f7f7"));
        let config = PaletteConfig::sample()
            .with_interpolated("neutral", extra)
            .with_shade("neutral", "75", "#eeeeee")
            .unwrap();
        assert!(config.interpolated["neutral"].is_empty());
        assert_eq!(resolve_shade_ref(&config, &ShadeRef::new("neutral", "75")), Some("#eeeeee"));
    }

    #[test]
    fn test_merged_shades() {
        let mut extra = BTreeMap::new();
        extra.insert(ShadeLabel::from("75"), interpolated("#f7f7f7"));
        let config = PaletteConfig::sample().with_interpolated("neutral", extra);
        let merged = config.merged_shades("neutral");
        assert_eq!(merged.len(), 14);
        let labels: Vec<&str> = merged.keys().take(3).map(|l| l.as_str()).collect();
        assert_eq!(labels, ["50", "75", "100"]);
        assert!(config.merged_shades("nope").is_empty());
    }

    #[test]
    fn test_sample_shape() {
        let config = PaletteConfig::sample();
        assert_eq!(config.palettes.len(), 5);
        for name in PALETTE_ORDER {
            let palette = config.palette(name.as_str()).unwrap();
            assert_eq!(palette.shades.len(), 13);
        }
    }

    #[test]
    fn test_json_round_trip_skips_missing_oklch() {
        let config = PaletteConfig::sample();
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("\"oklch\""));
        let back: PaletteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_interpolated_defaults_when_absent() {
        let json = r##"{"palettes":{"neutral":{"shades":{"50":{"hex":"#fafafa"}}}}}"##;
        let config: PaletteConfig = serde_json::from_str(json).unwrap();
        assert!(config.interpolated.is_empty());
        assert_eq!(resolve_shade_ref(&config, &ShadeRef::new("neutral", "50")), Some("#fafafa"));
    }
}
