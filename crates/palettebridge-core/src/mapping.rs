//! Role assignments and the default theme mapping.

use crate::palette::{PaletteConfig, ShadeRef};
use crate::roles::{Role, SourcePalette};
use crate::tones::tone_table;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Role → shade reference for one contrast level and theme mode.
///
/// Partial maps are valid; unassigned roles simply don't resolve.
pub type RoleAssignments = BTreeMap<Role, ShadeRef>;

/// Contrast level of a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastLevel {
    #[default]
    Standard,
    Medium,
    High,
}

impl ContrastLevel {
    pub const ALL: [ContrastLevel; 3] = [ContrastLevel::Standard, ContrastLevel::Medium, ContrastLevel::High];

    /// Position in a `[standard, medium, high]` shade triple.
    pub fn index(self) -> usize {
        match self {
            ContrastLevel::Standard => 0,
            ContrastLevel::Medium => 1,
            ContrastLevel::High => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContrastLevel::Standard => "standard",
            ContrastLevel::Medium => "medium",
            ContrastLevel::High => "high",
        }
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Light or dark theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a contrast level or theme mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for ContrastLevel {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContrastLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| UnknownVariant { kind: "contrast level", value: s.to_string() })
    }
}

impl FromStr for ThemeMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownVariant { kind: "theme mode", value: s.to_string() })
    }
}

/// Light and dark assignments for a non-standard contrast level.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModePair {
    pub light: RoleAssignments,
    pub dark: RoleAssignments,
}

impl ModePair {
    fn get(&self, mode: ThemeMode) -> &RoleAssignments {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    fn get_mut(&mut self, mode: ThemeMode) -> &mut RoleAssignments {
        match mode {
            ThemeMode::Light => &mut self.light,
            ThemeMode::Dark => &mut self.dark,
        }
    }
}

/// Assignments for all six (contrast level, mode) cells.
///
/// Standard contrast lives at the top level (`light`, `dark`) to match the
/// persisted JSON shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeMapping {
    pub light: RoleAssignments,
    pub dark: RoleAssignments,
    pub medium_contrast: ModePair,
    pub high_contrast: ModePair,
}

impl ThemeMapping {
    pub fn assignments(&self, level: ContrastLevel, mode: ThemeMode) -> &RoleAssignments {
        match (level, mode) {
            (ContrastLevel::Standard, ThemeMode::Light) => &self.light,
            (ContrastLevel::Standard, ThemeMode::Dark) => &self.dark,
            (ContrastLevel::Medium, mode) => self.medium_contrast.get(mode),
            (ContrastLevel::High, mode) => self.high_contrast.get(mode),
        }
    }

    pub fn assignments_mut(&mut self, level: ContrastLevel, mode: ThemeMode) -> &mut RoleAssignments {
        match (level, mode) {
            (ContrastLevel::Standard, ThemeMode::Light) => &mut self.light,
            (ContrastLevel::Standard, ThemeMode::Dark) => &mut self.dark,
            (ContrastLevel::Medium, mode) => self.medium_contrast.get_mut(mode),
            (ContrastLevel::High, mode) => self.high_contrast.get_mut(mode),
        }
    }

    /// Copy with a single cell entry replaced.
    pub fn with_assignment(&self, level: ContrastLevel, mode: ThemeMode, role: Role, shade_ref: ShadeRef) -> Self {
        let mut mapping = self.clone();
        mapping.assignments_mut(level, mode).insert(role, shade_ref);
        mapping
    }

    /// Copy with both modes of `level` rebuilt from the defaults.
    pub fn reset_contrast_level(&self, level: ContrastLevel, config: &PaletteConfig) -> Self {
        log_missing_palettes(config);
        let mut mapping = self.clone();
        for mode in ThemeMode::ALL {
            *mapping.assignments_mut(level, mode) = build_role_assignments(level, mode);
        }
        mapping
    }

    /// All six cells, standard first, light before dark.
    pub fn cells(&self) -> impl Iterator<Item = (ContrastLevel, ThemeMode, &RoleAssignments)> {
        ContrastLevel::ALL.into_iter().flat_map(move |level| {
            ThemeMode::ALL
                .into_iter()
                .map(move |mode| (level, mode, self.assignments(level, mode)))
        })
    }
}

/// Default assignments for every role at one contrast level and mode.
pub fn build_role_assignments(level: ContrastLevel, mode: ThemeMode) -> RoleAssignments {
    tone_table()
        .iter()
        .map(|entry| (entry.role, entry.shade_ref(level, mode)))
        .collect()
}

/// Build the default mapping for all six cells.
///
/// References to palettes missing from `config` are still emitted; they
/// resolve once the palette exists.
pub fn build_default_mapping(config: &PaletteConfig) -> ThemeMapping {
    log_missing_palettes(config);

    let mut mapping = ThemeMapping::default();
    for level in ContrastLevel::ALL {
        for mode in ThemeMode::ALL {
            *mapping.assignments_mut(level, mode) = build_role_assignments(level, mode);
        }
    }
    mapping
}

fn log_missing_palettes(config: &PaletteConfig) {
    for palette in SourcePalette::ALL {
        if config.palette(palette.as_str()).is_none() {
            log::debug!("default mapping references missing palette '{palette}'");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{BLACK, WHITE};
    use crate::roles::{RoleFamily, ROLE_COUNT};

    fn mapping() -> ThemeMapping {
        build_default_mapping(&PaletteConfig::sample())
    }

    #[test]
    fn test_spot_checks() {
        let m = mapping();
        assert_eq!(m.light[&Role::Primary], ShadeRef::new("primary", "600"));
        assert_eq!(m.light[&Role::OnPrimary], ShadeRef::new("primary", WHITE));
        assert_eq!(m.dark[&Role::Primary], ShadeRef::new("primary", "200"));
        assert_eq!(m.medium_contrast.light[&Role::Primary], ShadeRef::new("primary", "700"));
        assert_eq!(m.high_contrast.dark[&Role::OnPrimary], ShadeRef::new("primary", "950"));
        assert_eq!(m.high_contrast.light[&Role::OnSurface], ShadeRef::new("neutral", BLACK));
    }

    #[test]
    fn test_every_cell_has_every_role() {
        let m = mapping();
        let mut total = 0;
        for (_, _, assignments) in m.cells() {
            assert_eq!(assignments.len(), ROLE_COUNT);
            total += assignments.len();
        }
        assert_eq!(total, 294);
    }

    #[test]
    fn test_family_palettes() {
        let m = mapping();
        for (_, _, assignments) in m.cells() {
            for role in Role::by_family(RoleFamily::Surface) {
                assert_eq!(assignments[&role].palette, "neutral");
            }
            for role in Role::by_family(RoleFamily::Error) {
                assert_eq!(assignments[&role].palette, "error");
            }
        }
    }

    #[test]
    fn test_missing_palettes_still_referenced() {
        let m = build_default_mapping(&PaletteConfig::default());
        assert_eq!(m.light[&Role::Tertiary], ShadeRef::new("tertiary", "600"));
    }

    #[test]
    fn test_cells_order() {
        let m = mapping();
        let order: Vec<_> = m.cells().map(|(level, mode, _)| (level, mode)).collect();
        assert_eq!(order[0], (ContrastLevel::Standard, ThemeMode::Light));
        assert_eq!(order[1], (ContrastLevel::Standard, ThemeMode::Dark));
        assert_eq!(order[5], (ContrastLevel::High, ThemeMode::Dark));
    }

    #[test]
    fn test_with_assignment_touches_one_cell() {
        let m = mapping();
        let edited = m.with_assignment(ContrastLevel::Medium, ThemeMode::Dark, Role::Primary, ShadeRef::new("secondary", "300"));
        assert_eq!(edited.medium_contrast.dark[&Role::Primary], ShadeRef::new("secondary", "300"));
        assert_eq!(edited.medium_contrast.light, m.medium_contrast.light);
        assert_eq!(edited.light, m.light);
        // Original untouched
        assert_eq!(m.medium_contrast.dark[&Role::Primary], ShadeRef::new("primary", "100"));
    }

    #[test]
    fn test_reset_contrast_level() {
        let config = PaletteConfig::sample();
        let m = mapping()
            .with_assignment(ContrastLevel::High, ThemeMode::Light, Role::Primary, ShadeRef::new("x", "1"))
            .with_assignment(ContrastLevel::Standard, ThemeMode::Light, Role::Primary, ShadeRef::new("y", "2"));
        let reset = m.reset_contrast_level(ContrastLevel::High, &config);
        assert_eq!(reset.high_contrast.light[&Role::Primary], ShadeRef::new("primary", "700"));
        assert_eq!(reset.light[&Role::Primary], ShadeRef::new("y", "2"));
    }

    #[test]
    fn test_serialized_keys() {
        let json = serde_json::to_value(mapping()).unwrap();
        let obj = json.as_object().unwrap();
        for key in ["light", "dark", "mediumContrast", "highContrast"] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(json["light"]["onSurfaceVariant"]["palette"], "neutral");
        assert_eq!(json["light"]["primary"]["shade"], "600");
    }

    #[test]
    fn test_level_and_mode_names() {
        assert_eq!("medium".parse::<ContrastLevel>().unwrap(), ContrastLevel::Medium);
        assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!("ultra".parse::<ContrastLevel>().is_err());
        assert_eq!(serde_json::to_string(&ContrastLevel::High).unwrap(), "\"high\"");
        assert_eq!(ContrastLevel::Medium.index(), 1);
    }
}
