//! Tone ↔ shade correspondence table.
//!
//! Every default role assignment comes from this table. Shade indices derive
//! from a positional correspondence between M3's tonal scale (0–100) and the
//! 50–950 shade scale: M3 tone 40 sits at roughly the same fraction of its
//! scale as shade 600, so `primary` defaults to 600 in light mode.
//!
//! Each entry carries a `[standard, medium, high]` shade triple per theme
//! mode. Accent roles share one pattern table for all four accent families;
//! the patterns are expanded into concrete roles once, when the table is
//! first used.

use crate::mapping::{ContrastLevel, ThemeMode};
use crate::palette::{BLACK, ShadeRef, WHITE};
use crate::roles::{Role, SourcePalette};
use std::sync::LazyLock;

/// Shades for `[standard, medium, high]` contrast.
pub type ShadeTriple = [&'static str; 3];

/// Light and dark shade triples for one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneSpec {
    pub light: ShadeTriple,
    pub dark: ShadeTriple,
}

impl ToneSpec {
    const fn new(light: ShadeTriple, dark: ShadeTriple) -> Self {
        Self { light, dark }
    }

    /// Shade label for a contrast level and theme mode.
    pub fn shade(&self, level: ContrastLevel, mode: ThemeMode) -> &'static str {
        let triple = match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        };
        triple[level.index()]
    }
}

/// Accent families sharing the accent pattern table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccentFamily {
    Primary,
    Secondary,
    Tertiary,
    Error,
}

impl AccentFamily {
    pub const ALL: [AccentFamily; 4] = [
        AccentFamily::Primary,
        AccentFamily::Secondary,
        AccentFamily::Tertiary,
        AccentFamily::Error,
    ];

    /// The palette this family's roles read from.
    pub fn palette(self) -> SourcePalette {
        match self {
            AccentFamily::Primary => SourcePalette::Primary,
            AccentFamily::Secondary => SourcePalette::Secondary,
            AccentFamily::Tertiary => SourcePalette::Tertiary,
            AccentFamily::Error => SourcePalette::Error,
        }
    }

    /// Concrete role for a pattern, if the catalog defines one.
    ///
    /// The catalog has no Fixed roles for the error family.
    pub fn role(self, pattern: AccentPattern) -> Option<Role> {
        use AccentFamily as F;
        use AccentPattern as P;

        let role = match (self, pattern) {
            (F::Primary, P::Base) => Role::Primary,
            (F::Primary, P::On) => Role::OnPrimary,
            (F::Primary, P::Container) => Role::PrimaryContainer,
            (F::Primary, P::OnContainer) => Role::OnPrimaryContainer,
            (F::Primary, P::Fixed) => Role::PrimaryFixed,
            (F::Primary, P::OnFixed) => Role::OnPrimaryFixed,
            (F::Primary, P::FixedDim) => Role::PrimaryFixedDim,
            (F::Primary, P::OnFixedVariant) => Role::OnPrimaryFixedVariant,
            (F::Secondary, P::Base) => Role::Secondary,
            (F::Secondary, P::On) => Role::OnSecondary,
            (F::Secondary, P::Container) => Role::SecondaryContainer,
            (F::Secondary, P::OnContainer) => Role::OnSecondaryContainer,
            (F::Secondary, P::Fixed) => Role::SecondaryFixed,
            (F::Secondary, P::OnFixed) => Role::OnSecondaryFixed,
            (F::Secondary, P::FixedDim) => Role::SecondaryFixedDim,
            (F::Secondary, P::OnFixedVariant) => Role::OnSecondaryFixedVariant,
            (F::Tertiary, P::Base) => Role::Tertiary,
            (F::Tertiary, P::On) => Role::OnTertiary,
            (F::Tertiary, P::Container) => Role::TertiaryContainer,
            (F::Tertiary, P::OnContainer) => Role::OnTertiaryContainer,
            (F::Tertiary, P::Fixed) => Role::TertiaryFixed,
            (F::Tertiary, P::OnFixed) => Role::OnTertiaryFixed,
            (F::Tertiary, P::FixedDim) => Role::TertiaryFixedDim,
            (F::Tertiary, P::OnFixedVariant) => Role::OnTertiaryFixedVariant,
            (F::Error, P::Base) => Role::Error,
            (F::Error, P::On) => Role::OnError,
            (F::Error, P::Container) => Role::ErrorContainer,
            (F::Error, P::OnContainer) => Role::OnErrorContainer,
            (F::Error, P::Fixed | P::OnFixed | P::FixedDim | P::OnFixedVariant) => return None,
        };
        Some(role)
    }
}

/// Role-name patterns shared by the accent families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccentPattern {
    /// `{x}`
    Base,
    /// `on{X}`
    On,
    /// `{x}Container`
    Container,
    /// `on{X}Container`
    OnContainer,
    /// `{x}Fixed`
    Fixed,
    /// `on{X}Fixed`
    OnFixed,
    /// `{x}FixedDim`
    FixedDim,
    /// `on{X}FixedVariant`
    OnFixedVariant,
}

// Fixed roles use the same triple in both modes: they only shift with contrast.
const ACCENT_SPECS: [(AccentPattern, ToneSpec); 8] = [
    (AccentPattern::Base, ToneSpec::new(["600", "700", "700"], ["200", "100", "100"])),
    (AccentPattern::On, ToneSpec::new([WHITE, WHITE, WHITE], ["800", "900", "950"])),
    (AccentPattern::Container, ToneSpec::new(["100", "200", "200"], ["700", "700", "600"])),
    (AccentPattern::OnContainer, ToneSpec::new(["700", "800", "900"], ["100", "50", "50"])),
    (AccentPattern::Fixed, ToneSpec::new(["100", "100", "100"], ["100", "100", "100"])),
    (AccentPattern::OnFixed, ToneSpec::new(["900", "950", "950"], ["900", "950", "950"])),
    (AccentPattern::FixedDim, ToneSpec::new(["200", "200", "200"], ["200", "200", "200"])),
    (AccentPattern::OnFixedVariant, ToneSpec::new(["700", "800", "900"], ["700", "800", "900"])),
];

const SURFACE_SPECS: [(Role, ToneSpec); 15] = [
    (Role::Surface, ToneSpec::new(["50", "50", "50"], ["900", "900", "900"])),
    (Role::OnSurface, ToneSpec::new(["900", "950", BLACK], ["100", "50", WHITE])),
    (Role::SurfaceVariant, ToneSpec::new(["100", "100", "100"], ["700", "700", "700"])),
    (Role::OnSurfaceVariant, ToneSpec::new(["700", "800", "900"], ["200", "200", "100"])),
    (Role::SurfaceDim, ToneSpec::new(["200", "300", "300"], ["900", "900", "900"])),
    (Role::SurfaceBright, ToneSpec::new(["50", "50", "50"], ["800", "700", "700"])),
    (Role::SurfaceContainerLowest, ToneSpec::new([WHITE, WHITE, WHITE], ["950", "950", BLACK])),
    (Role::SurfaceContainerLow, ToneSpec::new(["50", "50", "50"], ["900", "900", "800"])),
    (Role::SurfaceContainer, ToneSpec::new(["100", "100", "100"], ["800", "800", "800"])),
    (Role::SurfaceContainerHigh, ToneSpec::new(["100", "200", "200"], ["800", "800", "700"])),
    (Role::SurfaceContainerHighest, ToneSpec::new(["100", "200", "200"], ["700", "700", "700"])),
    (Role::InverseSurface, ToneSpec::new(["800", "800", "800"], ["100", "100", "100"])),
    (Role::InverseOnSurface, ToneSpec::new(["50", "50", "50"], ["800", "800", "800"])),
    (Role::Background, ToneSpec::new(["50", "50", "50"], ["900", "900", "900"])),
    (Role::OnBackground, ToneSpec::new(["900", "900", "950"], ["100", "100", "50"])),
];

const OTHER_SPECS: [(Role, SourcePalette, ToneSpec); 6] = [
    (Role::InversePrimary, SourcePalette::Primary, ToneSpec::new(["200", "200", "200"], ["600", "700", "700"])),
    (Role::Outline, SourcePalette::Neutral, ToneSpec::new(["500", "600", "700"], ["400", "300", "200"])),
    (Role::OutlineVariant, SourcePalette::Neutral, ToneSpec::new(["200", "300", "400"], ["700", "600", "500"])),
    (Role::Scrim, SourcePalette::Neutral, ToneSpec::new([BLACK, BLACK, BLACK], [BLACK, BLACK, BLACK])),
    (Role::Shadow, SourcePalette::Neutral, ToneSpec::new([BLACK, BLACK, BLACK], [BLACK, BLACK, BLACK])),
    (Role::SurfaceTint, SourcePalette::Primary, ToneSpec::new(["600", "700", "700"], ["200", "100", "100"])),
];

/// One materialized row of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleToneEntry {
    pub role: Role,
    pub palette: SourcePalette,
    pub spec: ToneSpec,
}

impl RoleToneEntry {
    /// Reference for a contrast level and theme mode.
    pub fn shade_ref(&self, level: ContrastLevel, mode: ThemeMode) -> ShadeRef {
        ShadeRef::new(self.palette.as_str(), self.spec.shade(level, mode))
    }
}

static TONE_TABLE: LazyLock<Vec<RoleToneEntry>> = LazyLock::new(build_table);

fn build_table() -> Vec<RoleToneEntry> {
    let mut entries = Vec::with_capacity(Role::ALL.len());

    for family in AccentFamily::ALL {
        for (pattern, spec) in ACCENT_SPECS {
            if let Some(role) = family.role(pattern) {
                entries.push(RoleToneEntry { role, palette: family.palette(), spec });
            }
        }
    }
    for (role, spec) in SURFACE_SPECS {
        entries.push(RoleToneEntry { role, palette: SourcePalette::Neutral, spec });
    }
    for (role, palette, spec) in OTHER_SPECS {
        entries.push(RoleToneEntry { role, palette, spec });
    }

    // Catalog order, so entries can be indexed by role.
    entries.sort_by_key(|entry| entry.role);
    entries
}

/// The full table, one entry per role in catalog order.
pub fn tone_table() -> &'static [RoleToneEntry] {
    &TONE_TABLE
}

/// The table entry for a role.
pub fn tone_entry(role: Role) -> &'static RoleToneEntry {
    &TONE_TABLE[role as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::ContrastLevel as C;
    use crate::mapping::ThemeMode as M;
    use crate::roles::RoleFamily;

    fn expand(pattern: AccentPattern, family: &str) -> String {
        let template = match pattern {
            AccentPattern::Base => "{x}",
            AccentPattern::On => "on{X}",
            AccentPattern::Container => "{x}Container",
            AccentPattern::OnContainer => "on{X}Container",
            AccentPattern::Fixed => "{x}Fixed",
            AccentPattern::OnFixed => "on{X}Fixed",
            AccentPattern::FixedDim => "{x}FixedDim",
            AccentPattern::OnFixedVariant => "on{X}FixedVariant",
        };
        let mut capitalized = family.to_string();
        capitalized[..1].make_ascii_uppercase();
        template.replace("{X}", &capitalized).replace("{x}", family)
    }

    #[test]
    fn test_table_covers_every_role_in_order() {
        let table = tone_table();
        assert_eq!(table.len(), Role::ALL.len());
        for (entry, role) in table.iter().zip(Role::ALL) {
            assert_eq!(entry.role, role);
        }
    }

    #[test]
    fn test_accent_roles_match_pattern_names() {
        for family in AccentFamily::ALL {
            for (pattern, _) in ACCENT_SPECS {
                if let Some(role) = family.role(pattern) {
                    assert_eq!(role.name(), expand(pattern, family.palette().as_str()));
                    assert_eq!(tone_entry(role).palette, family.palette());
                }
            }
        }
    }

    #[test]
    fn test_error_family_has_no_fixed_roles() {
        assert_eq!(AccentFamily::Error.role(AccentPattern::Fixed), None);
        assert_eq!(AccentFamily::Error.role(AccentPattern::OnFixedVariant), None);
    }

    #[test]
    fn test_accent_spot_checks() {
        let primary = tone_entry(Role::Primary);
        assert_eq!(primary.shade_ref(C::Standard, M::Light), ShadeRef::new("primary", "600"));
        assert_eq!(primary.shade_ref(C::Standard, M::Dark), ShadeRef::new("primary", "200"));
        assert_eq!(primary.shade_ref(C::Medium, M::Light), ShadeRef::new("primary", "700"));
        let on_primary = tone_entry(Role::OnPrimary);
        assert_eq!(on_primary.shade_ref(C::Standard, M::Light), ShadeRef::new("primary", WHITE));
        assert_eq!(on_primary.shade_ref(C::High, M::Dark), ShadeRef::new("primary", "950"));
        let container = tone_entry(Role::OnTertiaryContainer);
        assert_eq!(container.shade_ref(C::Medium, M::Dark), ShadeRef::new("tertiary", "50"));
    }

    #[test]
    fn test_fixed_roles_are_mode_invariant() {
        for entry in tone_table() {
            if entry.role.name().contains("Fixed") {
                assert_eq!(entry.spec.light, entry.spec.dark, "{}", entry.role);
            }
        }
    }

    #[test]
    fn test_surface_roles_use_neutral() {
        for role in Role::by_family(RoleFamily::Surface) {
            assert_eq!(tone_entry(role).palette, SourcePalette::Neutral);
        }
        let on_surface = tone_entry(Role::OnSurface);
        assert_eq!(on_surface.spec.light, ["900", "950", BLACK]);
        assert_eq!(on_surface.spec.dark, ["100", "50", WHITE]);
    }

    #[test]
    fn test_other_roles() {
        for mode in [M::Light, M::Dark] {
            for level in [C::Standard, C::Medium, C::High] {
                assert_eq!(tone_entry(Role::Scrim).shade_ref(level, mode), ShadeRef::new("neutral", BLACK));
                assert_eq!(tone_entry(Role::Shadow).shade_ref(level, mode), ShadeRef::new("neutral", BLACK));
                assert_eq!(
                    tone_entry(Role::SurfaceTint).spec.shade(level, mode),
                    tone_entry(Role::Primary).spec.shade(level, mode)
                );
            }
        }
        let inverse_primary = tone_entry(Role::InversePrimary);
        assert_eq!(inverse_primary.palette, SourcePalette::Primary);
        assert_eq!(inverse_primary.spec.light, ["200", "200", "200"]);
        assert_eq!(inverse_primary.spec.dark, ["600", "700", "700"]);
    }

    #[test]
    fn test_table_matches_default_palettes() {
        for entry in tone_table() {
            assert_eq!(entry.palette, entry.role.info().default_palette, "{}", entry.role);
        }
    }
}
