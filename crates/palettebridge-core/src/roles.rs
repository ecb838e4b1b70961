//! The Material 3 color role catalog.
//!
//! Roles form a closed set of 49 slots. Each carries static metadata: the
//! family it belongs to, the role it is scored against for contrast, and the
//! palette its default shade is drawn from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Source palettes the default mapping draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourcePalette {
    Primary,
    Secondary,
    Tertiary,
    Error,
    Neutral,
}

impl SourcePalette {
    /// All source palettes in display order.
    pub const ALL: [SourcePalette; 5] = [
        SourcePalette::Primary,
        SourcePalette::Secondary,
        SourcePalette::Tertiary,
        SourcePalette::Error,
        SourcePalette::Neutral,
    ];

    /// Palette name as stored in a [`PaletteConfig`](crate::PaletteConfig).
    pub fn as_str(self) -> &'static str {
        match self {
            SourcePalette::Primary => "primary",
            SourcePalette::Secondary => "secondary",
            SourcePalette::Tertiary => "tertiary",
            SourcePalette::Error => "error",
            SourcePalette::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SourcePalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grouping of roles used by editors and the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleFamily {
    Primary,
    Secondary,
    Tertiary,
    Error,
    Surface,
    Other,
}

impl RoleFamily {
    pub const ALL: [RoleFamily; 6] = [
        RoleFamily::Primary,
        RoleFamily::Secondary,
        RoleFamily::Tertiary,
        RoleFamily::Error,
        RoleFamily::Surface,
        RoleFamily::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RoleFamily::Primary => "primary",
            RoleFamily::Secondary => "secondary",
            RoleFamily::Tertiary => "tertiary",
            RoleFamily::Error => "error",
            RoleFamily::Surface => "surface",
            RoleFamily::Other => "other",
        }
    }
}

impl fmt::Display for RoleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Material 3 color role.
///
/// Declaration order is catalog order; `Ord` follows it so role-keyed maps
/// iterate and serialize in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Primary,
    OnPrimary,
    PrimaryContainer,
    OnPrimaryContainer,
    Secondary,
    OnSecondary,
    SecondaryContainer,
    OnSecondaryContainer,
    Tertiary,
    OnTertiary,
    TertiaryContainer,
    OnTertiaryContainer,
    Error,
    OnError,
    ErrorContainer,
    OnErrorContainer,
    Surface,
    OnSurface,
    SurfaceVariant,
    OnSurfaceVariant,
    SurfaceDim,
    SurfaceBright,
    SurfaceContainerLowest,
    SurfaceContainerLow,
    SurfaceContainer,
    SurfaceContainerHigh,
    SurfaceContainerHighest,
    InverseSurface,
    InverseOnSurface,
    Background,
    OnBackground,
    InversePrimary,
    Outline,
    OutlineVariant,
    Scrim,
    Shadow,
    SurfaceTint,
    PrimaryFixed,
    OnPrimaryFixed,
    PrimaryFixedDim,
    OnPrimaryFixedVariant,
    SecondaryFixed,
    OnSecondaryFixed,
    SecondaryFixedDim,
    OnSecondaryFixedVariant,
    TertiaryFixed,
    OnTertiaryFixed,
    TertiaryFixedDim,
    OnTertiaryFixedVariant,
}

/// Number of roles in the catalog.
pub const ROLE_COUNT: usize = 49;

/// Static metadata for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleInfo {
    pub role: Role,
    pub family: RoleFamily,
    /// Counterpart used for contrast scoring (e.g. a container and its "on" color).
    pub paired_with: Option<Role>,
    pub description: &'static str,
    pub default_palette: SourcePalette,
    /// Whether the role is a parameter of Compose's `lightColorScheme`/`darkColorScheme`.
    pub in_compose_scheme: bool,
}

impl Role {
    /// All roles in catalog order.
    pub const ALL: [Role; ROLE_COUNT] = [
        Role::Primary,
        Role::OnPrimary,
        Role::PrimaryContainer,
        Role::OnPrimaryContainer,
        Role::Secondary,
        Role::OnSecondary,
        Role::SecondaryContainer,
        Role::OnSecondaryContainer,
        Role::Tertiary,
        Role::OnTertiary,
        Role::TertiaryContainer,
        Role::OnTertiaryContainer,
        Role::Error,
        Role::OnError,
        Role::ErrorContainer,
        Role::OnErrorContainer,
        Role::Surface,
        Role::OnSurface,
        Role::SurfaceVariant,
        Role::OnSurfaceVariant,
        Role::SurfaceDim,
        Role::SurfaceBright,
        Role::SurfaceContainerLowest,
        Role::SurfaceContainerLow,
        Role::SurfaceContainer,
        Role::SurfaceContainerHigh,
        Role::SurfaceContainerHighest,
        Role::InverseSurface,
        Role::InverseOnSurface,
        Role::Background,
        Role::OnBackground,
        Role::InversePrimary,
        Role::Outline,
        Role::OutlineVariant,
        Role::Scrim,
        Role::Shadow,
        Role::SurfaceTint,
        Role::PrimaryFixed,
        Role::OnPrimaryFixed,
        Role::PrimaryFixedDim,
        Role::OnPrimaryFixedVariant,
        Role::SecondaryFixed,
        Role::OnSecondaryFixed,
        Role::SecondaryFixedDim,
        Role::OnSecondaryFixedVariant,
        Role::TertiaryFixed,
        Role::OnTertiaryFixed,
        Role::TertiaryFixedDim,
        Role::OnTertiaryFixedVariant,
    ];

    /// camelCase role name (`onSurfaceVariant`).
    pub fn name(self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::OnPrimary => "onPrimary",
            Role::PrimaryContainer => "primaryContainer",
            Role::OnPrimaryContainer => "onPrimaryContainer",
            Role::Secondary => "secondary",
            Role::OnSecondary => "onSecondary",
            Role::SecondaryContainer => "secondaryContainer",
            Role::OnSecondaryContainer => "onSecondaryContainer",
            Role::Tertiary => "tertiary",
            Role::OnTertiary => "onTertiary",
            Role::TertiaryContainer => "tertiaryContainer",
            Role::OnTertiaryContainer => "onTertiaryContainer",
            Role::Error => "error",
            Role::OnError => "onError",
            Role::ErrorContainer => "errorContainer",
            Role::OnErrorContainer => "onErrorContainer",
            Role::Surface => "surface",
            Role::OnSurface => "onSurface",
            Role::SurfaceVariant => "surfaceVariant",
            Role::OnSurfaceVariant => "onSurfaceVariant",
            Role::SurfaceDim => "surfaceDim",
            Role::SurfaceBright => "surfaceBright",
            Role::SurfaceContainerLowest => "surfaceContainerLowest",
            Role::SurfaceContainerLow => "surfaceContainerLow",
            Role::SurfaceContainer => "surfaceContainer",
            Role::SurfaceContainerHigh => "surfaceContainerHigh",
            Role::SurfaceContainerHighest => "surfaceContainerHighest",
            Role::InverseSurface => "inverseSurface",
            Role::InverseOnSurface => "inverseOnSurface",
            Role::Background => "background",
            Role::OnBackground => "onBackground",
            Role::InversePrimary => "inversePrimary",
            Role::Outline => "outline",
            Role::OutlineVariant => "outlineVariant",
            Role::Scrim => "scrim",
            Role::Shadow => "shadow",
            Role::SurfaceTint => "surfaceTint",
            Role::PrimaryFixed => "primaryFixed",
            Role::OnPrimaryFixed => "onPrimaryFixed",
            Role::PrimaryFixedDim => "primaryFixedDim",
            Role::OnPrimaryFixedVariant => "onPrimaryFixedVariant",
            Role::SecondaryFixed => "secondaryFixed",
            Role::OnSecondaryFixed => "onSecondaryFixed",
            Role::SecondaryFixedDim => "secondaryFixedDim",
            Role::OnSecondaryFixedVariant => "onSecondaryFixedVariant",
            Role::TertiaryFixed => "tertiaryFixed",
            Role::OnTertiaryFixed => "onTertiaryFixed",
            Role::TertiaryFixedDim => "tertiaryFixedDim",
            Role::OnTertiaryFixedVariant => "onTertiaryFixedVariant",
        }
    }

    /// kebab-case role name (`on-surface-variant`), as used in CSS variables.
    pub fn kebab_name(self) -> String {
        let mut out = String::with_capacity(self.name().len() + 4);
        for c in self.name().chars() {
            if c.is_ascii_uppercase() {
                out.push('-');
                out.push(c.to_ascii_lowercase());
            } else {
                out.push(c);
            }
        }
        out
    }

    /// Static metadata for this role.
    pub fn info(self) -> RoleInfo {
        use RoleFamily as F;
        use SourcePalette as P;

        let (family, paired_with, description, default_palette, in_compose_scheme) = match self {
            Role::Primary => (F::Primary, Some(Role::OnPrimary), "Primary action color", P::Primary, true),
            Role::OnPrimary => (F::Primary, Some(Role::Primary), "Text/icon on primary", P::Primary, true),
            Role::PrimaryContainer => (F::Primary, Some(Role::OnPrimaryContainer), "Primary container background", P::Primary, true),
            Role::OnPrimaryContainer => (F::Primary, Some(Role::PrimaryContainer), "Text/icon on primary container", P::Primary, true),
            Role::Secondary => (F::Secondary, Some(Role::OnSecondary), "Secondary action color", P::Secondary, true),
            Role::OnSecondary => (F::Secondary, Some(Role::Secondary), "Text/icon on secondary", P::Secondary, true),
            Role::SecondaryContainer => (F::Secondary, Some(Role::OnSecondaryContainer), "Secondary container background", P::Secondary, true),
            Role::OnSecondaryContainer => (F::Secondary, Some(Role::SecondaryContainer), "Text/icon on secondary container", P::Secondary, true),
            Role::Tertiary => (F::Tertiary, Some(Role::OnTertiary), "Tertiary action color", P::Tertiary, true),
            Role::OnTertiary => (F::Tertiary, Some(Role::Tertiary), "Text/icon on tertiary", P::Tertiary, true),
            Role::TertiaryContainer => (F::Tertiary, Some(Role::OnTertiaryContainer), "Tertiary container background", P::Tertiary, true),
            Role::OnTertiaryContainer => (F::Tertiary, Some(Role::TertiaryContainer), "Text/icon on tertiary container", P::Tertiary, true),
            Role::Error => (F::Error, Some(Role::OnError), "Error color", P::Error, true),
            Role::OnError => (F::Error, Some(Role::Error), "Text/icon on error", P::Error, true),
            Role::ErrorContainer => (F::Error, Some(Role::OnErrorContainer), "Error container background", P::Error, true),
            Role::OnErrorContainer => (F::Error, Some(Role::ErrorContainer), "Text/icon on error container", P::Error, true),
            Role::Surface => (F::Surface, Some(Role::OnSurface), "Default surface", P::Neutral, true),
            Role::OnSurface => (F::Surface, Some(Role::Surface), "Text/icon on surface", P::Neutral, true),
            Role::SurfaceVariant => (F::Surface, Some(Role::OnSurfaceVariant), "Surface variant", P::Neutral, true),
            Role::OnSurfaceVariant => (F::Surface, Some(Role::SurfaceVariant), "Text/icon on surface variant", P::Neutral, true),
            Role::SurfaceDim => (F::Surface, Some(Role::OnSurface), "Dimmed surface", P::Neutral, true),
            Role::SurfaceBright => (F::Surface, Some(Role::OnSurface), "Bright surface", P::Neutral, true),
            Role::SurfaceContainerLowest => (F::Surface, Some(Role::OnSurface), "Lowest elevation container", P::Neutral, true),
            Role::SurfaceContainerLow => (F::Surface, Some(Role::OnSurface), "Low elevation container", P::Neutral, true),
            Role::SurfaceContainer => (F::Surface, Some(Role::OnSurface), "Default container", P::Neutral, true),
            Role::SurfaceContainerHigh => (F::Surface, Some(Role::OnSurface), "High elevation container", P::Neutral, true),
            Role::SurfaceContainerHighest => (F::Surface, Some(Role::OnSurface), "Highest elevation container", P::Neutral, true),
            Role::InverseSurface => (F::Surface, Some(Role::InverseOnSurface), "Inverse surface (snackbars)", P::Neutral, true),
            Role::InverseOnSurface => (F::Surface, Some(Role::InverseSurface), "Text on inverse surface", P::Neutral, true),
            Role::Background => (F::Surface, Some(Role::OnBackground), "Background", P::Neutral, true),
            Role::OnBackground => (F::Surface, Some(Role::Background), "Text/icon on background", P::Neutral, true),
            Role::InversePrimary => (F::Other, Some(Role::InverseSurface), "Primary on inverse surface", P::Primary, true),
            Role::Outline => (F::Other, None, "Border/divider", P::Neutral, true),
            Role::OutlineVariant => (F::Other, None, "Subtle border", P::Neutral, true),
            Role::Scrim => (F::Other, None, "Scrim overlay", P::Neutral, true),
            Role::Shadow => (F::Other, None, "Shadow color", P::Neutral, false),
            Role::SurfaceTint => (F::Other, None, "Surface tint (elevation overlay)", P::Primary, false),
            Role::PrimaryFixed => (F::Primary, Some(Role::OnPrimaryFixed), "Fixed primary (cross-theme)", P::Primary, false),
            Role::OnPrimaryFixed => (F::Primary, Some(Role::PrimaryFixed), "On fixed primary", P::Primary, false),
            Role::PrimaryFixedDim => (F::Primary, Some(Role::OnPrimaryFixed), "Dimmed fixed primary", P::Primary, false),
            Role::OnPrimaryFixedVariant => (F::Primary, Some(Role::PrimaryFixedDim), "On fixed primary variant", P::Primary, false),
            Role::SecondaryFixed => (F::Secondary, Some(Role::OnSecondaryFixed), "Fixed secondary", P::Secondary, false),
            Role::OnSecondaryFixed => (F::Secondary, Some(Role::SecondaryFixed), "On fixed secondary", P::Secondary, false),
            Role::SecondaryFixedDim => (F::Secondary, Some(Role::OnSecondaryFixed), "Dimmed fixed secondary", P::Secondary, false),
            Role::OnSecondaryFixedVariant => (F::Secondary, Some(Role::SecondaryFixedDim), "On fixed secondary variant", P::Secondary, false),
            Role::TertiaryFixed => (F::Tertiary, Some(Role::OnTertiaryFixed), "Fixed tertiary", P::Tertiary, false),
            Role::OnTertiaryFixed => (F::Tertiary, Some(Role::TertiaryFixed), "On fixed tertiary", P::Tertiary, false),
            Role::TertiaryFixedDim => (F::Tertiary, Some(Role::OnTertiaryFixed), "Dimmed fixed tertiary", P::Tertiary, false),
            Role::OnTertiaryFixedVariant => (F::Tertiary, Some(Role::TertiaryFixedDim), "On fixed tertiary variant", P::Tertiary, false),
        };

        RoleInfo {
            role: self,
            family,
            paired_with,
            description,
            default_palette,
            in_compose_scheme,
        }
    }

    /// Roles that are parameters of Compose's color scheme constructors, in catalog order.
    pub fn compose_scheme_roles() -> impl Iterator<Item = Role> {
        Role::ALL.into_iter().filter(|r| r.info().in_compose_scheme)
    }

    /// Roles belonging to a family, in catalog order.
    pub fn by_family(family: RoleFamily) -> impl Iterator<Item = Role> {
        Role::ALL.into_iter().filter(move |r| r.info().family == family)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized role name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown color role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    /// Accepts both camelCase (`onPrimary`) and kebab-case (`on-primary`) names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.name() == s || r.kebab_name() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}
