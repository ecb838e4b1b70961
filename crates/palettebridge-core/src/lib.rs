//! PaletteBridge Core Library
//!
//! Color math, the palette model and the Material 3 role mapping for
//! PaletteBridge. Everything here is pure and synchronous; hosts own the
//! state and its persistence.

pub mod audit;
pub mod color;
pub mod interpolate;
pub mod mapping;
pub mod palette;
pub mod parse;
pub mod roles;
pub mod state;
pub mod tones;

pub use audit::{ContrastCheck, audit_contrast};
pub use color::{WcagLevel, contrast_ratio, hex_to_rgb, meets_wcag, normalize_hex, text_color};
pub use interpolate::{NEUTRAL_INTERMEDIATE_TARGETS, generate_intermediate_neutrals};
pub use mapping::{ContrastLevel, RoleAssignments, ThemeMapping, ThemeMode, build_default_mapping, build_role_assignments};
pub use palette::{
    InterpolatedShade, PALETTE_ORDER, Palette, PaletteConfig, PaletteError, SHADE_ORDER, ShadeLabel, ShadeRef, ShadeValue,
    resolve_all_roles, resolve_shade_ref,
};
pub use parse::parse_palette_input;
pub use roles::{Role, RoleFamily, RoleInfo, SourcePalette};
pub use state::{AppState, StateError};
