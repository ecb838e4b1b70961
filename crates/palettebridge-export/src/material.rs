//! Material Theme Builder JSON export.

use crate::ExportResult;
use palettebridge_core::{PaletteConfig, Role, RoleAssignments, ShadeLabel, ThemeMapping, resolve_all_roles};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct MaterialTheme<'a> {
    description: &'a str,
    source: &'a str,
    schemes: Schemes,
    palettes: BTreeMap<String, BTreeMap<ShadeLabel, String>>,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct Schemes {
    light: BTreeMap<Role, String>,
    dark: BTreeMap<Role, String>,
    light_medium_contrast: BTreeMap<Role, String>,
    dark_medium_contrast: BTreeMap<Role, String>,
    light_high_contrast: BTreeMap<Role, String>,
    dark_high_contrast: BTreeMap<Role, String>,
}

fn upper_hex(hex: &str) -> String {
    format!("#{}", hex.trim_start_matches('#').to_ascii_uppercase())
}

fn scheme(config: &PaletteConfig, assignments: &RoleAssignments) -> BTreeMap<Role, String> {
    resolve_all_roles(config, assignments)
        .into_iter()
        .map(|(role, hex)| (role, upper_hex(&hex)))
        .collect()
}

/// Material theme JSON with all six schemes and every palette's shades.
pub fn generate_material_json(config: &PaletteConfig, mapping: &ThemeMapping) -> ExportResult<String> {
    let palettes = config
        .palettes
        .keys()
        .map(|name| {
            let shades = config
                .merged_shades(name)
                .into_iter()
                .map(|(label, hex)| (label, upper_hex(&hex)))
                .collect();
            (name.clone(), shades)
        })
        .collect();

    let theme = MaterialTheme {
        description: "Palette Bridge export",
        source: "palette-bridge",
        schemes: Schemes {
            light: scheme(config, &mapping.light),
            dark: scheme(config, &mapping.dark),
            light_medium_contrast: scheme(config, &mapping.medium_contrast.light),
            dark_medium_contrast: scheme(config, &mapping.medium_contrast.dark),
            light_high_contrast: scheme(config, &mapping.high_contrast.light),
            dark_high_contrast: scheme(config, &mapping.high_contrast.dark),
        },
        palettes,
    };

    Ok(serde_json::to_string_pretty(&theme)?)
}
