//! DTCG design token export (core palette plus light/dark semantic sets).

use crate::ExportResult;
use palettebridge_core::{PaletteConfig, Role, RoleAssignments, ShadeLabel, ThemeMapping};
use serde::Serialize;
use std::collections::BTreeMap;

/// The three token files, each pretty-printed JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignTokens {
    pub core: String,
    pub light: String,
    pub dark: String,
}

#[derive(Serialize)]
struct Token {
    #[serde(rename = "$type")]
    kind: &'static str,
    #[serde(rename = "$value")]
    value: String,
}

impl Token {
    fn color(value: String) -> Self {
        Self { kind: "color", value }
    }
}

#[derive(Serialize)]
struct CoreTokens {
    palette: BTreeMap<String, BTreeMap<ShadeLabel, Token>>,
}

#[derive(Serialize)]
struct ThemeTokens {
    color: BTreeMap<Role, Token>,
}

fn theme_tokens(assignments: &RoleAssignments) -> ThemeTokens {
    let color = assignments
        .iter()
        .map(|(role, r)| (*role, Token::color(format!("{{palette.{}.{}}}", r.palette, r.shade))))
        .collect();
    ThemeTokens { color }
}

/// Core palette primitives and standard-contrast light/dark aliases into them.
///
/// Aliases are written even when they don't resolve against `config`.
pub fn generate_design_tokens(config: &PaletteConfig, mapping: &ThemeMapping) -> ExportResult<DesignTokens> {
    let palette = config
        .palettes
        .keys()
        .map(|name| {
            let shades = config
                .merged_shades(name)
                .into_iter()
                .map(|(label, hex)| (label, Token::color(hex)))
                .collect();
            (name.clone(), shades)
        })
        .collect();

    Ok(DesignTokens {
        core: serde_json::to_string_pretty(&CoreTokens { palette })?,
        light: serde_json::to_string_pretty(&theme_tokens(&mapping.light))?,
        dark: serde_json::to_string_pretty(&theme_tokens(&mapping.dark))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use palettebridge_core::build_default_mapping;
    use serde_json::Value;

    fn tokens() -> DesignTokens {
        let config = PaletteConfig::sample();
        generate_design_tokens(&config, &build_default_mapping(&config)).unwrap()
    }

    #[test]
    fn test_core_palette() {
        let core: Value = serde_json::from_str(&tokens().core).unwrap();
        let shade = &core["palette"]["primary"]["600"];
        assert_eq!(shade["$type"], "color");
        assert_eq!(shade["$value"], "#2563eb");
        assert_eq!(core["palette"]["neutral"]["white"]["$value"], "#ffffff");
    }

    #[test]
    fn test_semantic_aliases() {
        let t = tokens();
        let light: Value = serde_json::from_str(&t.light).unwrap();
        let dark: Value = serde_json::from_str(&t.dark).unwrap();
        assert_eq!(light["color"]["primary"]["$value"], "{palette.primary.600}");
        assert_eq!(light["color"]["onPrimary"]["$value"], "{palette.primary.white}");
        assert_eq!(dark["color"]["primary"]["$value"], "{palette.primary.200}");
        assert_eq!(light["color"].as_object().unwrap().len(), 49);
    }
}
