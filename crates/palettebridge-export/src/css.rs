//! CSS custom property export.

use palettebridge_core::{PaletteConfig, RoleAssignments, ThemeMapping, resolve_all_roles};

fn css_block(selector: &str, config: &PaletteConfig, assignments: &RoleAssignments) -> String {
    let mut lines = vec![format!("{selector} {{")];
    for (role, hex) in resolve_all_roles(config, assignments) {
        lines.push(format!("  --md-sys-color-{}: {};", role.kebab_name(), hex));
    }
    lines.push("}".to_string());
    lines.join("\n")
}

/// Standard-contrast light scheme under `:root`, dark under `[data-theme="dark"]`.
pub fn generate_css(config: &PaletteConfig, mapping: &ThemeMapping) -> String {
    let light = css_block(":root", config, &mapping.light);
    let dark = css_block("[data-theme=\"dark\"]", config, &mapping.dark);
    format!("{light}\n\n{dark}\n")
}
