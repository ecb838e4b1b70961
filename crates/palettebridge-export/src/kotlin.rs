//! Jetpack Compose `Color.kt` / `Theme.kt` export.

use palettebridge_core::{ContrastLevel, PaletteConfig, Role, ThemeMapping, ThemeMode, resolve_shade_ref};

/// The six Compose color schemes: variable name, constructor, constant suffix.
const SCHEMES: [(ContrastLevel, ThemeMode, &str, &str, &str); 6] = [
    (ContrastLevel::Standard, ThemeMode::Light, "lightScheme", "lightColorScheme", "Light"),
    (ContrastLevel::Standard, ThemeMode::Dark, "darkScheme", "darkColorScheme", "Dark"),
    (ContrastLevel::Medium, ThemeMode::Light, "mediumContrastLightColorScheme", "lightColorScheme", "LightMediumContrast"),
    (ContrastLevel::Medium, ThemeMode::Dark, "mediumContrastDarkColorScheme", "darkColorScheme", "DarkMediumContrast"),
    (ContrastLevel::High, ThemeMode::Light, "highContrastLightColorScheme", "lightColorScheme", "LightHighContrast"),
    (ContrastLevel::High, ThemeMode::Dark, "highContrastDarkColorScheme", "darkColorScheme", "DarkHighContrast"),
];

/// `#rrggbb` → `FFRRGGBB`.
fn hex_to_argb(hex: &str) -> String {
    format!("FF{}", hex.trim_start_matches('#').to_ascii_uppercase())
}

/// `Color.kt`: one constant per Compose-scheme role per scheme.
pub fn generate_color_kt(config: &PaletteConfig, mapping: &ThemeMapping, package: &str) -> String {
    let mut lines = vec![
        format!("package {package}"),
        String::new(),
        "import androidx.compose.ui.graphics.Color".to_string(),
        String::new(),
    ];

    for (level, mode, _, _, suffix) in SCHEMES {
        let assignments = mapping.assignments(level, mode);
        for role in Role::compose_scheme_roles() {
            let Some(hex) = assignments.get(&role).and_then(|r| resolve_shade_ref(config, r)) else {
                continue;
            };
            lines.push(format!("val {}{} = Color(0x{})", role.name(), suffix, hex_to_argb(hex)));
        }
    }

    lines.join("\n") + "\n"
}

/// `Theme.kt`: the six scheme constructors wired to the `Color.kt` constants.
pub fn generate_theme_kt(package: &str) -> String {
    let mut lines = vec![
        format!("package {package}"),
        String::new(),
        "import androidx.compose.material3.darkColorScheme".to_string(),
        "import androidx.compose.material3.lightColorScheme".to_string(),
        String::new(),
    ];

    for (_, _, name, constructor, suffix) in SCHEMES {
        lines.push(format!("private val {name} = {constructor}("));
        for role in Role::compose_scheme_roles() {
            lines.push(format!("    {0} = {0}{1},", role.name(), suffix));
        }
        lines.push(")".to_string());
        lines.push(String::new());
    }

    lines.join("\n") + "\n"
}
