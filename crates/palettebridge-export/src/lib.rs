//! PaletteBridge Export Library
//!
//! Serializers that turn a palette config and theme mapping into files for
//! downstream tools: CSS custom properties, Jetpack Compose sources, Material
//! Theme Builder JSON and DTCG design tokens.

mod css;
mod kotlin;
mod material;
mod tokens;

use palettebridge_core::{PaletteConfig, ThemeMapping};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use css::generate_css;
pub use kotlin::{generate_color_kt, generate_theme_kt};
pub use material::generate_material_json;
pub use tokens::{DesignTokens, generate_design_tokens};

/// Default Kotlin package for Compose exports.
pub const DEFAULT_KOTLIN_PACKAGE: &str = "com.example.ui.theme";

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Css,
    Kotlin,
    Material,
    Tokens,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Css,
        ExportFormat::Kotlin,
        ExportFormat::Material,
        ExportFormat::Tokens,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Kotlin => "kotlin",
            ExportFormat::Material => "material",
            ExportFormat::Tokens => "tokens",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| format!("unknown export format: {s}"))
    }
}

/// A generated file, named as downstream tools expect it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub name: &'static str,
    pub contents: String,
}

impl ExportFile {
    fn new(name: &'static str, contents: String) -> Self {
        Self { name, contents }
    }
}

/// Generate every file for a format.
pub fn export(
    format: ExportFormat,
    config: &PaletteConfig,
    mapping: &ThemeMapping,
    kotlin_package: &str,
) -> ExportResult<Vec<ExportFile>> {
    let files = match format {
        ExportFormat::Css => vec![ExportFile::new("theme.css", generate_css(config, mapping))],
        ExportFormat::Kotlin => vec![
            ExportFile::new("Color.kt", generate_color_kt(config, mapping, kotlin_package)),
            ExportFile::new("Theme.kt", generate_theme_kt(kotlin_package)),
        ],
        ExportFormat::Material => vec![ExportFile::new(
            "material-theme.json",
            generate_material_json(config, mapping)?,
        )],
        ExportFormat::Tokens => {
            let tokens = generate_design_tokens(config, mapping)?;
            vec![
                ExportFile::new("core.json", tokens.core),
                ExportFile::new("light.json", tokens.light),
                ExportFile::new("dark.json", tokens.dark),
            ]
        }
    };
    log::debug!("Generated {} file(s) for {} export", files.len(), format);
    Ok(files)
}
