//! CLI argument definitions.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use palettebridge_core::{ContrastLevel, Role, ThemeMode};
use palettebridge_export::ExportFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "palettebridge",
    version,
    about = "Map Tailwind-style palettes onto Material 3 color roles",
    long_about = "Map 50-950 shade palettes onto the Material 3 color roles.\n\n\
                  Edits a saved state file and exports CSS, Jetpack Compose,\n\
                  Material Theme Builder JSON and design tokens."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// State file to read and write.
    #[arg(long, value_name = "PATH", global = true, env = "PALETTEBRIDGE_STATE")]
    pub state: Option<PathBuf>,

    /// Raise log verbosity (-v for info, -vv for debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write the bundled sample state.
    Init {
        /// Overwrite an existing state file.
        #[arg(long)]
        force: bool,
    },

    /// Print the active contrast level, mode and resolved roles.
    Show,

    /// Import pasted shades (hex lists, labeled lines, CSS variables, oklch) into a palette.
    Paste {
        /// Palette to import into.
        palette: String,

        /// Read from a file instead of stdin.
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// Set a single shade of a palette.
    SetShade {
        palette: String,
        shade: String,
        /// Hex color, with or without '#'.
        hex: String,
    },

    /// Assign a palette shade to a role.
    Assign {
        /// Role name, camelCase or kebab-case.
        role: Role,
        palette: String,
        shade: String,

        /// Contrast level to edit (default: active).
        #[arg(long, value_enum)]
        level: Option<LevelArg>,

        /// Theme mode to edit (default: active).
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
    },

    /// Restore the default assignments of a contrast level.
    Reset {
        #[arg(value_enum)]
        level: LevelArg,
    },

    /// Change the active contrast level and/or mode.
    Use {
        #[arg(long, value_enum)]
        level: Option<LevelArg>,

        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
    },

    /// Toggle generated intermediate neutral shades.
    Interpolate,

    /// Report WCAG contrast for paired roles.
    Audit {
        #[arg(long, value_enum)]
        level: Option<LevelArg>,

        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
    },

    /// Write export files.
    Export {
        #[arg(value_enum)]
        format: FormatArg,

        /// Output directory (default: current directory).
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Kotlin package for Compose exports.
        #[arg(long)]
        package: Option<String>,
    },

    /// Replace the state with a previously exported state file.
    Import {
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    Standard,
    Medium,
    High,
}

impl From<LevelArg> for ContrastLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Standard => ContrastLevel::Standard,
            LevelArg::Medium => ContrastLevel::Medium,
            LevelArg::High => ContrastLevel::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Light,
    Dark,
}

impl From<ModeArg> for ThemeMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Light => ThemeMode::Light,
            ModeArg::Dark => ThemeMode::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Css,
    Kotlin,
    Material,
    Tokens,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Css => ExportFormat::Css,
            FormatArg::Kotlin => ExportFormat::Kotlin,
            FormatArg::Material => ExportFormat::Material,
            FormatArg::Tokens => ExportFormat::Tokens,
        }
    }
}
