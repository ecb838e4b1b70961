//! CLI configuration.

use crate::cli::Cli;
use crate::storage::FileStorage;
use palettebridge_export::DEFAULT_KOTLIN_PACKAGE;
use std::path::PathBuf;

/// Fallback state file when no data directory can be determined.
const FALLBACK_STATE_FILE: &str = "palettebridge-state.json";

/// Resolved configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub state_path: PathBuf,
    pub kotlin_package: String,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_path: FileStorage::default_path().unwrap_or_else(|| PathBuf::from(FALLBACK_STATE_FILE)),
            kotlin_package: DEFAULT_KOTLIN_PACKAGE.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Defaults overridden by global flags (and their environment variables).
    pub fn from_cli(cli: &Cli) -> Self {
        let mut config = Self::default();
        if let Some(path) = &cli.state {
            config.state_path = path.clone();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.kotlin_package, "com.example.ui.theme");
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(config.state_path.ends_with("state.json") || config.state_path.ends_with(FALLBACK_STATE_FILE));
    }

    #[test]
    fn test_state_flag_overrides_default() {
        let cli = Cli::parse_from(["palettebridge", "--state", "/tmp/custom.json", "show"]);
        let config = Config::from_cli(&cli);
        assert_eq!(config.state_path, PathBuf::from("/tmp/custom.json"));
    }
}
