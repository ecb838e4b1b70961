//! Command implementations.
//!
//! Each command loads the state, applies one edit and saves the new
//! snapshot. Output goes to the supplied writer.

use crate::cli::Command;
use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::storage::StateStorage;
use palettebridge_core::{
    AppState, ContrastLevel, PALETTE_ORDER, Role, RoleFamily, ShadeRef, ThemeMode, audit_contrast, parse_palette_input,
    resolve_shade_ref, text_color,
};
use palettebridge_export::{ExportFormat, export};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Run a parsed command against a storage backend.
pub fn execute(command: Command, config: &Config, storage: &dyn StateStorage, out: &mut dyn Write) -> CliResult<()> {
    match command {
        Command::Init { force } => init(storage, force, out),
        Command::Show => show(storage, out),
        Command::Paste { palette, file } => {
            let text = read_input(file.as_deref())?;
            paste(storage, &palette, &text, out)
        }
        Command::SetShade { palette, shade, hex } => set_shade(storage, &palette, &shade, &hex, out),
        Command::Assign { role, palette, shade, level, mode } => assign(
            storage,
            role,
            ShadeRef::new(palette, shade),
            level.map(Into::into),
            mode.map(Into::into),
            out,
        ),
        Command::Reset { level } => reset(storage, level.into(), out),
        Command::Use { level, mode } => use_scheme(storage, level.map(Into::into), mode.map(Into::into), out),
        Command::Interpolate => interpolate(storage, out),
        Command::Audit { level, mode } => audit(storage, level.map(Into::into), mode.map(Into::into), out),
        Command::Export { format, out: dir, package } => {
            let dir = dir.unwrap_or_else(|| config.output_dir.clone());
            let package = package.unwrap_or_else(|| config.kotlin_package.clone());
            export_files(storage, format.into(), &dir, &package, out)
        }
        Command::Import { file } => import(storage, &file, out),
    }
}

fn read_input(file: Option<&Path>) -> CliResult<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// The saved state, or the bundled sample if nothing has been saved yet.
fn load_state(storage: &dyn StateStorage) -> CliResult<AppState> {
    if storage.exists()? {
        Ok(storage.load()?)
    } else {
        log::info!("No saved state, starting from the sample palettes");
        Ok(AppState::sample())
    }
}

pub fn init(storage: &dyn StateStorage, force: bool, out: &mut dyn Write) -> CliResult<()> {
    if storage.exists()? && !force {
        return Err(CliError::Usage(
            "state already exists (use --force to overwrite)".to_string(),
        ));
    }
    storage.save(&AppState::sample())?;
    writeln!(out, "Wrote sample state")?;
    Ok(())
}

pub fn show(storage: &dyn StateStorage, out: &mut dyn Write) -> CliResult<()> {
    let state = load_state(storage)?;
    writeln!(
        out,
        "contrast: {}  mode: {}  interpolation: {}",
        state.active_contrast_level,
        state.active_theme_mode,
        if state.interpolation_enabled { "on" } else { "off" },
    )?;

    let palettes: Vec<String> = PALETTE_ORDER
        .iter()
        .filter_map(|name| {
            let palette = state.palette_config.palette(name.as_str())?;
            Some(format!("{name} ({})", palette.shades.len()))
        })
        .collect();
    writeln!(out, "palettes: {}", palettes.join(", "))?;

    // Columns: role, shade reference, resolved hex, label color on that swatch.
    let assignments = state.active_assignments();
    for family in RoleFamily::ALL {
        writeln!(out, "{family}")?;
        for role in Role::by_family(family) {
            let Some(shade_ref) = assignments.get(&role) else {
                continue;
            };
            let hex = resolve_shade_ref(&state.palette_config, shade_ref);
            let label = hex.and_then(text_color).unwrap_or("-");
            writeln!(
                out,
                "  {:<26} {:<18} {:<8} {}",
                role.name(),
                shade_ref.to_string(),
                hex.unwrap_or("-"),
                label
            )?;
        }
    }
    Ok(())
}

pub fn paste(storage: &dyn StateStorage, palette: &str, text: &str, out: &mut dyn Write) -> CliResult<()> {
    let shades = parse_palette_input(text);
    if shades.is_empty() {
        return Err(CliError::Usage("no colors found in input".to_string()));
    }

    let state = load_state(storage)?;
    let config = state.palette_config.with_pasted_shades(palette, &shades)?;
    storage.save(&state.with_palette_config(config))?;

    let labels: Vec<&str> = shades.keys().map(|label| label.as_str()).collect();
    writeln!(out, "Imported {} shade(s) into {}: {}", shades.len(), palette, labels.join(", "))?;
    Ok(())
}

pub fn set_shade(storage: &dyn StateStorage, palette: &str, shade: &str, hex: &str, out: &mut dyn Write) -> CliResult<()> {
    let state = load_state(storage)?;
    let config = state.palette_config.with_shade(palette, shade, hex)?;
    let next = state.with_palette_config(config);
    storage.save(&next)?;

    let stored = resolve_shade_ref(&next.palette_config, &ShadeRef::new(palette, shade)).unwrap_or(hex);
    writeln!(out, "{palette}-{shade} = {stored}")?;
    Ok(())
}

pub fn assign(
    storage: &dyn StateStorage,
    role: Role,
    shade_ref: ShadeRef,
    level: Option<ContrastLevel>,
    mode: Option<ThemeMode>,
    out: &mut dyn Write,
) -> CliResult<()> {
    let state = load_state(storage)?;
    let level = level.unwrap_or(state.active_contrast_level);
    let mode = mode.unwrap_or(state.active_theme_mode);

    if resolve_shade_ref(&state.palette_config, &shade_ref).is_none() {
        log::warn!("{shade_ref} does not resolve to a color yet");
    }

    storage.save(&state.with_role_assignment(level, mode, role, shade_ref.clone()))?;
    writeln!(out, "{role} ({level}, {mode}) -> {shade_ref}")?;
    Ok(())
}

pub fn reset(storage: &dyn StateStorage, level: ContrastLevel, out: &mut dyn Write) -> CliResult<()> {
    let state = load_state(storage)?;
    storage.save(&state.with_contrast_reset(level))?;
    writeln!(out, "Reset {level} contrast to defaults")?;
    Ok(())
}

pub fn use_scheme(
    storage: &dyn StateStorage,
    level: Option<ContrastLevel>,
    mode: Option<ThemeMode>,
    out: &mut dyn Write,
) -> CliResult<()> {
    let mut state = load_state(storage)?;
    if let Some(level) = level {
        state = state.with_contrast_level(level);
    }
    if let Some(mode) = mode {
        state = state.with_theme_mode(mode);
    }
    storage.save(&state)?;
    writeln!(out, "contrast: {}  mode: {}", state.active_contrast_level, state.active_theme_mode)?;
    Ok(())
}

pub fn interpolate(storage: &dyn StateStorage, out: &mut dyn Write) -> CliResult<()> {
    let state = load_state(storage)?.with_interpolation_toggled();
    storage.save(&state)?;

    if state.interpolation_enabled {
        let count = state
            .palette_config
            .interpolated
            .get("neutral")
            .map_or(0, |shades| shades.len());
        writeln!(out, "Interpolation on ({count} neutral shade(s))")?;
    } else {
        writeln!(out, "Interpolation off")?;
    }
    Ok(())
}

pub fn audit(
    storage: &dyn StateStorage,
    level: Option<ContrastLevel>,
    mode: Option<ThemeMode>,
    out: &mut dyn Write,
) -> CliResult<()> {
    let state = load_state(storage)?;
    let level = level.unwrap_or(state.active_contrast_level);
    let mode = mode.unwrap_or(state.active_theme_mode);
    let checks = audit_contrast(&state.palette_config, state.theme_mapping.assignments(level, mode));

    writeln!(out, "contrast: {level}  mode: {mode}")?;
    for check in &checks {
        writeln!(
            out,
            "  {:<26} on {:<26} {:>6.2}:1  {}",
            check.role.name(),
            check.paired.name(),
            check.ratio,
            check.level,
        )?;
    }

    let failing = checks.iter().filter(|c| !c.level.passes_normal_text()).count();
    if failing > 0 {
        log::warn!("{failing} pair(s) below AA for body text");
    }
    Ok(())
}

pub fn export_files(
    storage: &dyn StateStorage,
    format: ExportFormat,
    dir: &Path,
    package: &str,
    out: &mut dyn Write,
) -> CliResult<()> {
    let state = load_state(storage)?;
    let files = export(format, &state.palette_config, &state.theme_mapping, package)?;

    fs::create_dir_all(dir)?;
    for file in files {
        let path: PathBuf = dir.join(file.name);
        fs::write(&path, file.contents)?;
        writeln!(out, "Wrote {}", path.display())?;
    }
    Ok(())
}

/// Replace the saved state. A rejected file leaves the saved state untouched.
pub fn import(storage: &dyn StateStorage, file: &Path, out: &mut dyn Write) -> CliResult<()> {
    let json = fs::read_to_string(file)?;
    let state = AppState::from_json(&json)?;
    storage.save(&state)?;
    writeln!(out, "Imported state from {}", file.display())?;
    Ok(())
}
