//! Application state snapshot and its edits.
//!
//! The host owns one [`AppState`] and replaces it with the snapshot each
//! edit returns. Nothing here mutates in place.

use crate::interpolate::neutral_intermediates;
use crate::mapping::{ContrastLevel, RoleAssignments, ThemeMapping, ThemeMode, build_default_mapping};
use crate::palette::{PaletteConfig, ShadeRef, resolve_all_roles};
use crate::roles::Role;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors loading a state snapshot.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid state: {field} {reason}")]
    Invalid { field: String, reason: String },
}

impl StateError {
    fn invalid(field: &str, reason: &str) -> Self {
        StateError::Invalid {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Everything the editor persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub palette_config: PaletteConfig,
    pub theme_mapping: ThemeMapping,
    pub active_contrast_level: ContrastLevel,
    pub active_theme_mode: ThemeMode,
    pub interpolation_enabled: bool,
}

impl AppState {
    /// Fresh state over `config` with the default mapping, standard light, interpolation off.
    pub fn new(config: PaletteConfig) -> Self {
        let theme_mapping = build_default_mapping(&config);
        Self {
            palette_config: config,
            theme_mapping,
            active_contrast_level: ContrastLevel::Standard,
            active_theme_mode: ThemeMode::Light,
            interpolation_enabled: false,
        }
    }

    pub fn sample() -> Self {
        Self::new(PaletteConfig::sample())
    }

    pub fn to_json(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a snapshot.
    ///
    /// The structure is checked before typed deserialization so a malformed
    /// import names the offending field.
    pub fn from_json(json: &str) -> Result<Self, StateError> {
        let value: Value = serde_json::from_str(json)?;
        validate(&value)?;
        Ok(serde_json::from_value(value)?)
    }

    pub fn with_palette_config(&self, config: PaletteConfig) -> Self {
        let config = if self.interpolation_enabled {
            config.with_interpolated("neutral", neutral_intermediates(&config))
        } else {
            config
        };
        Self {
            palette_config: config,
            ..self.clone()
        }
    }

    pub fn with_role_assignment(&self, level: ContrastLevel, mode: ThemeMode, role: Role, shade_ref: ShadeRef) -> Self {
        Self {
            theme_mapping: self.theme_mapping.with_assignment(level, mode, role, shade_ref),
            ..self.clone()
        }
    }

    pub fn with_contrast_level(&self, level: ContrastLevel) -> Self {
        Self {
            active_contrast_level: level,
            ..self.clone()
        }
    }

    pub fn with_theme_mode(&self, mode: ThemeMode) -> Self {
        Self {
            active_theme_mode: mode,
            ..self.clone()
        }
    }

    /// Restore the default assignments for both modes of `level`.
    pub fn with_contrast_reset(&self, level: ContrastLevel) -> Self {
        Self {
            theme_mapping: self.theme_mapping.reset_contrast_level(level, &self.palette_config),
            ..self.clone()
        }
    }

    /// Flip interpolation, generating or dropping the neutral intermediate shades.
    pub fn with_interpolation_toggled(&self) -> Self {
        let enabled = !self.interpolation_enabled;
        let palette_config = if enabled {
            self.palette_config
                .with_interpolated("neutral", neutral_intermediates(&self.palette_config))
        } else {
            self.palette_config.without_interpolated("neutral")
        };
        log::debug!("Interpolation {}", if enabled { "enabled" } else { "disabled" });
        Self {
            palette_config,
            interpolation_enabled: enabled,
            ..self.clone()
        }
    }

    /// Assignments for the active contrast level and mode.
    pub fn active_assignments(&self) -> &RoleAssignments {
        self.theme_mapping
            .assignments(self.active_contrast_level, self.active_theme_mode)
    }

    pub fn resolved_active_roles(&self) -> BTreeMap<Role, String> {
        resolve_all_roles(&self.palette_config, self.active_assignments())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::sample()
    }
}

fn require_object<'a>(value: &'a Value, field: &str) -> Result<&'a serde_json::Map<String, Value>, StateError> {
    match value.get(field) {
        Some(Value::Object(map)) => Ok(map),
        Some(_) => Err(StateError::invalid(field, "must be an object")),
        None => Err(StateError::invalid(field, "is missing")),
    }
}

fn require_one_of(value: &Value, field: &str, allowed: &[&str]) -> Result<(), StateError> {
    match value.get(field).and_then(Value::as_str) {
        Some(s) if allowed.contains(&s) => Ok(()),
        _ => Err(StateError::Invalid {
            field: field.to_string(),
            reason: format!("must be one of {}", allowed.join(", ")),
        }),
    }
}

fn validate(value: &Value) -> Result<(), StateError> {
    if !value.is_object() {
        return Err(StateError::invalid("state", "must be a JSON object"));
    }
    require_object(value, "paletteConfig")?;
    let mapping = require_object(value, "themeMapping")?;
    for key in ["light", "dark", "mediumContrast", "highContrast"] {
        if !mapping.get(key).is_some_and(Value::is_object) {
            return Err(StateError::invalid(&format!("themeMapping.{key}"), "must be an object"));
        }
    }

    let levels = ContrastLevel::ALL.map(ContrastLevel::as_str);
    require_one_of(value, "activeContrastLevel", &levels)?;
    let modes = ThemeMode::ALL.map(ThemeMode::as_str);
    require_one_of(value, "activeThemeMode", &modes)?;

    if !value.get("interpolationEnabled").is_some_and(Value::is_boolean) {
        return Err(StateError::invalid("interpolationEnabled", "must be a boolean"));
    }
    Ok(())
}
