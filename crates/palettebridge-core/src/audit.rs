//! Contrast audit over role pairs.

use crate::color::{WcagLevel, contrast_ratio, meets_wcag};
use crate::mapping::RoleAssignments;
use crate::palette::{PaletteConfig, resolve_shade_ref};
use crate::roles::Role;
use serde::Serialize;

/// Contrast between a role and the role it is paired with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastCheck {
    pub role: Role,
    pub paired: Role,
    pub foreground: String,
    pub background: String,
    pub ratio: f64,
    pub level: WcagLevel,
}

/// Check every paired role, in catalog order.
///
/// Pairs where either side doesn't resolve are left out.
pub fn audit_contrast(config: &PaletteConfig, assignments: &RoleAssignments) -> Vec<ContrastCheck> {
    let resolve = |role: Role| {
        assignments
            .get(&role)
            .and_then(|shade_ref| resolve_shade_ref(config, shade_ref))
    };

    Role::ALL
        .into_iter()
        .filter_map(|role| {
            let paired = role.info().paired_with?;
            let foreground = resolve(role)?;
            let background = resolve(paired)?;
            let ratio = contrast_ratio(foreground, background)?;
            Some(ContrastCheck {
                role,
                paired,
                foreground: foreground.to_string(),
                background: background.to_string(),
                ratio,
                level: meets_wcag(ratio),
            })
        })
        .collect()
}
