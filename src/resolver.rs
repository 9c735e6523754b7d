//! Preset Resolver
//!
//! Translates a named preset into a concrete selection set against a catalog
//! snapshot.
//!
//! # Design
//!
//! - **Pure logic**: No I/O, no side effects — resolution only reads the
//!   catalog's preset membership.
//! - **Deterministic**: The same catalog and preset always produce the same
//!   set; iteration order of the result follows catalog order because
//!   [`TweakId`] orders by declaration.
//! - **Closed vocabulary**: Unknown preset names are an error
//!   ([`TweakError::UnknownPreset`]), never a silent default.

use std::collections::BTreeSet;
use std::str::FromStr;

use crate::catalog::{Catalog, TweakId};
use crate::error::{Result, TweakError};
use crate::types::Preset;

/// Resolve a preset into the set of tweak ids whose membership contains it.
///
/// `Preset::Clear` is the empty selection by definition.
pub fn resolve(catalog: &Catalog, preset: Preset) -> BTreeSet<TweakId> {
    match preset {
        Preset::Clear => BTreeSet::new(),
        _ => catalog
            .all()
            .iter()
            .filter(|t| t.in_preset(preset))
            .map(|t| t.id)
            .collect(),
    }
}

/// Resolve a preset given by name, as supplied by the CLI or a plan file.
pub fn resolve_name(catalog: &Catalog, name: &str) -> Result<BTreeSet<TweakId>> {
    let preset = Preset::from_str(name).map_err(|_| TweakError::unknown_preset(name))?;
    Ok(resolve(catalog, preset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_is_empty() {
        let catalog = Catalog::builtin();
        assert!(resolve(&catalog, Preset::Clear).is_empty());
    }

    #[test]
    fn test_standard_matches_membership() {
        let catalog = Catalog::builtin();
        let selection = resolve(&catalog, Preset::Standard);
        for tweak in catalog.all() {
            assert_eq!(
                selection.contains(&tweak.id),
                tweak.in_preset(Preset::Standard),
                "membership mismatch for {}",
                tweak.id
            );
        }
    }

    #[test]
    fn test_unknown_preset_errors() {
        let catalog = Catalog::builtin();
        let err = resolve_name(&catalog, "turbo").unwrap_err();
        assert!(matches!(err, TweakError::UnknownPreset(_)));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let catalog = Catalog::builtin();
        assert_eq!(
            resolve(&catalog, Preset::Minimal),
            resolve(&catalog, Preset::Minimal)
        );
    }
}
