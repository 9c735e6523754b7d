//! Tests for preset resolution
//!
//! These tests verify:
//! - "clear" always resolves to the empty set
//! - Named presets resolve to the exact membership set
//! - Unknown preset names fail with UnknownPresetError semantics
//! - Resolution output only references catalog ids

use std::collections::BTreeSet;

use tweaktui::catalog::{Catalog, TweakId};
use tweaktui::error::TweakError;
use tweaktui::resolver::{resolve, resolve_name};
use tweaktui::types::Preset;

#[test]
fn test_clear_resolves_to_empty_set() {
    let catalog = Catalog::builtin();
    assert!(!catalog.is_empty());
    assert!(resolve(&catalog, Preset::Clear).is_empty());
}

#[test]
fn test_standard_is_exact_membership_set() {
    let catalog = Catalog::builtin();
    let expected: BTreeSet<TweakId> = catalog
        .all()
        .iter()
        .filter(|t| t.in_preset(Preset::Standard))
        .map(|t| t.id)
        .collect();
    assert_eq!(resolve(&catalog, Preset::Standard), expected);
    assert!(!expected.is_empty());
}

#[test]
fn test_minimal_is_exact_membership_set() {
    let catalog = Catalog::builtin();
    let expected: BTreeSet<TweakId> = catalog
        .all()
        .iter()
        .filter(|t| t.in_preset(Preset::Minimal))
        .map(|t| t.id)
        .collect();
    assert_eq!(resolve(&catalog, Preset::Minimal), expected);
    assert!(!expected.is_empty());
}

#[test]
fn test_resolve_name_matches_typed_resolution() {
    let catalog = Catalog::builtin();
    assert_eq!(
        resolve_name(&catalog, "standard").unwrap(),
        resolve(&catalog, Preset::Standard)
    );
    assert_eq!(
        resolve_name(&catalog, "minimal").unwrap(),
        resolve(&catalog, Preset::Minimal)
    );
    assert!(resolve_name(&catalog, "clear").unwrap().is_empty());
}

#[test]
fn test_unknown_preset_fails() {
    let catalog = Catalog::builtin();
    let err = resolve_name(&catalog, "bogus").unwrap_err();
    assert!(matches!(err, TweakError::UnknownPreset(_)));
    assert_eq!(err.to_string(), "unknown preset: bogus");
}

#[test]
fn test_resolution_only_references_catalog_ids() {
    let catalog = Catalog::builtin();
    for preset in [Preset::Standard, Preset::Minimal] {
        for id in resolve(&catalog, preset) {
            assert!(catalog.get(id).is_ok());
        }
    }
}

#[test]
fn test_resolution_against_partial_catalog() {
    // A preset resolved against a smaller catalog snapshot only contains
    // ids from that snapshot.
    let builtin = Catalog::builtin();
    let half = builtin.all()[..12].to_vec();
    let catalog = Catalog::new(half).unwrap();

    let selection = resolve(&catalog, Preset::Standard);
    for id in &selection {
        assert!(catalog.get(*id).is_ok());
    }
    assert!(selection.len() <= 12);
}
