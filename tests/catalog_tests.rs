//! Tests for the tweak catalog
//!
//! These tests verify:
//! - Id uniqueness and id -> descriptor round-trips
//! - Category filtering preserves catalog order
//! - Preset membership shape of the built-in catalog

use std::collections::BTreeSet;
use std::str::FromStr;

use strum::IntoEnumIterator;
use tweaktui::catalog::{Catalog, TweakId};
use tweaktui::error::TweakError;
use tweaktui::types::{Category, Preset};

// =============================================================================
// Id invariants
// =============================================================================

#[test]
fn test_builtin_ids_are_unique() {
    let catalog = Catalog::builtin();
    let ids: BTreeSet<TweakId> = catalog.all().iter().map(|t| t.id).collect();
    assert_eq!(ids.len(), catalog.len());
}

#[test]
fn test_get_by_id_round_trips_every_entry() {
    let catalog = Catalog::builtin();
    for tweak in catalog.all() {
        let found = catalog.get(tweak.id).expect("id from all() must resolve");
        assert_eq!(found.id, tweak.id);
        assert_eq!(found.name, tweak.name);
    }
}

#[test]
fn test_every_id_variant_is_in_the_builtin_catalog() {
    let catalog = Catalog::builtin();
    for id in TweakId::iter() {
        assert!(catalog.get(id).is_ok(), "{} missing from builtin catalog", id);
    }
}

#[test]
fn test_id_string_round_trip() {
    for id in TweakId::iter() {
        let s = id.to_string();
        assert_eq!(TweakId::from_str(&s).unwrap(), id);
    }
}

// =============================================================================
// Category filtering
// =============================================================================

#[test]
fn test_by_category_preserves_catalog_order() {
    let catalog = Catalog::builtin();
    for category in Category::iter() {
        let filtered = catalog.by_category(category);
        let positions: Vec<usize> = filtered
            .iter()
            .map(|t| catalog.all().iter().position(|c| c.id == t.id).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted, "{:?} not in catalog order", category);
    }
}

#[test]
fn test_categories_partition_the_catalog() {
    let catalog = Catalog::builtin();
    let total: usize = Category::iter()
        .map(|c| catalog.by_category(c).len())
        .sum();
    assert_eq!(total, catalog.len());
}

// =============================================================================
// Preset membership shape
// =============================================================================

#[test]
fn test_minimal_is_a_subset_of_standard() {
    let catalog = Catalog::builtin();
    for tweak in catalog.all() {
        if tweak.in_preset(Preset::Minimal) {
            assert!(
                tweak.in_preset(Preset::Standard),
                "{} is minimal but not standard",
                tweak.id
            );
        }
    }
}

#[test]
fn test_no_tweak_belongs_to_clear() {
    let catalog = Catalog::builtin();
    for tweak in catalog.all() {
        assert!(!tweak.in_preset(Preset::Clear));
    }
}

// =============================================================================
// Custom catalogs
// =============================================================================

#[test]
fn test_custom_catalog_rejects_duplicates() {
    let builtin = Catalog::builtin();
    let mut tweaks = builtin.all().to_vec();
    tweaks.push(tweaks[3].clone());
    assert!(matches!(Catalog::new(tweaks), Err(TweakError::State(_))));
}

#[test]
fn test_get_missing_id_from_partial_catalog() {
    let builtin = Catalog::builtin();
    let first_two = builtin.all()[..2].to_vec();
    let catalog = Catalog::new(first_two).unwrap();
    let err = catalog.get(TweakId::HideWidgets).unwrap_err();
    assert!(matches!(err, TweakError::NotFound(_)));
    assert!(err.to_string().contains("hide-widgets"));
}
