//! Selection plan files for headless runs
//!
//! A plan is a small JSON document naming either a preset, an explicit tweak
//! list, or both (the union). Loading never trusts the file: every id is
//! validated against the catalog and an unknown preset or id is a structural
//! error before anything runs.
//!
//! ```json
//! { "preset": "standard", "tweaks": ["disable-hibernation"] }
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, TweakId};
use crate::error::{Result, TweakError};
use crate::resolver;

/// A saved selection: preset and/or explicit tweak ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplyPlan {
    /// Preset to start from ("standard", "minimal", "clear").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    /// Explicit tweak ids, unioned with the preset selection.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tweaks: Vec<String>,
}

impl ApplyPlan {
    /// Load a plan from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save the plan as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the plan into a selection set against `catalog`.
    ///
    /// Unknown preset names map to [`TweakError::UnknownPreset`]; unknown
    /// tweak ids map to [`TweakError::NotFound`].
    pub fn resolve(&self, catalog: &Catalog) -> Result<BTreeSet<TweakId>> {
        let mut selection = match &self.preset {
            Some(name) => resolver::resolve_name(catalog, name)?,
            None => BTreeSet::new(),
        };

        for raw in &self.tweaks {
            let id = TweakId::from_str(raw).map_err(|_| TweakError::not_found(raw))?;
            catalog.get(id)?;
            selection.insert(id);
        }

        Ok(selection)
    }
}
