//! Type-safe vocabulary for the tweak catalog
//!
//! This module replaces stringly-typed configuration with proper Rust enums
//! that provide compile-time validation and exhaustive matching.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Catalog grouping for a tweak.
///
/// Categories exist for UI grouping and nothing else: execution order is
/// always catalog order, never category order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Essentials,
    Network,
    Gaming,
    Performance,
    Cleanup,
    Privacy,
    Personalization,
}

impl Category {
    /// Human-readable heading used by the catalog view.
    pub fn heading(&self) -> &'static str {
        match self {
            Category::Essentials => "Essentials",
            Category::Network => "Network",
            Category::Gaming => "Gaming",
            Category::Performance => "Performance",
            Category::Cleanup => "Cleanup",
            Category::Privacy => "Privacy",
            Category::Personalization => "Personalization",
        }
    }
}

/// Semantic kind of a tweak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum TweakKind {
    /// Idempotent configuration change: applying twice equals applying once.
    #[default]
    Toggle,
    /// Fire-and-forget action (disk cleanup, temp purge); not required to be
    /// idempotent.
    #[strum(serialize = "one-shot")]
    OneShot,
}

/// Named selection presets.
///
/// The vocabulary is closed: anything that does not parse into this enum is
/// an unknown preset, surfaced as
/// [`TweakError::UnknownPreset`](crate::error::TweakError::UnknownPreset) by
/// the resolver rather than silently defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Preset {
    /// The recommended selection.
    Standard,
    /// A conservative subset of `standard`.
    Minimal,
    /// Deselect everything.
    Clear,
}

/// Scope of a persistent configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ConfigScope {
    /// Machine-wide store (HKEY_LOCAL_MACHINE on Windows).
    Machine,
    /// Per-user store (HKEY_CURRENT_USER on Windows).
    User,
}

/// Audit log entry level.
///
/// Levels name the event source, not a severity ladder: command output and
/// registry writes get their own levels so the log file reads as a faithful
/// trace of what touched the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    Info,
    CmdOut,
    CmdErr,
    Registry,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_preset_serialization() {
        assert_eq!(Preset::Standard.to_string(), "standard");
        assert_eq!(Preset::Minimal.to_string(), "minimal");
        assert_eq!(Preset::Clear.to_string(), "clear");
    }

    #[test]
    fn test_preset_parsing() {
        assert_eq!(Preset::from_str("standard").unwrap(), Preset::Standard);
        assert_eq!(Preset::from_str("minimal").unwrap(), Preset::Minimal);
        assert_eq!(Preset::from_str("clear").unwrap(), Preset::Clear);
        assert!(Preset::from_str("bogus").is_err());
    }

    #[test]
    fn test_category_iteration() {
        let categories: Vec<String> = Category::iter().map(|c| c.to_string()).collect();
        assert!(categories.contains(&"essentials".to_string()));
        assert!(categories.contains(&"personalization".to_string()));
        assert_eq!(categories.len(), 7);
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevel::Info.to_string(), "INFO");
        assert_eq!(LogLevel::CmdOut.to_string(), "CMD_OUT");
        assert_eq!(LogLevel::CmdErr.to_string(), "CMD_ERR");
        assert_eq!(LogLevel::Registry.to_string(), "REGISTRY");
        assert_eq!(LogLevel::Error.to_string(), "ERROR");
    }

    #[test]
    fn test_tweak_kind_display() {
        assert_eq!(TweakKind::Toggle.to_string(), "toggle");
        assert_eq!(TweakKind::OneShot.to_string(), "one-shot");
        assert_eq!(TweakKind::from_str("one-shot").unwrap(), TweakKind::OneShot);
    }

    #[test]
    fn test_serde_roundtrip() {
        let original = ConfigScope::Machine;
        let json = serde_json::to_string(&original).unwrap();
        let parsed: ConfigScope = serde_json::from_str(&json).unwrap();
        assert_eq!(original, parsed);
    }
}
