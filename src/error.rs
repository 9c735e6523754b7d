//! Error handling module for tweaktui
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the application should use these types for consistency.
//!
//! Structural errors (`NotFound`, `UnknownPreset`, `EmptySelection`) surface
//! synchronously from `resolve`/`run` before any side effect happens. Host-level
//! action failures are never represented here: they travel as
//! [`ActionOutcome`](crate::backend::ActionOutcome) values and end up in the
//! execution record instead of aborting a batch.

use thiserror::Error;

/// Main error type for tweaktui
#[derive(Error, Debug)]
pub enum TweakError {
    /// A tweak id that is not present in the catalog it was resolved against
    #[error("tweak not found in catalog: {0}")]
    NotFound(String),

    /// A preset name outside the known vocabulary
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// An apply run was requested with nothing selected
    #[error("no tweaks selected")]
    EmptySelection,

    /// IO errors (log sink, plan files, terminal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors (plan files)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// State errors (mutex poisoning, invalid internal state)
    #[error("State error: {0}")]
    State(String),
}

/// Result type alias for tweaktui operations
pub type Result<T> = std::result::Result<T, TweakError>;

// Convenient error constructors
impl TweakError {
    /// Create a not-found error for a tweak id
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Create an unknown-preset error
    pub fn unknown_preset(name: impl Into<String>) -> Self {
        Self::UnknownPreset(name.into())
    }

    /// Create a state error
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }
}
