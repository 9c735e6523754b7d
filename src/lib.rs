//! tweaktui Library
//!
//! Core functionality for the tweaktui batch system-tweak tool: the tweak
//! catalog, preset resolution, the sequential execution engine, the host
//! action backend, and the audit log. The TUI (`app`, `ui`, `theme`) and the
//! headless CLI are thin drivers over this core.

pub mod app;
pub mod backend;
pub mod catalog;
pub mod cli;
pub mod engine;
pub mod error;
pub mod logger;
pub mod plan;
pub mod resolver;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState, EngineEvent};
pub use backend::{ActionBackend, ActionOutcome, DryRunBackend, HostBackend};
pub use catalog::{restore_point_action, Action, Catalog, RegData, Tweak, TweakId};
pub use engine::{ExecutionEntry, ExecutionRecord, TweakOutcome};
pub use error::{Result, TweakError};
pub use logger::AuditLog;
pub use plan::ApplyPlan;
pub use types::{Category, ConfigScope, LogLevel, Preset, TweakKind};
