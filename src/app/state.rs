//! Application state definitions
//!
//! Contains all state-related types for the application including AppState
//! and the AppMode state machine.

use std::collections::BTreeSet;

use crate::catalog::TweakId;
use crate::engine::ExecutionRecord;

/// Application operating modes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Catalog browsing and selection - the entry point
    Browse,
    /// Confirmation dialog before a batch run
    ConfirmApply,
    /// A batch run is in progress; the apply control is disabled
    Running,
    /// The batch finished; summary is shown
    Complete,
    /// Full-screen audit log view
    LogView,
}

/// Main application state
///
/// Owned by the UI thread behind `Arc<Mutex<..>>`; the engine worker never
/// touches it directly - updates arrive as [`EngineEvent`](super::EngineEvent)s
/// drained by the event loop.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Currently selected tweak ids
    pub selected: BTreeSet<TweakId>,
    /// Cursor position in the catalog list (catalog order index)
    pub cursor: usize,
    /// Status message for user feedback
    pub status_message: String,
    /// Progress of the in-flight or last run, as (completed, total)
    pub progress: Option<(usize, usize)>,
    /// Audit log lines received so far
    pub log_lines: Vec<String>,
    /// Scroll offset in the log view
    pub log_scroll: usize,
    /// Record of the last completed run
    pub record: Option<ExecutionRecord>,
    /// Confirm dialog selection (0 = cancel, 1 = apply)
    pub confirm_selection: usize,
    /// Mode to return to when leaving the log view
    pub pre_log_mode: Option<AppMode>,
    /// Audit sink path, shown in the log view title
    pub log_path: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Browse,
            selected: BTreeSet::new(),
            cursor: 0,
            status_message: "Space: toggle  S/M/C: presets  A: apply  L: log  Q: quit"
                .to_string(),
            progress: None,
            log_lines: Vec::new(),
            log_scroll: 0,
            record: None,
            confirm_selection: 0,
            pre_log_mode: None,
            log_path: String::new(),
        }
    }
}
