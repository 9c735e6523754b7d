//! User interface rendering module
//!
//! This module is organized into submodules for better maintainability:
//! - `header` - Banner, title, and progress bar rendering
//! - `browse` - Catalog list and tweak detail sidebar
//! - `run` - Batch progress, completion summary, and the log view
//! - `dialogs` - Confirmation dialog rendering
//!
//! Rendering is pure: every function takes the current [`AppState`] snapshot
//! and draws; no view mutates state.

pub mod header;

mod browse;
mod dialogs;
mod run;

use ratatui::Frame;

use crate::app::{AppMode, AppState};
use crate::catalog::Catalog;

/// Render the current frame for the given application state
pub fn render(f: &mut Frame, state: &AppState, catalog: &Catalog) {
    match state.mode {
        AppMode::Browse => browse::render_browse(f, state, catalog),
        AppMode::ConfirmApply => {
            browse::render_browse(f, state, catalog);
            dialogs::render_confirm(f, state);
        }
        AppMode::Running | AppMode::Complete => run::render_run(f, state),
        AppMode::LogView => run::render_log_view(f, state),
    }
}
