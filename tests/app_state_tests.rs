//! Tests for Application State Management
//!
//! These tests verify:
//! - AppState default initialization
//! - AppMode transitions implied by engine events are representable

use tweaktui::app::{AppMode, AppState};

#[test]
fn test_app_state_default_mode_is_browse() {
    let state = AppState::default();
    assert_eq!(state.mode, AppMode::Browse);
}

#[test]
fn test_app_state_default_selection_is_empty() {
    let state = AppState::default();
    assert!(state.selected.is_empty());
    assert_eq!(state.cursor, 0);
}

#[test]
fn test_app_state_default_has_key_hints() {
    let state = AppState::default();
    assert!(state.status_message.contains("toggle"));
    assert!(state.status_message.contains("apply"));
}

#[test]
fn test_app_state_default_has_no_run_artifacts() {
    let state = AppState::default();
    assert!(state.progress.is_none());
    assert!(state.record.is_none());
    assert!(state.log_lines.is_empty());
    assert_eq!(state.log_scroll, 0);
}

#[test]
fn test_app_state_default_dialog_starts_on_cancel() {
    let state = AppState::default();
    assert_eq!(state.confirm_selection, 0);
    assert!(state.pre_log_mode.is_none());
}

#[test]
fn test_app_mode_equality() {
    assert_eq!(AppMode::Browse, AppMode::Browse);
    assert_ne!(AppMode::Running, AppMode::Complete);
}
