//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode)
//! - Main module - App struct and event loop
//!
//! # Threading
//!
//! The UI thread owns all state. Each user-initiated batch spawns exactly one
//! worker thread running [`engine::run`]; the apply control is disabled for
//! the duration (`AppMode::Running`). The worker communicates back through an
//! `mpsc` channel of [`EngineEvent`]s which the event loop drains with
//! `try_recv`, so no callback ever touches UI state from the worker.

mod state;

pub use state::{AppMode, AppState};

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};

use crate::backend::{ActionBackend, DryRunBackend, HostBackend};
use crate::catalog::Catalog;
use crate::engine::{self, ExecutionRecord};
use crate::error::{Result, TweakError};
use crate::logger::AuditLog;
use crate::resolver;
use crate::types::Preset;
use crate::ui;

/// Messages sent from the engine worker to the main UI thread
#[derive(Debug)]
pub enum EngineEvent {
    /// One formatted audit log entry
    Log(String),
    /// A tweak completed; counts are (completed, total)
    Progress { completed: usize, total: usize },
    /// The batch finished with this record
    Finished(ExecutionRecord),
    /// The run never started (structural error)
    Aborted(String),
}

/// Main application struct
pub struct App {
    state: Arc<Mutex<AppState>>,
    catalog: Arc<Catalog>,
    audit: Arc<AuditLog>,
    /// Channel sender for engine events (cloned into the worker)
    event_tx: Sender<EngineEvent>,
    /// Channel receiver for engine events (polled in the main loop)
    event_rx: Receiver<EngineEvent>,
    dry_run: bool,
}

impl App {
    /// Create a new application instance
    pub fn new(catalog: Catalog, audit: AuditLog, dry_run: bool) -> Self {
        info!("Creating new App instance (dry_run={})", dry_run);
        let (event_tx, event_rx) = mpsc::channel();

        let mut state = AppState::default();
        state.log_path = audit.path().display().to_string();

        Self {
            state: Arc::new(Mutex::new(state)),
            catalog: Arc::new(catalog),
            audit: Arc::new(audit),
            event_tx,
            event_rx,
            dry_run,
        }
    }

    /// Helper function to safely lock the state mutex
    fn lock_state(&self) -> Result<MutexGuard<'_, AppState>> {
        self.state
            .lock()
            .map_err(|e| TweakError::state(format!("Mutex poisoned: {}", e)))
    }

    /// Run the main application loop
    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        info!("Starting main application loop");

        loop {
            // Drain engine events before rendering
            self.poll_engine_events()?;

            // Handle input events
            if crossterm::event::poll(Duration::from_millis(50))? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    if self.handle_key_event(key_event)? {
                        break; // Exit requested
                    }
                }
            }

            // Render UI
            let state = Arc::clone(&self.state);
            let catalog = Arc::clone(&self.catalog);
            terminal.draw(move |f| {
                let state = match state.lock() {
                    Ok(state) => state,
                    Err(_) => {
                        eprintln!("Fatal error: Mutex poisoned, cannot continue");
                        std::process::exit(1);
                    }
                };
                ui::render(f, &state, &catalog);
            })?;
        }

        Ok(())
    }

    /// Poll for engine events from the worker thread
    fn poll_engine_events(&mut self) -> Result<()> {
        // Process all pending messages without blocking
        while let Ok(event) = self.event_rx.try_recv() {
            let mut state = self
                .state
                .lock()
                .map_err(|e| TweakError::state(format!("Mutex poisoned: {}", e)))?;

            match event {
                EngineEvent::Log(entry) => {
                    for line in entry.lines() {
                        state.log_lines.push(line.to_string());
                    }
                    // Keep the log view pinned to the tail
                    state.log_scroll = state.log_lines.len().saturating_sub(1);
                }
                EngineEvent::Progress { completed, total } => {
                    state.progress = Some((completed, total));
                    state.status_message = format!("Applying tweaks... {}/{}", completed, total);
                }
                EngineEvent::Finished(record) => {
                    state.mode = AppMode::Complete;
                    state.status_message = format!(
                        "Batch complete: {} applied, {} failed. A restart is recommended.",
                        record.succeeded(),
                        record.failed()
                    );
                    state.record = Some(record);
                }
                EngineEvent::Aborted(reason) => {
                    state.mode = AppMode::Browse;
                    state.status_message = format!("Run aborted: {}", reason);
                }
            }
        }
        Ok(())
    }

    /// Handle keyboard input events. Returns `true` when the app should exit.
    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<bool> {
        let current_mode = {
            let state = self.lock_state()?;
            state.mode.clone()
        };

        match current_mode {
            // No input while a batch is in flight: the run always completes.
            AppMode::Running => Ok(false),
            AppMode::Browse => self.handle_browse_key(key_event),
            AppMode::ConfirmApply => self.handle_confirm_key(key_event),
            AppMode::Complete => self.handle_complete_key(key_event),
            AppMode::LogView => self.handle_log_view_key(key_event),
        }
    }

    fn handle_browse_key(&mut self, key_event: KeyEvent) -> Result<bool> {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
            KeyCode::Up => self.move_cursor(-1)?,
            KeyCode::Down => self.move_cursor(1)?,
            KeyCode::Home => self.set_cursor(0)?,
            KeyCode::End => self.set_cursor(self.catalog.len().saturating_sub(1))?,
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_current()?,
            KeyCode::Char('s') | KeyCode::Char('S') => self.apply_preset(Preset::Standard)?,
            KeyCode::Char('m') | KeyCode::Char('M') => self.apply_preset(Preset::Minimal)?,
            KeyCode::Char('c') | KeyCode::Char('C') => self.apply_preset(Preset::Clear)?,
            KeyCode::Char('a') | KeyCode::Char('A') => {
                let mut state = self.lock_state()?;
                if state.selected.is_empty() {
                    state.status_message = "Nothing selected - pick tweaks first".to_string();
                } else {
                    state.confirm_selection = 0;
                    state.mode = AppMode::ConfirmApply;
                }
            }
            KeyCode::Char('l') | KeyCode::Char('L') => self.open_log_view(AppMode::Browse)?,
            _ => {}
        }
        Ok(false)
    }

    fn handle_confirm_key(&mut self, key_event: KeyEvent) -> Result<bool> {
        match key_event.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                let mut state = self.lock_state()?;
                state.confirm_selection = if state.confirm_selection == 0 { 1 } else { 0 };
            }
            KeyCode::Enter => {
                let confirmed = {
                    let state = self.lock_state()?;
                    state.confirm_selection == 1
                };
                if confirmed {
                    self.start_run()?;
                } else {
                    let mut state = self.lock_state()?;
                    state.mode = AppMode::Browse;
                    state.status_message = "Apply cancelled".to_string();
                }
            }
            KeyCode::Esc => {
                let mut state = self.lock_state()?;
                state.mode = AppMode::Browse;
                state.status_message = "Apply cancelled".to_string();
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_complete_key(&mut self, key_event: KeyEvent) -> Result<bool> {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
            KeyCode::Enter | KeyCode::Esc => {
                let mut state = self.lock_state()?;
                state.mode = AppMode::Browse;
                state.progress = None;
                state.status_message =
                    "Space: toggle  S/M/C: presets  A: apply  L: log  Q: quit".to_string();
            }
            KeyCode::Char('l') | KeyCode::Char('L') => self.open_log_view(AppMode::Complete)?,
            _ => {}
        }
        Ok(false)
    }

    fn handle_log_view_key(&mut self, key_event: KeyEvent) -> Result<bool> {
        let mut state = self.lock_state()?;
        match key_event.code {
            KeyCode::Up => state.log_scroll = state.log_scroll.saturating_sub(1),
            KeyCode::Down => {
                if state.log_scroll + 1 < state.log_lines.len() {
                    state.log_scroll += 1;
                }
            }
            KeyCode::PageUp => state.log_scroll = state.log_scroll.saturating_sub(10),
            KeyCode::PageDown => {
                state.log_scroll =
                    (state.log_scroll + 10).min(state.log_lines.len().saturating_sub(1));
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('l') => {
                state.mode = state.pre_log_mode.take().unwrap_or(AppMode::Browse);
            }
            _ => {}
        }
        Ok(false)
    }

    fn move_cursor(&self, delta: isize) -> Result<()> {
        let mut state = self.lock_state()?;
        let len = self.catalog.len();
        if len == 0 {
            return Ok(());
        }
        let cursor = state.cursor as isize + delta;
        state.cursor = cursor.clamp(0, len as isize - 1) as usize;
        Ok(())
    }

    fn set_cursor(&self, cursor: usize) -> Result<()> {
        let mut state = self.lock_state()?;
        state.cursor = cursor.min(self.catalog.len().saturating_sub(1));
        Ok(())
    }

    /// Toggle selection of the tweak under the cursor
    fn toggle_current(&self) -> Result<()> {
        let mut state = self.lock_state()?;
        if let Some(tweak) = self.catalog.all().get(state.cursor) {
            let id = tweak.id;
            if !state.selected.remove(&id) {
                state.selected.insert(id);
            }
            let count = state.selected.len();
            state.status_message = format!("{} selected", count);
        }
        Ok(())
    }

    /// Replace the selection with a preset's membership set
    fn apply_preset(&self, preset: Preset) -> Result<()> {
        let selection = resolver::resolve(&self.catalog, preset);
        let mut state = self.lock_state()?;
        state.selected = selection;
        state.status_message = format!("Preset '{}': {} selected", preset, state.selected.len());
        debug!("preset {} resolved to {} tweaks", preset, state.selected.len());
        Ok(())
    }

    fn open_log_view(&self, return_mode: AppMode) -> Result<()> {
        let mut state = self.lock_state()?;
        state.pre_log_mode = Some(return_mode);
        state.log_scroll = state.log_lines.len().saturating_sub(1);
        state.mode = AppMode::LogView;
        Ok(())
    }

    /// Spawn the worker thread for one batch run
    fn start_run(&mut self) -> Result<()> {
        let selection = {
            let mut state = self.lock_state()?;
            state.mode = AppMode::Running;
            state.record = None;
            state.progress = Some((0, state.selected.len()));
            state.status_message = if self.dry_run {
                "Dry run in progress...".to_string()
            } else {
                "Applying tweaks...".to_string()
            };
            state.selected.clone()
        };

        info!("starting batch run of {} tweaks", selection.len());

        let catalog = Arc::clone(&self.catalog);
        let audit = Arc::clone(&self.audit);
        let tx = self.event_tx.clone();
        let dry_run = self.dry_run;

        thread::spawn(move || {
            let backend: Box<dyn ActionBackend> = if dry_run {
                Box::new(DryRunBackend)
            } else {
                Box::new(HostBackend)
            };

            let progress_tx = tx.clone();
            let log_tx = tx.clone();
            let result = engine::run(
                &catalog,
                &selection,
                backend.as_ref(),
                &audit,
                move |completed, total| {
                    let _ = progress_tx.send(EngineEvent::Progress { completed, total });
                },
                move |entry| {
                    let _ = log_tx.send(EngineEvent::Log(entry.to_string()));
                },
            );

            match result {
                Ok(record) => {
                    let _ = tx.send(EngineEvent::Finished(record));
                }
                Err(e) => {
                    let _ = tx.send(EngineEvent::Aborted(e.to_string()));
                }
            }
        });

        Ok(())
    }
}
