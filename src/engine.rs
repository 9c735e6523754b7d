//! Execution engine — applies a selection against a catalog, in catalog order
//!
//! One failing tweak never aborts the batch: every action outcome is captured
//! as data, logged, and folded into the tweak's aggregate outcome, and the
//! engine moves on to the next selected tweak. Only structural problems
//! (empty selection, an id missing from the catalog) fail the call, and they
//! do so before any side effect happens.
//!
//! The engine is transport-agnostic: progress and log entries go to caller
//! supplied callbacks. The TUI wires them to an mpsc channel drained on the
//! UI thread; the headless CLI prints them directly.

use std::collections::BTreeSet;

use tracing::info;

use crate::backend::ActionBackend;
use crate::catalog::{restore_point_action, Action, Catalog, TweakId};
use crate::error::{Result, TweakError};
use crate::logger::AuditLog;
use crate::types::LogLevel;

/// Aggregate outcome of one tweak within a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TweakOutcome {
    Success,
    /// Carries the first failing action's diagnostic output.
    Failed(String),
}

/// One row of an [`ExecutionRecord`].
#[derive(Debug, Clone)]
pub struct ExecutionEntry {
    pub id: TweakId,
    pub outcome: TweakOutcome,
}

/// Ordered per-run record of (tweak, outcome) pairs.
///
/// Created when a run starts, appended to as each tweak completes, and
/// immutable once `run` returns it.
#[derive(Debug, Clone, Default)]
pub struct ExecutionRecord {
    entries: Vec<ExecutionEntry>,
}

impl ExecutionRecord {
    fn push(&mut self, id: TweakId, outcome: TweakOutcome) {
        self.entries.push(ExecutionEntry { id, outcome });
    }

    pub fn entries(&self) -> &[ExecutionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.outcome == TweakOutcome::Success)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.entries.len() - self.succeeded()
    }
}

/// Apply `selection` against `catalog` in catalog order.
///
/// - Fails fast with [`TweakError::EmptySelection`] on an empty selection and
///   with [`TweakError::NotFound`] if the selection references an id the
///   catalog does not contain — both before any backend call.
/// - Unconditionally performs the restore-point action first, best-effort:
///   its failure is logged and the run continues.
/// - `on_progress(completed, total)` fires once per selected tweak, with
///   `total == selection.len()` and `completed` counting 1..=total.
/// - `on_log` receives every formatted audit entry as it is written.
pub fn run<P, L>(
    catalog: &Catalog,
    selection: &BTreeSet<TweakId>,
    backend: &dyn ActionBackend,
    audit: &AuditLog,
    mut on_progress: P,
    mut on_log: L,
) -> Result<ExecutionRecord>
where
    P: FnMut(usize, usize),
    L: FnMut(&str),
{
    if selection.is_empty() {
        return Err(TweakError::EmptySelection);
    }
    for id in selection {
        catalog.get(*id)?;
    }

    let total = selection.len();
    info!("starting batch of {} tweaks", total);
    on_log(&audit.log(
        LogLevel::Info,
        &format!("Starting batch: {} tweaks selected", total),
        "",
    ));

    // Defense in depth, not a precondition: a failed restore point is noted
    // and the batch still runs.
    let restore = restore_point_action();
    let outcome = backend.apply(&restore);
    log_action(audit, &mut on_log, &restore, outcome.ok, &outcome.output);
    if !outcome.ok {
        on_log(&audit.log(
            LogLevel::Error,
            "Restore point creation failed; continuing without it",
            &outcome.output,
        ));
    }

    let mut record = ExecutionRecord::default();
    let mut completed = 0;

    for tweak in catalog.all().iter().filter(|t| selection.contains(&t.id)) {
        on_log(&audit.log(LogLevel::Info, &format!("Applying: {}", tweak.name), ""));

        let mut failure: Option<String> = None;
        for action in &tweak.actions {
            let outcome = backend.apply(action);
            log_action(audit, &mut on_log, action, outcome.ok, &outcome.output);
            if !outcome.ok && failure.is_none() {
                failure = Some(outcome.output);
            }
        }

        let outcome = match failure {
            None => TweakOutcome::Success,
            Some(reason) => {
                on_log(&audit.log(
                    LogLevel::Error,
                    &format!("Tweak failed: {}", tweak.name),
                    &reason,
                ));
                TweakOutcome::Failed(reason)
            }
        };

        record.push(tweak.id, outcome);
        completed += 1;
        on_progress(completed, total);
    }

    on_log(&audit.log(
        LogLevel::Info,
        &format!(
            "Batch complete: {} applied, {} failed",
            record.succeeded(),
            record.failed()
        ),
        "",
    ));

    Ok(record)
}

/// Log one action outcome at the level matching its kind.
fn log_action(
    audit: &AuditLog,
    on_log: &mut impl FnMut(&str),
    action: &Action,
    ok: bool,
    output: &str,
) {
    let entry = match (action, ok) {
        (Action::SetValue { .. }, true) => {
            audit.log(LogLevel::Registry, &format!("Set {}", action.describe()), "")
        }
        (Action::SetValue { .. }, false) => audit.log(
            LogLevel::Error,
            &format!("Failed to set {}", action.describe()),
            output,
        ),
        (Action::RunCommand { command }, true) => {
            audit.log(LogLevel::CmdOut, &format!("Ran: {}", command), output)
        }
        (Action::RunCommand { command }, false) => {
            audit.log(LogLevel::CmdErr, &format!("Command failed: {}", command), output)
        }
    };
    on_log(&entry);
}
