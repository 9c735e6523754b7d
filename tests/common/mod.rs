//! Shared test doubles for integration tests
//!
//! `MockBackend` records every backend call in order and fails exactly the
//! calls whose path/name/command contains one of the configured substrings,
//! so tests can inject a failure into a single tweak.

#![allow(dead_code)] // Not every integration test uses every helper

use std::sync::Mutex;

use tweaktui::backend::{ActionBackend, ActionOutcome};
use tweaktui::catalog::RegData;
use tweaktui::types::ConfigScope;

/// One recorded backend call, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    SetValue {
        scope: ConfigScope,
        path: String,
        name: String,
    },
    RunCommand {
        command: String,
    },
}

impl RecordedCall {
    /// Text the failure matcher runs against.
    fn haystack(&self) -> String {
        match self {
            RecordedCall::SetValue { path, name, .. } => format!("{}\\{}", path, name),
            RecordedCall::RunCommand { command } => command.clone(),
        }
    }
}

/// Recording backend with scriptable failures.
#[derive(Default)]
pub struct MockBackend {
    calls: Mutex<Vec<RecordedCall>>,
    fail_matching: Vec<String>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that fails every call whose target contains one of the
    /// given substrings.
    pub fn failing(substrings: &[&str]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_matching: substrings.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RecordedCall) -> ActionOutcome {
        let fails = self
            .fail_matching
            .iter()
            .any(|s| call.haystack().contains(s));
        self.calls.lock().unwrap().push(call);
        if fails {
            ActionOutcome::failure("injected failure")
        } else {
            ActionOutcome::success("ok")
        }
    }
}

impl ActionBackend for MockBackend {
    fn set_value(
        &self,
        scope: ConfigScope,
        path: &str,
        name: &str,
        _data: &RegData,
    ) -> ActionOutcome {
        self.record(RecordedCall::SetValue {
            scope,
            path: path.to_string(),
            name: name.to_string(),
        })
    }

    fn run_command(&self, command: &str) -> ActionOutcome {
        self.record(RecordedCall::RunCommand {
            command: command.to_string(),
        })
    }
}
