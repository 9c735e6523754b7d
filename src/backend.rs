//! Action backend — the only code that touches the host
//!
//! Two primitive operations exist: upserting a persistent configuration value
//! and running an external command. Host-level failures are translated into
//! [`ActionOutcome`] values at this boundary; nothing here panics or returns
//! an error type, so a misbehaving host command can never abort a batch.
//!
//! The backend holds no state between calls.

use std::process::Command;
use tracing::debug;

use crate::catalog::{Action, RegData};
use crate::types::ConfigScope;

/// Result of one backend call, always carried as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Whether the action took effect.
    pub ok: bool,
    /// Combined diagnostic output (command stdout/stderr, or an error text).
    pub output: String,
}

impl ActionOutcome {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            ok: true,
            output: output.into(),
        }
    }

    pub fn failure(output: impl Into<String>) -> Self {
        Self {
            ok: false,
            output: output.into(),
        }
    }
}

/// The two primitive actions, behind a trait so the engine can run against
/// the real host, a dry-run stand-in, or a recording mock in tests.
pub trait ActionBackend {
    /// Upsert a value in the persistent configuration store: the key path is
    /// created if absent, then the value is written.
    fn set_value(&self, scope: ConfigScope, path: &str, name: &str, data: &RegData)
        -> ActionOutcome;

    /// Run an external command synchronously, capturing combined output.
    fn run_command(&self, command: &str) -> ActionOutcome;

    /// Dispatch a catalog [`Action`] to the matching primitive.
    fn apply(&self, action: &Action) -> ActionOutcome {
        match action {
            Action::SetValue {
                scope,
                path,
                name,
                data,
            } => self.set_value(*scope, path, name, data),
            Action::RunCommand { command } => self.run_command(command),
        }
    }
}

/// Backend that performs actions against the real host.
///
/// Commands go through PowerShell on Windows and `sh -c` elsewhere; value
/// writes go to the Windows registry. On non-Windows hosts a value write
/// reports a failed outcome instead of pretending a store exists.
pub struct HostBackend;

impl ActionBackend for HostBackend {
    fn set_value(
        &self,
        scope: ConfigScope,
        path: &str,
        name: &str,
        data: &RegData,
    ) -> ActionOutcome {
        debug!("set_value: {} {}\\{}", scope, path, name);
        set_value_host(scope, path, name, data)
    }

    fn run_command(&self, command: &str) -> ActionOutcome {
        debug!("run_command: {}", command);
        match shell_command(command).output() {
            Err(e) => ActionOutcome::failure(format!("failed to launch command: {}", e)),
            Ok(output) => {
                let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
                let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
                let combined = match (stdout.is_empty(), stderr.is_empty()) {
                    (false, false) => format!("{}\n{}", stdout, stderr),
                    (false, true) => stdout,
                    (true, false) => stderr,
                    (true, true) => String::new(),
                };
                if output.status.success() {
                    ActionOutcome::success(combined)
                } else if combined.is_empty() {
                    ActionOutcome::failure(format!(
                        "command exited with code {}",
                        output.status.code().unwrap_or(-1)
                    ))
                } else {
                    ActionOutcome::failure(combined)
                }
            }
        }
    }
}

/// Build the platform shell invocation for a command line.
fn shell_command(command: &str) -> Command {
    #[cfg(windows)]
    {
        let mut cmd = Command::new("powershell");
        cmd.args(["-Command", command]);
        cmd
    }
    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    }
}

#[cfg(windows)]
fn set_value_host(scope: ConfigScope, path: &str, name: &str, data: &RegData) -> ActionOutcome {
    use winreg::enums::{HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE};
    use winreg::RegKey;

    let root = RegKey::predef(match scope {
        ConfigScope::Machine => HKEY_LOCAL_MACHINE,
        ConfigScope::User => HKEY_CURRENT_USER,
    });

    // create_subkey opens the key when it exists and creates the whole path
    // otherwise, which is exactly the upsert contract.
    let (key, _) = match root.create_subkey(path) {
        Ok(opened) => opened,
        Err(e) => {
            return ActionOutcome::failure(format!("failed to open {}\\{}: {}", scope, path, e))
        }
    };

    let written = match data {
        RegData::Dword(v) => key.set_value(name, v),
        RegData::Sz(s) => key.set_value(name, s),
    };

    match written {
        Ok(()) => ActionOutcome::success(format!("{}\\{} = {}", path, name, data)),
        Err(e) => ActionOutcome::failure(format!("failed to set {}\\{}: {}", path, name, e)),
    }
}

#[cfg(not(windows))]
fn set_value_host(scope: ConfigScope, path: &str, name: &str, _data: &RegData) -> ActionOutcome {
    ActionOutcome::failure(format!(
        "configuration store unavailable on this host: {}\\{}\\{}",
        scope, path, name
    ))
}

/// Backend for `--dry-run`: reports every action as what it would have done,
/// touching nothing.
pub struct DryRunBackend;

impl ActionBackend for DryRunBackend {
    fn set_value(
        &self,
        scope: ConfigScope,
        path: &str,
        name: &str,
        data: &RegData,
    ) -> ActionOutcome {
        ActionOutcome::success(format!(
            "[dry-run] would set {}: {}\\{} -> {}",
            scope, path, name, data
        ))
    }

    fn run_command(&self, command: &str) -> ActionOutcome {
        ActionOutcome::success(format!("[dry-run] would run: {}", command))
    }
}
