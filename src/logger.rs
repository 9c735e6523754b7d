//! Append-only audit log
//!
//! Every observable event of a batch run — informational notes, command
//! output, value writes, failures — lands here as a timestamped, leveled
//! entry. The sink is one UTF-8 text file per process run, named from the
//! process start time, held open for the process lifetime. Writers serialize
//! on an internal mutex; the engine worker and the UI thread may both log.
//!
//! This is the record of truth for what a batch actually did. It is distinct
//! from the `tracing` diagnostics, which are developer-facing.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;
use tracing::warn;

use crate::error::Result;
use crate::types::LogLevel;

/// Process-lifetime audit sink.
pub struct AuditLog {
    path: PathBuf,
    inner: Mutex<Sink>,
}

struct Sink {
    file: File,
    /// In-memory mirror of the file, served by [`AuditLog::contents`].
    buffer: String,
}

impl AuditLog {
    /// Open a new sink under `dir`, creating the directory if needed.
    ///
    /// The file name is fixed at construction from the current time and never
    /// changes for the process lifetime.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let stamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
        let path = dir.join(format!("tweaktui_{}.log", stamp));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            path,
            inner: Mutex::new(Sink {
                file,
                buffer: String::new(),
            }),
        })
    }

    /// Append one entry and return its formatted text.
    ///
    /// Format: `[HH:MM:SS] [LEVEL] message`, with a `    >> Details: ...`
    /// line when `details` is non-empty. A sink write failure is reported via
    /// `tracing` and otherwise ignored — a full disk must not abort a batch.
    pub fn log(&self, level: LogLevel, message: &str, details: &str) -> String {
        let timestamp = Local::now().format("%H:%M:%S");
        let mut entry = format!("[{}] [{}] {}", timestamp, level, message);
        if !details.is_empty() {
            entry.push_str("\n    >> Details: ");
            entry.push_str(details);
        }

        match self.inner.lock() {
            Ok(mut sink) => {
                if let Err(e) = writeln!(sink.file, "{}", entry) {
                    warn!("audit sink write failed: {}", e);
                }
                sink.buffer.push_str(&entry);
                sink.buffer.push('\n');
            }
            Err(e) => warn!("audit sink mutex poisoned: {}", e),
        }

        entry
    }

    /// The accumulated sink contents, for the log view.
    pub fn contents(&self) -> String {
        match self.inner.lock() {
            Ok(sink) => sink.buffer.clone(),
            Err(_) => String::new(),
        }
    }

    /// Path of the sink file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
