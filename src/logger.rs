//! Core file-backed logger
//!
//! Owns one append-mode file handle for its whole lifetime and writes one
//! formatted line per message. The file path is fixed at construction; a date
//! rollover during a long run does not switch files.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::Local;

use crate::config::LoggerConfig;
use crate::retention;
use crate::severity::Severity;

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Source tag used for the logger's own diagnostics
const SELF_SOURCE: &str = "Logger_Class";

/// Diagnostic printed when a fatal message shuts the process down
const FATAL_DIAGNOSTIC: &str = "Closing application due to fatal error, please check the log file";

/// Invoked after a fatal message has been written and the file closed
pub type FatalHook = Box<dyn Fn(&str) + Send + Sync>;

struct Inner {
    threshold: Severity,
    file: Option<File>,
}

/// File-backed leveled logger
pub struct Logger {
    log_dir: PathBuf,
    log_file: PathBuf,
    inner: Mutex<Inner>,
    fatal_hook: FatalHook,
}

impl Logger {
    /// Create a logger whose fatal path terminates the process
    pub fn new(config: &LoggerConfig) -> Self {
        Self::with_fatal_hook(
            config,
            Box::new(|diagnostic| {
                eprintln!("{diagnostic}");
                process::exit(1);
            }),
        )
    }

    /// Create a logger with a custom fatal outcome
    ///
    /// A failed file open is reported to stderr but does not fail
    /// construction; the logger stays alive and file writes become no-ops.
    pub fn with_fatal_hook(config: &LoggerConfig, fatal_hook: FatalHook) -> Self {
        let log_dir = config.log_dir();
        let log_file = config.log_file();

        let file = match open_log_file(&log_dir, &log_file) {
            Ok(file) => Some(file),
            Err(err) => {
                eprintln!("Failed to create log file {}: {err:#}", log_file.display());
                None
            }
        };

        Self {
            log_dir,
            log_file,
            inner: Mutex::new(Inner {
                threshold: Severity::Trace,
                file,
            }),
            fatal_hook,
        }
    }

    /// Write one log line if the severity passes the threshold
    ///
    /// A `Fatal` message closes the file and invokes the fatal hook even when
    /// nothing could be written. With the default hook this call does not
    /// return.
    pub fn log(&self, severity: Severity, written_by: &str, message: &str) {
        if let Ok(mut inner) = self.inner.lock() {
            if severity >= inner.threshold {
                if let Some(file) = inner.file.as_mut() {
                    let line = format_line(severity, written_by, message);
                    let _ = file.write_all(line.as_bytes());
                    let _ = file.flush();

                    #[cfg(feature = "console-echo")]
                    eprint!("{line}");
                }
            }

            if severity == Severity::Fatal {
                // Drop the handle before terminating so the line is on disk
                inner.file = None;
                drop(inner);
                (self.fatal_hook)(FATAL_DIAGNOSTIC);
            }
        }
    }

    /// Set the minimum severity that will be written
    pub fn set_threshold(&self, threshold: Severity) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.threshold = threshold;
        }
    }

    /// Integer form of [`set_threshold`](Self::set_threshold)
    ///
    /// Values outside 0..=5 are rejected: the threshold is left unchanged and
    /// one Error-level line describing the input is written instead.
    pub fn set_threshold_int(&self, value: i64) {
        match Severity::from_int(value) {
            Ok(threshold) => self.set_threshold(threshold),
            Err(err) => self.log(Severity::Error, SELF_SOURCE, &err.to_string()),
        }
    }

    /// Current threshold
    pub fn threshold(&self) -> Severity {
        self.inner
            .lock()
            .map(|inner| inner.threshold)
            .unwrap_or(Severity::Trace)
    }

    /// Current threshold as an integer, 0 (Trace) through 5 (Fatal)
    pub fn threshold_int(&self) -> u8 {
        self.threshold().as_u8()
    }

    /// Full path of the log file
    pub fn file_path(&self) -> &Path {
        &self.log_file
    }

    /// Directory the log file lives in
    pub fn dir_path(&self) -> &Path {
        &self.log_dir
    }

    /// Delete files in the log directory older than `max_age_days` days
    ///
    /// Returns the number of files deleted.
    pub fn delete_old_files(&self, max_age_days: u64) -> usize {
        retention::delete_old_files(&self.log_dir, max_age_days)
    }
}

fn open_log_file(log_dir: &Path, log_file: &Path) -> Result<File> {
    fs::create_dir_all(log_dir).context("Failed to create log directory")?;

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .context("Failed to open log file")
}

/// Format one log line
///
/// ` <token> | HH:MM:SS | <written_by, left-justified to 25> | <message> `
/// followed by the platform line terminator. The source field is padded but
/// never truncated.
fn format_line(severity: Severity, written_by: &str, message: &str) -> String {
    format!(
        " {} | {} | {:<25} | {} {}",
        severity.as_str(),
        Local::now().format("%H:%M:%S"),
        written_by,
        message,
        LINE_ENDING
    )
}
