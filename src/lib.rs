//! Daylog - date-stamped file logging with severity filtering and retention
//!
//! One [`Logger`] owns one append-mode log file named after the application
//! and today's date. Messages below the runtime threshold are skipped, Fatal
//! messages shut the process down after writing, and old files can be swept
//! from the log directory by age.

pub mod config;
pub mod global;
pub mod logger;
pub mod retention;
pub mod severity;

#[cfg(feature = "system-capture")]
pub mod capture;

pub use config::LoggerConfig;
pub use logger::Logger;
pub use severity::{InvalidSeverity, Severity};
