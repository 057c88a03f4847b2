//! Severity levels for log filtering
//!
//! Levels are ordered ascending; a message is written only when its severity
//! is at or above the logger's current threshold.

use std::fmt;

use thiserror::Error;

/// Error returned when an integer severity is outside the 0..=5 range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid log level {0}, log level must be between 0 and 5")]
pub struct InvalidSeverity(pub i64);

/// Log severity, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

impl Severity {
    /// Fixed-width token used in log lines (width 5, space-padded)
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "Trace",
            Severity::Debug => "Debug",
            Severity::Info => "Info ",
            Severity::Warn => "Warn ",
            Severity::Error => "Error",
            Severity::Fatal => "Fatal",
        }
    }

    /// Integer form, 0 (Trace) through 5 (Fatal)
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Map an integer to a severity; values outside 0..=5 are rejected
    pub fn from_int(value: i64) -> Result<Self, InvalidSeverity> {
        match value {
            0 => Ok(Severity::Trace),
            1 => Ok(Severity::Debug),
            2 => Ok(Severity::Info),
            3 => Ok(Severity::Warn),
            4 => Ok(Severity::Error),
            5 => Ok(Severity::Fatal),
            other => Err(InvalidSeverity(other)),
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = InvalidSeverity;

    fn try_from(value: u8) -> Result<Self, InvalidSeverity> {
        Severity::from_int(i64::from(value))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().trim_end())
    }
}
