//! Process-wide logger instance
//!
//! Get-or-create access to one shared [`Logger`]. The first caller's config
//! wins; later calls return the existing instance and their argument is
//! ignored, including a different prefix. Code that prefers explicit wiring
//! can construct [`Logger`] values directly and skip this module entirely.

use std::sync::OnceLock;

use crate::config::LoggerConfig;
use crate::logger::Logger;

static INSTANCE: OnceLock<Logger> = OnceLock::new();

/// Return the shared logger, constructing it from `config` on the first call
pub fn instance(config: &LoggerConfig) -> &'static Logger {
    INSTANCE.get_or_init(|| Logger::new(config))
}

/// Return the shared logger if one has been created
pub fn try_instance() -> Option<&'static Logger> {
    INSTANCE.get()
}
