//! Log directory and file path resolution
//!
//! Log files live in a fixed `Logs` subdirectory under a platform-appropriate
//! writable location, named `<app>_<prefix_><YYYY-MM-DD>.log`.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};

/// Fixed subdirectory appended to the writable base directory
const LOG_SUBDIR: &str = "Logs";

/// Settings used to resolve where a logger writes
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Application name, used in both directory and file naming
    pub app_name: String,
    /// Optional file name prefix inserted between app name and date
    pub prefix: String,
    /// Explicit base directory; when unset, a platform location is resolved
    pub base_dir: Option<PathBuf>,
}

impl LoggerConfig {
    /// Create a config for the given application name with no prefix
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            prefix: String::new(),
            base_dir: None,
        }
    }

    /// Set the file name prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Override the base directory (skips platform resolution)
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    /// Resolve the log directory: `<base>/Logs`
    pub fn log_dir(&self) -> PathBuf {
        let base = self
            .base_dir
            .clone()
            .unwrap_or_else(|| default_base_dir(&self.app_name));
        base.join(LOG_SUBDIR)
    }

    /// Resolve the full log file path for today's date
    pub fn log_file(&self) -> PathBuf {
        self.log_dir().join(log_file_name(
            &self.app_name,
            &self.prefix,
            Local::now().date_naive(),
        ))
    }
}

/// Platform writable base directory, falling back to a dotted directory under
/// the home directory, then to the current directory
fn default_base_dir(app_name: &str) -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join(app_name))
        .or_else(|| dirs::home_dir().map(|h| h.join(format!(".{app_name}"))))
        .unwrap_or_else(|| PathBuf::from(format!(".{app_name}")))
}

/// Compose the log file name for a given date
///
/// A non-empty prefix carries a trailing underscore, and the date keeps its
/// own separator, so prefix "A" yields `app_A__2026-08-30.log` while an empty
/// prefix yields `app__2026-08-30.log`.
pub(crate) fn log_file_name(app_name: &str, prefix: &str, date: NaiveDate) -> String {
    let prefix_component = if prefix.is_empty() {
        String::new()
    } else {
        format!("{prefix}_")
    };
    format!(
        "{}_{}_{}.log",
        app_name,
        prefix_component,
        date.format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_file_name_with_prefix() {
        let name = log_file_name("myapp", "App-Prefix", date(2026, 8, 30));
        assert_eq!(name, "myapp_App-Prefix__2026-08-30.log");
    }

    #[test]
    fn test_file_name_without_prefix() {
        let name = log_file_name("myapp", "", date(2026, 8, 30));
        assert_eq!(name, "myapp__2026-08-30.log");
    }

    #[test]
    fn test_log_dir_uses_base_override() {
        let config = LoggerConfig::new("myapp").with_base_dir("/tmp/somewhere");
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/somewhere/Logs"));
    }

    #[test]
    fn test_log_file_lives_in_log_dir() {
        let config = LoggerConfig::new("myapp")
            .with_prefix("p")
            .with_base_dir("/tmp/somewhere");
        let file = config.log_file();
        assert_eq!(file.parent().unwrap(), config.log_dir());
        let name = file.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("myapp_p__"));
        assert!(name.ends_with(".log"));
    }

    #[test]
    fn test_default_base_dir_does_not_panic() {
        // Resolution must always produce something, even without a home dir
        let dir = default_base_dir("myapp");
        assert!(!dir.as_os_str().is_empty());
    }
}
