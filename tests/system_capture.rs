//! Diagnostic capture end to end, isolated in its own test process
#![cfg(feature = "system-capture")]

use daylog::capture::SystemCaptureLayer;
use daylog::{global, LoggerConfig};
use tempfile::TempDir;
use tracing_subscriber::prelude::*;

#[test]
fn test_captured_events_are_tagged_system() {
    let temp_dir = TempDir::new().unwrap();
    let logger = global::instance(&LoggerConfig::new("captureapp").with_base_dir(temp_dir.path()));

    let subscriber = tracing_subscriber::registry().with(SystemCaptureLayer);
    let _guard = tracing::subscriber::set_default(subscriber);

    tracing::info!("status update");
    tracing::error!("critical condition");

    let content = std::fs::read_to_string(logger.file_path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert!(lines
        .iter()
        .any(|l| l.starts_with(" Info ") && l.contains("System") && l.contains("status update")));
    assert!(lines.iter().any(|l| l.starts_with(" Error")
        && l.contains("System")
        && l.contains("critical condition")));
}
