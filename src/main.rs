use daylog::{global, LoggerConfig, Severity};

fn main() {
    let config = LoggerConfig::new("daylog-demo").with_prefix("demo");
    let logger = global::instance(&config);

    // Clean up old logs (7-day retention)
    let removed = logger.delete_old_files(7);
    if removed > 0 {
        logger.log(
            Severity::Info,
            "main",
            &format!("Removed {removed} old log files"),
        );
    }

    logger.log(Severity::Info, "main", "Demo starting");

    logger.set_threshold(Severity::Debug);
    logger.log(Severity::Trace, "main", "Below threshold, not written");
    logger.log(Severity::Debug, "main", "Diagnostic detail");
    logger.log(Severity::Warn, "main", "Recoverable oddity");

    // Rejected without touching the threshold; logged as an error instead
    logger.set_threshold_int(9);

    println!("Log written to {}", logger.file_path().display());
}
