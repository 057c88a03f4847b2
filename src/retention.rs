//! Log file retention management
//!
//! Age-based cleanup over the files directly inside the log directory. Every
//! regular file old enough is removed, whether or not this logger wrote it.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local, NaiveDate};

/// Delete regular files in `log_dir` whose last modification date is more
/// than `max_age_days` days before today
///
/// The comparison is strict: a file exactly `max_age_days` old is retained.
/// The scan is non-recursive, deletion is best-effort, and a missing
/// directory deletes nothing. Returns the number of files deleted.
pub fn delete_old_files(log_dir: &Path, max_age_days: u64) -> usize {
    let today = Local::now().date_naive();

    let Ok(entries) = fs::read_dir(log_dir) else {
        return 0;
    };

    let mut deleted = 0;
    for entry in entries.flatten() {
        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        if !metadata.is_file() {
            continue;
        }
        let Ok(modified) = metadata.modified() else {
            continue;
        };

        let file_date = DateTime::<Local>::from(modified).date_naive();
        if is_expired(file_date, today, max_age_days) && fs::remove_file(entry.path()).is_ok() {
            deleted += 1;
        }
    }

    deleted
}

/// Strict greater-than age check, in whole days
fn is_expired(file_date: NaiveDate, today: NaiveDate, max_age_days: u64) -> bool {
    (today - file_date).num_days() > max_age_days as i64
}
