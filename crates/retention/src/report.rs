//! Report text rendering

use chrono::NaiveDate;
use upkeep_types::ExpiredFile;

/// One line per deleted file: `{path} ({timestamp})`
#[must_use]
pub fn render_deleted_files(entries: &[ExpiredFile]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!(
            "{} ({})\n",
            entry.path.display(),
            entry.modified_at.format("%Y-%m-%d %H:%M:%S")
        ));
    }
    out
}

/// Title for the age-based deletion report
#[must_use]
pub fn expired_report_title(today: NaiveDate) -> String {
    format!("{} - old files deleted report", today.format("%d-%b-%Y"))
}

/// Title for the over-quota deletion report
#[must_use]
pub fn eviction_report_title(today: NaiveDate) -> String {
    format!("{} - over-quota file deletion report", today.format("%d-%b-%Y"))
}
