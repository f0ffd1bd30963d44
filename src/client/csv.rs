// CSV export of the currently filtered view.
//
// Column and quoting rules match the entry screen's export: name and notes
// are always quoted with embedded double-quotes doubled, category is bare,
// and the date is the en-US short form.

use chrono::{DateTime, NaiveDate, Utc};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::modules::entries::core::entry::Entry;

pub const EXPORT_HEADER: &str = "Name,Category,Notes,Date Added";

pub fn to_csv<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> String {
    let mut lines = vec![EXPORT_HEADER.to_string()];
    for entry in entries {
        lines.push(format!(
            "{},{},{},{}",
            quote(&entry.name),
            entry.category,
            quote(&entry.notes),
            short_date(entry.created_at),
        ));
    }
    lines.join("\n")
}

/// `stage-notes-<YYYY-MM-DD>.csv`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("stage-notes-{}.csv", date.format("%Y-%m-%d"))
}

/// Writes the export into `dir`, named with the current date, and returns
/// the full path. The filesystem analog of the browser download.
pub fn write_export<'a>(
    dir: &Path,
    entries: impl IntoIterator<Item = &'a Entry>,
) -> io::Result<PathBuf> {
    let path = dir.join(export_file_name(Utc::now().date_naive()));
    fs::write(&path, to_csv(entries))?;
    Ok(path)
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn short_date(at: DateTime<Utc>) -> String {
    at.format("%-m/%-d/%Y").to_string()
}
