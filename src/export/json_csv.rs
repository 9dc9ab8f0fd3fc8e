// src/export/json_csv.rs

use crate::core::report::ActivityReport;
use crate::errors::AppResult;
use crate::export::{BlockExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Full report (header, metrics, blocks), pretty-printed.
pub(crate) fn export_json(report: &ActivityReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(report)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// One row per flow block (header comes from serde field names).
pub(crate) fn export_csv(rows: &[BlockExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    if rows.is_empty() {
        wtr.write_record(["start", "end", "duration_minutes", "status", "severity", "message"])?;
    }

    for item in rows {
        wtr.serialize(item)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
