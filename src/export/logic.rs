// src/export/logic.rs

use crate::core::report::ActivityReport;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::blocks_to_rows;
use crate::ui::messages::warning;
use std::path::Path;
use tracing::info;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Writes `report` to `file`.
    ///
    /// - `format`: csv (flow blocks only) | json (whole report)
    /// - `file`: absolute path of the output file
    /// - `force`: overwrite without asking
    pub fn export(
        report: &ActivityReport,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        if report.blocks.is_empty() {
            warning("No flow anomalies to export for this activity.");
        }

        info!(format = format.as_str(), path = %path.display(), "exporting report");

        match format {
            ExportFormat::Csv => export_csv(&blocks_to_rows(&report.blocks), path)?,
            ExportFormat::Json => export_json(report, path)?,
        }

        Ok(())
    }
}
