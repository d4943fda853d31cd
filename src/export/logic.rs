// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::export::range::parse_range;
use crate::export::ExportFormat;
use crate::models::WorkEntry;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

/// High level export of the recorded entries.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the entries.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or an expression such as `YYYY-MM`
    ///   (see [`parse_range`])
    ///
    /// Returns the number of exported entries.
    pub fn export(
        entries: &[WorkEntry],
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let rows = select_rows(entries, bounds);

        if rows.is_empty() {
            warning("No entries found for selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}

/// Entries within the bounds (inclusive), ordered by date then type.
fn select_rows(entries: &[WorkEntry], bounds: Option<(NaiveDate, NaiveDate)>) -> Vec<EntryExport> {
    let mut selected: Vec<&WorkEntry> = entries
        .iter()
        .filter(|e| match bounds {
            Some((start, end)) => e.date >= start && e.date <= end,
            None => true,
        })
        .collect();

    selected.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.work_type.as_str().cmp(b.work_type.as_str()))
    });

    selected.into_iter().map(EntryExport::from).collect()
}
