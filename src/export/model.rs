// src/export/model.rs

use crate::models::WorkEntry;
use serde::Serialize;

/// Flat row written by the CSV / JSON exports.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EntryExport {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub work_type: String,
    pub amount: f64,
    pub notes: String,
}

impl From<&WorkEntry> for EntryExport {
    fn from(e: &WorkEntry) -> Self {
        Self {
            id: e.id.clone(),
            date: e.date.format("%Y-%m-%d").to_string(),
            work_type: e.work_type.to_string(),
            amount: e.amount,
            notes: e.notes.clone().unwrap_or_default(),
        }
    }
}
