use crate::models::work_type::WorkType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recorded unit of work (a day fraction or an hour count) for a single date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkEntry {
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub work_type: WorkType,
    /// 1 for a full day, 0.5 for a half day, or a number of hours.
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WorkEntry {
    /// Build a new entry with a freshly generated id.
    pub fn new(date: NaiveDate, work_type: WorkType, amount: f64, notes: Option<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            work_type,
            amount,
            notes,
        }
    }

    /// True when this entry occupies the given (date, type) slot.
    pub fn matches(&self, date: NaiveDate, work_type: WorkType) -> bool {
        self.date == date && self.work_type == work_type
    }
}
