use crate::models::entry::WorkEntry;
use chrono::NaiveDate;

/// Derived totals for one calendar month.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthSummary {
    /// First day of the month (inclusive).
    pub start: NaiveDate,
    /// Last day of the month (inclusive).
    pub end: NaiveDate,
    /// Entries dated within [start, end], sorted ascending by date.
    pub entries: Vec<WorkEntry>,
    pub total_days: f64,
    pub total_hours: f64,
    pub daily_rate: f64,
    pub hourly_rate: f64,
    pub daily_amount: f64,
    pub hourly_amount: f64,
    pub total_amount: f64,
}

impl MonthSummary {
    /// `YYYY-MM` key of the summarized month.
    pub fn month_key(&self) -> String {
        self.start.format("%Y-%m").to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_daily(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.work_type.is_daily() && e.amount > 0.0)
    }

    pub fn has_hourly(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.work_type.is_hourly() && e.amount > 0.0)
    }
}
