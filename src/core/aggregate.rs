//! Monthly aggregation: select the month's entries, sum them per work type
//! and price them with the configured rates.

use crate::models::{FreelanceSettings, MonthSummary, WorkEntry, WorkType};
use crate::utils::date::{first_day_of_month, last_day_of_month};
use chrono::NaiveDate;

/// Inclusive calendar-month boundary for the month containing `reference`.
pub fn month_bounds(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    (
        first_day_of_month(reference),
        last_day_of_month(reference),
    )
}

/// Entries dated within the month of `reference` (both ends inclusive),
/// sorted ascending by date.
pub fn select_month(entries: &[WorkEntry], reference: NaiveDate) -> Vec<WorkEntry> {
    let (start, end) = month_bounds(reference);

    let mut selected: Vec<WorkEntry> = entries
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .cloned()
        .collect();

    // stable: same-day entries keep their insertion order
    selected.sort_by_key(|e| e.date);
    selected
}

pub fn sum_by_type(entries: &[WorkEntry], work_type: WorkType) -> f64 {
    entries
        .iter()
        .filter(|e| e.work_type == work_type)
        .map(|e| e.amount)
        .sum()
}

pub struct Aggregator;

impl Aggregator {
    /// Build the month summary for `reference` from a read-only snapshot.
    pub fn summarize(
        entries: &[WorkEntry],
        reference: NaiveDate,
        settings: &FreelanceSettings,
    ) -> MonthSummary {
        let (start, end) = month_bounds(reference);
        let selected = select_month(entries, reference);

        let total_days = sum_by_type(&selected, WorkType::Daily);
        let total_hours = sum_by_type(&selected, WorkType::Hourly);

        let daily_amount = total_days * settings.daily_rate;
        let hourly_amount = total_hours * settings.hourly_rate;

        MonthSummary {
            start,
            end,
            entries: selected,
            total_days,
            total_hours,
            daily_rate: settings.daily_rate,
            hourly_rate: settings.hourly_rate,
            daily_amount,
            hourly_amount,
            total_amount: daily_amount + hourly_amount,
        }
    }
}
