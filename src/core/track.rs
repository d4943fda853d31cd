use crate::core::store::{EntryStore, StateStorage, UpsertOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::WorkType;
use crate::utils::date::is_weekend;
use chrono::NaiveDate;

/// Largest hour count selectable for a single day.
pub const MAX_HOURS_PER_DAY: f64 = 12.0;

/// Check that `amount` is one of the values offered for this work type:
/// 0, 0.5 or 1 day; or a whole number of hours between 0 and 12.
pub fn validate_amount(work_type: WorkType, amount: f64) -> AppResult<()> {
    let invalid = |reason: &str| AppError::InvalidAmount {
        work_type: work_type.to_string(),
        amount,
        reason: reason.to_string(),
    };

    if !amount.is_finite() || amount < 0.0 {
        return Err(invalid("must be a non-negative number"));
    }

    match work_type {
        WorkType::Daily => {
            if amount == 0.0 || amount == 0.5 || amount == 1.0 {
                Ok(())
            } else {
                Err(invalid("use 0, 0.5 (half day) or 1 (full day)"))
            }
        }
        WorkType::Hourly => {
            if amount.fract() != 0.0 {
                Err(invalid("hours must be whole numbers"))
            } else if amount > MAX_HOURS_PER_DAY {
                Err(invalid("at most 12 hours per day"))
            } else {
                Ok(())
            }
        }
    }
}

pub struct TrackLogic;

impl TrackLogic {
    /// Record the amount worked on `date`: validates, then upserts (0 removes).
    pub fn apply<S: StateStorage>(
        store: &mut EntryStore<S>,
        date: NaiveDate,
        work_type: WorkType,
        amount: f64,
        notes: Option<String>,
        allow_weekend: bool,
    ) -> AppResult<UpsertOutcome> {
        validate_amount(work_type, amount)?;

        if amount > 0.0 && is_weekend(date) && !allow_weekend {
            return Err(AppError::WeekendDate(date.to_string()));
        }

        store.upsert_entry(date, work_type, amount, notes)
    }
}
