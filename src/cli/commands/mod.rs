pub mod backup;
pub mod config;
pub mod del;
pub mod documents;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod send;
pub mod set;
pub mod settings;
pub mod summary;

use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;

/// Resolve the `--month` argument (default: current month) to its first day.
pub(crate) fn month_arg(month: &Option<String>) -> AppResult<NaiveDate> {
    date::resolve_month(month.as_deref())
        .ok_or_else(|| AppError::InvalidMonth(month.clone().unwrap_or_default()))
}
