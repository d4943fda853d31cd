// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date::{last_day_of_month, parse_date, parse_month};
use chrono::NaiveDate;

fn invalid(r: &str) -> AppError {
    AppError::Export(format!("unsupported --range value: {r}"))
}

/// First and last day covered by a single period token (YYYY, YYYY-MM, YYYY-MM-DD).
fn period_bounds(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    match p.len() {
        4 => {
            let y: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        7 => {
            let first = parse_month(p)?;
            Some((first, last_day_of_month(first)))
        }
        10 => {
            let d = parse_date(p)?;
            Some((d, d))
        }
        _ => None,
    }
}

/// Parse --range (year / month / day / interval).
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();

    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let (start, end) = (start_raw.trim(), end_raw.trim());

        if start.len() != end.len() {
            return Err(AppError::Export(
                "start and end must have same format".to_string(),
            ));
        }

        let (d1, _) = period_bounds(start).ok_or_else(|| invalid(r))?;
        let (_, d2) = period_bounds(end).ok_or_else(|| invalid(r))?;
        Ok((d1, d2))
    } else {
        period_bounds(r).ok_or_else(|| invalid(r))
    }
}
