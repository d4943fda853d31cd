use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a unit of work is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkType {
    /// Billed at the daily rate (TJM), amount in days (0.5 or 1).
    Daily,
    /// Billed at the hourly rate, amount in whole hours.
    Hourly,
}

impl WorkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkType::Daily => "daily",
            WorkType::Hourly => "hourly",
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase, long or short)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "daily" | "day" | "d" => Some(WorkType::Daily),
            "hourly" | "hour" | "h" => Some(WorkType::Hourly),
            _ => None,
        }
    }

    pub fn is_daily(&self) -> bool {
        matches!(self, WorkType::Daily)
    }

    pub fn is_hourly(&self) -> bool {
        matches!(self, WorkType::Hourly)
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkType::from_code(s).ok_or_else(|| AppError::InvalidWorkType(s.to_string()))
    }
}
