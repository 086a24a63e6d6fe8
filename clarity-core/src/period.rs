//! Budget period windows: rolling week/month ranges and explicit "now" starts.
//!
//! All range math is calendar-day based and timezone-naive; the caller decides
//! what "today" means (the CLI uses the UTC calendar day). The end of a range
//! is always today at 23:59:59.999: budgets are evaluated up to the present,
//! never to a fixed historical end.

use anyhow::bail;
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tracking window granularity for a budget
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    /// Explicit start date captured when the budget was created
    Now,
    /// Monday of the current week through today
    Week,
    /// First of the current month through today
    Month,
}

impl BudgetPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetPeriod::Now => "now",
            BudgetPeriod::Week => "week",
            BudgetPeriod::Month => "month",
        }
    }
}

impl FromStr for BudgetPeriod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "now" => Ok(BudgetPeriod::Now),
            "week" => Ok(BudgetPeriod::Week),
            "month" => Ok(BudgetPeriod::Month),
            other => bail!("invalid period: {other} (expected now|week|month)"),
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved [start, end] window, both bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl PeriodRange {
    pub fn start_day(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn end_day(&self) -> NaiveDate {
        self.end.date()
    }

    pub fn contains_day(&self, day: NaiveDate) -> bool {
        day >= self.start_day() && day <= self.end_day()
    }

    /// ISO-8601 with a Z suffix; all range math runs on UTC calendar days.
    pub fn start_iso(&self) -> String {
        format!("{}Z", self.start.format("%Y-%m-%dT%H:%M:%S%.3f"))
    }

    pub fn end_iso(&self) -> String {
        format!("{}Z", self.end.format("%Y-%m-%dT%H:%M:%S%.3f"))
    }
}

fn start_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

fn end_of_day(day: NaiveDate) -> NaiveDateTime {
    let last_milli = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("valid time of day");
    day.and_time(last_milli)
}

/// Most recent Monday on or before the given day
pub fn week_start(day: NaiveDate) -> NaiveDate {
    let back = day.weekday().num_days_from_monday() as u64;
    day - Days::new(back)
}

/// First calendar day of the given day's month
pub fn month_start(day: NaiveDate) -> NaiveDate {
    day.with_day(1).expect("day 1 exists in every month")
}

/// Resolve the tracking window for a period relative to `today`.
/// `explicit_start` only applies to `now` budgets; when absent, `now`
/// starts today.
pub fn resolve_range(
    period: BudgetPeriod,
    today: NaiveDate,
    explicit_start: Option<NaiveDate>,
) -> PeriodRange {
    let start = match period {
        BudgetPeriod::Week => week_start(today),
        BudgetPeriod::Month => month_start(today),
        BudgetPeriod::Now => explicit_start.unwrap_or(today),
    };
    PeriodRange {
        start: start_of_day(start),
        end: end_of_day(today),
    }
}
