//! Report periods and calendar months

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{FinboardError, FinboardResult};

/// Relative date ranges offered by the reports page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportPeriod {
    Last7Days,
    Last30Days,
    #[default]
    ThisMonth,
    LastMonth,
    Last3Months,
    ThisYear,
}

impl ReportPeriod {
    pub fn all() -> &'static [ReportPeriod] {
        &[
            Self::Last7Days,
            Self::Last30Days,
            Self::ThisMonth,
            Self::LastMonth,
            Self::Last3Months,
            Self::ThisYear,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Last7Days => "last-7-days",
            Self::Last30Days => "last-30-days",
            Self::ThisMonth => "this-month",
            Self::LastMonth => "last-month",
            Self::Last3Months => "last-3-months",
            Self::ThisYear => "this-year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Last7Days => "Last 7 days",
            Self::Last30Days => "Last 30 days",
            Self::ThisMonth => "This month",
            Self::LastMonth => "Last month",
            Self::Last3Months => "Last 3 months",
            Self::ThisYear => "This year",
        }
    }

    /// Inclusive date range ending on (or, for last month, before) `as_of`
    pub fn date_range(&self, as_of: NaiveDate) -> FinboardResult<(NaiveDate, NaiveDate)> {
        let this_month = ReportMonth::of(as_of);
        let range = match self {
            Self::Last7Days => (as_of - Duration::days(6), as_of),
            Self::Last30Days => (as_of - Duration::days(29), as_of),
            Self::ThisMonth => (this_month.first_day()?, as_of),
            Self::LastMonth => {
                let last = this_month.prev();
                (last.first_day()?, last.last_day()?)
            }
            Self::Last3Months => (this_month.prev().prev().first_day()?, as_of),
            Self::ThisYear => (ReportMonth::new(as_of.year(), 1)?.first_day()?, as_of),
        };
        Ok(range)
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ReportPeriod {
    type Err = FinboardError;

    /// Accepts `last-7-days`, `last7days`, `Last 7 days` and similar
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squash = |v: &str| {
            v.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        };
        let wanted = squash(s);
        Self::all()
            .iter()
            .copied()
            .find(|p| squash(p.key()) == wanted)
            .ok_or_else(|| FinboardError::InvalidArgument(format!("Unknown report period: {}", s)))
    }
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month, displayed as "May 2025"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ReportMonth {
    year: i32,
    month: u32,
}

impl ReportMonth {
    /// Years are limited to the range `NaiveDate` can represent
    pub fn new(year: i32, month: u32) -> FinboardResult<Self> {
        if !(NaiveDate::MIN.year()..=NaiveDate::MAX.year()).contains(&year) {
            return Err(FinboardError::InvalidArgument(format!(
                "Year {} is out of range",
                year
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(FinboardError::InvalidArgument(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    pub fn prev(&self) -> Self {
        match self.month {
            1 => Self {
                year: self.year - 1,
                month: 12,
            },
            m => Self {
                year: self.year,
                month: m - 1,
            },
        }
    }

    pub fn next(&self) -> Self {
        match self.month {
            12 => Self {
                year: self.year + 1,
                month: 1,
            },
            m => Self {
                year: self.year,
                month: m + 1,
            },
        }
    }

    pub fn first_day(&self) -> FinboardResult<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .ok_or_else(|| FinboardError::InvalidArgument(format!("{} is out of range", self)))
    }

    pub fn last_day(&self) -> FinboardResult<NaiveDate> {
        Ok(self.next().first_day()? - Duration::days(1))
    }

    /// `YYYY-MM`
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

impl fmt::Display for ReportMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}

impl FromStr for ReportMonth {
    type Err = FinboardError;

    /// Accepts `2025-05` or `May 2025`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || FinboardError::InvalidArgument(format!("Invalid month: {}", s));

        if let Some((year, month)) = s.split_once('-') {
            let year = year.parse().map_err(|_| invalid())?;
            let month = month.parse().map_err(|_| invalid())?;
            return Self::new(year, month);
        }

        let (name, year) = s.split_once(' ').ok_or_else(invalid)?;
        let month = MONTH_NAMES
            .iter()
            .position(|m| m.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(invalid)?;
        let year = year.trim().parse().map_err(|_| invalid())?;
        Self::new(year, month as u32 + 1)
    }
}
