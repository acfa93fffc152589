//! Calendar-month budget period
//!
//! Budgets run per calendar month; pace calculations need how many days the
//! month has and how many of them have elapsed.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month, e.g. "2025-01"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BudgetPeriod {
    pub year: i32,
    pub month: u32,
}

impl BudgetPeriod {
    /// Create a monthly period; `month` outside 1..=12 is clamped
    pub fn monthly(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    /// The period containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self::monthly(date.year(), date.month())
    }

    /// The period containing today's local date
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.next()
            .start_date()
            .pred_opt()
            .unwrap_or_else(|| self.start_date())
    }

    pub fn days_in_month(&self) -> u32 {
        self.end_date().day()
    }

    /// Days of this period that have elapsed as of `today`, counting today
    ///
    /// Past periods are fully elapsed; future periods have zero elapsed days.
    pub fn days_elapsed(&self, today: NaiveDate) -> u32 {
        if today < self.start_date() {
            0
        } else if today > self.end_date() {
            self.days_in_month()
        } else {
            today.day()
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self::monthly(self.year + 1, 1)
        } else {
            Self::monthly(self.year, self.month + 1)
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self::monthly(self.year - 1, 12)
        } else {
            Self::monthly(self.year, self.month - 1)
        }
    }

    /// Parse a period string
    ///
    /// Formats: "2025-01", plus "current"/"now", "last"/"prev", "next"
    /// relative to `today`.
    pub fn parse_relative(s: &str, today: NaiveDate) -> Result<Self, PeriodParseError> {
        let current = Self::containing(today);
        match s.trim().to_lowercase().as_str() {
            "current" | "now" | "this" => Ok(current),
            "last" | "prev" | "previous" => Ok(current.prev()),
            "next" => Ok(current.next()),
            _ => Self::parse(s),
        }
    }

    /// Parse a "YYYY-MM" period string
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }

        Ok(Self { year, month })
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        let period = BudgetPeriod::monthly(2025, 1);
        assert_eq!(period.start_date(), date(2025, 1, 1));
        assert_eq!(period.end_date(), date(2025, 1, 31));
        assert_eq!(period.days_in_month(), 31);
        assert_eq!(BudgetPeriod::monthly(2024, 2).days_in_month(), 29);
        assert_eq!(BudgetPeriod::monthly(2025, 2).days_in_month(), 28);
        assert_eq!(BudgetPeriod::monthly(2025, 12).end_date(), date(2025, 12, 31));
    }

    #[test]
    fn test_days_elapsed() {
        let june = BudgetPeriod::monthly(2025, 6);
        assert_eq!(june.days_elapsed(date(2025, 6, 20)), 20);
        assert_eq!(june.days_elapsed(date(2025, 5, 31)), 0);
        assert_eq!(june.days_elapsed(date(2025, 7, 2)), 30);
    }

    #[test]
    fn test_navigation() {
        let dec = BudgetPeriod::monthly(2024, 12);
        assert_eq!(dec.next(), BudgetPeriod::monthly(2025, 1));
        assert_eq!(BudgetPeriod::monthly(2025, 1).prev(), dec);
        assert!(dec < dec.next());
    }

    #[test]
    fn test_contains() {
        let jan = BudgetPeriod::monthly(2025, 1);
        assert!(jan.contains(date(2025, 1, 15)));
        assert!(!jan.contains(date(2025, 2, 1)));
        assert_eq!(BudgetPeriod::containing(date(2025, 2, 1)), jan.next());
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            BudgetPeriod::parse("2025-01").unwrap(),
            BudgetPeriod::monthly(2025, 1)
        );
        assert_eq!(
            BudgetPeriod::parse("2025-13"),
            Err(PeriodParseError::InvalidMonth(13))
        );
        assert!(BudgetPeriod::parse("January").is_err());

        let today = date(2025, 3, 10);
        assert_eq!(
            BudgetPeriod::parse_relative("last", today).unwrap(),
            BudgetPeriod::monthly(2025, 2)
        );
        assert_eq!(
            BudgetPeriod::parse_relative("current", today).unwrap(),
            BudgetPeriod::monthly(2025, 3)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(BudgetPeriod::monthly(2025, 1).to_string(), "2025-01");
    }
}
