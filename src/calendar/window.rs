use crate::domain::errors::{DomainError, DomainResult};
use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive date range used as the query window for classification.
///
/// Construction validates that the range is not inverted, so every
/// `DateWindow` that exists is well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> DomainResult<Self> {
        if end < start {
            return Err(DomainError::Validation(format!(
                "Window end {} is before start {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    /// Window covering a whole calendar month.
    pub fn for_month(year: i32, month: u32) -> DomainResult<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            DomainError::Validation(format!("Invalid month {}-{:02}", year, month))
        })?;
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|d| d.checked_sub_days(Days::new(1)))
            .ok_or_else(|| {
                DomainError::Validation(format!("Invalid month {}-{:02}", year, month))
            })?;
        Ok(Self { start, end })
    }

    /// Lookahead window of `days` dates starting the day after `anchor`.
    pub fn lookahead(anchor: NaiveDate, days: u64) -> DomainResult<Self> {
        if days == 0 {
            return Err(DomainError::Validation(
                "Lookahead must cover at least one day".to_string(),
            ));
        }
        let start = anchor
            .checked_add_days(Days::new(1))
            .ok_or_else(|| DomainError::Internal("Date overflow".to_string()))?;
        let end = anchor
            .checked_add_days(Days::new(days))
            .ok_or_else(|| DomainError::Internal("Date overflow".to_string()))?;
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, both endpoints inclusive.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// All dates in the window in ascending order.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(self.num_days() as usize)
    }

    /// Years touched by this window, ascending. Used to resolve recurring
    /// holidays once per year instead of once per day.
    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.start.year()..=self.end.year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_inverted_window_rejected() {
        let result = DateWindow::new(date(2026, 3, 10), date(2026, 3, 1));
        assert!(result.is_err());
    }

    #[test]
    fn test_single_day_window() {
        let window = DateWindow::new(date(2026, 3, 10), date(2026, 3, 10)).unwrap();
        assert_eq!(window.num_days(), 1);
        assert_eq!(window.iter_days().collect::<Vec<_>>(), vec![date(2026, 3, 10)]);
    }

    #[test]
    fn test_month_window_december() {
        let window = DateWindow::for_month(2026, 12).unwrap();
        assert_eq!(window.start(), date(2026, 12, 1));
        assert_eq!(window.end(), date(2026, 12, 31));
    }

    #[test]
    fn test_month_window_leap_february() {
        let window = DateWindow::for_month(2024, 2).unwrap();
        assert_eq!(window.end(), date(2024, 2, 29));
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert!(DateWindow::for_month(2026, 13).is_err());
    }

    #[test]
    fn test_lookahead_starts_tomorrow() {
        let window = DateWindow::lookahead(date(2026, 8, 1), 90).unwrap();
        assert_eq!(window.start(), date(2026, 8, 2));
        assert_eq!(window.end(), date(2026, 10, 30));
        assert_eq!(window.num_days(), 90);
    }
}
