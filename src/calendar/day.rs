use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single calendar date. Exactly one tag per date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    Workday,
    Weekend,
    Holiday,
    Leave,
    SmartLeave,
}

impl DayType {
    /// Weekends and holidays form the non-working buffers around a
    /// workday segment. Leave days do not: a booked leave already spends
    /// balance and is not a break the bridge detector can extend.
    pub fn is_non_working_buffer(&self) -> bool {
        matches!(self, DayType::Weekend | DayType::Holiday)
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayType::Workday => write!(f, "workday"),
            DayType::Weekend => write!(f, "weekend"),
            DayType::Holiday => write!(f, "holiday"),
            DayType::Leave => write!(f, "leave"),
            DayType::SmartLeave => write!(f, "smart_leave"),
        }
    }
}

/// One classified date, ready for serialization as `{date, type, tooltip}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub day_type: DayType,
    pub tooltip: String,
}

impl DayRecord {
    pub fn new(date: NaiveDate, day_type: DayType, tooltip: impl Into<String>) -> Self {
        Self {
            date,
            day_type,
            tooltip: tooltip.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_type_serializes_snake_case() {
        let json = serde_json::to_string(&DayType::SmartLeave).unwrap();
        assert_eq!(json, "\"smart_leave\"");
    }

    #[test]
    fn test_day_record_serializes_with_type_field() {
        let record = DayRecord::new(
            NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
            DayType::Workday,
            "Regular working day",
        );
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["date"], "2026-01-02");
        assert_eq!(value["type"], "workday");
        assert_eq!(value["tooltip"], "Regular working day");
    }

    #[test]
    fn test_leave_is_not_a_buffer_day() {
        assert!(DayType::Weekend.is_non_working_buffer());
        assert!(DayType::Holiday.is_non_working_buffer());
        assert!(!DayType::Leave.is_non_working_buffer());
        assert!(!DayType::Workday.is_non_working_buffer());
        assert!(!DayType::SmartLeave.is_non_working_buffer());
    }
}
