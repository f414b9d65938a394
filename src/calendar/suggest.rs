use crate::calendar::bridge::SMART_LEAVE_TOOLTIP;
use crate::calendar::day::{DayRecord, DayType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const FALLBACK_EXPLANATION: &str = "Consider planning a break soon.";

/// A leave recommendation shown to the employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub label: String,
    pub explanation: String,
}

impl Suggestion {
    pub fn for_date(date: NaiveDate, explanation: impl Into<String>) -> Self {
        Self {
            label: date.format("%d %b %Y").to_string(),
            explanation: explanation.into(),
        }
    }
}

/// One suggestion per smart-leave candidate in ascending date order.
///
/// Never returns an empty list: when the window holds no candidates, a
/// single generic suggestion anchored at `fallback_date` is produced.
pub fn format_suggestions(
    days: &BTreeMap<NaiveDate, DayRecord>,
    fallback_date: NaiveDate,
) -> Vec<Suggestion> {
    let suggestions: Vec<Suggestion> = days
        .values()
        .filter(|record| record.day_type == DayType::SmartLeave)
        .map(|record| Suggestion::for_date(record.date, SMART_LEAVE_TOOLTIP))
        .collect();

    if suggestions.is_empty() {
        return vec![Suggestion::for_date(fallback_date, FALLBACK_EXPLANATION)];
    }
    suggestions
}
