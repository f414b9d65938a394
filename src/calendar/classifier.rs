use crate::calendar::day::{DayRecord, DayType};
use crate::calendar::window::DateWindow;
use crate::models::{Holiday, LeaveStatus, WorkWeek};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// A booked leave range as the classifier sees it: dates, a display label
/// and the request status. Rejected intervals never occupy the calendar.
#[derive(Debug, Clone)]
pub struct LeaveInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
    pub status: LeaveStatus,
}

impl LeaveInterval {
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        label: impl Into<String>,
        status: LeaveStatus,
    ) -> Self {
        Self {
            start,
            end,
            label: label.into(),
            status,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Classify every date in `window`, one entry per date in ascending order.
///
/// Precedence per date: leave > holiday > weekend > workday. Optional
/// holidays do not classify as non-working; they only annotate the tooltip
/// of an otherwise regular workday. Pure function of its inputs: fixed
/// inputs always produce identical output.
pub fn classify(
    window: &DateWindow,
    work_week: &WorkWeek,
    holidays: &[Holiday],
    leaves: &[LeaveInterval],
) -> BTreeMap<NaiveDate, DayRecord> {
    // Resolve recurring entries once per year covered by the window.
    // First entry wins when two holidays land on the same date.
    let mut mandatory: HashMap<NaiveDate, &Holiday> = HashMap::new();
    let mut optional: HashMap<NaiveDate, &Holiday> = HashMap::new();
    for year in window.years() {
        for holiday in holidays {
            let observed = holiday.observed_date(year);
            if !window.contains(observed) {
                continue;
            }
            let bucket = if holiday.is_optional {
                &mut optional
            } else {
                &mut mandatory
            };
            bucket.entry(observed).or_insert(holiday);
        }
    }

    let mut days = BTreeMap::new();
    for date in window.iter_days() {
        let record = if let Some(leave) = leaves
            .iter()
            .find(|l| l.status.occupies_calendar() && l.contains(date))
        {
            DayRecord::new(date, DayType::Leave, format!("Your leave ({})", leave.label))
        } else if let Some(holiday) = mandatory.get(&date) {
            DayRecord::new(date, DayType::Holiday, format!("Holiday: {}", holiday.name))
        } else if !work_week.is_working_day(date) {
            DayRecord::new(
                date,
                DayType::Weekend,
                format!("Weekend ({})", date.format("%A")),
            )
        } else if let Some(holiday) = optional.get(&date) {
            DayRecord::new(
                date,
                DayType::Workday,
                format!("Optional holiday: {}", holiday.name),
            )
        } else {
            DayRecord::new(date, DayType::Workday, "Regular working day")
        };
        days.insert(date, record);
    }

    days
}
