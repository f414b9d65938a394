#![allow(dead_code)]
use chrono::NaiveDate;
use leavedesk::calendar::LeaveInterval;
use leavedesk::models::{Holiday, LeaveStatus, WorkWeek};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn monday_to_friday() -> WorkWeek {
    WorkWeek::new("test-co".to_string(), &[1, 2, 3, 4, 5]).expect("valid work week")
}

pub fn six_day_week() -> WorkWeek {
    WorkWeek::new("test-co".to_string(), &[1, 2, 3, 4, 5, 6]).expect("valid work week")
}

pub fn holiday(d: NaiveDate, name: &str) -> Holiday {
    Holiday::new("test-co".to_string(), d, name.to_string())
}

pub fn recurring_holiday(d: NaiveDate, name: &str) -> Holiday {
    holiday(d, name).recurring()
}

pub fn optional_holiday(d: NaiveDate, name: &str) -> Holiday {
    holiday(d, name).optional()
}

pub fn approved_leave(start: NaiveDate, end: NaiveDate) -> LeaveInterval {
    LeaveInterval::new(start, end, "Casual Leave", LeaveStatus::Approved)
}

pub fn pending_leave(start: NaiveDate, end: NaiveDate) -> LeaveInterval {
    LeaveInterval::new(start, end, "Casual Leave", LeaveStatus::Pending)
}

pub fn rejected_leave(start: NaiveDate, end: NaiveDate) -> LeaveInterval {
    LeaveInterval::new(start, end, "Casual Leave", LeaveStatus::Rejected)
}
