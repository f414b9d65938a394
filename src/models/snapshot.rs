use chrono::NaiveDate;
use serde::Serialize;

/// Structured calendar snapshot handed to the AI suggestion provider.
///
/// Serialized to JSON inside the prompt, so field names are part of the
/// provider contract.
#[derive(Debug, Clone, Serialize)]
pub struct LeaveSnapshot {
    pub company: String,
    pub user: String,
    pub year_start: i32,
    pub span_years: u32,
    pub total_leave_balance: i64,
    pub months: Vec<MonthSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthSnapshot {
    /// Human-readable label, e.g. "August 2026".
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub working_days: Vec<u8>,
    pub holidays: Vec<HolidaySnapshot>,
    pub existing_leaves: Vec<LeaveEntrySnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HolidaySnapshot {
    pub date: NaiveDate,
    pub name: String,
    pub is_optional: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaveEntrySnapshot {
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(rename = "type")]
    pub leave_type: String,
    pub status: String,
}

/// Inputs for drafting a leave request email.
#[derive(Debug, Clone)]
pub struct EmailDraftRequest {
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub user_name: String,
    pub manager_name: String,
}

impl EmailDraftRequest {
    pub fn total_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
