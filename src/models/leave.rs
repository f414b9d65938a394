use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveType {
    pub id: String,
    pub name: String,
    /// Days granted per year when no company policy overrides it.
    pub default_allocation: i64,
}

impl LeaveType {
    pub fn new(name: String, default_allocation: i64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            default_allocation,
        }
    }
}

/// Per-company override of how many days a leave type grants per year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyLeavePolicy {
    pub company_id: String,
    pub leave_type_id: String,
    pub days_per_year: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveBalance {
    pub user_id: String,
    pub leave_type_id: String,
    pub available_days: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    /// Whether a request in this status blocks out calendar days.
    /// Any non-rejected request occupies the calendar.
    pub fn occupies_calendar(&self) -> bool {
        !matches!(self, LeaveStatus::Rejected)
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaveStatus::Pending => write!(f, "pending"),
            LeaveStatus::Approved => write!(f, "approved"),
            LeaveStatus::Rejected => write!(f, "rejected"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: String,
    pub user_id: String,
    pub leave_type_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    /// AI-generated email draft attached by the employee, if any.
    pub email_draft: Option<String>,
    pub status: LeaveStatus,
    pub applied_on: DateTime<Utc>,
    pub reviewed_by: Option<String>,
    pub reviewed_on: Option<DateTime<Utc>>,
    pub proof_requested: bool,
    pub proof_requested_by: Option<String>,
    pub proof_requested_on: Option<DateTime<Utc>>,
    pub proof_provided: bool,
}

impl LeaveRequest {
    pub fn new(
        user_id: String,
        leave_type_id: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: String,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id,
            leave_type_id,
            start_date,
            end_date,
            reason,
            email_draft: None,
            status: LeaveStatus::Pending,
            applied_on: Utc::now(),
            reviewed_by: None,
            reviewed_on: None,
            proof_requested: false,
            proof_requested_by: None,
            proof_requested_on: None,
            proof_provided: false,
        }
    }

    /// Calendar days covered, both endpoints inclusive.
    pub fn total_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && self.end_date >= start
    }
}

/// DTO for submitting a leave request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLeaveRequest {
    pub leave_type_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub email_draft: Option<String>,
}
