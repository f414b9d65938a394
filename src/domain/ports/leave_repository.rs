use crate::domain::errors::DomainResult;
use crate::models::{LeaveRequest, LeaveStatus, LeaveType};
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait LeaveRepository: Send + Sync {
    async fn create(&self, request: &LeaveRequest) -> DomainResult<()>;

    async fn get(&self, request_id: &str) -> DomainResult<Option<LeaveRequest>>;

    async fn update(&self, request: &LeaveRequest) -> DomainResult<()>;

    /// A user's requests, most recently applied first.
    async fn list_for_user(&self, user_id: &str) -> DomainResult<Vec<LeaveRequest>>;

    /// A user's requests overlapping [start, end], ascending by start date.
    async fn list_overlapping(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Vec<LeaveRequest>>;

    /// All requests in a given status, most recently applied first.
    async fn list_by_status(&self, status: LeaveStatus) -> DomainResult<Vec<LeaveRequest>>;
}

#[async_trait]
pub trait LeaveTypeRepository: Send + Sync {
    async fn create(&self, leave_type: &LeaveType) -> DomainResult<()>;

    async fn get(&self, leave_type_id: &str) -> DomainResult<Option<LeaveType>>;

    async fn list(&self) -> DomainResult<Vec<LeaveType>>;
}
