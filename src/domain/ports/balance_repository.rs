use crate::domain::errors::DomainResult;
use crate::models::{CompanyLeavePolicy, LeaveBalance};
use async_trait::async_trait;

#[async_trait]
pub trait BalanceRepository: Send + Sync {
    async fn get(&self, user_id: &str, leave_type_id: &str) -> DomainResult<Option<LeaveBalance>>;

    /// Insert or replace the balance row for (user, leave type).
    async fn upsert(&self, balance: &LeaveBalance) -> DomainResult<()>;

    async fn list_for_user(&self, user_id: &str) -> DomainResult<Vec<LeaveBalance>>;

    async fn set_policy(&self, policy: &CompanyLeavePolicy) -> DomainResult<()>;

    /// Days per year the company grants for a leave type, when a policy
    /// overrides the type's default allocation.
    async fn policy_days(
        &self,
        company_id: &str,
        leave_type_id: &str,
    ) -> DomainResult<Option<i64>>;
}
