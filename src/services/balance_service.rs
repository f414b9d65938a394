use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::{BalanceRepository, LeaveTypeRepository, UserRepository};
use crate::events::{EventBus, SystemEvent};
use crate::models::{LeaveBalance, LeaveType, User};
use std::sync::Arc;
use tracing::info;

/// Days granted for a leave type: the company policy when one exists,
/// otherwise the type's default allocation.
pub async fn allocation_for(
    balance_repo: &Arc<dyn BalanceRepository>,
    company_id: Option<&str>,
    leave_type: &LeaveType,
) -> DomainResult<i64> {
    if let Some(company_id) = company_id {
        if let Some(days) = balance_repo.policy_days(company_id, &leave_type.id).await? {
            return Ok(days);
        }
    }
    Ok(leave_type.default_allocation)
}

/// Manages the per-user, per-type leave balance ledger.
#[derive(Clone)]
pub struct BalanceService {
    balance_repo: Arc<dyn BalanceRepository>,
    leave_type_repo: Arc<dyn LeaveTypeRepository>,
    user_repo: Arc<dyn UserRepository>,
    event_bus: EventBus,
}

impl BalanceService {
    pub fn new(
        balance_repo: Arc<dyn BalanceRepository>,
        leave_type_repo: Arc<dyn LeaveTypeRepository>,
        user_repo: Arc<dyn UserRepository>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            balance_repo,
            leave_type_repo,
            user_repo,
            event_bus,
        }
    }

    /// Fetch the balance row for (user, leave type), creating it from the
    /// company policy or type default on first touch.
    pub async fn get_or_create(
        &self,
        user: &User,
        leave_type: &LeaveType,
    ) -> DomainResult<LeaveBalance> {
        if let Some(balance) = self.balance_repo.get(&user.id, &leave_type.id).await? {
            return Ok(balance);
        }

        let allocation =
            allocation_for(&self.balance_repo, user.company_id.as_deref(), leave_type).await?;
        let balance = LeaveBalance {
            user_id: user.id.clone(),
            leave_type_id: leave_type.id.clone(),
            available_days: allocation,
        };
        self.balance_repo.upsert(&balance).await?;
        Ok(balance)
    }

    /// Seed balances for every known leave type, e.g. when a user joins.
    pub async fn allocate_defaults(&self, user_id: &str) -> DomainResult<Vec<LeaveBalance>> {
        let user = self
            .user_repo
            .get_user(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("User not found: {}", user_id)))?;

        let mut balances = Vec::new();
        for leave_type in self.leave_type_repo.list().await? {
            balances.push(self.get_or_create(&user, &leave_type).await?);
        }
        Ok(balances)
    }

    pub async fn balances_for_user(&self, user_id: &str) -> DomainResult<Vec<LeaveBalance>> {
        self.balance_repo.list_for_user(user_id).await
    }

    /// Refresh every balance in a company back to its yearly allocation.
    /// Typically run once a year.
    pub async fn reset_annual(&self, company_id: &str, year: i32) -> DomainResult<usize> {
        let users = self.user_repo.list_for_company(company_id).await?;
        let leave_types = self.leave_type_repo.list().await?;

        for user in &users {
            for leave_type in &leave_types {
                let allocation =
                    allocation_for(&self.balance_repo, Some(company_id), leave_type).await?;
                let balance = LeaveBalance {
                    user_id: user.id.clone(),
                    leave_type_id: leave_type.id.clone(),
                    available_days: allocation,
                };
                self.balance_repo.upsert(&balance).await?;
            }
        }

        self.event_bus.publish(SystemEvent::BalancesReset {
            company_id: company_id.to_string(),
            year,
            users_affected: users.len(),
            timestamp: chrono::Utc::now(),
        });

        info!(
            "Reset leave balances for {} users in company {} (year {})",
            users.len(),
            company_id,
            year
        );

        Ok(users.len())
    }
}
