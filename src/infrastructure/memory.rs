//! In-memory repository adapters. Production deployments plug a real
//! store in behind the same ports; these back the test suite and small
//! embedded setups.

use crate::domain::errors::DomainResult;
use crate::domain::ports::{
    BalanceRepository, CompanyRepository, HolidayRepository, LeaveRepository, LeaveTypeRepository,
    UserRepository,
};
use crate::models::{
    Company, CompanyLeavePolicy, Holiday, LeaveBalance, LeaveRequest, LeaveStatus, LeaveType,
    Role, User, WorkWeek,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryCompanyRepository {
    companies: Arc<RwLock<HashMap<String, Company>>>,
    work_weeks: Arc<RwLock<HashMap<String, WorkWeek>>>,
}

impl InMemoryCompanyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn create_company(&self, company: &Company) -> DomainResult<()> {
        self.companies
            .write()
            .await
            .insert(company.id.clone(), company.clone());
        Ok(())
    }

    async fn get_company(&self, company_id: &str) -> DomainResult<Option<Company>> {
        Ok(self.companies.read().await.get(company_id).cloned())
    }

    async fn set_work_week(&self, work_week: &WorkWeek) -> DomainResult<()> {
        self.work_weeks
            .write()
            .await
            .insert(work_week.company_id.clone(), work_week.clone());
        Ok(())
    }

    async fn get_work_week(&self, company_id: &str) -> DomainResult<Option<WorkWeek>> {
        Ok(self.work_weeks.read().await.get(company_id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, user: &User) -> DomainResult<()> {
        self.users.write().await.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn get_user(&self, user_id: &str) -> DomainResult<Option<User>> {
        Ok(self.users.read().await.get(user_id).cloned())
    }

    async fn list_for_company(&self, company_id: &str) -> DomainResult<Vec<User>> {
        let mut users: Vec<User> = self
            .users
            .read()
            .await
            .values()
            .filter(|u| u.company_id.as_deref() == Some(company_id))
            .cloned()
            .collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }

    async fn list_for_company_with_role(
        &self,
        company_id: &str,
        role: Role,
    ) -> DomainResult<Vec<User>> {
        Ok(self
            .list_for_company(company_id)
            .await?
            .into_iter()
            .filter(|u| u.role == role)
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryHolidayRepository {
    holidays: Arc<RwLock<HashMap<String, Holiday>>>,
}

impl InMemoryHolidayRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HolidayRepository for InMemoryHolidayRepository {
    async fn create(&self, holiday: &Holiday) -> DomainResult<()> {
        self.holidays
            .write()
            .await
            .insert(holiday.id.clone(), holiday.clone());
        Ok(())
    }

    async fn update(&self, holiday: &Holiday) -> DomainResult<()> {
        self.holidays
            .write()
            .await
            .insert(holiday.id.clone(), holiday.clone());
        Ok(())
    }

    async fn find_by_company_and_date(
        &self,
        company_id: &str,
        date: NaiveDate,
    ) -> DomainResult<Option<Holiday>> {
        Ok(self
            .holidays
            .read()
            .await
            .values()
            .find(|h| h.company_id == company_id && h.date == date)
            .cloned())
    }

    async fn list_for_company(&self, company_id: &str) -> DomainResult<Vec<Holiday>> {
        let mut holidays: Vec<Holiday> = self
            .holidays
            .read()
            .await
            .values()
            .filter(|h| h.company_id == company_id)
            .cloned()
            .collect();
        holidays.sort_by_key(|h| h.date);
        Ok(holidays)
    }
}

#[derive(Default)]
pub struct InMemoryLeaveRepository {
    requests: Arc<RwLock<HashMap<String, LeaveRequest>>>,
}

impl InMemoryLeaveRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LeaveRepository for InMemoryLeaveRepository {
    async fn create(&self, request: &LeaveRequest) -> DomainResult<()> {
        self.requests
            .write()
            .await
            .insert(request.id.clone(), request.clone());
        Ok(())
    }

    async fn get(&self, request_id: &str) -> DomainResult<Option<LeaveRequest>> {
        Ok(self.requests.read().await.get(request_id).cloned())
    }

    async fn update(&self, request: &LeaveRequest) -> DomainResult<()> {
        self.requests
            .write()
            .await
            .insert(request.id.clone(), request.clone());
        Ok(())
    }

    async fn list_for_user(&self, user_id: &str) -> DomainResult<Vec<LeaveRequest>> {
        let mut requests: Vec<LeaveRequest> = self
            .requests
            .read()
            .await
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        requests.sort_by(|a, b| b.applied_on.cmp(&a.applied_on));
        Ok(requests)
    }

    async fn list_overlapping(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Vec<LeaveRequest>> {
        let mut requests: Vec<LeaveRequest> = self
            .requests
            .read()
            .await
            .values()
            .filter(|r| r.user_id == user_id && r.overlaps(start, end))
            .cloned()
            .collect();
        requests.sort_by_key(|r| r.start_date);
        Ok(requests)
    }

    async fn list_by_status(&self, status: LeaveStatus) -> DomainResult<Vec<LeaveRequest>> {
        let mut requests: Vec<LeaveRequest> = self
            .requests
            .read()
            .await
            .values()
            .filter(|r| r.status == status)
            .cloned()
            .collect();
        requests.sort_by(|a, b| b.applied_on.cmp(&a.applied_on));
        Ok(requests)
    }
}

#[derive(Default)]
pub struct InMemoryLeaveTypeRepository {
    types: Arc<RwLock<HashMap<String, LeaveType>>>,
}

impl InMemoryLeaveTypeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LeaveTypeRepository for InMemoryLeaveTypeRepository {
    async fn create(&self, leave_type: &LeaveType) -> DomainResult<()> {
        self.types
            .write()
            .await
            .insert(leave_type.id.clone(), leave_type.clone());
        Ok(())
    }

    async fn get(&self, leave_type_id: &str) -> DomainResult<Option<LeaveType>> {
        Ok(self.types.read().await.get(leave_type_id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<LeaveType>> {
        let mut types: Vec<LeaveType> = self.types.read().await.values().cloned().collect();
        types.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(types)
    }
}

#[derive(Default)]
pub struct InMemoryBalanceRepository {
    balances: Arc<RwLock<HashMap<(String, String), LeaveBalance>>>,
    policies: Arc<RwLock<HashMap<(String, String), i64>>>,
}

impl InMemoryBalanceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BalanceRepository for InMemoryBalanceRepository {
    async fn get(&self, user_id: &str, leave_type_id: &str) -> DomainResult<Option<LeaveBalance>> {
        Ok(self
            .balances
            .read()
            .await
            .get(&(user_id.to_string(), leave_type_id.to_string()))
            .cloned())
    }

    async fn upsert(&self, balance: &LeaveBalance) -> DomainResult<()> {
        self.balances.write().await.insert(
            (balance.user_id.clone(), balance.leave_type_id.clone()),
            balance.clone(),
        );
        Ok(())
    }

    async fn list_for_user(&self, user_id: &str) -> DomainResult<Vec<LeaveBalance>> {
        let mut balances: Vec<LeaveBalance> = self
            .balances
            .read()
            .await
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        balances.sort_by(|a, b| a.leave_type_id.cmp(&b.leave_type_id));
        Ok(balances)
    }

    async fn set_policy(&self, policy: &CompanyLeavePolicy) -> DomainResult<()> {
        self.policies.write().await.insert(
            (policy.company_id.clone(), policy.leave_type_id.clone()),
            policy.days_per_year,
        );
        Ok(())
    }

    async fn policy_days(
        &self,
        company_id: &str,
        leave_type_id: &str,
    ) -> DomainResult<Option<i64>> {
        Ok(self
            .policies
            .read()
            .await
            .get(&(company_id.to_string(), leave_type_id.to_string()))
            .copied())
    }
}
