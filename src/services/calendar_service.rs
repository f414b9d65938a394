use crate::calendar::{classify, detect_bridges, DateWindow, DayRecord, LeaveInterval};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::{
    Clock, CompanyRepository, HolidayRepository, LeaveRepository, LeaveTypeRepository,
    UserRepository,
};
use crate::models::{User, WorkWeek};
use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Builds classified calendar views for a user: fetches a consistent
/// snapshot of work week, holidays and leave bookings through the ports,
/// then runs the pure classifier and bridge detector over it.
#[derive(Clone)]
pub struct CalendarService {
    company_repo: Arc<dyn CompanyRepository>,
    holiday_repo: Arc<dyn HolidayRepository>,
    leave_repo: Arc<dyn LeaveRepository>,
    leave_type_repo: Arc<dyn LeaveTypeRepository>,
    user_repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl CalendarService {
    pub fn new(
        company_repo: Arc<dyn CompanyRepository>,
        holiday_repo: Arc<dyn HolidayRepository>,
        leave_repo: Arc<dyn LeaveRepository>,
        leave_type_repo: Arc<dyn LeaveTypeRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            company_repo,
            holiday_repo,
            leave_repo,
            leave_type_repo,
            user_repo,
            clock,
        }
    }

    /// Classified days for a window, keyed by date, smart-leave candidates
    /// already promoted.
    pub async fn classify_days(
        &self,
        user_id: &str,
        window: &DateWindow,
    ) -> DomainResult<BTreeMap<NaiveDate, DayRecord>> {
        let user = self.require_user(user_id).await?;
        let work_week = self.work_week_for(&user).await?;
        let holidays = match user.company_id.as_deref() {
            Some(company_id) => self.holiday_repo.list_for_company(company_id).await?,
            None => Vec::new(),
        };
        let leaves = self.leave_intervals(&user, window).await?;

        let mut days = classify(window, &work_week, &holidays, &leaves);
        detect_bridges(&mut days);
        Ok(days)
    }

    /// Day records for a window in ascending date order, ready for
    /// serialization.
    pub async fn classified_window(
        &self,
        user_id: &str,
        window: &DateWindow,
    ) -> DomainResult<Vec<DayRecord>> {
        Ok(self
            .classify_days(user_id, window)
            .await?
            .into_values()
            .collect())
    }

    /// Day records for a whole calendar month.
    pub async fn month_view(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> DomainResult<Vec<DayRecord>> {
        let window = DateWindow::for_month(year, month)?;
        self.classified_window(user_id, &window).await
    }

    /// Day records for the month the clock currently points at.
    pub async fn current_month_view(&self, user_id: &str) -> DomainResult<Vec<DayRecord>> {
        let today = self.clock.today();
        self.month_view(user_id, today.year(), today.month()).await
    }

    /// The company's configured work week, defaulting to Monday-Friday.
    pub async fn work_week_for(&self, user: &User) -> DomainResult<WorkWeek> {
        if let Some(company_id) = user.company_id.as_deref() {
            if let Some(week) = self.company_repo.get_work_week(company_id).await? {
                return Ok(week);
            }
            return Ok(WorkWeek::standard(company_id.to_string()));
        }
        Ok(WorkWeek::standard(String::new()))
    }

    /// The user's bookings overlapping the window, labelled with their
    /// leave type names. Rejected requests are filtered by the classifier.
    async fn leave_intervals(
        &self,
        user: &User,
        window: &DateWindow,
    ) -> DomainResult<Vec<LeaveInterval>> {
        let requests = self
            .leave_repo
            .list_overlapping(&user.id, window.start(), window.end())
            .await?;

        let mut type_names: HashMap<String, String> = HashMap::new();
        let mut intervals = Vec::with_capacity(requests.len());
        for request in requests {
            let label = match type_names.get(&request.leave_type_id) {
                Some(name) => name.clone(),
                None => {
                    let name = self
                        .leave_type_repo
                        .get(&request.leave_type_id)
                        .await?
                        .map(|t| t.name)
                        .unwrap_or_else(|| "Leave".to_string());
                    type_names.insert(request.leave_type_id.clone(), name.clone());
                    name
                }
            };
            intervals.push(LeaveInterval::new(
                request.start_date,
                request.end_date,
                label,
                request.status,
            ));
        }
        Ok(intervals)
    }

    async fn require_user(&self, user_id: &str) -> DomainResult<User> {
        self.user_repo
            .get_user(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("User not found: {}", user_id)))
    }
}
