use crate::calendar::{format_suggestions, DateWindow, Suggestion};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::{
    BalanceRepository, Clock, CompanyRepository, HolidayRepository, LeaveRepository,
    LeaveTypeRepository, SuggestionProvider, UserRepository,
};
use crate::models::{
    HolidaySnapshot, LeaveEntrySnapshot, LeaveSnapshot, MonthSnapshot, User,
};
use crate::services::calendar_service::CalendarService;
use chrono::{Datelike, Days};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

const FALLBACK_ANCHOR_DAYS: u64 = 14;

/// Produces leave suggestions for a user: an AI provider ranks good
/// windows when configured, and the deterministic bridge detector is the
/// guaranteed fallback on any provider failure.
#[derive(Clone)]
pub struct SuggestionService {
    calendar: Arc<CalendarService>,
    company_repo: Arc<dyn CompanyRepository>,
    holiday_repo: Arc<dyn HolidayRepository>,
    leave_repo: Arc<dyn LeaveRepository>,
    leave_type_repo: Arc<dyn LeaveTypeRepository>,
    balance_repo: Arc<dyn BalanceRepository>,
    user_repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
    provider: Option<Arc<dyn SuggestionProvider>>,
    ai_timeout: Duration,
    lookahead_days: u64,
}

impl SuggestionService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        calendar: Arc<CalendarService>,
        company_repo: Arc<dyn CompanyRepository>,
        holiday_repo: Arc<dyn HolidayRepository>,
        leave_repo: Arc<dyn LeaveRepository>,
        leave_type_repo: Arc<dyn LeaveTypeRepository>,
        balance_repo: Arc<dyn BalanceRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
        ai_timeout: Duration,
        lookahead_days: u64,
    ) -> Self {
        Self {
            calendar,
            company_repo,
            holiday_repo,
            leave_repo,
            leave_type_repo,
            balance_repo,
            user_repo,
            clock,
            provider: None,
            ai_timeout,
            lookahead_days,
        }
    }

    /// Attach an AI suggestion provider. Absent, only the deterministic
    /// path runs.
    pub fn with_provider(mut self, provider: Arc<dyn SuggestionProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Best leave suggestions for a user. Never fails on provider trouble
    /// and never returns an empty list.
    pub async fn suggest_best_leaves(&self, user_id: &str) -> DomainResult<Vec<Suggestion>> {
        if let Some(provider) = self.provider.as_ref() {
            let snapshot = self.build_snapshot(user_id, 1).await?;
            match tokio::time::timeout(self.ai_timeout, provider.recommend(&snapshot)).await {
                Ok(Ok(suggestions)) if !suggestions.is_empty() => return Ok(suggestions),
                Ok(Ok(_)) => {
                    warn!("Suggestion enhancement returned nothing; using deterministic fallback");
                }
                Ok(Err(e)) => {
                    warn!(error = %e, "Suggestion enhancement failed; using deterministic fallback");
                }
                Err(_) => {
                    warn!("Suggestion enhancement timed out; using deterministic fallback");
                }
            }
        } else {
            debug!("No suggestion provider configured; using deterministic suggestions");
        }

        self.fallback_suggestions(user_id).await
    }

    /// Deterministic suggestions: classify the lookahead window starting
    /// tomorrow, promote bridge days, and format one suggestion per
    /// candidate. Guaranteed non-empty via the generic fallback entry.
    pub async fn fallback_suggestions(&self, user_id: &str) -> DomainResult<Vec<Suggestion>> {
        let today = self.clock.today();
        let window = DateWindow::lookahead(today, self.lookahead_days)?;
        let days = self.calendar.classify_days(user_id, &window).await?;

        let anchor = today
            .checked_add_days(Days::new(FALLBACK_ANCHOR_DAYS))
            .ok_or_else(|| DomainError::Internal("Date overflow".to_string()))?;
        Ok(format_suggestions(&days, anchor))
    }

    /// Structured calendar snapshot for the AI provider: one entry per
    /// month from the current one, with holidays, existing bookings and
    /// the user's total remaining balance.
    pub async fn build_snapshot(
        &self,
        user_id: &str,
        span_years: u32,
    ) -> DomainResult<LeaveSnapshot> {
        let user = self.require_user(user_id).await?;
        let work_week = self.calendar.work_week_for(&user).await?;
        let working_days: Vec<u8> = work_week.working_days().collect();

        let company_name = match user.company_id.as_deref() {
            Some(company_id) => self
                .company_repo
                .get_company(company_id)
                .await?
                .map(|c| c.name),
            None => None,
        };

        let holidays = match user.company_id.as_deref() {
            Some(company_id) => self.holiday_repo.list_for_company(company_id).await?,
            None => Vec::new(),
        };

        let total_leave_balance = self
            .balance_repo
            .list_for_user(&user.id)
            .await?
            .iter()
            .map(|b| b.available_days)
            .sum();

        let today = self.clock.today();
        let mut type_names: HashMap<String, String> = HashMap::new();
        let mut months = Vec::with_capacity((span_years * 12) as usize);
        for offset in 0..span_years * 12 {
            let shifted = today.month0() + offset;
            let year = today.year() + (shifted / 12) as i32;
            let month = shifted % 12 + 1;
            let window = DateWindow::for_month(year, month)?;

            let mut month_holidays: Vec<HolidaySnapshot> = holidays
                .iter()
                .filter(|h| window.contains(h.observed_date(year)))
                .map(|h| HolidaySnapshot {
                    date: h.observed_date(year),
                    name: h.name.clone(),
                    is_optional: h.is_optional,
                })
                .collect();
            month_holidays.sort_by_key(|h| h.date);

            let mut existing_leaves = Vec::new();
            for request in self
                .leave_repo
                .list_overlapping(&user.id, window.start(), window.end())
                .await?
            {
                let leave_type = match type_names.get(&request.leave_type_id) {
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
                existing_leaves.push(LeaveEntrySnapshot {
                    start: request.start_date,
                    end: request.end_date,
                    leave_type,
                    status: request.status.to_string(),
                });
            }

            months.push(MonthSnapshot {
                label: window.start().format("%B %Y").to_string(),
                year,
                month,
                working_days: working_days.clone(),
                holidays: month_holidays,
                existing_leaves,
            });
        }

        Ok(LeaveSnapshot {
            company: company_name.unwrap_or_else(|| "N/A".to_string()),
            user: user.username.clone(),
            year_start: today.year(),
            span_years,
            total_leave_balance,
            months,
        })
    }

    async fn require_user(&self, user_id: &str) -> DomainResult<User> {
        self.user_repo
            .get_user(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("User not found: {}", user_id)))
    }
}
