use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::{HolidayRepository, UserRepository};
use crate::events::{EventBus, SystemEvent};
use crate::models::{CreateHolidayRequest, Holiday, HolidayImportSummary, User};
use std::sync::Arc;
use tracing::info;

/// Manages the company holiday calendar. File parsing (XLSX/PDF) happens
/// upstream; this service receives already-parsed entries.
#[derive(Clone)]
pub struct HolidayService {
    holiday_repo: Arc<dyn HolidayRepository>,
    user_repo: Arc<dyn UserRepository>,
    event_bus: EventBus,
}

impl HolidayService {
    pub fn new(
        holiday_repo: Arc<dyn HolidayRepository>,
        user_repo: Arc<dyn UserRepository>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            holiday_repo,
            user_repo,
            event_bus,
        }
    }

    /// Create a single holiday entry for the actor's company.
    pub async fn add_holiday(
        &self,
        actor_id: &str,
        create: CreateHolidayRequest,
    ) -> DomainResult<Holiday> {
        let (_, company_id) = self.require_holiday_admin(actor_id).await?;

        let mut holiday = Holiday::new(company_id, create.date, create.name);
        holiday.recurring = create.recurring;
        holiday.is_optional = create.is_optional;
        self.holiday_repo.create(&holiday).await?;

        info!("Holiday '{}' added on {}", holiday.name, holiday.date);
        Ok(holiday)
    }

    /// Bulk import of (date, name) entries, keyed by (company, date):
    /// existing entries get their name refreshed, new dates are created.
    pub async fn import_holidays(
        &self,
        actor_id: &str,
        entries: Vec<CreateHolidayRequest>,
    ) -> DomainResult<HolidayImportSummary> {
        let (_, company_id) = self.require_holiday_admin(actor_id).await?;

        let mut created = 0;
        let mut updated = 0;
        for entry in entries {
            match self
                .holiday_repo
                .find_by_company_and_date(&company_id, entry.date)
                .await?
            {
                Some(mut existing) => {
                    existing.name = entry.name;
                    self.holiday_repo.update(&existing).await?;
                    updated += 1;
                }
                None => {
                    let mut holiday = Holiday::new(company_id.clone(), entry.date, entry.name);
                    holiday.recurring = entry.recurring;
                    holiday.is_optional = entry.is_optional;
                    self.holiday_repo.create(&holiday).await?;
                    created += 1;
                }
            }
        }

        self.event_bus.publish(SystemEvent::HolidaysImported {
            company_id: company_id.clone(),
            created,
            updated,
            timestamp: chrono::Utc::now(),
        });

        info!(
            "Imported holidays for company {}: {} created, {} updated",
            company_id, created, updated
        );

        Ok(HolidayImportSummary { created, updated })
    }

    /// All holidays for a company, stored dates ascending. No permission
    /// needed; every employee's calendar reads these.
    pub async fn list_for_company(&self, company_id: &str) -> DomainResult<Vec<Holiday>> {
        self.holiday_repo.list_for_company(company_id).await
    }

    async fn require_holiday_admin(&self, actor_id: &str) -> DomainResult<(User, String)> {
        let actor = self
            .user_repo
            .get_user(actor_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("User not found: {}", actor_id)))?;
        if !actor.role.can_review() {
            return Err(DomainError::Forbidden(
                "You don't have permission to manage holidays".to_string(),
            ));
        }
        let company_id = actor.company_id.clone().ok_or_else(|| {
            DomainError::Forbidden("Holiday management requires a company".to_string())
        })?;
        Ok((actor, company_id))
    }
}
