use crate::domain::errors::DomainResult;
use crate::models::Holiday;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait HolidayRepository: Send + Sync {
    async fn create(&self, holiday: &Holiday) -> DomainResult<()>;

    async fn update(&self, holiday: &Holiday) -> DomainResult<()>;

    /// Non-recurring entries are keyed by (company, date); used by bulk
    /// import to decide between create and update.
    async fn find_by_company_and_date(
        &self,
        company_id: &str,
        date: NaiveDate,
    ) -> DomainResult<Option<Holiday>>;

    /// Every entry for the company, stored dates ascending. Recurring
    /// entries match windows in any year, so callers must not pre-filter
    /// by date range; the classifier resolves recurrence itself.
    async fn list_for_company(&self, company_id: &str) -> DomainResult<Vec<Holiday>>;
}
