use crate::domain::errors::DomainResult;
use crate::models::{Company, WorkWeek};
use async_trait::async_trait;

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn create_company(&self, company: &Company) -> DomainResult<()>;

    async fn get_company(&self, company_id: &str) -> DomainResult<Option<Company>>;

    /// Replace the company's configured work week.
    async fn set_work_week(&self, work_week: &WorkWeek) -> DomainResult<()>;

    /// The configured work week, if any. Callers fall back to
    /// `WorkWeek::standard` when absent.
    async fn get_work_week(&self, company_id: &str) -> DomainResult<Option<WorkWeek>>;
}
