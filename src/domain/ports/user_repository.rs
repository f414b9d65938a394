use crate::domain::errors::DomainResult;
use crate::models::{Role, User};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: &User) -> DomainResult<()>;

    async fn get_user(&self, user_id: &str) -> DomainResult<Option<User>>;

    async fn list_for_company(&self, company_id: &str) -> DomainResult<Vec<User>>;

    /// Users of a given role within a company, e.g. the managers a draft
    /// email should address.
    async fn list_for_company_with_role(
        &self,
        company_id: &str,
        role: Role,
    ) -> DomainResult<Vec<User>>;
}
