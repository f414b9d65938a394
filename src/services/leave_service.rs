use crate::calendar::DateWindow;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::{
    BalanceRepository, EmailDraftProvider, LeaveRepository, LeaveTypeRepository, UserRepository,
};
use crate::events::{EventBus, SystemEvent};
use crate::models::{
    CreateLeaveRequest, EmailDraftRequest, LeaveBalance, LeaveRequest, LeaveStatus, LeaveType,
    Role, User,
};
use crate::services::balance_service::allocation_for;
use crate::services::state_machine::validate_transition;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, warn};

/// Service for the leave request lifecycle: submission, review, proof
/// tracking and the balance decrement on approval.
#[derive(Clone)]
pub struct LeaveService {
    leave_repo: Arc<dyn LeaveRepository>,
    leave_type_repo: Arc<dyn LeaveTypeRepository>,
    balance_repo: Arc<dyn BalanceRepository>,
    user_repo: Arc<dyn UserRepository>,
    event_bus: EventBus,
    draft_provider: Option<Arc<dyn EmailDraftProvider>>,
}

impl LeaveService {
    pub fn new(
        leave_repo: Arc<dyn LeaveRepository>,
        leave_type_repo: Arc<dyn LeaveTypeRepository>,
        balance_repo: Arc<dyn BalanceRepository>,
        user_repo: Arc<dyn UserRepository>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            leave_repo,
            leave_type_repo,
            balance_repo,
            user_repo,
            event_bus,
            draft_provider: None,
        }
    }

    /// Attach an AI email draft provider. Absent, drafts are skipped.
    pub fn with_draft_provider(mut self, provider: Arc<dyn EmailDraftProvider>) -> Self {
        self.draft_provider = Some(provider);
        self
    }

    /// Submit a leave request. The date range is validated, the balance
    /// must cover the requested days, and the request starts out pending.
    pub async fn submit_request(
        &self,
        user_id: &str,
        create: CreateLeaveRequest,
    ) -> DomainResult<LeaveRequest> {
        let user = self.require_user(user_id).await?;
        let leave_type = self.require_leave_type(&create.leave_type_id).await?;

        // Fails fast on an inverted range.
        DateWindow::new(create.start_date, create.end_date)?;

        let balance = self.get_or_create_balance(&user, &leave_type).await?;

        let mut request = LeaveRequest::new(
            user.id.clone(),
            leave_type.id.clone(),
            create.start_date,
            create.end_date,
            create.reason,
        );
        request.email_draft = create.email_draft.filter(|d| !d.trim().is_empty());

        if balance.available_days < request.total_days() {
            return Err(DomainError::Conflict(format!(
                "Insufficient leave balance: {} days available for {}, requested {}",
                balance.available_days,
                leave_type.name,
                request.total_days()
            )));
        }

        self.leave_repo.create(&request).await?;

        self.event_bus.publish(SystemEvent::LeaveSubmitted {
            request_id: request.id.clone(),
            user_id: user.id.clone(),
            leave_type_id: leave_type.id.clone(),
            total_days: request.total_days(),
            timestamp: chrono::Utc::now(),
        });

        info!(
            "Leave request {} submitted by {} ({}, {} to {})",
            request.id, user.username, leave_type.name, request.start_date, request.end_date
        );

        Ok(request)
    }

    /// Approve a pending request and decrement the requester's balance.
    pub async fn approve(&self, reviewer_id: &str, request_id: &str) -> DomainResult<LeaveRequest> {
        self.review(reviewer_id, request_id, LeaveStatus::Approved)
            .await
    }

    /// Reject a pending request. The balance is untouched.
    pub async fn reject(&self, reviewer_id: &str, request_id: &str) -> DomainResult<LeaveRequest> {
        self.review(reviewer_id, request_id, LeaveStatus::Rejected)
            .await
    }

    async fn review(
        &self,
        reviewer_id: &str,
        request_id: &str,
        new_status: LeaveStatus,
    ) -> DomainResult<LeaveRequest> {
        let reviewer = self.require_user(reviewer_id).await?;
        let mut request = self.require_request(request_id).await?;
        let requester = self.require_user(&request.user_id).await?;

        self.check_reviewer(&reviewer, &requester)?;

        validate_transition(request.status, new_status)
            .map_err(|e| DomainError::Conflict(e.to_string()))?;
        if request.status == new_status {
            return Ok(request);
        }

        let old_status = request.status;
        request.status = new_status;
        request.reviewed_by = Some(reviewer.id.clone());
        request.reviewed_on = Some(chrono::Utc::now());
        self.leave_repo.update(&request).await?;

        let balance_remaining = if new_status == LeaveStatus::Approved {
            Some(self.deduct_balance(&request).await?)
        } else {
            None
        };

        self.event_bus.publish(SystemEvent::LeaveReviewed {
            request_id: request.id.clone(),
            user_id: requester.id.clone(),
            reviewer_id: reviewer.id.clone(),
            old_status,
            new_status,
            balance_remaining,
            timestamp: chrono::Utc::now(),
        });

        info!(
            "Leave request {} for {} moved from {} to {} by {}",
            request.id, requester.username, old_status, new_status, reviewer.username
        );

        Ok(request)
    }

    /// Ask the requester for supporting documentation.
    pub async fn request_proof(
        &self,
        reviewer_id: &str,
        request_id: &str,
    ) -> DomainResult<LeaveRequest> {
        let reviewer = self.require_user(reviewer_id).await?;
        let mut request = self.require_request(request_id).await?;
        let requester = self.require_user(&request.user_id).await?;

        self.check_reviewer(&reviewer, &requester)?;

        request.proof_requested = true;
        request.proof_requested_by = Some(reviewer.id.clone());
        request.proof_requested_on = Some(chrono::Utc::now());
        request.proof_provided = false;
        self.leave_repo.update(&request).await?;

        self.event_bus.publish(SystemEvent::ProofRequested {
            request_id: request.id.clone(),
            user_id: requester.id.clone(),
            requested_by: reviewer.id.clone(),
            timestamp: chrono::Utc::now(),
        });

        info!(
            "Proof requested for leave request {} by {}",
            request.id, reviewer.username
        );

        Ok(request)
    }

    /// The requester marks proof as provided on their own request.
    pub async fn mark_proof_provided(
        &self,
        user_id: &str,
        request_id: &str,
    ) -> DomainResult<LeaveRequest> {
        let mut request = self.require_request(request_id).await?;
        if request.user_id != user_id {
            return Err(DomainError::Forbidden(
                "Proof can only be marked on your own leave requests".to_string(),
            ));
        }

        request.proof_provided = true;
        self.leave_repo.update(&request).await?;

        self.event_bus.publish(SystemEvent::ProofProvided {
            request_id: request.id.clone(),
            user_id: user_id.to_string(),
            timestamp: chrono::Utc::now(),
        });

        Ok(request)
    }

    /// A user's request history, most recent first.
    pub async fn history(&self, user_id: &str) -> DomainResult<Vec<LeaveRequest>> {
        self.leave_repo.list_for_user(user_id).await
    }

    /// Pending requests visible to a reviewer: admins see every pending
    /// request, managers and HR only their own company's.
    pub async fn pending_for_review(&self, reviewer_id: &str) -> DomainResult<Vec<LeaveRequest>> {
        let reviewer = self.require_user(reviewer_id).await?;
        if !reviewer.role.can_review() {
            return Err(DomainError::Forbidden(
                "You don't have permission to view pending leave requests".to_string(),
            ));
        }

        let pending = self.leave_repo.list_by_status(LeaveStatus::Pending).await?;
        if reviewer.role == Role::Admin {
            return Ok(pending);
        }

        let Some(company_id) = reviewer.company_id.as_deref() else {
            return Ok(Vec::new());
        };
        let company_users: HashSet<String> = self
            .user_repo
            .list_for_company(company_id)
            .await?
            .into_iter()
            .map(|u| u.id)
            .collect();

        Ok(pending
            .into_iter()
            .filter(|r| company_users.contains(&r.user_id))
            .collect())
    }

    /// Draft a polite request email via the AI provider. Best-effort: any
    /// provider failure is logged and yields `None`.
    pub async fn generate_email_draft(
        &self,
        user_id: &str,
        leave_type_id: &str,
        start_date: chrono::NaiveDate,
        end_date: chrono::NaiveDate,
        reason: &str,
    ) -> DomainResult<Option<String>> {
        let Some(provider) = self.draft_provider.as_ref() else {
            return Ok(None);
        };

        let user = self.require_user(user_id).await?;
        let leave_type = self.require_leave_type(leave_type_id).await?;
        DateWindow::new(start_date, end_date)?;

        let manager_name = match user.company_id.as_deref() {
            Some(company_id) => self
                .user_repo
                .list_for_company_with_role(company_id, Role::Manager)
                .await?
                .first()
                .map(|m| m.display_name().to_string())
                .unwrap_or_else(|| "Manager".to_string()),
            None => "Manager".to_string(),
        };

        let draft_request = EmailDraftRequest {
            leave_type: leave_type.name.clone(),
            start_date,
            end_date,
            reason: reason.to_string(),
            user_name: user.display_name().to_string(),
            manager_name,
        };

        match provider.draft(&draft_request).await {
            Ok(body) => Ok(Some(body)),
            Err(e) => {
                warn!(error = %e, "Email draft enhancement failed; submitting without draft");
                Ok(None)
            }
        }
    }

    // Private helpers

    fn check_reviewer(&self, reviewer: &User, requester: &User) -> DomainResult<()> {
        if !reviewer.role.can_review() {
            return Err(DomainError::Forbidden(
                "You don't have permission to review leave requests".to_string(),
            ));
        }
        if reviewer.id == requester.id {
            return Err(DomainError::Forbidden(
                "Reviewers cannot review their own leave requests".to_string(),
            ));
        }
        if reviewer.company_id.is_some() && reviewer.company_id != requester.company_id {
            return Err(DomainError::Forbidden(
                "Reviewers can only review requests from their own company".to_string(),
            ));
        }
        Ok(())
    }

    async fn get_or_create_balance(
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

    /// Decrement the requester's balance by the approved days, saturating
    /// at zero. Returns the remaining balance.
    async fn deduct_balance(&self, request: &LeaveRequest) -> DomainResult<i64> {
        let mut balance = self
            .balance_repo
            .get(&request.user_id, &request.leave_type_id)
            .await?
            .unwrap_or(LeaveBalance {
                user_id: request.user_id.clone(),
                leave_type_id: request.leave_type_id.clone(),
                available_days: 0,
            });
        balance.available_days = (balance.available_days - request.total_days()).max(0);
        self.balance_repo.upsert(&balance).await?;
        Ok(balance.available_days)
    }

    async fn require_user(&self, user_id: &str) -> DomainResult<User> {
        self.user_repo
            .get_user(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("User not found: {}", user_id)))
    }

    async fn require_request(&self, request_id: &str) -> DomainResult<LeaveRequest> {
        self.leave_repo
            .get(request_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Leave request not found: {}", request_id)))
    }

    async fn require_leave_type(&self, leave_type_id: &str) -> DomainResult<LeaveType> {
        self.leave_type_repo
            .get(leave_type_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Leave type not found: {}", leave_type_id)))
    }
}
