use crate::calendar::Suggestion;
use crate::models::{EmailDraftRequest, LeaveSnapshot};
use async_trait::async_trait;
use thiserror::Error;

/// Failure of an optional AI enhancement. Always caught by the service
/// layer, logged, and degraded to the deterministic path; never surfaced
/// to callers as a user-visible error.
#[derive(Debug, Error)]
pub enum EnhancementError {
    #[error("Enhancement disabled: no API key configured")]
    Disabled,
    #[error("Enhancement call timed out")]
    Timeout,
    #[error("Enhancement request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Malformed enhancement response: {0}")]
    Malformed(String),
    #[error("Enhancement returned no usable content")]
    Empty,
}

pub type EnhancementResult<T> = Result<T, EnhancementError>;

/// Ranks good leave windows from a calendar snapshot. Best-effort: any
/// error falls back to the deterministic bridge detector.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    async fn recommend(&self, snapshot: &LeaveSnapshot) -> EnhancementResult<Vec<Suggestion>>;
}

/// Drafts a polite leave request email body. Best-effort: on failure the
/// request simply carries no draft.
#[async_trait]
pub trait EmailDraftProvider: Send + Sync {
    async fn draft(&self, request: &EmailDraftRequest) -> EnhancementResult<String>;
}
