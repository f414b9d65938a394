use crate::models::LeaveStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("Invalid transition from {from:?} to {to:?}")]
    InvalidTransition { from: LeaveStatus, to: LeaveStatus },
}

/// Validates if a leave request status transition is allowed.
///
/// Only pending requests can be reviewed; approved and rejected are
/// terminal. Same-state transitions are a no-op and always valid.
pub fn validate_transition(from: LeaveStatus, to: LeaveStatus) -> Result<(), TransitionError> {
    use LeaveStatus::*;

    match (from, to) {
        // Same state is always valid (no-op)
        (a, b) if a == b => Ok(()),

        // Valid transitions
        (Pending, Approved) => Ok(()),
        (Pending, Rejected) => Ok(()),

        // All other transitions are invalid
        _ => Err(TransitionError::InvalidTransition { from, to }),
    }
}
