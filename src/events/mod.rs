use crate::models::LeaveStatus;
use chrono::{DateTime, Utc};
use tokio::sync::broadcast;

/// System events emitted by the service layer. Outbound notifications
/// (email to managers, employee alerts) subscribe here; delivery itself is
/// an external collaborator.
#[derive(Debug, Clone)]
pub enum SystemEvent {
    LeaveSubmitted {
        request_id: String,
        user_id: String,
        leave_type_id: String,
        total_days: i64,
        timestamp: DateTime<Utc>,
    },
    LeaveReviewed {
        request_id: String,
        user_id: String,
        reviewer_id: String,
        old_status: LeaveStatus,
        new_status: LeaveStatus,
        balance_remaining: Option<i64>,
        timestamp: DateTime<Utc>,
    },
    ProofRequested {
        request_id: String,
        user_id: String,
        requested_by: String,
        timestamp: DateTime<Utc>,
    },
    ProofProvided {
        request_id: String,
        user_id: String,
        timestamp: DateTime<Utc>,
    },
    HolidaysImported {
        company_id: String,
        created: usize,
        updated: usize,
        timestamp: DateTime<Utc>,
    },
    BalancesReset {
        company_id: String,
        year: i32,
        users_affected: usize,
        timestamp: DateTime<Utc>,
    },
}

/// Event bus for publishing and subscribing to system events.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<SystemEvent>,
}

impl EventBus {
    /// Create a new event bus with specified capacity.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish an event to all subscribers (non-blocking, fire-and-forget).
    pub fn publish(&self, event: SystemEvent) {
        // No subscribers is not an error; just log and continue.
        if let Err(e) = self.tx.send(event) {
            tracing::debug!("Event dropped (no subscribers): {}", e);
        }
    }

    /// Subscribe to events (returns a receiver).
    pub fn subscribe(&self) -> broadcast::Receiver<SystemEvent> {
        self.tx.subscribe()
    }

    /// Get the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(1000)
    }
}
