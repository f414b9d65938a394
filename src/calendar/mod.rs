//! Pure calendar classification and bridge-day detection.
//!
//! Everything in this module is a synchronous function of caller-supplied
//! snapshots; no shared state, safe to call from any number of tasks.

pub mod bridge;
pub mod classifier;
pub mod day;
pub mod suggest;
pub mod window;

pub use bridge::{detect_bridges, SMART_LEAVE_TOOLTIP};
pub use classifier::{classify, LeaveInterval};
pub use day::{DayRecord, DayType};
pub use suggest::{format_suggestions, Suggestion, FALLBACK_EXPLANATION};
pub use window::DateWindow;
