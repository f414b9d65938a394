pub mod balance_service;
pub mod calendar_service;
pub mod holiday_service;
pub mod leave_service;
pub mod state_machine;
pub mod suggestion_service;

pub use balance_service::*;
pub use calendar_service::*;
pub use holiday_service::*;
pub use leave_service::*;
pub use state_machine::*;
pub use suggestion_service::*;
