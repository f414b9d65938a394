pub mod calendar;
pub mod config;
pub mod domain;
pub mod events;
pub mod infrastructure;
pub mod models;
pub mod services;

pub use calendar::*;
pub use config::*;
pub use models::*;
pub use services::*;
