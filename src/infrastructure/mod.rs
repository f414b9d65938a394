pub mod memory;
pub mod observability;
pub mod providers;
