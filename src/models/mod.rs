pub mod company;
pub mod holiday;
pub mod leave;
pub mod snapshot;
pub mod user;

pub use company::*;
pub use holiday::*;
pub use leave::*;
pub use snapshot::*;
pub use user::*;
