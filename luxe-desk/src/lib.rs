pub mod deferred;
pub mod session;

pub use deferred::Deferred;
pub use session::{Desk, DeskError, Notice};
