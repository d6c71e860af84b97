pub mod models;
pub mod pii;

pub use models::booking::{Booking, BookingStatus};
pub use models::guest::{User, UserRole};
pub use models::room::{Room, RoomCategory};
pub use pii::Masked;
