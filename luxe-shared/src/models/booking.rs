use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Reservation status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Approved,
    Cancelled,
}

impl BookingStatus {
    /// Approved and cancelled are terminal; only pending bookings move.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BookingStatus::Pending)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Approved => "APPROVED",
            BookingStatus::Cancelled => "CANCELLED",
        };
        write!(f, "{label}")
    }
}

/// A reservation. The total is frozen at creation time; a later room
/// price change never touches existing bookings. Bookings are never
/// deleted, only status-changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub room_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_price: i32,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        user_id: String,
        room_id: String,
        check_in: NaiveDate,
        check_out: NaiveDate,
        total_price: i32,
    ) -> Self {
        Self {
            id: format!("b-{}", Uuid::new_v4()),
            user_id,
            room_id,
            check_in,
            check_out,
            total_price,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == BookingStatus::Pending
    }

    /// Two stays overlap when each starts before the other ends; a stay
    /// checking out on another's check-in day does not collide.
    pub fn overlaps(&self, other: &Booking) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn stay(check_in: NaiveDate, check_out: NaiveDate) -> Booking {
        Booking::new("u1".into(), "r1".into(), check_in, check_out, 8500)
    }

    #[test]
    fn test_new_booking_starts_pending() {
        let booking = stay(d(2024, 6, 20), d(2024, 6, 21));
        assert_eq!(booking.status, BookingStatus::Pending);
        assert!(booking.is_pending());
        assert!(booking.id.starts_with("b-"));
    }

    #[test]
    fn test_status_serializes_screaming() {
        let json = serde_json::to_string(&BookingStatus::Approved).unwrap();
        assert_eq!(json, "\"APPROVED\"");
        assert_eq!(BookingStatus::Cancelled.to_string(), "CANCELLED");
    }

    #[test]
    fn test_overlap_detection() {
        let a = stay(d(2024, 6, 15), d(2024, 6, 18));
        let inside = stay(d(2024, 6, 16), d(2024, 6, 17));
        let straddling = stay(d(2024, 6, 17), d(2024, 6, 20));
        let back_to_back = stay(d(2024, 6, 18), d(2024, 6, 20));
        let disjoint = stay(d(2024, 7, 1), d(2024, 7, 3));

        assert!(a.overlaps(&inside));
        assert!(a.overlaps(&straddling));
        assert!(!a.overlaps(&back_to_back));
        assert!(!a.overlaps(&disjoint));
    }
}
