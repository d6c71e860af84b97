use crate::calendar::DateRange;
use chrono::NaiveDate;
use luxe_shared::{Booking, BookingStatus, User};
use luxe_store::{DirectoryStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Room not found: {0}")]
    RoomNotFound(String),

    #[error("Booking not found: {0}")]
    NotFound(String),

    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Room {room_id} already has an approved stay overlapping {check_in} to {check_out}")]
    OverlappingStay {
        room_id: String,
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Drives a reservation through its lifecycle:
/// `PENDING → APPROVED` or `PENDING → CANCELLED`, both terminal.
pub struct BookingManager;

impl BookingManager {
    pub fn new() -> Self {
        Self
    }

    /// Creates a PENDING reservation for an authenticated guest. The
    /// total is nightly price × nights, frozen at creation; a later
    /// room price change never reaches existing bookings.
    pub fn create_booking(
        &self,
        store: &mut DirectoryStore,
        user: &User,
        room_id: &str,
        range: DateRange,
    ) -> Result<Booking, BookingError> {
        let room = store
            .get_room(room_id)
            .ok_or_else(|| BookingError::RoomNotFound(room_id.to_owned()))?;

        let nights = range.nights();
        let total_price = room.price * nights as i32;
        let booking = Booking::new(
            user.id.clone(),
            room_id.to_owned(),
            range.check_in,
            range.check_out,
            total_price,
        );

        store.insert_booking(booking.clone())?;
        tracing::info!(
            booking = %booking.id,
            room = room_id,
            nights,
            total_price,
            "booking created"
        );
        Ok(booking)
    }

    /// Administrator decision on a reservation. Only PENDING bookings
    /// may move, and only to APPROVED or CANCELLED; approval also
    /// checks the room is not already committed to an overlapping stay.
    pub fn set_status(
        &self,
        store: &mut DirectoryStore,
        booking_id: &str,
        target: BookingStatus,
    ) -> Result<(), BookingError> {
        let booking = store
            .get_booking(booking_id)
            .cloned()
            .ok_or_else(|| BookingError::NotFound(booking_id.to_owned()))?;

        if target == BookingStatus::Pending || booking.status.is_terminal() {
            return Err(BookingError::InvalidTransition {
                from: booking.status.to_string(),
                to: target.to_string(),
            });
        }
        if target == BookingStatus::Approved {
            self.ensure_no_overlap(store, &booking)?;
        }

        store.update_booking_status(booking_id, target)?;
        Ok(())
    }

    fn ensure_no_overlap(
        &self,
        store: &DirectoryStore,
        candidate: &Booking,
    ) -> Result<(), BookingError> {
        let clash = store.bookings().any(|b| {
            b.id != candidate.id
                && b.room_id == candidate.room_id
                && b.status == BookingStatus::Approved
                && b.overlaps(candidate)
        });
        if clash {
            return Err(BookingError::OverlappingStay {
                room_id: candidate.room_id.clone(),
                check_in: candidate.check_in,
                check_out: candidate.check_out,
            });
        }
        Ok(())
    }

    /// Flips the availability flag unconditionally. Existing bookings
    /// for the room are left untouched.
    pub fn set_room_availability(
        &self,
        store: &mut DirectoryStore,
        room_id: &str,
        available: bool,
    ) -> Result<(), BookingError> {
        store.update_room_availability(room_id, available)?;
        Ok(())
    }
}

impl Default for BookingManager {
    fn default() -> Self {
        Self::new()
    }
}
