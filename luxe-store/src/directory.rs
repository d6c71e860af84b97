use luxe_shared::{Booking, BookingStatus, Masked, Room, User};
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Email or Username already exists.")]
    DuplicateIdentity,

    #[error("Record id already present: {0}")]
    DuplicateId(String),

    #[error("Invalid room {id}: {reason}")]
    InvalidRoom { id: String, reason: String },
}

fn not_found(kind: &'static str, id: &str) -> StoreError {
    StoreError::NotFound {
        kind,
        id: id.to_owned(),
    }
}

/// Single source of truth for guests, rooms and reservations.
///
/// Collections are keyed by id; users additionally carry username and
/// email indexes so the authentication engine gets O(1) lookups instead
/// of full scans. No interior locking: the model assumes exactly one
/// active mutator at a time.
pub struct DirectoryStore {
    users: HashMap<String, User>,
    rooms: HashMap<String, Room>,
    bookings: HashMap<String, Booking>,
    username_index: HashMap<String, String>,
    email_index: HashMap<String, String>,
}

impl DirectoryStore {
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
            rooms: HashMap::new(),
            bookings: HashMap::new(),
            username_index: HashMap::new(),
            email_index: HashMap::new(),
        }
    }

    // --- users ---

    pub fn find_user(&self, predicate: impl Fn(&User) -> bool) -> Option<&User> {
        self.users.values().find(|u| predicate(u))
    }

    /// Keyed lookup for login: all three fields must match exactly,
    /// case-sensitive.
    pub fn find_user_by_credentials(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Option<&User> {
        self.find_user_by_identity(username, email)
            .filter(|u| u.password.expose() == password)
    }

    /// Keyed lookup for recovery: username and email must both match.
    pub fn find_user_by_identity(&self, username: &str, email: &str) -> Option<&User> {
        let id = self.username_index.get(username)?;
        let user = self.users.get(id)?;
        (user.email == email).then_some(user)
    }

    pub fn get_user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    /// Uniqueness of username and email is enforced here, in addition to
    /// whatever pre-checks the caller ran.
    pub fn insert_user(&mut self, user: User) -> Result<(), StoreError> {
        if self.username_index.contains_key(&user.username)
            || self.email_index.contains_key(&user.email)
        {
            return Err(StoreError::DuplicateIdentity);
        }
        if self.users.contains_key(&user.id) {
            return Err(StoreError::DuplicateId(user.id));
        }

        self.username_index
            .insert(user.username.clone(), user.id.clone());
        self.email_index.insert(user.email.clone(), user.id.clone());
        tracing::debug!(user = %user.id, username = %user.username, "user inserted");
        self.users.insert(user.id.clone(), user);
        Ok(())
    }

    pub fn update_user_password(
        &mut self,
        id: &str,
        new_password: String,
    ) -> Result<(), StoreError> {
        let user = self.users.get_mut(id).ok_or_else(|| not_found("user", id))?;
        user.password = Masked(new_password);
        tracing::info!(user = %id, "password overwritten");
        Ok(())
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    // --- rooms ---

    pub fn get_room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn insert_room(&mut self, room: Room) -> Result<(), StoreError> {
        if room.price <= 0 {
            return Err(StoreError::InvalidRoom {
                id: room.id,
                reason: "nightly price must be positive".into(),
            });
        }
        if room.images.is_empty() {
            return Err(StoreError::InvalidRoom {
                id: room.id,
                reason: "at least one image is required".into(),
            });
        }
        if room.capacity == 0 {
            return Err(StoreError::InvalidRoom {
                id: room.id,
                reason: "capacity must be positive".into(),
            });
        }
        if self.rooms.contains_key(&room.id) {
            return Err(StoreError::DuplicateId(room.id));
        }
        self.rooms.insert(room.id.clone(), room);
        Ok(())
    }

    pub fn update_room_availability(&mut self, id: &str, available: bool) -> Result<(), StoreError> {
        let room = self.rooms.get_mut(id).ok_or_else(|| not_found("room", id))?;
        room.available = available;
        tracing::info!(room = %id, available, "room availability updated");
        Ok(())
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn available_rooms(&self) -> Vec<&Room> {
        self.rooms.values().filter(|r| r.available).collect()
    }

    // --- bookings ---

    pub fn get_booking(&self, id: &str) -> Option<&Booking> {
        self.bookings.get(id)
    }

    pub fn insert_booking(&mut self, booking: Booking) -> Result<(), StoreError> {
        if self.bookings.contains_key(&booking.id) {
            return Err(StoreError::DuplicateId(booking.id));
        }
        tracing::debug!(booking = %booking.id, room = %booking.room_id, "booking inserted");
        self.bookings.insert(booking.id.clone(), booking);
        Ok(())
    }

    pub fn update_booking_status(
        &mut self,
        id: &str,
        status: BookingStatus,
    ) -> Result<(), StoreError> {
        let booking = self
            .bookings
            .get_mut(id)
            .ok_or_else(|| not_found("booking", id))?;
        booking.status = status;
        tracing::info!(booking = %id, status = %status, "booking status updated");
        Ok(())
    }

    pub fn bookings(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.values()
    }

    pub fn bookings_for_user(&self, user_id: &str) -> Vec<&Booking> {
        self.bookings
            .values()
            .filter(|b| b.user_id == user_id)
            .collect()
    }
}

impl Default for DirectoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use luxe_shared::UserRole;

    fn guest(username: &str, email: &str) -> User {
        User::new(
            "Test Guest".into(),
            username.into(),
            email.into(),
            "9000000000".into(),
            UserRole::Client,
            "password123".into(),
        )
    }

    fn room(id: &str, price: i32) -> Room {
        Room {
            id: id.into(),
            name: format!("Room {id}"),
            category: luxe_shared::RoomCategory::Standard,
            price,
            description: "test room".into(),
            amenities: vec!["AC".into()],
            images: vec!["img.jpg".into()],
            capacity: 2,
            available: true,
        }
    }

    #[test]
    fn test_insert_user_rejects_duplicate_username_or_email() {
        let mut store = DirectoryStore::new();
        store.insert_user(guest("sneha_s", "sneha@example.com")).unwrap();

        let same_username = store.insert_user(guest("sneha_s", "other@example.com"));
        assert!(matches!(same_username, Err(StoreError::DuplicateIdentity)));

        let same_email = store.insert_user(guest("other", "sneha@example.com"));
        assert!(matches!(same_email, Err(StoreError::DuplicateIdentity)));
    }

    #[test]
    fn test_credential_lookup_requires_exact_triple() {
        let mut store = DirectoryStore::new();
        store.insert_user(guest("sneha_s", "sneha@example.com")).unwrap();

        assert!(store
            .find_user_by_credentials("sneha_s", "sneha@example.com", "password123")
            .is_some());
        assert!(store
            .find_user_by_credentials("sneha_s", "sneha@example.com", "Password123")
            .is_none());
        assert!(store
            .find_user_by_credentials("Sneha_s", "sneha@example.com", "password123")
            .is_none());
        assert!(store
            .find_user_by_credentials("sneha_s", "sneha@example.org", "password123")
            .is_none());
    }

    #[test]
    fn test_password_update_changes_lookup() {
        let mut store = DirectoryStore::new();
        let user = guest("sneha_s", "sneha@example.com");
        let id = user.id.clone();
        store.insert_user(user).unwrap();

        store.update_user_password(&id, "fresh-secret".into()).unwrap();
        assert!(store
            .find_user_by_credentials("sneha_s", "sneha@example.com", "fresh-secret")
            .is_some());
        assert!(store
            .find_user_by_credentials("sneha_s", "sneha@example.com", "password123")
            .is_none());
    }

    #[test]
    fn test_keyed_updates_report_missing_ids() {
        let mut store = DirectoryStore::new();
        assert!(matches!(
            store.update_user_password("nope", "x".into()),
            Err(StoreError::NotFound { kind: "user", .. })
        ));
        assert!(matches!(
            store.update_booking_status("nope", BookingStatus::Approved),
            Err(StoreError::NotFound { kind: "booking", .. })
        ));
        assert!(matches!(
            store.update_room_availability("nope", false),
            Err(StoreError::NotFound { kind: "room", .. })
        ));
    }

    #[test]
    fn test_room_invariants_checked_on_insert() {
        let mut store = DirectoryStore::new();

        assert!(matches!(
            store.insert_room(room("r1", 0)),
            Err(StoreError::InvalidRoom { .. })
        ));

        let mut blind = room("r2", 8500);
        blind.images.clear();
        assert!(matches!(
            store.insert_room(blind),
            Err(StoreError::InvalidRoom { .. })
        ));
    }

    #[test]
    fn test_availability_flip_and_projection() {
        let mut store = DirectoryStore::new();
        store.insert_room(room("r1", 6500)).unwrap();
        store.insert_room(room("r2", 8500)).unwrap();
        assert_eq!(store.available_rooms().len(), 2);

        store.update_room_availability("r1", false).unwrap();
        let available = store.available_rooms();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, "r2");
    }

    #[test]
    fn test_bookings_for_user() {
        let mut store = DirectoryStore::new();
        let d = |day| NaiveDate::from_ymd_opt(2024, 6, day).unwrap();
        store
            .insert_booking(Booking::new("u2".into(), "r1".into(), d(15), d(17), 37000))
            .unwrap();
        store
            .insert_booking(Booking::new("u3".into(), "r2".into(), d(20), d(21), 8500))
            .unwrap();

        assert_eq!(store.bookings_for_user("u2").len(), 1);
        assert_eq!(store.bookings_for_user("u9").len(), 0);
    }
}
