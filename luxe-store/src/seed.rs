use crate::directory::DirectoryStore;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use luxe_shared::{Booking, BookingStatus, Masked, Room, RoomCategory, User, UserRole};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn created(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("valid seed timestamp")
}

fn strings(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

/// Loads the demo inventory: seven rooms, four users (one administrator)
/// and five historical bookings covering every status.
pub fn seed() -> DirectoryStore {
    let mut store = DirectoryStore::new();

    for room in seed_rooms() {
        store.insert_room(room).expect("seed rooms are valid");
    }
    for user in seed_users() {
        store.insert_user(user).expect("seed users are unique");
    }
    for booking in seed_bookings() {
        store.insert_booking(booking).expect("seed bookings are unique");
    }

    store
}

fn seed_rooms() -> Vec<Room> {
    vec![
        Room {
            id: "r1".into(),
            name: "Tapi River View Suite".into(),
            category: RoomCategory::Suite,
            price: 18500,
            description: "Experience ultimate luxury with a panoramic view of the Tapi River. \
                          Includes private balcony and infinity pool access."
                .into(),
            amenities: strings(&[
                "Free WiFi",
                "Mini Bar",
                "River View",
                "King Bed",
                "AC",
                "Room Service",
            ]),
            images: strings(&[
                "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?auto=format&fit=crop&q=80&w=800",
                "https://images.unsplash.com/photo-1591088398332-8a7791972843?auto=format&fit=crop&q=80&w=800",
            ]),
            capacity: 2,
            available: true,
        },
        Room {
            id: "r2".into(),
            name: "Diamond City Deluxe".into(),
            category: RoomCategory::Deluxe,
            price: 8500,
            description: "Perfect for business travelers visiting the textile and diamond hubs, \
                          offering a spacious work area and high-speed internet."
                .into(),
            amenities: strings(&[
                "Free WiFi",
                "Coffee Maker",
                "Desk",
                "Queen Bed",
                "AC",
                "Laundry",
            ]),
            images: strings(&[
                "https://images.unsplash.com/photo-1590490360182-c33d57733427?auto=format&fit=crop&q=80&w=800",
                "https://images.unsplash.com/photo-1566665797739-1674de7a421a?auto=format&fit=crop&q=80&w=800",
            ]),
            capacity: 2,
            available: true,
        },
        Room {
            id: "r3".into(),
            name: "Dumas Garden Villa".into(),
            category: RoomCategory::Suite,
            price: 24000,
            description: "Spacious multi-bedroom villa surrounded by lush gardens near the \
                          coastline. Ideal for large families and long stays."
                .into(),
            amenities: strings(&[
                "Garden View",
                "Kitchenette",
                "Private Patio",
                "2 King Beds",
                "Play Area",
            ]),
            images: strings(&[
                "https://images.unsplash.com/photo-1540518614846-7eded433c457?auto=format&fit=crop&q=80&w=800",
                "https://images.unsplash.com/photo-1618773928121-c32242e63f39?auto=format&fit=crop&q=80&w=800",
            ]),
            capacity: 4,
            available: true,
        },
        Room {
            id: "r4".into(),
            name: "Surat Royal Penthouse".into(),
            category: RoomCategory::Penthouse,
            price: 45000,
            description: "Top-floor penthouse with 360-degree city views of the Surat skyline \
                          and a private butler for elite comfort."
                .into(),
            amenities: strings(&[
                "Private Elevator",
                "City View",
                "Personal Chef",
                "Luxury Bath",
                "Jacuzzi",
            ]),
            images: strings(&[
                "https://images.unsplash.com/photo-1512918728675-ed5a9ecdebfd?auto=format&fit=crop&q=80&w=800",
                "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?auto=format&fit=crop&q=80&w=800",
            ]),
            capacity: 4,
            available: true,
        },
        Room {
            id: "r5".into(),
            name: "Executive Business King".into(),
            category: RoomCategory::Standard,
            price: 6500,
            description: "Designed for efficiency and comfort. Located near the conference \
                          center with ergonomic seating and soundproofing."
                .into(),
            amenities: strings(&[
                "Free WiFi",
                "Work Desk",
                "Ironing",
                "King Bed",
                "Coffee Station",
            ]),
            images: strings(&[
                "https://images.unsplash.com/photo-1631049307264-da0ec9d70304?auto=format&fit=crop&q=80&w=800",
                "https://images.unsplash.com/photo-1611892440504-42a792e24d32?auto=format&fit=crop&q=80&w=800",
            ]),
            capacity: 2,
            available: true,
        },
        Room {
            id: "r6".into(),
            name: "Heritage Family Suite".into(),
            category: RoomCategory::Suite,
            price: 15000,
            description: "A tribute to Gujarati culture with traditional decor, swing (jhula), \
                          and modern amenities for the whole family."
                .into(),
            amenities: strings(&[
                "Traditional Decor",
                "Living Area",
                "2 Queen Beds",
                "Bathtub",
                "Welcome Thali",
            ]),
            images: strings(&[
                "https://images.unsplash.com/photo-1596394516093-501ba68a0ba6?auto=format&fit=crop&q=80&w=800",
                "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?auto=format&fit=crop&q=80&w=800",
            ]),
            capacity: 4,
            // Currently booked/maintenance
            available: false,
        },
        Room {
            id: "r7".into(),
            name: "Surat Diamond Suite".into(),
            category: RoomCategory::Suite,
            price: 20000,
            description: "A premium suite featuring modern diamond-themed interiors and a \
                          private view of the city center."
                .into(),
            amenities: strings(&["Free WiFi", "Mini Bar", "City View", "King Bed", "AC", "Jacuzzi"]),
            images: strings(&[
                "https://images.unsplash.com/photo-1578683010236-d716f9759678?auto=format&fit=crop&q=80&w=800",
            ]),
            capacity: 2,
            available: true,
        },
    ]
}

fn seed_users() -> Vec<User> {
    let user = |id: &str, name: &str, username: &str, email: &str, phone: &str, role, avatar: Option<&str>| User {
        id: id.into(),
        name: name.into(),
        username: username.into(),
        email: email.into(),
        phone: phone.into(),
        role,
        avatar: avatar.map(str::to_owned),
        password: Masked("password123".into()),
    };

    vec![
        user(
            "u1",
            "Admin User",
            "admin",
            "admin@luxestay.com",
            "9876543210",
            UserRole::Admin,
            Some("https://i.pravatar.cc/150?u=admin"),
        ),
        user(
            "u2",
            "Mehul Patel",
            "mehul123",
            "mehul@example.com",
            "9988776655",
            UserRole::Client,
            Some("https://i.pravatar.cc/150?u=mehul"),
        ),
        user(
            "u3",
            "Sneha Shah",
            "sneha_s",
            "sneha@example.com",
            "9898989898",
            UserRole::Client,
            Some("https://i.pravatar.cc/150?u=sneha"),
        ),
        user(
            "u4",
            "Rahul Dravid",
            "rahul_wall",
            "rahul@example.com",
            "9123456780",
            UserRole::Client,
            None,
        ),
    ]
}

fn seed_bookings() -> Vec<Booking> {
    let booking = |id: &str, user_id: &str, room_id: &str, check_in, check_out, total_price, status, created_at| Booking {
        id: id.into(),
        user_id: user_id.into(),
        room_id: room_id.into(),
        check_in,
        check_out,
        total_price,
        status,
        created_at,
    };

    vec![
        booking(
            "b1",
            "u2",
            "r1",
            date(2024, 6, 15),
            date(2024, 6, 17),
            37000,
            BookingStatus::Approved,
            created(2024, 5, 10, 10, 0),
        ),
        booking(
            "b2",
            "u3",
            "r3",
            date(2024, 7, 1),
            date(2024, 7, 5),
            96000,
            BookingStatus::Pending,
            created(2024, 6, 25, 14, 30),
        ),
        booking(
            "b3",
            "u4",
            "r2",
            date(2024, 6, 20),
            date(2024, 6, 21),
            8500,
            BookingStatus::Approved,
            created(2024, 6, 18, 9, 15),
        ),
        booking(
            "b4",
            "u2",
            "r4",
            date(2024, 8, 10),
            date(2024, 8, 12),
            90000,
            BookingStatus::Pending,
            created(2024, 6, 28, 16, 45),
        ),
        booking(
            "b5",
            "u3",
            "r5",
            date(2024, 5, 1),
            date(2024, 5, 2),
            6500,
            BookingStatus::Cancelled,
            created(2024, 4, 20, 11, 20),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let store = seed();
        assert_eq!(store.rooms().count(), 7);
        assert_eq!(store.users().count(), 4);
        assert_eq!(store.bookings().count(), 5);

        // r6 is out of service, everything else bookable
        assert_eq!(store.available_rooms().len(), 6);
        assert_eq!(store.get_room("r2").unwrap().price, 8500);
        assert!(store.get_user("u1").unwrap().is_admin());
    }

    #[test]
    fn test_seed_credentials_resolve() {
        let store = seed();
        let user = store
            .find_user_by_credentials("sneha_s", "sneha@example.com", "password123")
            .expect("seeded guest logs in");
        assert_eq!(user.id, "u3");
    }
}
