use serde::{Deserialize, Serialize};

/// Room tier in the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoomCategory {
    Standard,
    Deluxe,
    Suite,
    Penthouse,
}

/// A bookable unit. Seeded at startup; only the availability flag is
/// mutable, by an administrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub category: RoomCategory,
    /// Nightly rate, whole currency units, always positive.
    pub price: i32,
    pub description: String,
    pub amenities: Vec<String>,
    /// Ordered gallery; the first image is the representative thumbnail.
    pub images: Vec<String>,
    pub capacity: u32,
    pub available: bool,
}

impl Room {
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_is_first_image() {
        let room = Room {
            id: "r1".into(),
            name: "Tapi River View Suite".into(),
            category: RoomCategory::Suite,
            price: 18500,
            description: "Panoramic river view".into(),
            amenities: vec!["Free WiFi".into(), "River View".into()],
            images: vec!["first.jpg".into(), "second.jpg".into()],
            capacity: 2,
            available: true,
        };
        assert_eq!(room.thumbnail(), Some("first.jpg"));
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&RoomCategory::Penthouse).unwrap();
        assert_eq!(json, "\"Penthouse\"");
    }
}
