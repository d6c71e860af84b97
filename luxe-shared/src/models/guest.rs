use crate::pii::Masked;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access level of an identity record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Client,
    Admin,
}

/// An identity record in the guest directory. The role is fixed at
/// creation; only the password is ever overwritten afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    pub avatar: Option<String>,
    pub password: Masked<String>,
}

impl User {
    pub fn new(
        name: String,
        username: String,
        email: String,
        phone: String,
        role: UserRole,
        password: String,
    ) -> Self {
        Self {
            id: format!("u-{}", Uuid::new_v4()),
            name,
            username,
            email,
            phone,
            role,
            avatar: None,
            password: Masked(password),
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_gets_fresh_id() {
        let a = User::new(
            "Sneha Shah".into(),
            "sneha_s".into(),
            "sneha@example.com".into(),
            "9898989898".into(),
            UserRole::Client,
            "password123".into(),
        );
        let b = User::new(
            "Sneha Shah".into(),
            "sneha_s2".into(),
            "sneha2@example.com".into(),
            "9898989898".into(),
            UserRole::Client,
            "password123".into(),
        );
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("u-"));
        assert!(!a.is_admin());
    }

    #[test]
    fn test_password_is_masked_in_debug() {
        let user = User::new(
            "Admin User".into(),
            "admin".into(),
            "admin@luxestay.com".into(),
            "9876543210".into(),
            UserRole::Admin,
            "password123".into(),
        );
        let debug = format!("{:?}", user);
        assert!(!debug.contains("password123"));
    }

    #[test]
    fn test_role_serializes_screaming() {
        let json = serde_json::to_string(&UserRole::Client).unwrap();
        assert_eq!(json, "\"CLIENT\"");
    }
}
