use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A wrapper for secrets held in memory (passwords, one-time codes) that
/// masks the value in Debug and Display output.
#[derive(Clone, Deserialize)]
pub struct Masked<T>(pub T);

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Snapshots need the real value; the wrapper exists to prevent
        // accidental leakage through log macros like tracing::info!("{:?}").
        self.0.serialize(serializer)
    }
}

impl<T> Masked<T> {
    /// Deliberate access to the wrapped secret, e.g. for the engine's
    /// equality-based credential checks.
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Masked<T> {
    fn from(value: T) -> Self {
        Masked(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_output_is_masked() {
        let secret = Masked("password123".to_string());
        assert_eq!(format!("{:?}", secret), "********");
        assert_eq!(format!("{}", secret), "********");
        assert_eq!(secret.expose(), "password123");
    }

    #[test]
    fn test_serialization_passes_through() {
        let secret = Masked("otp-424242".to_string());
        let json = serde_json::to_string(&secret).unwrap();
        assert_eq!(json, "\"otp-424242\"");
    }
}
