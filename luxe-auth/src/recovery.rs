use chrono::{DateTime, Duration, Utc};
use luxe_shared::Masked;
use rand::Rng;

/// A pending password-recovery challenge, scoped to the user it was
/// issued for and valid until `expires_at`. One session exists per
/// engine at a time; starting a new flow supersedes the old code.
#[derive(Debug, Clone)]
pub struct RecoverySession {
    pub user_id: String,
    pub code: Masked<String>,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl RecoverySession {
    pub fn begin(user_id: String, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            code: Masked(generate_code()),
            issued_at: now,
            expires_at: now + ttl,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Plain string equality, exactly as submitted.
    pub fn matches(&self, submitted: &str) -> bool {
        self.code.expose() == submitted
    }

    pub fn code(&self) -> &str {
        self.code.expose()
    }
}

/// Uniformly random six-digit code: an integer in [100000, 999999], so
/// a leading zero can never shorten it.
pub fn generate_code() -> String {
    rand::thread_rng().gen_range(100_000..=999_999).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_always_six_digits() {
        for _ in 0..1000 {
            let code = generate_code();
            assert_eq!(code.len(), 6);
            let value: u32 = code.parse().unwrap();
            assert!((100_000..=999_999).contains(&value));
        }
    }

    #[test]
    fn test_session_expiry() {
        let mut session = RecoverySession::begin("u3".into(), Duration::seconds(300));
        assert!(!session.is_expired());

        session.expires_at = Utc::now() - Duration::minutes(1);
        assert!(session.is_expired());
    }

    #[test]
    fn test_code_match_is_exact() {
        let session = RecoverySession::begin("u3".into(), Duration::seconds(300));
        let code = session.code().to_owned();
        assert!(session.matches(&code));
        assert!(!session.matches("000000"));
        assert!(!session.matches(&format!(" {code}")));
    }

    #[test]
    fn test_code_is_masked_in_debug() {
        let mut session = RecoverySession::begin("u3".into(), Duration::seconds(300));
        session.code = Masked("424242".into());
        let debug = format!("{:?}", session);
        assert!(!debug.contains("424242"));
        assert!(debug.contains("********"));
    }
}
