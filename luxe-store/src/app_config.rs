use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub business_rules: BusinessRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    /// Delay before the booking confirmation dismisses itself and the
    /// desk returns to the default view.
    #[serde(default = "default_booking_confirm_reset_ms")]
    pub booking_confirm_reset_ms: u64,
    /// Delay before a completed password reset drops back to the login
    /// mode.
    #[serde(default = "default_auth_reset_ms")]
    pub auth_reset_ms: u64,
    /// How long an issued one-time code stays redeemable.
    #[serde(default = "default_otp_ttl_seconds")]
    pub otp_ttl_seconds: u64,
}

fn default_booking_confirm_reset_ms() -> u64 {
    2500
}

fn default_auth_reset_ms() -> u64 {
    2000
}

fn default_otp_ttl_seconds() -> u64 {
    300
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            booking_confirm_reset_ms: default_booking_confirm_reset_ms(),
            auth_reset_ms: default_auth_reset_ms(),
            otp_ttl_seconds: default_otp_ttl_seconds(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Base configuration; every knob also has a serde default so
            // the file may be absent in test environments
            .add_source(config::File::with_name("config/default").required(false))
            // Environment-specific overrides, e.g. config/production
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // `LUXE_BUSINESS_RULES__OTP_TTL_SECONDS=60` style overrides
            .add_source(config::Environment::with_prefix("LUXE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_ui_delays() {
        let rules = BusinessRules::default();
        assert_eq!(rules.booking_confirm_reset_ms, 2500);
        assert_eq!(rules.auth_reset_ms, 2000);
        assert_eq!(rules.otp_ttl_seconds, 300);
    }
}
