use crate::recovery::RecoverySession;
use chrono::Duration;
use luxe_shared::{Masked, User, UserRole};
use luxe_store::DirectoryStore;
use serde::Deserialize;

/// Which form the caller is currently driving. Transitions are explicit
/// mode switches, never automatic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
    ForgotInit,
    ForgotOtpPending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Deliberately generic: no hint about which field was wrong.
    #[error("Invalid credentials. Check Username, Mail ID, and Password.")]
    InvalidCredentials,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Email or Username already exists.")]
    DuplicateIdentity,

    #[error("User not found. Check Username and Mail ID.")]
    UserNotFound,

    #[error("Invalid OTP code.")]
    InvalidOtp,

    #[error("OTP code has expired. Request a new one.")]
    OtpExpired,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub email: String,
    pub password: Masked<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: Masked<String>,
    pub confirm_password: Masked<String>,
}

/// Login, registration and the two-step password-recovery flow.
///
/// The engine resolves every expected validation failure to a typed
/// `AuthError`; nothing panics and nothing else crosses the boundary.
pub struct AuthEngine {
    mode: AuthMode,
    recovery: Option<RecoverySession>,
    otp_ttl: Duration,
}

impl AuthEngine {
    pub fn new(otp_ttl: Duration) -> Self {
        Self {
            mode: AuthMode::Login,
            recovery: None,
            otp_ttl,
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Caller-driven mode switch. Leaving the recovery flow abandons any
    /// outstanding one-time code.
    pub fn switch_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
        if mode != AuthMode::ForgotOtpPending {
            self.recovery = None;
        }
    }

    pub fn reset_to_login(&mut self) {
        self.switch_mode(AuthMode::Login);
    }

    /// Succeeds iff username, email and password all match one record
    /// exactly (case-sensitive).
    pub fn login(&self, store: &DirectoryStore, req: &LoginRequest) -> Result<User, AuthError> {
        store
            .find_user_by_credentials(&req.username, &req.email, req.password.expose())
            .cloned()
            .ok_or(AuthError::InvalidCredentials)
    }

    /// Creates a CLIENT account and returns it already authenticated.
    pub fn register(
        &self,
        store: &mut DirectoryStore,
        req: RegisterRequest,
    ) -> Result<User, AuthError> {
        if req.password.expose() != req.confirm_password.expose() {
            return Err(AuthError::PasswordMismatch);
        }
        if store
            .find_user(|u| u.email == req.email || u.username == req.username)
            .is_some()
        {
            return Err(AuthError::DuplicateIdentity);
        }

        let user = User::new(
            req.name,
            req.username,
            req.email,
            req.phone,
            UserRole::Client,
            req.password.into_inner(),
        );
        // The store re-checks uniqueness; a race is impossible here but
        // the duplicate answer must be the same either way.
        store
            .insert_user(user.clone())
            .map_err(|_| AuthError::DuplicateIdentity)?;
        tracing::info!(user = %user.id, username = %user.username, "guest registered");
        Ok(user)
    }

    /// Recovery step 1: identify the account and issue a one-time code.
    ///
    /// The code is returned to the caller as a stand-in for an
    /// out-of-band channel; a real deployment must deliver it via email
    /// or SMS and never echo it in the same response.
    pub fn begin_recovery(
        &mut self,
        store: &DirectoryStore,
        username: &str,
        email: &str,
    ) -> Result<String, AuthError> {
        let user = store
            .find_user_by_identity(username, email)
            .ok_or(AuthError::UserNotFound)?;

        let session = RecoverySession::begin(user.id.clone(), self.otp_ttl);
        let code = session.code().to_owned();
        tracing::info!(user = %user.id, expires_at = %session.expires_at, "recovery code issued");
        self.recovery = Some(session);
        self.mode = AuthMode::ForgotOtpPending;
        Ok(code)
    }

    /// Recovery step 2: verify the code and overwrite the password.
    /// The code is consumed on success; the deferred return to the login
    /// mode is the session facade's job.
    pub fn complete_recovery(
        &mut self,
        store: &mut DirectoryStore,
        otp: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), AuthError> {
        let session = self.recovery.as_ref().ok_or(AuthError::InvalidOtp)?;
        if session.is_expired() {
            self.recovery = None;
            return Err(AuthError::OtpExpired);
        }
        if !session.matches(otp) {
            return Err(AuthError::InvalidOtp);
        }
        if password != confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        let user_id = session.user_id.clone();
        store
            .update_user_password(&user_id, password.to_owned())
            .map_err(|_| AuthError::UserNotFound)?;
        self.recovery = None;
        tracing::info!(user = %user_id, "password reset completed");
        Ok(())
    }

    pub fn has_pending_recovery(&self) -> bool {
        self.recovery.is_some()
    }
}
