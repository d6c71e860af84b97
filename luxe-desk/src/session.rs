use crate::deferred::Deferred;
use chrono::{Duration as ChronoDuration, Local, NaiveDate};
use luxe_auth::{AuthEngine, AuthError, AuthMode, LoginRequest, RegisterRequest};
use luxe_booking::{BookingError, BookingManager, DateRange, DateRangeSelector};
use luxe_concierge::Concierge;
use luxe_reporting::{booking_report, to_csv};
use luxe_shared::{Booking, BookingStatus, Room, User};
use luxe_store::app_config::BusinessRules;
use luxe_store::DirectoryStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Debug, thiserror::Error)]
pub enum DeskError {
    #[error("No guest is signed in")]
    NotAuthenticated,

    #[error("Administrator access required")]
    NotAuthorized,

    #[error("No room is currently open")]
    NoRoomSelected,

    #[error("Select both check-in and check-out dates first")]
    IncompleteRange,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Booking(#[from] BookingError),
}

/// Transient acknowledgment shown after a completed flow, dismissed by
/// a deferred reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    PaymentSuccess,
    PasswordReset,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::PaymentSuccess => "Payment Successful!",
            Notice::PasswordReset => "Password reset successfully!",
        }
    }
}

struct DeskState {
    store: DirectoryStore,
    auth: AuthEngine,
    current_user: Option<User>,
    selected_room: Option<Room>,
    selector: DateRangeSelector,
    notice: Option<Notice>,
    pending_reset: Option<Deferred>,
}

/// The front-of-house controller: session state plus the entry points
/// the presentation layer drives.
///
/// State lives behind `Arc<Mutex<_>>` so the fixed-delay view resets
/// (2.5 s after a booking, 2 s after a password reset) can run as
/// cancellable deferred tasks holding only a `Weak` reference. Against
/// a dismantled desk they become no-ops instead of panics.
pub struct Desk {
    state: Arc<Mutex<DeskState>>,
    manager: BookingManager,
    concierge: Concierge,
    rules: BusinessRules,
}

fn require_admin(state: &DeskState) -> Result<(), DeskError> {
    match &state.current_user {
        Some(user) if user.is_admin() => Ok(()),
        Some(_) => Err(DeskError::NotAuthorized),
        None => Err(DeskError::NotAuthenticated),
    }
}

impl Desk {
    pub fn new(store: DirectoryStore, rules: BusinessRules, concierge: Concierge) -> Self {
        let today = Local::now().date_naive();
        let otp_ttl = ChronoDuration::seconds(rules.otp_ttl_seconds as i64);
        let state = DeskState {
            store,
            auth: AuthEngine::new(otp_ttl),
            current_user: None,
            selected_room: None,
            selector: DateRangeSelector::new(today),
            notice: None,
            pending_reset: None,
        };
        Self {
            state: Arc::new(Mutex::new(state)),
            manager: BookingManager::new(),
            concierge,
            rules,
        }
    }

    /// A desk over the demo inventory.
    pub fn with_seed(rules: BusinessRules, concierge: Concierge) -> Self {
        Self::new(luxe_store::seed(), rules, concierge)
    }

    // --- session snapshots ---

    pub async fn current_user(&self) -> Option<User> {
        self.state.lock().await.current_user.clone()
    }

    pub async fn selected_room(&self) -> Option<Room> {
        self.state.lock().await.selected_room.clone()
    }

    pub async fn notice(&self) -> Option<Notice> {
        self.state.lock().await.notice
    }

    pub async fn auth_mode(&self) -> AuthMode {
        self.state.lock().await.auth.mode()
    }

    pub async fn available_rooms(&self) -> Vec<Room> {
        let state = self.state.lock().await;
        state.store.available_rooms().into_iter().cloned().collect()
    }

    // --- authentication ---

    pub async fn login(&self, req: &LoginRequest) -> Result<User, DeskError> {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        let user = state.auth.login(&state.store, req)?;
        state.current_user = Some(user.clone());
        tracing::debug!(user = %user.id, "guest signed in");
        Ok(user)
    }

    /// Registers and immediately authenticates the new guest.
    pub async fn register(&self, req: RegisterRequest) -> Result<User, DeskError> {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        let user = state.auth.register(&mut state.store, req)?;
        state.current_user = Some(user.clone());
        Ok(user)
    }

    pub async fn logout(&self) {
        let mut state = self.state.lock().await;
        state.current_user = None;
        state.auth.reset_to_login();
    }

    pub async fn switch_auth_mode(&self, mode: AuthMode) {
        self.state.lock().await.auth.switch_mode(mode);
    }

    /// Recovery step 1. The returned code stands in for an out-of-band
    /// delivery channel.
    pub async fn begin_password_recovery(
        &self,
        username: &str,
        email: &str,
    ) -> Result<String, DeskError> {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        let code = state.auth.begin_recovery(&state.store, username, email)?;
        Ok(code)
    }

    /// Recovery step 2. On success a transient acknowledgment is shown
    /// and the auth flow drops back to login after the configured delay.
    pub async fn complete_password_recovery(
        &self,
        otp: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), DeskError> {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        state
            .auth
            .complete_recovery(&mut state.store, otp, password, confirm_password)?;
        state.notice = Some(Notice::PasswordReset);

        let weak = Arc::downgrade(&self.state);
        let delay = Duration::from_millis(self.rules.auth_reset_ms);
        let deferred = Deferred::spawn(delay, async move {
            if let Some(shared) = weak.upgrade() {
                let mut state = shared.lock().await;
                state.auth.reset_to_login();
                state.notice = None;
            }
        });
        if let Some(previous) = state.pending_reset.replace(deferred) {
            previous.cancel();
        }
        Ok(())
    }

    // --- room browsing & date selection ---

    /// Opens a room for booking. The date selection starts fresh on
    /// every open.
    pub async fn open_room(&self, room_id: &str) -> Result<Room, DeskError> {
        let mut state = self.state.lock().await;
        let room = state
            .store
            .get_room(room_id)
            .cloned()
            .ok_or_else(|| BookingError::RoomNotFound(room_id.to_owned()))?;
        state.selected_room = Some(room.clone());
        state.selector = DateRangeSelector::new(Local::now().date_naive());
        Ok(room)
    }

    /// Dismantles the room view; any scheduled reset becomes obsolete.
    pub async fn close_room(&self) {
        let mut state = self.state.lock().await;
        state.selected_room = None;
        state.selector.clear();
        state.notice = None;
        if let Some(pending) = state.pending_reset.take() {
            pending.cancel();
        }
    }

    pub async fn click_date(&self, date: NaiveDate) -> Result<(), DeskError> {
        let mut state = self.state.lock().await;
        if state.selected_room.is_none() {
            return Err(DeskError::NoRoomSelected);
        }
        state.selector.click(date);
        Ok(())
    }

    pub async fn selection(&self) -> Option<DateRange> {
        self.state.lock().await.selector.selection()
    }

    pub async fn next_month(&self) {
        self.state.lock().await.selector.next_month();
    }

    pub async fn prev_month(&self) {
        self.state.lock().await.selector.prev_month();
    }

    // --- booking ---

    /// Completes the payment step: creates a PENDING booking, shows the
    /// confirmation, and schedules the return to the default view.
    pub async fn create_booking(&self) -> Result<Booking, DeskError> {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;

        let user = state
            .current_user
            .clone()
            .ok_or(DeskError::NotAuthenticated)?;
        let room = state
            .selected_room
            .clone()
            .ok_or(DeskError::NoRoomSelected)?;
        let range = state.selector.selection().ok_or(DeskError::IncompleteRange)?;

        let booking = self
            .manager
            .create_booking(&mut state.store, &user, &room.id, range)?;
        state.notice = Some(Notice::PaymentSuccess);

        let weak = Arc::downgrade(&self.state);
        let delay = Duration::from_millis(self.rules.booking_confirm_reset_ms);
        let deferred = Deferred::spawn(delay, async move {
            if let Some(shared) = weak.upgrade() {
                let mut state = shared.lock().await;
                state.notice = None;
                state.selected_room = None;
                state.selector.clear();
            }
        });
        if let Some(previous) = state.pending_reset.replace(deferred) {
            previous.cancel();
        }
        Ok(booking)
    }

    pub async fn my_bookings(&self) -> Result<Vec<Booking>, DeskError> {
        let state = self.state.lock().await;
        let user = state
            .current_user
            .as_ref()
            .ok_or(DeskError::NotAuthenticated)?;
        Ok(state
            .store
            .bookings_for_user(&user.id)
            .into_iter()
            .cloned()
            .collect())
    }

    // --- administration ---

    pub async fn set_booking_status(
        &self,
        booking_id: &str,
        status: BookingStatus,
    ) -> Result<(), DeskError> {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        require_admin(state)?;
        self.manager.set_status(&mut state.store, booking_id, status)?;
        Ok(())
    }

    pub async fn set_room_availability(
        &self,
        room_id: &str,
        available: bool,
    ) -> Result<(), DeskError> {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        require_admin(state)?;
        self.manager
            .set_room_availability(&mut state.store, room_id, available)?;
        Ok(())
    }

    pub async fn booking_report_csv(&self) -> Result<String, DeskError> {
        let state = self.state.lock().await;
        require_admin(&state)?;
        Ok(to_csv(&booking_report(&state.store)))
    }

    // --- concierge ---

    /// Free-text room recommendations. Never fails: the concierge owns
    /// its fallback.
    pub async fn concierge(&self, guest_prompt: &str) -> String {
        let rooms: Vec<Room> = {
            let state = self.state.lock().await;
            state.store.available_rooms().into_iter().cloned().collect()
        };
        self.concierge.recommend(guest_prompt, &rooms).await
    }
}
