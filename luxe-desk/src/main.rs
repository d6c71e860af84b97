use chrono::{Days, Local};
use luxe_auth::{LoginRequest, RegisterRequest};
use luxe_concierge::Concierge;
use luxe_desk::Desk;
use luxe_shared::{BookingStatus, Masked};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Walks the whole engine end to end against the demo inventory:
/// register a guest, book a room, approve it as the administrator and
/// print the booking report.
#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "luxe_desk=debug,luxe_booking=debug,luxe_auth=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = luxe_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!(rules = ?config.business_rules, "Starting LuxeStay desk");

    let desk = Desk::with_seed(config.business_rules.clone(), Concierge::offline());

    let guest = desk
        .register(RegisterRequest {
            name: "Demo Guest".into(),
            username: "demo_guest".into(),
            email: "demo@example.com".into(),
            phone: "9000000001".into(),
            password: Masked("luxe-demo".into()),
            confirm_password: Masked("luxe-demo".into()),
        })
        .await
        .expect("demo registration");
    tracing::info!(user = %guest.id, "registered and signed in");

    let room = desk.open_room("r2").await.expect("room r2 is seeded");
    tracing::info!(room = %room.id, price = room.price, "room opened");

    let today = Local::now().date_naive();
    let check_in = today + Days::new(7);
    let check_out = today + Days::new(9);
    desk.click_date(check_in).await.expect("room is open");
    desk.click_date(check_out).await.expect("room is open");

    let booking = desk.create_booking().await.expect("demo booking");
    tracing::info!(
        booking = %booking.id,
        total = booking.total_price,
        status = %booking.status,
        "booking placed"
    );

    desk.logout().await;
    desk.login(&LoginRequest {
        username: "admin".into(),
        email: "admin@luxestay.com".into(),
        password: Masked("password123".into()),
    })
    .await
    .expect("seeded admin credentials");

    desk.set_booking_status(&booking.id, BookingStatus::Approved)
        .await
        .expect("pending booking approves");
    tracing::info!(booking = %booking.id, "booking approved");

    let report = desk.booking_report_csv().await.expect("admin report");
    println!("{report}");
}
