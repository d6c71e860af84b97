use chrono::NaiveDate;
use luxe_shared::{Booking, BookingStatus};
use luxe_store::DirectoryStore;
use serde::Serialize;

pub const REPORT_HEADERS: [&str; 9] = [
    "Booking ID",
    "Customer Name",
    "Customer Email",
    "Room Name",
    "Check-In",
    "Check-Out",
    "Amount (INR)",
    "Status",
    "Booked On",
];

/// One booking joined against the guest and room directories. Dangling
/// references render as "N/A" rather than failing the whole report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub booking_id: String,
    pub guest_name: String,
    pub guest_email: String,
    pub room_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub amount: i32,
    pub status: BookingStatus,
    pub booked_on: NaiveDate,
}

/// Read-only projection of every booking, ordered by creation time then
/// id so repeated exports are identical.
pub fn booking_report(store: &DirectoryStore) -> Vec<ReportRow> {
    let mut bookings: Vec<&Booking> = store.bookings().collect();
    bookings.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));

    bookings
        .into_iter()
        .map(|booking| {
            let guest = store.get_user(&booking.user_id);
            let room = store.get_room(&booking.room_id);
            ReportRow {
                booking_id: booking.id.clone(),
                guest_name: guest.map_or_else(|| "N/A".into(), |u| u.name.clone()),
                guest_email: guest.map_or_else(|| "N/A".into(), |u| u.email.clone()),
                room_name: room.map_or_else(|| "N/A".into(), |r| r.name.clone()),
                check_in: booking.check_in,
                check_out: booking.check_out,
                amount: booking.total_price,
                status: booking.status,
                booked_on: booking.created_at.date_naive(),
            }
        })
        .collect()
}

pub fn to_csv(rows: &[ReportRow]) -> String {
    let mut out = REPORT_HEADERS.join(",");
    for row in rows {
        out.push('\n');
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{}",
            row.booking_id,
            row.guest_name,
            row.guest_email,
            row.room_name,
            row.check_in,
            row.check_out,
            row.amount,
            row.status,
            row.booked_on,
        ));
    }
    out
}
