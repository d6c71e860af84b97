pub mod export;

pub use export::{booking_report, to_csv, ReportRow, REPORT_HEADERS};
