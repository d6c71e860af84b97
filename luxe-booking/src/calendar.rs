use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// A completed stay selection. Construction goes through the selector,
/// which guarantees check-out is strictly after check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl DateRange {
    /// Calendar nights between the two dates. The absolute value guards
    /// against a reversed pair in a hand-built range.
    pub fn nights(&self) -> u32 {
        (self.check_out - self.check_in).num_days().unsigned_abs() as u32
    }
}

/// Month-grid date selector accumulating a check-in/check-out pair
/// under a toggling click protocol:
///
/// 1. no check-in yet, or a full range already selected: the click
///    restarts the range at the clicked date;
/// 2. check-in set, check-out empty: an earlier click restarts at that
///    date, clicking check-in itself deselects everything, and a later
///    click completes the range.
///
/// Dates strictly before `today` are not selectable. Month navigation
/// is unbounded in both directions and independent of the selection.
#[derive(Debug, Clone)]
pub struct DateRangeSelector {
    view: NaiveDate,
    today: NaiveDate,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).expect("every month has a first day")
}

impl DateRangeSelector {
    /// `today` anchors the past-date guard; the view opens on its month.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            view: first_of_month(today),
            today,
            check_in: None,
            check_out: None,
        }
    }

    pub fn check_in(&self) -> Option<NaiveDate> {
        self.check_in
    }

    pub fn check_out(&self) -> Option<NaiveDate> {
        self.check_out
    }

    /// The validated pair, once both ends are set.
    pub fn selection(&self) -> Option<DateRange> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => Some(DateRange {
                check_in,
                check_out,
            }),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.check_in = None;
        self.check_out = None;
    }

    /// Applies the toggle protocol to a clicked date. Past dates are
    /// silently ignored.
    pub fn click(&mut self, date: NaiveDate) {
        if self.is_past(date) {
            return;
        }

        match (self.check_in, self.check_out) {
            (None, _) | (Some(_), Some(_)) => {
                self.check_in = Some(date);
                self.check_out = None;
            }
            (Some(start), None) => {
                if date < start {
                    self.check_in = Some(date);
                } else if date == start {
                    self.check_in = None;
                } else {
                    self.check_out = Some(date);
                }
            }
        }
    }

    /// Strictly before the current calendar day.
    pub fn is_past(&self, date: NaiveDate) -> bool {
        date < self.today
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.check_in == Some(date) || self.check_out == Some(date)
    }

    /// Strictly between the endpoints of a completed range.
    pub fn is_in_range(&self, date: NaiveDate) -> bool {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => date > check_in && date < check_out,
            _ => false,
        }
    }

    // --- month view ---

    /// First day of the viewed month.
    pub fn view_month(&self) -> NaiveDate {
        self.view
    }

    pub fn next_month(&mut self) {
        self.view = self.view + Months::new(1);
    }

    pub fn prev_month(&mut self) {
        self.view = self.view - Months::new(1);
    }

    pub fn days_in_month(&self) -> u32 {
        let next = self.view + Months::new(1);
        (next - self.view).num_days() as u32
    }

    /// Blank cells before day 1 in a Sunday-first week grid.
    pub fn leading_blanks(&self) -> u32 {
        self.view.weekday().num_days_from_sunday()
    }

    /// The grid date for a day number in the viewed month.
    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.view.year(), self.view.month(), day)
    }
}
