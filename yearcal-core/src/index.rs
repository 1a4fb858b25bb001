//! Event-to-day assignment.

use chrono::NaiveDate;

use crate::event::Event;

/// The events that belong on `day`'s cell: those whose start falls on that
/// calendar day (local wall-clock year/month/day equality).
///
/// The end date is deliberately ignored, so a multi-day event shows up only
/// on the day it starts.
pub fn events_on_day(day: NaiveDate, events: &[Event]) -> Vec<&Event> {
    events.iter().filter(|e| e.start.date() == day).collect()
}
