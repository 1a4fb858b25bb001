//! Day-grid and month-index computation.
//!
//! Pure date arithmetic: given a reference date, produce the ordered day
//! cells of its month and the twelve month starts of its year. `today` is
//! injected so rendering stays a pure function of its inputs.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// One cell of a month's day grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Day belongs to the previous month (leading week-alignment padding)
    pub outside_month: bool,
    pub is_today: bool,
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap()
}

/// Last day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1).unwrap()
    };
    next_month.pred_opt().unwrap()
}

/// Sunday on or before `date`. Weeks are Sunday-first.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let days_back = u64::from(date.weekday().num_days_from_sunday());
    date - Days::new(days_back)
}

/// The ordered day cells for the month containing `reference`.
///
/// The sequence runs from the Sunday of the week containing the 1st through
/// the last day of the month inclusive. It always opens on a week boundary
/// but is NOT padded out to one at the tail: trailing days of the final
/// week are cut at month end.
pub fn month_grid(reference: NaiveDate, today: NaiveDate) -> Vec<DayCell> {
    let first = month_start(reference);
    let last = month_end(reference);

    let mut cells = Vec::new();
    let mut day = week_start(first);
    while day <= last {
        cells.push(DayCell {
            date: day,
            outside_month: (day.year(), day.month()) != (reference.year(), reference.month()),
            is_today: day == today,
        });
        day = day.succ_opt().unwrap();
    }
    cells
}

/// The 12 month-start dates of `reference`'s calendar year, January through
/// December in ascending order.
pub fn months_of_year(reference: NaiveDate) -> Vec<NaiveDate> {
    (1..=12)
        .map(|month| NaiveDate::from_ymd_opt(reference.year(), month, 1).unwrap())
        .collect()
}
