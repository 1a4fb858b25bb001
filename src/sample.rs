//! Bundled sample events for hosts that start without their own data.

use chrono::{NaiveDate, NaiveDateTime};
use yearcal_core::{Category, Event};

/// The starter data set: a timed meeting, a two-week holiday, and an
/// all-day deadline. Colors are derived from the category rather than
/// stored alongside the data.
pub fn sample_events() -> Vec<Event> {
    vec![
        event(
            "1",
            "Team Meeting",
            "Weekly team sync",
            at(2024, 4, 15, 10, 0),
            at(2024, 4, 15, 11, 30),
            Category::Meeting,
        ),
        event(
            "2",
            "Summer Vacation",
            "Family trip to Italy",
            at(2024, 8, 1, 0, 0),
            at(2024, 8, 14, 0, 0),
            Category::Holiday,
        ),
        event(
            "3",
            "Project Deadline",
            "Final delivery of the web project",
            at(2024, 4, 20, 0, 0),
            at(2024, 4, 20, 0, 0),
            Category::Work,
        ),
    ]
}

fn event(
    id: &str,
    title: &str,
    description: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
    category: Category,
) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        start,
        end,
        category,
        color: category.color(),
    }
}

fn at(y: i32, m: u32, d: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}
