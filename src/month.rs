//! Month view: one month's day grid as plain render data.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;
use yearcal_core::{Color, Event, events_on_day, grid, month_grid};

/// Sunday-first weekday header labels.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One month of the calendar, anchored on a reference date.
///
/// The reference is normalized to the first of its month so navigation
/// always moves in whole months.
pub struct MonthView {
    reference: NaiveDate,
}

/// Render model for a month: plain data for the host toolkit to paint.
#[derive(Debug, Clone, Serialize)]
pub struct MonthViewModel {
    /// Header label, e.g. "April 2024"
    pub title: String,
    pub weekdays: [&'static str; 7],
    pub cells: Vec<DayViewModel>,
}

/// Render model for a single day cell.
#[derive(Debug, Clone, Serialize)]
pub struct DayViewModel {
    pub date: NaiveDate,
    /// Day-of-month label
    pub day: u32,
    pub outside_month: bool,
    pub is_today: bool,
    /// Glyphs for this day; also the content of the day's hover preview
    pub events: Vec<EventGlyph>,
}

/// The compact event chip rendered inside a day cell.
#[derive(Debug, Clone, Serialize)]
pub struct EventGlyph {
    pub id: String,
    pub title: String,
    pub color: Color,
}

impl MonthView {
    pub fn new(reference: NaiveDate) -> Self {
        MonthView {
            reference: grid::month_start(reference),
        }
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    /// Move the view one month back.
    pub fn previous_month(&mut self) {
        self.reference = self.reference.checked_sub_months(Months::new(1)).unwrap();
    }

    /// Move the view one month forward.
    pub fn next_month(&mut self) {
        self.reference = self.reference.checked_add_months(Months::new(1)).unwrap();
    }

    /// Build the render model for the displayed month.
    pub fn view(&self, events: &[Event], today: NaiveDate) -> MonthViewModel {
        let cells = month_grid(self.reference, today)
            .into_iter()
            .map(|cell| DayViewModel {
                date: cell.date,
                day: cell.date.day(),
                outside_month: cell.outside_month,
                is_today: cell.is_today,
                events: events_on_day(cell.date, events)
                    .into_iter()
                    .map(|e| EventGlyph {
                        id: e.id.clone(),
                        title: e.title.clone(),
                        color: e.color,
                    })
                    .collect(),
            })
            .collect();

        MonthViewModel {
            title: self.reference.format("%B %Y").to_string(),
            weekdays: WEEKDAY_LABELS,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yearcal_core::Category;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn meeting_on(day: NaiveDate) -> Event {
        Event {
            id: "1".to_string(),
            title: "Team Meeting".to_string(),
            description: "Weekly team sync".to_string(),
            start: day.and_hms_opt(10, 0, 0).unwrap(),
            end: day.and_hms_opt(11, 30, 0).unwrap(),
            category: Category::Meeting,
            color: Category::Meeting.color(),
        }
    }

    #[test]
    fn title_is_month_and_year() {
        let view = MonthView::new(date(2024, 4, 15));
        let model = view.view(&[], date(2024, 4, 15));
        assert_eq!(model.title, "April 2024");
        assert_eq!(model.weekdays[0], "Sun");
    }

    #[test]
    fn day_cells_carry_their_events() {
        let view = MonthView::new(date(2024, 4, 1));
        let events = vec![meeting_on(date(2024, 4, 15))];
        let model = view.view(&events, date(2024, 4, 1));

        let cell = model.cells.iter().find(|c| c.date == date(2024, 4, 15)).unwrap();
        assert_eq!(cell.events.len(), 1);
        assert_eq!(cell.events[0].id, "1");
        assert_eq!(cell.events[0].color, Color::Purple);
        assert_eq!(cell.day, 15);

        let empty = model.cells.iter().find(|c| c.date == date(2024, 4, 16)).unwrap();
        assert!(empty.events.is_empty());
    }

    #[test]
    fn navigation_moves_in_whole_months() {
        let mut view = MonthView::new(date(2024, 1, 31));
        view.previous_month();
        assert_eq!(view.reference(), date(2023, 12, 1));
        view.next_month();
        view.next_month();
        assert_eq!(view.reference(), date(2024, 2, 1));
    }

    #[test]
    fn repeated_rendering_is_stable() {
        let view = MonthView::new(date(2024, 4, 1));
        let events = vec![meeting_on(date(2024, 4, 15))];
        let first = view.view(&events, date(2024, 4, 2));
        let second = view.view(&events, date(2024, 4, 2));
        assert_eq!(first.cells.len(), second.cells.len());
        assert_eq!(first.title, second.title);
        for (a, b) in first.cells.iter().zip(&second.cells) {
            assert_eq!(a.date, b.date);
            assert_eq!(a.events.len(), b.events.len());
        }
    }
}
