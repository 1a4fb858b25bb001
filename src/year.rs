//! Year view: twelve month cards plus year navigation.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use yearcal_core::{Event, months_of_year};

use crate::month::{MonthView, MonthViewModel};

/// The displayed calendar year.
pub struct YearView {
    year: i32,
}

/// Render model for a year: the header label and twelve months, Jan..Dec.
#[derive(Debug, Clone, Serialize)]
pub struct YearViewModel {
    /// Header label, e.g. "2024"
    pub title: String,
    pub months: Vec<MonthViewModel>,
}

impl YearView {
    pub fn new(reference: NaiveDate) -> Self {
        YearView {
            year: reference.year(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn previous_year(&mut self) {
        self.year -= 1;
    }

    pub fn next_year(&mut self) {
        self.year += 1;
    }

    /// Build the render model for the displayed year.
    pub fn view(&self, events: &[Event], today: NaiveDate) -> YearViewModel {
        let january = NaiveDate::from_ymd_opt(self.year, 1, 1).unwrap();
        let months = months_of_year(january)
            .into_iter()
            .map(|month| MonthView::new(month).view(events, today))
            .collect();

        YearViewModel {
            title: self.year.to_string(),
            months,
        }
    }
}
