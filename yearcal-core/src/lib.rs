//! Core types and calendar logic for yearcal.
//!
//! This crate provides the pieces shared by every view:
//! - `event` for the `Event` data model and the dialog's edit buffer
//! - `palette` for the category → color mapping
//! - `grid` for day-grid and month-index computation
//! - `index` for event-to-day assignment
//! - `store` for the in-memory CRUD store

pub mod error;
pub mod event;
pub mod grid;
pub mod index;
pub mod palette;
pub mod store;

pub use error::{CalendarError, CalendarResult};
pub use event::{Category, Event, EventFormData};
pub use grid::{DayCell, month_grid, months_of_year};
pub use index::events_on_day;
pub use palette::Color;
pub use store::{EventStore, IdGenerator, UuidIds};
