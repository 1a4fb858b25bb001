//! yearcal: a year-grid calendar.
//!
//! `yearcal-core` holds the data model and pure calendar logic; this crate
//! builds the render models (month and year grids) and drives the event
//! dialog. A host paints the view models with whatever toolkit it likes and
//! feeds user interactions back through [`App`].

pub mod app;
pub mod editor;
pub mod month;
pub mod sample;
pub mod year;

pub use app::App;
pub use editor::{EditorState, EventEditor, EventForm};
pub use month::{DayViewModel, EventGlyph, MonthView, MonthViewModel};
pub use year::{YearView, YearViewModel};
