//! Application root: owns the store and wires the views to it.

use chrono::NaiveDate;
use yearcal_core::{CalendarError, CalendarResult, Event, EventStore};

use crate::editor::EventEditor;
use crate::year::{YearView, YearViewModel};

/// The application root.
///
/// Owns the event store, the displayed year, and the event dialog, and
/// translates user interactions into store operations. Views only ever see
/// read snapshots; every mutation goes through the store.
pub struct App {
    store: EventStore,
    year: YearView,
    editor: EventEditor,
}

impl App {
    /// Start on `reference`'s year with a host-supplied event list.
    pub fn new(reference: NaiveDate, events: Vec<Event>) -> Self {
        App {
            store: EventStore::with_events(events),
            year: YearView::new(reference),
            editor: EventEditor::new(),
        }
    }

    /// Start with the bundled sample events.
    pub fn with_sample_events(reference: NaiveDate) -> Self {
        Self::new(reference, crate::sample::sample_events())
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut EventStore {
        &mut self.store
    }

    pub fn editor(&self) -> &EventEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EventEditor {
        &mut self.editor
    }

    /// Register the host callback invoked with the full event list after
    /// every change.
    pub fn set_on_change(&mut self, callback: impl FnMut(&[Event]) + 'static) {
        self.store.set_on_change(callback);
    }

    /// Render the full year grid.
    pub fn render(&self, today: NaiveDate) -> YearViewModel {
        self.year.view(self.store.events(), today)
    }

    pub fn previous_year(&mut self) {
        self.year.previous_year();
    }

    pub fn next_year(&mut self) {
        self.year.next_year();
    }

    /// A day cell was clicked: open the dialog in create mode on that day.
    pub fn click_day(&mut self, day: NaiveDate) {
        self.editor.open_create(day);
    }

    /// An event glyph was clicked.
    ///
    /// Opens edit mode only; the click never falls through to the day cell
    /// underneath. A stale id (event no longer in the store) is an error.
    pub fn click_event(&mut self, id: &str) -> CalendarResult<()> {
        let event = self
            .store
            .get(id)
            .ok_or_else(|| CalendarError::NotFound(id.to_string()))?;
        self.editor.open_edit(event);
        Ok(())
    }

    /// Submit the open dialog.
    pub fn submit(&mut self) -> CalendarResult<()> {
        self.editor.submit(&mut self.store)
    }

    /// Dismiss the open dialog, discarding the form buffer.
    pub fn cancel(&mut self) {
        self.editor.cancel();
    }

    /// Delete the event backing the open edit dialog.
    pub fn delete_event(&mut self) {
        self.editor.delete(&mut self.store);
    }
}
