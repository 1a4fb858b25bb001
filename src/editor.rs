//! Event dialog state machine.
//!
//! Holds the transient form buffer while the create/edit dialog is open.
//! Date fields stay raw strings (datetime-local shape) until submit, so a
//! malformed value blocks the submission instead of reaching the store.

use chrono::{NaiveDate, NaiveDateTime};
use yearcal_core::{CalendarError, CalendarResult, Category, Event, EventFormData, EventStore};

/// Wire format of the dialog's date inputs.
const DATE_FIELD_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// The dialog's edit buffer. Discarded on close, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Start date field text, `%Y-%m-%dT%H:%M`
    pub start: String,
    /// End date field text, `%Y-%m-%dT%H:%M`
    pub end: String,
}

impl EventForm {
    /// Fresh form for a clicked day: both dates default to that day at
    /// midnight, category to Personal.
    fn for_day(day: NaiveDate) -> Self {
        let midnight = day.and_hms_opt(0, 0, 0).unwrap();
        EventForm {
            title: String::new(),
            description: String::new(),
            category: Category::Personal,
            start: format_field(midnight),
            end: format_field(midnight),
        }
    }

    /// Form seeded from an existing event.
    fn from_event(event: &Event) -> Self {
        EventForm {
            title: event.title.clone(),
            description: event.description.clone(),
            category: event.category,
            start: format_field(event.start),
            end: format_field(event.end),
        }
    }

    /// Parse the buffer into store input.
    ///
    /// The only validation the dialog performs: unparsable dates fail here.
    /// Empty titles and inverted ranges pass through untouched.
    fn parse(&self) -> CalendarResult<EventFormData> {
        Ok(EventFormData {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category,
            start: parse_field("start", &self.start)?,
            end: parse_field("end", &self.end)?,
        })
    }
}

fn format_field(datetime: NaiveDateTime) -> String {
    datetime.format(DATE_FIELD_FORMAT).to_string()
}

fn parse_field(field: &'static str, value: &str) -> CalendarResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATE_FIELD_FORMAT)
        .map_err(|source| CalendarError::InvalidDate { field, source })
}

/// Dialog state: closed, creating on a day, or editing a backing event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorState {
    Closed,
    Create { form: EventForm },
    Edit { id: String, form: EventForm },
}

/// The create/edit dialog.
pub struct EventEditor {
    state: EditorState,
}

impl EventEditor {
    pub fn new() -> Self {
        EventEditor {
            state: EditorState::Closed,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, EditorState::Closed)
    }

    /// A day cell was clicked: open in create mode with dates defaulted to
    /// that day.
    pub fn open_create(&mut self, day: NaiveDate) {
        self.state = EditorState::Create {
            form: EventForm::for_day(day),
        };
    }

    /// An event glyph was clicked: open in edit mode, form seeded from the
    /// event.
    pub fn open_edit(&mut self, event: &Event) {
        self.state = EditorState::Edit {
            id: event.id.clone(),
            form: EventForm::from_event(event),
        };
    }

    /// Mutable access to the open form, for the host's input bindings.
    pub fn form_mut(&mut self) -> Option<&mut EventForm> {
        match &mut self.state {
            EditorState::Closed => None,
            EditorState::Create { form } | EditorState::Edit { form, .. } => Some(form),
        }
    }

    /// Submit the form: create or update depending on mode, then close.
    ///
    /// A date parse failure blocks the submission and leaves the dialog
    /// open so the user can fix the field.
    pub fn submit(&mut self, store: &mut EventStore) -> CalendarResult<()> {
        match &self.state {
            EditorState::Closed => Ok(()),
            EditorState::Create { form } => {
                let data = form.parse()?;
                store.create(data);
                self.state = EditorState::Closed;
                Ok(())
            }
            EditorState::Edit { id, form } => {
                let data = form.parse()?;
                // Unknown ids are a silent no-op in the store
                let _ = store.update(id, data);
                self.state = EditorState::Closed;
                Ok(())
            }
        }
    }

    /// Dismiss the dialog, discarding the buffer.
    pub fn cancel(&mut self) {
        self.state = EditorState::Closed;
    }

    /// Delete the backing event. Only available in edit mode; closes the
    /// dialog afterwards.
    pub fn delete(&mut self, store: &mut EventStore) {
        if let EditorState::Edit { id, .. } = &self.state {
            store.delete(id);
            self.state = EditorState::Closed;
        }
    }
}

impl Default for EventEditor {
    fn default() -> Self {
        Self::new()
    }
}
