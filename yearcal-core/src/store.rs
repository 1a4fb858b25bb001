//! In-memory event store.
//!
//! The single writer for the event collection. Views hold read snapshots
//! and request mutations through the application root; the host observes
//! every change through the registered callback.

use uuid::Uuid;

use crate::event::{Event, EventFormData};

/// Source of fresh event ids.
///
/// Injectable so tests can supply deterministic ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Default id generator: random v4 UUIDs.
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

type ChangeCallback = Box<dyn FnMut(&[Event])>;

/// In-memory collection of events with create/update/delete operations.
///
/// Insertion order is preserved so rendering stays stable across edits.
pub struct EventStore {
    events: Vec<Event>,
    ids: Box<dyn IdGenerator>,
    on_change: Option<ChangeCallback>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::with_events(Vec::new())
    }

    /// Seed the store from a host-supplied event list.
    pub fn with_events(events: Vec<Event>) -> Self {
        Self::with_id_generator(events, Box::new(UuidIds))
    }

    pub fn with_id_generator(events: Vec<Event>, ids: Box<dyn IdGenerator>) -> Self {
        EventStore {
            events,
            ids,
            on_change: None,
        }
    }

    /// Register the host callback. It receives the full updated list after
    /// every effective mutation.
    pub fn set_on_change(&mut self, callback: impl FnMut(&[Event]) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Read snapshot of the current collection.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Create a new event from the form buffer.
    ///
    /// A fresh id is assigned and the color derived from the category.
    /// The event is appended, so it renders after existing ones.
    pub fn create(&mut self, form: EventFormData) -> Event {
        let event = Event {
            id: self.ids.next_id(),
            color: form.category.color(),
            title: form.title,
            description: form.description,
            start: form.start,
            end: form.end,
            category: form.category,
        };
        self.events.push(event.clone());
        self.notify();
        event
    }

    /// Replace an event's fields, keeping its id and re-deriving the color.
    ///
    /// An unknown id is a silent no-op: `None` is returned, the collection
    /// is untouched and the change callback does not fire.
    pub fn update(&mut self, id: &str, form: EventFormData) -> Option<Event> {
        let event = self.events.iter_mut().find(|e| e.id == id)?;
        event.title = form.title;
        event.description = form.description;
        event.start = form.start;
        event.end = form.end;
        event.category = form.category;
        event.color = form.category.color();
        let updated = event.clone();

        self.notify();
        Some(updated)
    }

    /// Remove the event with this id. An unknown id is a no-op.
    pub fn delete(&mut self, id: &str) {
        let len_before = self.events.len();
        self.events.retain(|e| e.id != id);
        if self.events.len() != len_before {
            self.notify();
        }
    }

    fn notify(&mut self) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.events);
        }
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Category;
    use crate::palette::Color;
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Deterministic ids: "id-1", "id-2", ...
    struct SequentialIds(u32);

    impl IdGenerator for SequentialIds {
        fn next_id(&mut self) -> String {
            self.0 += 1;
            format!("id-{}", self.0)
        }
    }

    fn test_store() -> EventStore {
        EventStore::with_id_generator(Vec::new(), Box::new(SequentialIds(0)))
    }

    fn make_form(title: &str, category: Category) -> EventFormData {
        let day = NaiveDate::from_ymd_opt(2024, 4, 15).unwrap();
        EventFormData {
            title: title.to_string(),
            description: "Weekly team sync".to_string(),
            category,
            start: day.and_hms_opt(10, 0, 0).unwrap(),
            end: day.and_hms_opt(11, 30, 0).unwrap(),
        }
    }

    #[test]
    fn create_assigns_fresh_id_and_derived_color() {
        let mut store = test_store();
        let event = store.create(make_form("Team Meeting", Category::Meeting));

        assert_eq!(event.id, "id-1");
        assert_eq!(event.color, Color::Purple);
        assert_eq!(store.events().len(), 1);
        assert_eq!(store.get("id-1").unwrap().title, "Team Meeting");
    }

    #[test]
    fn create_appends_in_order() {
        let mut store = test_store();
        store.create(make_form("First", Category::Work));
        store.create(make_form("Second", Category::Personal));

        let titles: Vec<&str> = store.events().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second"]);
    }

    #[test]
    fn update_preserves_id_and_recomputes_color() {
        let mut store = test_store();
        let created = store.create(make_form("Errands", Category::Personal));
        assert_eq!(created.color, Color::Green);

        let updated = store
            .update(&created.id, make_form("Errands", Category::Work))
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.color, Color::Brand);
        assert_eq!(store.events().len(), 1);
    }

    #[test]
    fn update_of_unknown_id_is_a_silent_noop() {
        let mut store = test_store();
        store.create(make_form("Kept", Category::Work));
        let snapshot = store.events().to_vec();

        assert!(store.update("missing", make_form("Other", Category::Holiday)).is_none());
        assert_eq!(store.events(), snapshot.as_slice());
    }

    #[test]
    fn delete_removes_by_id_and_unknown_id_is_a_noop() {
        let mut store = test_store();
        let a = store.create(make_form("A", Category::Work));
        let b = store.create(make_form("B", Category::Meeting));

        store.delete(&a.id);
        assert!(store.get(&a.id).is_none());
        assert_eq!(store.events().len(), 1);

        store.delete("missing");
        assert_eq!(store.events().len(), 1);
        assert_eq!(store.events()[0].id, b.id);
    }

    #[test]
    fn change_callback_sees_the_full_list_after_each_mutation() {
        let mut store = test_store();
        let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.set_on_change(move |events| sink.borrow_mut().push(events.len()));

        let event = store.create(make_form("Meeting", Category::Meeting));
        store.update(&event.id, make_form("Meeting", Category::Work)).unwrap();
        store.delete(&event.id);

        assert_eq!(*seen.borrow(), vec![1, 1, 0]);
    }

    #[test]
    fn noop_mutations_do_not_fire_the_callback() {
        let mut store = test_store();
        let fired = Rc::new(RefCell::new(0u32));
        let sink = Rc::clone(&fired);
        store.set_on_change(move |_| *sink.borrow_mut() += 1);

        let _ = store.update("missing", make_form("Other", Category::Work));
        store.delete("missing");

        assert_eq!(*fired.borrow(), 0);
    }

    #[test]
    fn uuid_ids_are_unique() {
        let mut ids = UuidIds;
        assert_ne!(ids.next_id(), ids.next_id());
    }

    #[test]
    fn inverted_date_range_is_accepted_as_is() {
        // end < start is not validated anywhere; the store keeps what the
        // form submits
        let mut store = test_store();
        let day = NaiveDate::from_ymd_opt(2024, 4, 15).unwrap();
        let form = EventFormData {
            title: "Backwards".to_string(),
            description: String::new(),
            category: Category::Work,
            start: day.and_hms_opt(12, 0, 0).unwrap(),
            end: day.and_hms_opt(9, 0, 0).unwrap(),
        };

        let event = store.create(form);
        assert!(event.end < event.start);
    }
}
