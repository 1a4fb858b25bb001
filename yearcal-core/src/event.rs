//! Calendar event types.
//!
//! The shared data types the store and the view layer work with. The host
//! supplies events through these types at startup and receives them back
//! through the store's change callback.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::palette::Color;

/// A calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique across the store
    pub id: String,
    pub title: String,
    pub description: String,
    /// Local wall-clock start. Decides which day cell the event lands on.
    pub start: NaiveDateTime,
    /// Local wall-clock end. Never consulted for day placement.
    pub end: NaiveDateTime,
    pub category: Category,
    /// Display token, always re-derived from `category` on save
    pub color: Color,
}

/// Closed classification of an event controlling its display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Personal,
    Holiday,
    Meeting,
}

/// Transient edit buffer for the event dialog.
///
/// Carries no id: identity is assigned by the store on create and
/// preserved on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventFormData {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}
