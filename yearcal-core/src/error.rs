//! Error types for yearcal.

use thiserror::Error;

/// Errors surfaced to the host.
///
/// Nothing here is fatal: every failure is local to a single interaction
/// and recoverable by the user re-editing the form.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Event not found: {0}")]
    NotFound(String),

    #[error("Invalid {field} date: {source}")]
    InvalidDate {
        field: &'static str,
        source: chrono::ParseError,
    },
}

/// Result type alias for yearcal operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
