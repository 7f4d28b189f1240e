//! Error types.

use thiserror::Error;

/// Unified error type for everything in the crate
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed iCalendar content line
    #[error("invalid content line: {0}")]
    InvalidContentLine(&'static str),
    /// Malformed iCalendar component structure
    #[error("invalid component: {0}")]
    InvalidComponent(&'static str),
    /// No `VTIMEZONE` component in the parsed data
    #[error("no VTIMEZONE component found")]
    MissingVTimezone,
}
