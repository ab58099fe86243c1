//! Error types for epoch construction and timestamp parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from building an [`Epoch`](crate::Epoch) or parsing a UTC timestamp.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Timestamp text could not be parsed.
    Parse(String),
    /// Julian Date is NaN or infinite.
    NonFinite,
    /// A calendar field is outside its valid range.
    InvalidCalendar(&'static str),
    /// Instant cannot be represented as a `chrono` date-time.
    OutOfRange,
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "timestamp parse error: {msg}"),
            Self::NonFinite => write!(f, "julian date must be finite"),
            Self::InvalidCalendar(msg) => write!(f, "invalid calendar date: {msg}"),
            Self::OutOfRange => write!(f, "instant outside representable date range"),
        }
    }
}

impl Error for TimeError {}

impl From<chrono::ParseError> for TimeError {
    fn from(e: chrono::ParseError) -> Self {
        Self::Parse(e.to_string())
    }
}
