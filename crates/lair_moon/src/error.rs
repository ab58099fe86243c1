//! Error types for the moon phase engine.

use std::error::Error;
use std::fmt::{Display, Formatter};

use lair_time::TimeError;

/// Errors from moon phase queries and the best-night scan.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MoonError {
    /// Error from epoch construction or parsing.
    Time(TimeError),
    /// Scan configuration failed validation.
    InvalidConfig(&'static str),
    /// Caller passed an argument outside the accepted domain.
    InvalidArgument(&'static str),
    /// Scan window runs past the last representable calendar date.
    DateOutOfRange,
}

impl Display for MoonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::DateOutOfRange => write!(f, "scan window exceeds calendar range"),
        }
    }
}

impl Error for MoonError {}

impl From<TimeError> for MoonError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
