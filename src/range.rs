use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    CompileError, ParseError, RANGE_SEPARATOR, Simplify, Timestamp, compile_interval_to_pattern_with,
    prelude::*,
};

/// A closed interval between two timestamps.
/// The start must strictly precede the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct TimestampRange {
    start: Timestamp,
    end:   Timestamp,
}

/// Error type for timestamp range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// End does not strictly follow start.
    #[error("\"{start}\" must be older than \"{end}\"")]
    NotBefore { start: Timestamp, end: Timestamp },

    /// Error parsing a timestamp.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Error compiling the pattern.
    #[error(transparent)]
    CompileError(#[from] CompileError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl TimestampRange {
    /// Creates a new range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::NotBefore` unless `start < end`.
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self, RangeError> {
        if start >= end {
            return Err(RangeError::NotBefore { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parses both endpoints from the layout `YYYY-MM-DD HH:MM:SS`.
    ///
    /// # Errors
    /// Returns `RangeError::ParseError` for a malformed endpoint, or
    /// `RangeError::NotBefore` if the endpoints are out of order.
    pub fn parse(start: &str, end: &str) -> Result<Self, RangeError> {
        let start = start.parse::<Timestamp>()?;
        let end = end.parse::<Timestamp>()?;
        Self::new(start, end)
    }

    /// Returns the start of the range
    pub const fn start(&self) -> Timestamp {
        self.start
    }

    /// Returns the end of the range
    pub const fn end(&self) -> Timestamp {
        self.end
    }

    /// Checks if the range contains a given timestamp (both ends inclusive)
    pub fn contains(&self, timestamp: &Timestamp) -> bool {
        self.start <= *timestamp && *timestamp <= self.end
    }

    /// Compiles the range into a regular expression with `\d` shorthand.
    ///
    /// # Errors
    /// Returns `RangeError::CompileError` if a field cannot be compiled.
    pub fn pattern(&self) -> Result<String, RangeError> {
        self.pattern_with(Simplify::default())
    }

    /// Compiles the range into a regular expression.
    ///
    /// # Errors
    /// Returns `RangeError::CompileError` if a field cannot be compiled.
    pub fn pattern_with(&self, simplify: Simplify) -> Result<String, RangeError> {
        Ok(compile_interval_to_pattern_with(
            &self.start,
            &self.end,
            simplify,
        )?)
    }
}

impl FromStr for TimestampRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!(
                        "Separator '{RANGE_SEPARATOR}' not found despite count == 1"
                    ))
                })?;
                Self::parse(start_str, end_str)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for TimestampRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimestampRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
