//! Identifier and validated scalar types for the task domain.

use super::{ParseTaskIdError, TaskDomainError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Date layout used in the task identifier prefix.
const DAY_PREFIX_FORMAT: &str = "%Y%m%d";

/// Largest sequence representable by the four-digit identifier suffix.
const MAX_DAILY_SEQUENCE: u16 = 9999;

/// Date-prefixed task identifier in `YYYYMMDD-NNNN` format.
///
/// The suffix is the 1-based creation order of the task within its calendar
/// day, so identifiers order by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId {
    day: NaiveDate,
    sequence: u16,
}

impl TaskId {
    /// Creates the identifier for the `sequence`-th task of `day`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::SequenceExhausted`] when the sequence is
    /// zero or does not fit four digits.
    pub fn for_day(day: NaiveDate, sequence: u32) -> Result<Self, TaskDomainError> {
        let fitted = u16::try_from(sequence)
            .ok()
            .filter(|value| (1..=MAX_DAILY_SEQUENCE).contains(value))
            .ok_or(TaskDomainError::SequenceExhausted(sequence))?;
        Ok(Self {
            day,
            sequence: fitted,
        })
    }

    /// Returns the calendar day encoded in the prefix.
    #[must_use]
    pub const fn day(&self) -> NaiveDate {
        self.day
    }

    /// Returns the 1-based daily sequence number.
    #[must_use]
    pub const fn sequence(&self) -> u16 {
        self.sequence
    }

    /// Returns `true` when the identifier carries the prefix of `day`.
    #[must_use]
    pub fn is_from_day(&self, day: NaiveDate) -> bool {
        self.day == day
    }
}

/// Formats a date as the `YYYYMMDD` identifier prefix.
#[must_use]
pub fn day_prefix(day: NaiveDate) -> String {
    day.format(DAY_PREFIX_FORMAT).to_string()
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:04}", day_prefix(self.day), self.sequence)
    }
}

impl FromStr for TaskId {
    type Err = ParseTaskIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseTaskIdError(value.to_owned());
        let (prefix, suffix) = value.trim().split_once('-').ok_or_else(invalid)?;

        let all_digits = |part: &str, len: usize| {
            part.len() == len && part.chars().all(|c| c.is_ascii_digit())
        };
        if !all_digits(prefix, 8) || !all_digits(suffix, 4) {
            return Err(invalid());
        }

        let day = NaiveDate::parse_from_str(prefix, DAY_PREFIX_FORMAT).map_err(|_| invalid())?;
        let sequence = suffix.parse::<u32>().map_err(|_| invalid())?;
        Self::for_day(day, sequence).map_err(|_| invalid())
    }
}

impl TryFrom<String> for TaskId {
    type Error = ParseTaskIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TaskId> for String {
    fn from(value: TaskId) -> Self {
        value.to_string()
    }
}

/// Identifier of the staff member a task is assigned to.
///
/// The value is usually the member's email address. It is not checked
/// against the user registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffIdentifier(String);

impl StaffIdentifier {
    /// Creates a validated staff identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyAssignedStaff`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyAssignedStaff);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StaffIdentifier {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StaffIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Completion percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Progress(u8);

impl Progress {
    /// No work done.
    pub const NONE: Self = Self(0);

    /// Work fully done.
    pub const FULL: Self = Self(100);

    /// Creates a validated completion percentage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidProgress`] when the value lies
    /// outside `0..=100`.
    pub fn new(value: i64) -> Result<Self, TaskDomainError> {
        u8::try_from(value)
            .ok()
            .filter(|percent| *percent <= 100)
            .map(Self)
            .ok_or(TaskDomainError::InvalidProgress(value))
    }

    /// Returns the percentage value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Progress {
    type Error = TaskDomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Progress> for u8 {
    fn from(value: Progress) -> Self {
        value.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
