//! Calendar date of a training session.

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date without time zone, persisted as `YYYY-MM-DD`.
///
/// Years are limited to `0000`..=`9999`, both when parsing input and when
/// loading stored files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TrainingDate(NaiveDate);

impl TrainingDate {
    /// Parses an ISO-8601 calendar date.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the input is blank
    /// - `InvalidFormat` if it is not a valid `YYYY-MM-DD` date
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ValidationError::empty_field("date"));
        }
        if !has_iso_shape(input) {
            return Err(ValidationError::invalid_format(
                "date",
                "expected YYYY-MM-DD",
            ));
        }
        NaiveDate::parse_from_str(input, DATE_FORMAT)
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("date", e.to_string()))
    }

    /// Today's date in the local time zone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Monday that starts this date's ISO week. Sunday belongs to the
    /// week of the preceding Monday.
    pub fn week_start(&self) -> Self {
        let offset = i64::from(self.0.weekday().number_from_monday()) - 1;
        // Only the earliest representable week can underflow
        Self(
            self.0
                .checked_sub_signed(Duration::days(offset))
                .unwrap_or(NaiveDate::MIN),
        )
    }

    /// Long, human-readable form, e.g. `Monday, January 1, 2024`.
    pub fn long_form(&self) -> String {
        self.0.format("%A, %B %-d, %Y").to_string()
    }
}

impl fmt::Display for TrainingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Exactly four year digits, two month digits and two day digits.
fn has_iso_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl TryFrom<String> for TrainingDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TrainingDate> for String {
    fn from(date: TrainingDate) -> Self {
        date.to_string()
    }
}

impl FromStr for TrainingDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
