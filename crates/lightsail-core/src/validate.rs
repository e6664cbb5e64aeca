//! Client-side checks of the field constraints the API documents.
//!
//! Requests are validated before they are encoded so that an obviously bad
//! payload never leaves the process. The checks only cover what the API
//! documents per field; cross-resource rules stay with the service.

use std::fmt::Display;
use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};

use crate::enums::MetricStatistic;
use crate::errors::CoreError;

/// Metric aggregation period in seconds.
pub const PERIOD_SECONDS: RangeInclusive<i32> = 60..=86_400;

/// Port numbers; `-1` stands for "all ICMP types".
pub const PORT: RangeInclusive<i32> = -1..=65_535;

/// Alarm evaluation window, in periods.
pub const EVALUATION_PERIODS: RangeInclusive<i32> = 1..=288;

/// A request that can check its own fields before encoding.
pub trait Validate {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first offending field.
    fn validate(&self) -> Result<(), CoreError>;
}

impl<T: Validate> Validate for [T] {
    fn validate(&self) -> Result<(), CoreError> {
        self.iter().try_for_each(Validate::validate)
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), CoreError> {
        self.as_ref().map_or(Ok(()), Validate::validate)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A resource name: ASCII word characters (`[a-zA-Z0-9_]`) at both ends,
/// `-` allowed in between, at least two characters.
///
/// # Errors
///
/// [`CoreError::Validation`] if `value` does not have that shape.
pub fn resource_name(field: &str, value: &str) -> Result<(), CoreError> {
    let mut chars = value.chars();
    let (Some(first), Some(last)) = (chars.next(), chars.next_back()) else {
        return Err(CoreError::validation(
            field,
            "must be at least two characters long",
        ));
    };
    if !is_word_char(first) || !is_word_char(last) {
        return Err(CoreError::validation(
            field,
            format!("'{value}' must start and end with a letter, digit or underscore"),
        ));
    }
    if let Some(bad) = chars.find(|&c| !is_word_char(c) && c != '-') {
        return Err(CoreError::validation(
            field,
            format!("'{value}' contains invalid character '{bad}'"),
        ));
    }
    Ok(())
}

/// Every name in `values` is a valid resource name.
///
/// # Errors
///
/// [`CoreError::Validation`] for the first invalid name.
pub fn resource_names(field: &str, values: &[String]) -> Result<(), CoreError> {
    values.iter().try_for_each(|value| resource_name(field, value))
}

/// The string contains at least one non-whitespace character.
///
/// # Errors
///
/// [`CoreError::Validation`] for an empty or all-whitespace string.
pub fn non_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.chars().all(char::is_whitespace) {
        return Err(CoreError::validation(field, "must not be blank"));
    }
    Ok(())
}

/// # Errors
///
/// [`CoreError::Validation`] if `value` lies outside `range`.
pub fn in_range<T>(field: &str, value: T, range: &RangeInclusive<T>) -> Result<(), CoreError>
where
    T: PartialOrd + Display,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::validation(
            field,
            format!(
                "{value} is outside the allowed range {}..={}",
                range.start(),
                range.end()
            ),
        ))
    }
}

/// # Errors
///
/// [`CoreError::Validation`] for an empty collection.
pub fn non_empty<T>(field: &str, values: &[T]) -> Result<(), CoreError> {
    if values.is_empty() {
        return Err(CoreError::validation(field, "must contain at least one entry"));
    }
    Ok(())
}

/// The shared shape of a metric data query.
///
/// # Errors
///
/// [`CoreError::Validation`] for a period outside [`PERIOD_SECONDS`], a
/// window that does not move forward in time, or no statistics.
pub fn metric_query(
    period: i32,
    start_time: &DateTime<Utc>,
    end_time: &DateTime<Utc>,
    statistics: &[MetricStatistic],
) -> Result<(), CoreError> {
    in_range("period", period, &PERIOD_SECONDS)?;
    if start_time >= end_time {
        return Err(CoreError::validation(
            "endTime",
            format!("{end_time} is not after startTime {start_time}"),
        ));
    }
    non_empty("statistics", statistics)
}
