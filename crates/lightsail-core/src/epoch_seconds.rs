//! Serde helpers for the wire representation of timestamps.
//!
//! The JSON protocol carries timestamps as (possibly fractional) seconds since
//! the Unix epoch. These modules keep `DateTime<Utc>` on the Rust side and
//! convert at millisecond precision. Use with `#[serde(with = "...")]`.
//!
//! # Example
//! ```ignore
//! use lightsail_core::epoch_seconds;
//! use chrono::{DateTime, Utc};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Record {
//!     #[serde(with = "epoch_seconds::required")]
//!     pub start_time: DateTime<Utc>,
//!
//!     #[serde(default, with = "epoch_seconds::optional", skip_serializing_if = "Option::is_none")]
//!     pub created_at: Option<DateTime<Utc>>,
//! }
//! ```

use chrono::{DateTime, Utc};

/// Convert a timestamp to fractional epoch seconds, truncated to milliseconds.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn to_epoch_seconds(value: &DateTime<Utc>) -> f64 {
    value.timestamp_millis() as f64 / 1000.0
}

/// Convert fractional epoch seconds back to a timestamp.
///
/// Returns `None` for non-finite or out-of-range input.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
#[must_use]
pub fn from_epoch_seconds(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let millis = (seconds * 1000.0).round();
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64)
}

/// `DateTime<Utc>` as epoch seconds.
pub mod required {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        super::to_epoch_seconds(value).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let seconds = f64::deserialize(d)?;
        super::from_epoch_seconds(seconds)
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {seconds}")))
    }
}

/// `Option<DateTime<Utc>>` as optional epoch seconds.
///
/// Pair with `#[serde(default)]` so that an absent key decodes as `None`.
pub mod optional {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(value: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => s.serialize_some(&super::to_epoch_seconds(v)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<DateTime<Utc>>, D::Error> {
        Option::<f64>::deserialize(d)?
            .map(|seconds| {
                super::from_epoch_seconds(seconds).ok_or_else(|| {
                    serde::de::Error::custom(format!("timestamp out of range: {seconds}"))
                })
            })
            .transpose()
    }
}
