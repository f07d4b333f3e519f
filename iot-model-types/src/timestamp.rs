//! Timestamp field type.
//!
//! Stored as milliseconds since the Unix epoch, the resolution the service
//! reports. On the wire the JSON protocol carries epoch seconds as a number,
//! with a fractional part when milliseconds are present.

use crate::value::ShapeValue;
use crate::{Error, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An instant, as milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp {
    epoch_millis: i64,
}

impl Timestamp {
    /// Creates a timestamp at the current time.
    #[must_use]
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    #[must_use]
    pub const fn from_epoch_millis(epoch_millis: i64) -> Self {
        Self { epoch_millis }
    }

    #[must_use]
    pub const fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Self {
            epoch_millis: epoch_seconds.saturating_mul(1000),
        }
    }

    #[must_use]
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self {
            epoch_millis: datetime.timestamp_millis(),
        }
    }

    /// Parses an RFC 3339 date-time such as `2024-05-01T12:00:00.250Z`.
    pub fn parse_rfc3339(s: &str) -> Result<Self> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Self::from_datetime(dt.with_timezone(&Utc)))
            .map_err(|e| Error::InvalidTimestamp(format!("{s}: {e}")))
    }

    #[must_use]
    pub const fn epoch_millis(&self) -> i64 {
        self.epoch_millis
    }

    /// Returns the calendar form, or `None` when out of chrono's range.
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.epoch_millis)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_datetime(datetime)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => write!(f, "{}ms", self.epoch_millis),
        }
    }
}

impl ShapeValue for Timestamp {
    // A JVM Date folds its millisecond count like a Long.
    fn hash_code(&self) -> i32 {
        self.epoch_millis.hash_code()
    }

    fn value_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.epoch_millis % 1000 == 0 {
            serializer.serialize_i64(self.epoch_millis / 1000)
        } else {
            serializer.serialize_f64(self.epoch_millis as f64 / 1000.0)
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let seconds = f64::deserialize(deserializer)?;
        Ok(Self::from_epoch_millis((seconds * 1000.0).round() as i64))
    }
}
