//! Server-owned RFC 3339 timestamps
//!
//! The service expects `created_at`/`updated_at` echoed back exactly as it
//! sent them. Offsets and fractional digits are part of that text, so the
//! timestamp keeps the received string and only parses it on demand.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, ParseError, SecondsFormat, TimeZone};
use serde::{Deserialize, Serialize};

/// An RFC 3339 timestamp carried verbatim.
///
/// Equality is textual: `12:00:00Z` and `12:00:00+00:00` are different values
/// here even though they name the same instant. Compare
/// [`Timestamp::to_datetime`] results for instant equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp(String);

impl Timestamp {
    /// The timestamp text exactly as received.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parsed instant, keeping the original offset.
    pub fn to_datetime(&self) -> DateTime<FixedOffset> {
        // Validated on construction.
        DateTime::parse_from_rfc3339(&self.0).unwrap_or_default()
    }
}

impl TryFrom<String> for Timestamp {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        DateTime::parse_from_rfc3339(&value)?;
        Ok(Self(value))
    }
}

impl FromStr for Timestamp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl From<Timestamp> for String {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp
where
    Tz::Offset: fmt::Display,
{
    fn from(value: DateTime<Tz>) -> Self {
        Self(value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
