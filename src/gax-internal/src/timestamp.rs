// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Timestamp formats used on the wire.
//!
//! Query parameters, URIs and XML documents use ISO-8601 with milliseconds.
//! Headers use the HTTP-date format. JSON documents use (possibly
//! fractional) seconds since the epoch.

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

const ISO_8601: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

const HTTP_DATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

#[derive(thiserror::Error, Debug)]
pub enum TimestampError {
    #[error("cannot format timestamp: {0}")]
    Format(#[from] time::error::Format),
    #[error("cannot parse timestamp {0:?}")]
    Parse(String),
    #[error("timestamp out of range: {0}")]
    Range(#[from] time::error::ComponentRange),
}

type Result<T> = std::result::Result<T, TimestampError>;

/// Formats `t` as `2015-01-25T08:00:00.000Z`.
pub fn iso8601(t: &OffsetDateTime) -> Result<String> {
    Ok(t.to_offset(UtcOffset::UTC).format(ISO_8601)?)
}

/// Formats `t` as `Sun, 25 Jan 2015 08:00:00 GMT`.
pub fn http_date(t: &OffsetDateTime) -> Result<String> {
    Ok(t.to_offset(UtcOffset::UTC).format(HTTP_DATE)?)
}

/// Seconds since the epoch, with a fractional part only if needed.
pub fn epoch_seconds(t: &OffsetDateTime) -> EpochSeconds {
    if t.nanosecond() == 0 {
        EpochSeconds::Integer(t.unix_timestamp())
    } else {
        EpochSeconds::Fractional(t.unix_timestamp_nanos() as f64 / 1e9)
    }
}

/// A timestamp in a JSON document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EpochSeconds {
    Integer(i64),
    Fractional(f64),
}

/// Parses RFC 3339 timestamps, which include the ISO-8601 wire format.
pub fn parse_iso8601(s: &str) -> Result<OffsetDateTime> {
    OffsetDateTime::parse(s, &Rfc3339).map_err(|_| TimestampError::Parse(s.to_string()))
}

/// Parses HTTP-date timestamps.
pub fn parse_http_date(s: &str) -> Result<OffsetDateTime> {
    PrimitiveDateTime::parse(s, HTTP_DATE)
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|_| TimestampError::Parse(s.to_string()))
}

/// Converts seconds since the epoch, rounding to the nearest microsecond.
pub fn from_epoch_seconds(seconds: f64) -> Result<OffsetDateTime> {
    if !seconds.is_finite() {
        return Err(TimestampError::Parse(seconds.to_string()));
    }
    let whole = seconds.floor();
    // Anything outside the i64 range is also outside the range of OffsetDateTime.
    if whole < i64::MIN as f64 || whole >= i64::MAX as f64 {
        return Err(TimestampError::Parse(seconds.to_string()));
    }
    let micros = ((seconds - whole) * 1e6).round() as i128;
    let nanos = (whole as i64 as i128) * 1_000_000_000 + micros * 1_000;
    Ok(OffsetDateTime::from_unix_timestamp_nanos(nanos)?)
}
