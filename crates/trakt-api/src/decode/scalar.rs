//! Scalar decoders: lenient integers, coerced strings, and Trakt dates.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Serialize, Serializer};
use serde_json::Value;

use super::Decode;
use super::context::DecodeContext;
use super::error::{DecodeError, describe};

/// Half-open range of `f64` values that convert to `i64` without loss of range.
const I64_AS_F64: std::ops::Range<f64> = -9_223_372_036_854_775_808.0..9_223_372_036_854_775_808.0;

/// Integral value of a JSON number, if it fits `T`.
///
/// Floats count when they have no fractional part (`2.0` is `2`).
fn integral<T>(value: &Value) -> Option<T>
where
    T: TryFrom<i64> + TryFrom<u64>,
{
    if let Some(n) = value.as_i64() {
        return T::try_from(n).ok();
    }
    if let Some(n) = value.as_u64() {
        return T::try_from(n).ok();
    }
    let f = value.as_f64()?;
    if f.fract() != 0.0 || !I64_AS_F64.contains(&f) {
        return None;
    }
    #[allow(clippy::as_conversions, clippy::cast_possible_truncation)]
    let n = f as i64;
    T::try_from(n).ok()
}

macro_rules! lenient_integer {
    ($($ty:ty),* $(,)?) => {$(
        impl Decode for $ty {
            fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
                integral(value).ok_or_else(|| cx.malformed(stringify!($ty), value))
            }

            fn decode_optional(
                value: &Value,
                cx: &DecodeContext<'_>,
            ) -> Result<Option<Self>, DecodeError> {
                if value.is_null() {
                    return Ok(None);
                }
                match integral(value) {
                    Some(n) => Ok(Some(n)),
                    None if cx.config().lenient_integers() => {
                        tracing::trace!(
                            path = %cx.path(),
                            found = %describe(value),
                            "non-integer value in integer field, leaving unset"
                        );
                        Ok(None)
                    }
                    None => Err(cx.malformed(stringify!($ty), value)),
                }
            }
        }
    )*};
}

lenient_integer!(i32, i64);

impl Decode for String {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            _ => Err(cx.malformed("string", value)),
        }
    }
}

impl Decode for bool {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        value.as_bool().ok_or_else(|| cx.malformed("boolean", value))
    }
}

/// A point in time reported by Trakt.
///
/// Wire forms are epoch seconds (`1303372800`) or a calendar date
/// (`"2011-04-21"`) taken as midnight in the configured reference zone.
/// Both normalize to the same absolute instant; re-encoding always
/// produces epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TraktDate(DateTime<Utc>);

impl TraktDate {
    /// Creates a date from seconds since the Unix epoch.
    #[must_use]
    pub fn from_epoch_seconds(seconds: i64) -> Option<Self> {
        DateTime::from_timestamp(seconds, 0).map(Self)
    }

    /// Creates a date from midnight of `date` in `zone`.
    #[must_use]
    pub fn from_calendar_date(date: NaiveDate, zone: FixedOffset) -> Option<Self> {
        zone.from_local_datetime(&date.and_time(NaiveTime::MIN))
            .single()
            .map(|dt| Self(dt.with_timezone(&Utc)))
    }

    /// Seconds since the Unix epoch.
    #[must_use]
    pub fn epoch_seconds(&self) -> i64 {
        self.0.timestamp()
    }

    /// The instant in UTC.
    #[must_use]
    pub const fn instant(&self) -> DateTime<Utc> {
        self.0
    }

    /// The instant viewed in `zone`.
    #[must_use]
    pub fn in_zone(&self, zone: FixedOffset) -> DateTime<FixedOffset> {
        self.0.with_timezone(&zone)
    }
}

impl From<DateTime<Utc>> for TraktDate {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl fmt::Display for TraktDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%SZ"))
    }
}

impl Serialize for TraktDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.epoch_seconds())
    }
}

impl Decode for TraktDate {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        const EXPECTED: &str = "epoch seconds or calendar date";

        let text: Cow<'_, str> = match value {
            Value::Number(n) => Cow::Owned(n.to_string()),
            Value::String(s) => Cow::Borrowed(s.trim()),
            _ => return Err(cx.malformed(EXPECTED, value)),
        };

        let numeric_failure = match text.parse::<i64>() {
            Ok(seconds) => {
                return Self::from_epoch_seconds(seconds)
                    .ok_or_else(|| cx.malformed(EXPECTED, value));
            }
            Err(err) => err,
        };

        if value.is_string() {
            let config = cx.config();
            if let Ok(date) = NaiveDate::parse_from_str(&text, config.date_format()) {
                return Self::from_calendar_date(date, config.time_zone())
                    .ok_or_else(|| cx.malformed(EXPECTED, value));
            }
        }

        Err(cx.malformed(EXPECTED, value).with_source(numeric_failure))
    }
}
