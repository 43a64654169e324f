use async_graphql_value::{ConstValue, Value};
use chrono::{DateTime, NaiveTime, Utc};

use super::CustomScalar;
use crate::{CoercionError, CoercionResult, ValueKind};

/// Time of day with an offset, e.g. `10:15:30Z` or `10:15:30.120+01:00`.
///
/// Parsed values are shifted to UTC and carry millisecond precision.
pub struct TimeScalar;

impl TimeScalar {
    pub const NAME: &'static str = "Time";

    /// Parses an RFC 3339 `full-time` and returns it in UTC.
    pub fn parse_str(input: &str) -> CoercionResult<NaiveTime> {
        // Borrow the date-time grammar by anchoring the time on an arbitrary day.
        DateTime::parse_from_rfc3339(&format!("1970-01-01T{input}"))
            .map(|datetime| datetime.with_timezone(&Utc).time())
            .map_err(|e| CoercionError::InvalidTime(format!("\"{input}\" is not an RFC 3339 time: {e}")))
    }

    pub fn format(time: NaiveTime) -> String {
        time.format("%H:%M:%S%.3fZ").to_string()
    }

    fn normalize(input: &str) -> CoercionResult<ConstValue> {
        Self::parse_str(input).map(|time| ConstValue::String(Self::format(time)))
    }
}

fn expected_string(found: ValueKind) -> CoercionError {
    CoercionError::InvalidTime(format!("times should be provided as string, found {found}"))
}

impl CustomScalar for TimeScalar {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> Option<&str> {
        Some("A time string at UTC, such as 10:15:30Z, compliant with the `full-time` format outlined in section 5.6 of the RFC 3339 profile of the ISO 8601 standard for representation of dates and times using the Gregorian calendar.")
    }

    fn specified_by(&self) -> Option<&str> {
        Some("https://datatracker.ietf.org/doc/html/rfc3339#section-5.6")
    }

    fn serialize(&self, value: ConstValue) -> CoercionResult<ConstValue> {
        match value {
            ConstValue::String(time) => {
                Self::parse_str(&time)?;
                Ok(ConstValue::String(time))
            }
            other => Err(expected_string(ValueKind::of(&other))),
        }
    }

    fn parse_value(&self, value: ConstValue) -> CoercionResult<ConstValue> {
        match value {
            ConstValue::String(time) => Self::normalize(&time),
            other => Err(expected_string(ValueKind::of(&other))),
        }
    }

    fn parse_literal(&self, literal: &Value) -> CoercionResult<ConstValue> {
        match literal {
            Value::String(time) => Self::normalize(time),
            _ => Err(CoercionError::InvalidTime(
                "times should be written as string literals".to_string(),
            )),
        }
    }
}
