use async_graphql_value::{ConstValue, Number, Value};
use chrono::{DateTime, Utc};

use super::CustomScalar;
use crate::{CoercionError, CoercionResult, ValueKind};

/// RFC 3339 date-time, e.g. `2007-12-03T10:15:30Z`.
///
/// Resolvers may also return a Unix timestamp in seconds, which is rendered as
/// a UTC date-time string.
pub struct DateTimeScalar;

impl DateTimeScalar {
    pub const NAME: &'static str = "DateTime";

    pub fn parse_str(input: &str) -> CoercionResult<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(input)
            .map(|datetime| datetime.with_timezone(&Utc))
            .map_err(|e| CoercionError::InvalidDateTime(format!("\"{input}\" is not an RFC 3339 date-time: {e}")))
    }

    pub fn format(datetime: DateTime<Utc>) -> String {
        datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    }

    fn from_timestamp(number: &Number) -> CoercionResult<DateTime<Utc>> {
        number
            .as_i64()
            .and_then(|seconds| DateTime::<Utc>::from_timestamp(seconds, 0))
            .ok_or_else(|| CoercionError::InvalidDateTime(format!("{number} is not a valid Unix timestamp")))
    }

    fn normalize(input: &str) -> CoercionResult<ConstValue> {
        Self::parse_str(input).map(|datetime| ConstValue::String(Self::format(datetime)))
    }
}

impl CustomScalar for DateTimeScalar {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> Option<&str> {
        Some("A date-time string at UTC, such as 2007-12-03T10:15:30Z, compliant with the `date-time` format outlined in section 5.6 of the RFC 3339 profile of the ISO 8601 standard for representation of dates and times using the Gregorian calendar.")
    }

    fn specified_by(&self) -> Option<&str> {
        Some("https://datatracker.ietf.org/doc/html/rfc3339#section-5.6")
    }

    fn serialize(&self, value: ConstValue) -> CoercionResult<ConstValue> {
        match value {
            ConstValue::String(datetime) => {
                Self::parse_str(&datetime)?;
                Ok(ConstValue::String(datetime))
            }
            ConstValue::Number(timestamp) => {
                Self::from_timestamp(&timestamp).map(|datetime| ConstValue::String(Self::format(datetime)))
            }
            other => Err(CoercionError::InvalidDateTime(format!(
                "date-times should be provided as string or Unix timestamp, found {}",
                ValueKind::of(&other)
            ))),
        }
    }

    fn parse_value(&self, value: ConstValue) -> CoercionResult<ConstValue> {
        match value {
            ConstValue::String(datetime) => Self::normalize(&datetime),
            other => Err(CoercionError::InvalidDateTime(format!(
                "date-times should be provided as string, found {}",
                ValueKind::of(&other)
            ))),
        }
    }

    fn parse_literal(&self, literal: &Value) -> CoercionResult<ConstValue> {
        match literal {
            Value::String(datetime) => Self::normalize(datetime),
            _ => Err(CoercionError::InvalidDateTime(
                "date-times should be written as string literals".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("2007-12-03T10:15:30Z", "2007-12-03T10:15:30.000Z")]
    #[case("2007-12-03T10:15:30.5+01:00", "2007-12-03T09:15:30.500Z")]
    #[case("2007-12-03T23:00:00-02:00", "2007-12-04T01:00:00.000Z")]
    fn date_times_are_normalized_to_utc(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(
            DateTimeScalar.parse_value(ConstValue::String(input.to_string())),
            Ok(ConstValue::String(expected.to_string()))
        );
    }

    #[test]
    fn timestamps_are_serialized_as_strings() {
        assert_eq!(
            DateTimeScalar.serialize(ConstValue::Number(0.into())),
            Ok(ConstValue::String("1970-01-01T00:00:00.000Z".to_string()))
        );
    }

    #[test]
    fn fractional_timestamps_are_rejected() {
        let timestamp = ConstValue::Number(Number::from_f64(1.5).unwrap());
        let error = DateTimeScalar.serialize(timestamp).unwrap_err();

        assert_eq!(error.code(), "INVALID_DATE_TIME");
    }

    #[test]
    fn serialize_keeps_valid_strings() {
        let datetime = ConstValue::String("2007-12-03T10:15:30+01:00".to_string());
        assert_eq!(DateTimeScalar.serialize(datetime.clone()), Ok(datetime));
    }

    #[rstest]
    #[case("2007-12-03")]
    #[case("2007-12-03T10:15:30")]
    #[case("2007-02-30T10:15:30Z")]
    fn invalid_date_times(#[case] input: &str) {
        let error = DateTimeScalar
            .parse_value(ConstValue::String(input.to_string()))
            .unwrap_err();
        assert_eq!(error.code(), "INVALID_DATE_TIME");
    }

    #[test]
    fn timestamps_are_not_accepted_as_input() {
        assert!(DateTimeScalar.parse_value(ConstValue::Number(0.into())).is_err());
    }
}
