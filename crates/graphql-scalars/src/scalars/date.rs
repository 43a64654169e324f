use async_graphql_value::{ConstValue, Value};
use chrono::NaiveDate;

use super::CustomScalar;
use crate::{CoercionError, CoercionResult, ValueKind};

/// Calendar date in the RFC 3339 `full-date` form, e.g. `2007-12-03`.
pub struct DateScalar;

impl DateScalar {
    pub const NAME: &'static str = "Date";

    pub fn parse_str(input: &str) -> CoercionResult<NaiveDate> {
        if !has_full_date_shape(input) {
            return Err(CoercionError::InvalidDate(format!(
                "\"{input}\" does not match the YYYY-MM-DD format"
            )));
        }

        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map_err(|e| CoercionError::InvalidDate(format!("\"{input}\" is not a calendar date: {e}")))
    }

    fn coerce(value: ConstValue) -> CoercionResult<ConstValue> {
        match value {
            ConstValue::String(date) => {
                Self::parse_str(&date)?;
                Ok(ConstValue::String(date))
            }
            other => Err(CoercionError::InvalidDate(format!(
                "dates should be provided as string, found {}",
                ValueKind::of(&other)
            ))),
        }
    }
}

fn has_full_date_shape(input: &str) -> bool {
    input.len() == 10
        && input.bytes().enumerate().all(|(position, byte)| match position {
            4 | 7 => byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

impl CustomScalar for DateScalar {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> Option<&str> {
        Some("A date string, such as 2007-12-03, compliant with the `full-date` format outlined in section 5.6 of the RFC 3339 profile of the ISO 8601 standard for representation of dates and times using the Gregorian calendar.")
    }

    fn specified_by(&self) -> Option<&str> {
        Some("https://datatracker.ietf.org/doc/html/rfc3339#section-5.6")
    }

    fn serialize(&self, value: ConstValue) -> CoercionResult<ConstValue> {
        Self::coerce(value)
    }

    fn parse_value(&self, value: ConstValue) -> CoercionResult<ConstValue> {
        Self::coerce(value)
    }

    fn parse_literal(&self, literal: &Value) -> CoercionResult<ConstValue> {
        match literal {
            Value::String(date) => {
                Self::parse_str(date)?;
                Ok(ConstValue::String(date.clone()))
            }
            _ => Err(CoercionError::InvalidDate(
                "dates should be written as string literals".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("2007-12-03")]
    #[case("2024-02-29")]
    fn valid_dates(#[case] input: &str) {
        let value = ConstValue::String(input.to_string());

        assert_eq!(DateScalar.parse_value(value.clone()), Ok(value.clone()));
        assert_eq!(DateScalar.serialize(value.clone()), Ok(value));
    }

    #[rstest]
    #[case("2023-02-29")]
    #[case("2007-13-03")]
    #[case("2007-1-03")]
    #[case("+2007-1-03")]
    #[case("2007-12-03T10:15:30Z")]
    fn invalid_dates(#[case] input: &str) {
        let error = DateScalar.parse_value(ConstValue::String(input.to_string())).unwrap_err();
        assert_eq!(error.code(), "INVALID_DATE");
    }

    #[test]
    fn numbers_are_rejected() {
        let error = DateScalar.serialize(ConstValue::Number(20071203.into())).unwrap_err();
        assert_eq!(error.to_string(), "invalid date: dates should be provided as string, found a number");
    }

    #[test]
    fn string_literals_are_parsed() {
        let literal = Value::String("2007-12-03".to_string());
        assert_eq!(
            DateScalar.parse_literal(&literal),
            Ok(ConstValue::String("2007-12-03".to_string()))
        );

        assert!(DateScalar.parse_literal(&Value::Number(1.into())).is_err());
    }
}
