//! Shape checks shared by the JSON-like scalars.

use async_graphql_value::{ConstValue, Number};

use crate::{CoercionError, CoercionResult, ValueKind};

// 2^63, the first float outside of the i64 range.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Accepts any object, optionally requiring every value to carry the same type tag.
///
/// Tags are compared against the first entry in iteration order and the first
/// mismatch is reported.
pub(crate) fn keyed_container(value: &ConstValue, require_homogeneous_values: bool) -> CoercionResult<()> {
    let map = match value {
        ConstValue::Object(map) => map,
        other => {
            return Err(CoercionError::InvalidScalarShape {
                found: ValueKind::of(other),
            })
        }
    };

    if !require_homogeneous_values {
        return Ok(());
    }

    let mut entries = map.iter().map(|(key, value)| (key, ValueKind::of(value).type_tag()));

    let Some((_, expected)) = entries.next() else {
        return Ok(());
    };

    match entries.find(|(_, tag)| *tag != expected) {
        Some((key, found)) => Err(CoercionError::HeterogeneousMapValues {
            key: key.to_string(),
            expected,
            found,
        }),
        None => Ok(()),
    }
}

/// Accepts numbers without a fractional part that fit a signed 64-bit integer,
/// whether they were written as integers or as floats.
pub(crate) fn integer(value: &ConstValue) -> CoercionResult<()> {
    let ConstValue::Number(number) = value else {
        return Err(CoercionError::NotANumber {
            found: ValueKind::of(value),
        });
    };

    if is_integral(number) {
        Ok(())
    } else {
        Err(CoercionError::NotAnInteger { value: number.clone() })
    }
}

fn is_integral(number: &Number) -> bool {
    if number.is_i64() {
        return true;
    }

    // u64 values above i64::MAX.
    if number.is_u64() {
        return false;
    }

    number
        .as_f64()
        .is_some_and(|float| float.is_finite() && float.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&float))
}
