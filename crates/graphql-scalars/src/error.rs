use async_graphql_value::Number;

use crate::ValueKind;

pub type CoercionResult<T> = Result<T, CoercionError>;

/// Errors raised while coercing a value through a custom scalar.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoercionError {
    #[error("keys should be strings, found {found} where an object was expected")]
    InvalidScalarShape { found: ValueKind },
    #[error("all values of a map should have the same type, \"{key}\" holds {found} but the first value is {expected}")]
    HeterogeneousMapValues {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("{found} is not a number")]
    NotANumber { found: ValueKind },
    #[error("{value} is not a long")]
    NotAnInteger { value: Number },
    #[error("{scalar} cannot be written as an inline literal, provide it through a variable")]
    LiteralParsingUnsupported { scalar: String },
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("invalid time: {0}")]
    InvalidTime(String),
    #[error("invalid date-time: {0}")]
    InvalidDateTime(String),
    #[error("unknown scalar type '{0}'")]
    UnknownScalar(String),
}

impl CoercionError {
    /// Stable machine readable code, exposed to clients as `extensions.code`.
    pub fn code(&self) -> &'static str {
        match self {
            CoercionError::InvalidScalarShape { .. } => "INVALID_SCALAR_SHAPE",
            CoercionError::HeterogeneousMapValues { .. } => "HETEROGENEOUS_MAP_VALUES",
            CoercionError::NotANumber { .. } => "NOT_A_NUMBER",
            CoercionError::NotAnInteger { .. } => "NOT_AN_INTEGER",
            CoercionError::LiteralParsingUnsupported { .. } => "LITERAL_PARSING_UNSUPPORTED",
            CoercionError::InvalidDate(_) => "INVALID_DATE",
            CoercionError::InvalidTime(_) => "INVALID_TIME",
            CoercionError::InvalidDateTime(_) => "INVALID_DATE_TIME",
            CoercionError::UnknownScalar(_) => "UNKNOWN_SCALAR",
        }
    }

    pub(crate) fn literal_unsupported(scalar: &str) -> Self {
        CoercionError::LiteralParsingUnsupported {
            scalar: scalar.to_string(),
        }
    }
}
