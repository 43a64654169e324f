use async_graphql_value::{ConstValue, Value};

use super::CustomScalar;
use crate::{CoercionError, CoercionResult};

pub struct JSONScalar;

impl JSONScalar {
    pub const NAME: &'static str = "JSON";
}

impl CustomScalar for JSONScalar {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> Option<&str> {
        Some("any valid JSON type")
    }

    fn specified_by(&self) -> Option<&str> {
        Some("https://www.ecma-international.org/publications-and-standards/standards/ecma-404/")
    }

    fn serialize(&self, value: ConstValue) -> CoercionResult<ConstValue> {
        Ok(value)
    }

    fn parse_value(&self, value: ConstValue) -> CoercionResult<ConstValue> {
        Ok(value)
    }

    fn parse_literal(&self, _literal: &Value) -> CoercionResult<ConstValue> {
        Err(CoercionError::literal_unsupported(Self::NAME))
    }
}
