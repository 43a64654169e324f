use async_graphql_value::{ConstValue, Value};

use super::CustomScalar;
use crate::{checks, CoercionError, CoercionResult};

/// Object whose values all share the same type.
pub struct MapScalar;

impl MapScalar {
    pub const NAME: &'static str = "Map";
}

impl CustomScalar for MapScalar {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> Option<&str> {
        Some("map of string to anything")
    }

    fn serialize(&self, value: ConstValue) -> CoercionResult<ConstValue> {
        checks::keyed_container(&value, true)?;
        Ok(value)
    }

    fn parse_value(&self, value: ConstValue) -> CoercionResult<ConstValue> {
        checks::keyed_container(&value, true)?;
        Ok(value)
    }

    fn parse_literal(&self, _literal: &Value) -> CoercionResult<ConstValue> {
        Err(CoercionError::literal_unsupported(Self::NAME))
    }
}
