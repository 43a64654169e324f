use async_graphql_value::{ConstValue, Value};

use super::CustomScalar;
use crate::{checks, CoercionError, CoercionResult};

pub struct ObjectScalar;

impl ObjectScalar {
    pub const NAME: &'static str = "Object";
}

impl CustomScalar for ObjectScalar {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> Option<&str> {
        Some("JSON object")
    }

    fn serialize(&self, value: ConstValue) -> CoercionResult<ConstValue> {
        checks::keyed_container(&value, false)?;
        Ok(value)
    }

    fn parse_value(&self, value: ConstValue) -> CoercionResult<ConstValue> {
        checks::keyed_container(&value, false)?;
        Ok(value)
    }

    fn parse_literal(&self, _literal: &Value) -> CoercionResult<ConstValue> {
        Err(CoercionError::literal_unsupported(Self::NAME))
    }
}
