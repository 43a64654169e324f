use async_graphql_value::{ConstValue, Value};

use super::CustomScalar;
use crate::{checks, CoercionError, CoercionResult};

/// 64-bit integer, carried as a JSON number.
pub struct LongScalar;

impl LongScalar {
    pub const NAME: &'static str = "Long";
}

impl CustomScalar for LongScalar {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn serialize(&self, value: ConstValue) -> CoercionResult<ConstValue> {
        checks::integer(&value)?;
        Ok(value)
    }

    fn parse_value(&self, value: ConstValue) -> CoercionResult<ConstValue> {
        checks::integer(&value)?;
        Ok(value)
    }

    fn parse_literal(&self, _literal: &Value) -> CoercionResult<ConstValue> {
        Err(CoercionError::literal_unsupported(Self::NAME))
    }
}
