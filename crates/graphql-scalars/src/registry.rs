use std::fmt::Write;

use async_graphql_value::{ConstValue, Value};
use indexmap::IndexMap;

use crate::{
    scalars::{
        CustomScalar, DateScalar, DateTimeScalar, JSONScalar, LongScalar, MapScalar, ObjectScalar, TimeScalar,
    },
    CoercionError, CoercionResult,
};

/// Every custom scalar known to the schema, keyed by name.
///
/// Built once at startup and shared read-only, usually behind an `Arc`.
#[derive(Default)]
pub struct ScalarRegistry {
    scalars: IndexMap<String, Box<dyn CustomScalar>>,
}

impl ScalarRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry with `Map`, `JSON`, `Object`, `Long`, `Date`, `Time` and `DateTime`.
    pub fn builtin() -> Self {
        Self::new()
            .with(MapScalar)
            .with(JSONScalar)
            .with(ObjectScalar)
            .with(LongScalar)
            .with(DateScalar)
            .with(TimeScalar)
            .with(DateTimeScalar)
    }

    pub fn with(mut self, scalar: impl CustomScalar + 'static) -> Self {
        self.register(scalar);
        self
    }

    /// Registers a scalar, replacing any previous scalar with the same name.
    pub fn register(&mut self, scalar: impl CustomScalar + 'static) {
        let name = scalar.name().to_string();

        if self.scalars.insert(name.clone(), Box::new(scalar)).is_some() {
            tracing::warn!("Scalar {name} registered twice, keeping the last definition.");
        }
    }

    pub fn get(&self, name: &str) -> CoercionResult<&dyn CustomScalar> {
        self.scalars
            .get(name)
            .map(|scalar| scalar.as_ref())
            .ok_or_else(|| CoercionError::UnknownScalar(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.scalars.contains_key(name)
    }

    /// Scalar names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.scalars.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn CustomScalar> + '_ {
        self.scalars.values().map(|scalar| scalar.as_ref())
    }

    pub fn serialize(&self, name: &str, value: ConstValue) -> CoercionResult<ConstValue> {
        self.get(name)?
            .serialize(value)
            .inspect_err(|error| log_failure("serialize", name, error))
    }

    pub fn parse_value(&self, name: &str, value: ConstValue) -> CoercionResult<ConstValue> {
        self.get(name)?
            .parse_value(value)
            .inspect_err(|error| log_failure("parse_value", name, error))
    }

    pub fn parse_literal(&self, name: &str, literal: &Value) -> CoercionResult<ConstValue> {
        tracing::debug!(scalar = name, "parsing inline literal {literal}");

        self.get(name)?
            .parse_literal(literal)
            .inspect_err(|error| log_failure("parse_literal", name, error))
    }

    /// SDL declarations of every registered scalar.
    pub fn sdl(&self) -> String {
        let mut sdl = String::new();
        for scalar in self.iter() {
            writeln!(sdl, "{}", scalar.sdl()).ok();
        }
        sdl
    }
}

fn log_failure(hook: &'static str, scalar: &str, error: &CoercionError) {
    tracing::debug!(scalar, hook, code = error.code(), "coercion failed: {error}");
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use serde_json::json;

    use super::*;

    struct UpperCaseMap;

    impl CustomScalar for UpperCaseMap {
        fn name(&self) -> &str {
            "Map"
        }

        fn serialize(&self, value: ConstValue) -> CoercionResult<ConstValue> {
            Ok(value)
        }

        fn parse_value(&self, value: ConstValue) -> CoercionResult<ConstValue> {
            Ok(value)
        }

        fn parse_literal(&self, _literal: &Value) -> CoercionResult<ConstValue> {
            Ok(ConstValue::Null)
        }
    }

    #[test]
    fn builtin_names_keep_registration_order() {
        let registry = ScalarRegistry::builtin();

        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            ["Map", "JSON", "Object", "Long", "Date", "Time", "DateTime"]
        );
    }

    #[test]
    fn dispatches_by_name() {
        let registry = ScalarRegistry::builtin();
        let mixed = ConstValue::from_json(json!({"a": 1, "b": "x"})).unwrap();

        assert_eq!(registry.serialize("Object", mixed.clone()), Ok(mixed.clone()));
        assert_eq!(registry.serialize("JSON", mixed.clone()), Ok(mixed.clone()));
        assert_eq!(
            registry.parse_value("Map", mixed).unwrap_err().code(),
            "HETEROGENEOUS_MAP_VALUES"
        );
    }

    #[test]
    fn literal_parsing_is_rejected_for_json_like_scalars() {
        let registry = ScalarRegistry::builtin();
        let literal = Value::Number(5.into());

        for name in ["Map", "Object", "JSON", "Long"] {
            let error = registry.parse_literal(name, &literal).unwrap_err();
            assert_eq!(error.code(), "LITERAL_PARSING_UNSUPPORTED", "scalar {name}");
        }
    }

    #[test]
    fn unknown_scalars_fail() {
        let registry = ScalarRegistry::builtin();

        assert_eq!(
            registry.serialize("Decimal", ConstValue::Null),
            Err(CoercionError::UnknownScalar("Decimal".to_string()))
        );
        assert!(!registry.contains("Decimal"));
    }

    #[test]
    fn last_registration_wins() {
        let registry = ScalarRegistry::builtin().with(UpperCaseMap);

        assert_eq!(registry.names().count(), 7);
        assert_eq!(
            registry.parse_literal("Map", &Value::Boolean(true)),
            Ok(ConstValue::Null)
        );
    }

    #[test]
    fn ensure_registry_sdl() {
        let registry = ScalarRegistry::new().with(MapScalar).with(LongScalar).with(DateScalar);

        assert_snapshot!(registry.sdl(), @r###"
        """
        map of string to anything
        """
        scalar Map

        scalar Long

        """
        A date string, such as 2007-12-03, compliant with the `full-date` format outlined in section 5.6 of the RFC 3339 profile of the ISO 8601 standard for representation of dates and times using the Gregorian calendar.
        """
        scalar Date @specifiedBy(url: "https://datatracker.ietf.org/doc/html/rfc3339#section-5.6")
        "###);
    }
}
