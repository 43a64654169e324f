use std::fmt;

use async_graphql_value::ConstValue;

/// Coarse classification of a value, computed once and shared by every check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    List,
    Object,
}

impl ValueKind {
    pub fn of(value: &ConstValue) -> Self {
        match value {
            ConstValue::Null => ValueKind::Null,
            ConstValue::Boolean(_) => ValueKind::Boolean,
            ConstValue::Number(_) => ValueKind::Number,
            // Enum values reach the wire as plain strings.
            ConstValue::String(_) | ConstValue::Enum(_) => ValueKind::String,
            ConstValue::List(_) | ConstValue::Binary(_) => ValueKind::List,
            ConstValue::Object(_) => ValueKind::Object,
        }
    }

    /// The tag used when checking that map values share a type.
    ///
    /// `null` is tagged as an object, the same way a JSON runtime reports it,
    /// so `{"a": null, "b": {}}` is a homogeneous map.
    pub fn type_tag(self) -> &'static str {
        match self {
            ValueKind::Null | ValueKind::Object => "object",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::List => "array",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "a boolean",
            ValueKind::Number => "a number",
            ValueKind::String => "a string",
            ValueKind::List => "a list",
            ValueKind::Object => "an object",
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case(json!(null), ValueKind::Null, "object")]
    #[case(json!(true), ValueKind::Boolean, "boolean")]
    #[case(json!(1.5), ValueKind::Number, "number")]
    #[case(json!("x"), ValueKind::String, "string")]
    #[case(json!([1, 2]), ValueKind::List, "array")]
    #[case(json!({"a": 1}), ValueKind::Object, "object")]
    fn classifies_json_values(#[case] input: serde_json::Value, #[case] kind: ValueKind, #[case] tag: &str) {
        let value = ConstValue::from_json(input).unwrap();

        assert_eq!(ValueKind::of(&value), kind);
        assert_eq!(kind.type_tag(), tag);
    }

    #[test]
    fn enum_values_are_strings() {
        let value = ConstValue::Enum(async_graphql_value::Name::new("RED"));
        assert_eq!(ValueKind::of(&value), ValueKind::String);
    }
}
