#![allow(unused_crate_dependencies)]

use std::sync::Arc;

use async_graphql::{dynamic::Schema, Request, Variables};
use graphql_scalars::{scalars::DateTimeScalar, ScalarRegistry};
use scalars_server::GraphConfig;
use serde_json::json;

fn schema() -> Schema {
    scalars_server::schema::build(Arc::new(ScalarRegistry::builtin()), &GraphConfig::default()).unwrap()
}

async fn execute(query: &str, variables: serde_json::Value) -> serde_json::Value {
    let request = Request::new(query).variables(Variables::from_json(variables));
    let response = schema().execute(request).await;

    serde_json::to_value(response).unwrap()
}

/// Keeps the parts of the errors that do not depend on the query layout.
fn errors(response: &serde_json::Value) -> serde_json::Value {
    response["errors"]
        .as_array()
        .into_iter()
        .flatten()
        .map(|error| {
            json!({
                "message": error["message"],
                "path": error["path"],
                "code": error["extensions"]["code"],
            })
        })
        .collect()
}

const THINGS: &str = r#"
    query Things($obj: Object!, $json: JSON!, $map: Map!) {
        things(obj: $obj, json: $json, map: $map)
    }
"#;

#[tokio::test]
async fn homogeneous_map_variable_is_kept() {
    let response = execute(
        THINGS,
        json!({
            "obj": {"a": 1, "b": "x"},
            "json": [1, "two", null],
            "map": {"a": 1, "b": 2},
        }),
    )
    .await;

    insta::assert_json_snapshot!(response, @r#"
    {
      "data": {
        "things": {
          "obj": {
            "a": 1,
            "b": "x"
          },
          "json": [
            1,
            "two",
            null
          ],
          "map": {
            "a": 1,
            "b": 2
          }
        }
      }
    }
    "#);
}

#[tokio::test]
async fn heterogeneous_map_variable_is_rejected() {
    let response = execute(
        THINGS,
        json!({
            "obj": {},
            "json": {},
            "map": {"a": 1, "b": "x"},
        }),
    )
    .await;

    assert_eq!(response["data"], json!({"things": null}));
    insta::assert_json_snapshot!(errors(&response), @r#"
    [
      {
        "message": "Invalid value for argument \"map\": all values of a map should have the same type, \"b\" holds string but the first value is number",
        "path": [
          "things"
        ],
        "code": "HETEROGENEOUS_MAP_VALUES"
      }
    ]
    "#);
}

#[tokio::test]
async fn object_variable_skips_homogeneity() {
    let response = execute(
        THINGS,
        json!({
            "obj": {"a": 1, "b": "x"},
            "json": "anything",
            "map": {},
        }),
    )
    .await;

    assert_eq!(
        response["data"]["things"],
        json!({"obj": {"a": 1, "b": "x"}, "json": "anything", "map": {}})
    );
}

#[tokio::test]
async fn list_map_variable_is_rejected() {
    let response = execute(
        THINGS,
        json!({
            "obj": {},
            "json": {},
            "map": [1, 2, 3],
        }),
    )
    .await;

    insta::assert_json_snapshot!(errors(&response), @r#"
    [
      {
        "message": "Invalid value for argument \"map\": keys should be strings, found a list where an object was expected",
        "path": [
          "things"
        ],
        "code": "INVALID_SCALAR_SHAPE"
      }
    ]
    "#);
}

#[tokio::test]
async fn inline_long_literal_is_rejected() {
    let response = execute("{ long(x: 5) }", json!({})).await;

    assert_eq!(response["data"], json!({"long": null}));
    insta::assert_json_snapshot!(errors(&response), @r#"
    [
      {
        "message": "Invalid value for argument \"x\": Long cannot be written as an inline literal, provide it through a variable",
        "path": [
          "long"
        ],
        "code": "LITERAL_PARSING_UNSUPPORTED"
      }
    ]
    "#);
}

#[tokio::test]
async fn inline_map_literal_is_rejected() {
    let response = execute(r#"{ things(obj: {a: 1}, json: 1, map: {a: 1}) }"#, json!({})).await;

    // The first argument read by the resolver fails.
    assert_eq!(errors(&response)[0]["code"], "LITERAL_PARSING_UNSUPPORTED");
    assert_eq!(response["data"], json!({"things": null}));
}

#[tokio::test]
async fn sibling_fields_still_resolve() {
    let response = execute(
        r#"
        query Partial($obj: Object!, $json: JSON!, $map: Map!) {
            a: things(obj: $obj, json: $json, map: $map)
            b: long
        }
        "#,
        json!({"obj": {}, "json": {}, "map": {"a": 1, "b": "x"}}),
    )
    .await;

    assert_eq!(response["data"], json!({"a": null, "b": 10}));
    insta::assert_json_snapshot!(errors(&response), @r#"
    [
      {
        "message": "Invalid value for argument \"map\": all values of a map should have the same type, \"b\" holds string but the first value is number",
        "path": [
          "a"
        ],
        "code": "HETEROGENEOUS_MAP_VALUES"
      }
    ]
    "#);
}

#[tokio::test]
async fn long_variables() {
    let query = "query Long($x: Long!) { long(x: $x) }";

    let response = execute(query, json!({"x": 123})).await;
    assert_eq!(response["data"], json!({"long": 123}));

    let response = execute(query, json!({"x": 1.5})).await;
    assert_eq!(errors(&response)[0]["code"], "NOT_AN_INTEGER");

    let response = execute(query, json!({"x": "123"})).await;
    assert_eq!(errors(&response)[0]["code"], "NOT_A_NUMBER");
}

#[tokio::test]
async fn argument_defaults_are_coerced_as_values() {
    let response = execute("{ long complex ping }", json!({})).await;

    insta::assert_json_snapshot!(response, @r#"
    {
      "data": {
        "long": 10,
        "complex": 1,
        "ping": 42
      }
    }
    "#);
}

#[tokio::test]
async fn input_object_fields_through_variables() {
    let response = execute(
        "query Complex($c: Complex!) { complex(c: $c) }",
        json!({"c": {"real": 7, "imaginary": 0}}),
    )
    .await;
    assert_eq!(response["data"], json!({"complex": 7}));

    let response = execute(
        "query Complex($real: Long) { complex(c: {real: $real, imaginary: null}) }",
        json!({"real": 4}),
    )
    .await;
    assert_eq!(response["data"], json!({"complex": 4}));

    let response = execute(
        "query Complex($c: Complex!) { complex(c: $c) }",
        json!({"c": {"real": 1.5}}),
    )
    .await;
    insta::assert_json_snapshot!(errors(&response), @r#"
    [
      {
        "message": "Invalid value for argument \"c.real\": 1.5 is not a long",
        "path": [
          "complex"
        ],
        "code": "NOT_AN_INTEGER"
      }
    ]
    "#);
}

#[tokio::test]
async fn input_object_literal_fields_are_rejected() {
    let response = execute("{ complex(c: {real: 3}) }", json!({})).await;

    assert_eq!(response["data"], json!({"complex": null}));
    assert_eq!(
        errors(&response)[0]["message"],
        "Invalid value for argument \"c.real\": Long cannot be written as an inline literal, provide it through a variable"
    );
}

#[tokio::test]
async fn calendar_variables_are_normalized() {
    let response = execute(
        "query Calendar($d: Date!, $t: Time!) { date(value: $d) time(value: $t) }",
        json!({"d": "2007-12-03", "t": "10:15:30+01:00"}),
    )
    .await;

    insta::assert_json_snapshot!(response, @r#"
    {
      "data": {
        "date": "2007-12-03",
        "time": "09:15:30.000Z"
      }
    }
    "#);
}

#[tokio::test]
async fn calendar_literals_are_parsed() {
    let response = execute(r#"{ date(value: "2007-12-03") time(value: "23:30:00-02:00") }"#, json!({})).await;

    assert_eq!(response["data"], json!({"date": "2007-12-03", "time": "01:30:00.000Z"}));
    assert!(response.get("errors").is_none(), "{response}");
}

#[tokio::test]
async fn invalid_calendar_values_are_rejected() {
    let response = execute(
        "query Calendar($d: Date!) { date(value: $d) time(value: \"25:00:00Z\") }",
        json!({"d": "2023-02-29"}),
    )
    .await;

    assert_eq!(response["data"], json!({"date": null, "time": null}));

    let codes = errors(&response)
        .as_array()
        .unwrap()
        .iter()
        .map(|error| (error["path"][0].clone(), error["code"].clone()))
        .collect::<Vec<_>>();

    assert!(codes.contains(&(json!("date"), json!("INVALID_DATE"))), "{codes:?}");
    assert!(codes.contains(&(json!("time"), json!("INVALID_TIME"))), "{codes:?}");
}

#[tokio::test]
async fn complex_input_object_is_declared_with_long_fields() {
    let response = execute(
        r#"{ __type(name: "Complex") { kind inputFields { name type { name } } } }"#,
        json!({}),
    )
    .await;

    insta::assert_json_snapshot!(response["data"], @r#"
    {
      "__type": {
        "kind": "INPUT_OBJECT",
        "inputFields": [
          {
            "name": "real",
            "type": {
              "name": "Long"
            }
          },
          {
            "name": "imaginary",
            "type": {
              "name": "Long"
            }
          }
        ]
      }
    }
    "#);
}

#[tokio::test]
async fn map_output_is_serialized() {
    let response = execute("{ books { title author } }", json!({})).await;

    insta::assert_json_snapshot!(response, @r#"
    {
      "data": {
        "books": [
          {
            "title": "Harry Potter and the Chamber of Secrets",
            "author": {
              "name": "J.K. Rowling",
              "country": "United Kingdom"
            }
          },
          {
            "title": "Jurassic Park",
            "author": {
              "name": "Michael Crichton",
              "country": "United States"
            }
          }
        ]
      }
    }
    "#);
}

#[tokio::test]
async fn now_is_a_utc_date_time() {
    let response = execute("{ now color }", json!({})).await;

    let now = response["data"]["now"].as_str().unwrap();
    assert!(DateTimeScalar::parse_str(now).is_ok(), "{now}");
    assert!(now.ends_with('Z'), "{now}");
    assert_eq!(response["data"]["color"], "RED");
}

#[tokio::test]
async fn scalars_are_described_in_introspection() {
    let response = execute(
        r#"{
            map: __type(name: "Map") { kind description }
            date: __type(name: "Date") { kind specifiedByURL }
            time: __type(name: "Time") { kind }
        }"#,
        json!({}),
    )
    .await;

    insta::assert_json_snapshot!(response, @r#"
    {
      "data": {
        "map": {
          "kind": "SCALAR",
          "description": "map of string to anything"
        },
        "date": {
          "kind": "SCALAR",
          "specifiedByURL": "https://datatracker.ietf.org/doc/html/rfc3339#section-5.6"
        },
        "time": {
          "kind": "SCALAR"
        }
      }
    }
    "#);
}

#[tokio::test]
async fn introspection_can_be_disabled() {
    let config = GraphConfig {
        introspection: false,
        ..Default::default()
    };
    let schema = scalars_server::schema::build(Arc::new(ScalarRegistry::builtin()), &config).unwrap();

    let response = schema.execute(r#"{ __type(name: "Map") { kind } }"#).await;
    let response = serde_json::to_value(response).unwrap();

    assert_ne!(response["data"]["__type"]["kind"], "SCALAR");
}

#[test]
fn schema_requires_the_scalars_it_references() {
    let registry = ScalarRegistry::new().with(graphql_scalars::scalars::MapScalar);

    let error = scalars_server::schema::build(Arc::new(registry), &GraphConfig::default()).unwrap_err();

    assert!(matches!(error, scalars_server::Error::SchemaValidationError(_)));
}
