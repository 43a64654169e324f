mod coercion;
mod resolvers;

use std::sync::Arc;

use async_graphql::{
    dynamic::{Enum, Field, InputObject, InputValue, Object, Scalar, Schema, TypeRef},
    value,
};
use graphql_scalars::{
    scalars::{DateScalar, DateTimeScalar, JSONScalar, LongScalar, MapScalar, ObjectScalar, TimeScalar},
    ScalarRegistry,
};

use self::coercion::InputType;
use crate::GraphConfig;

/// Builds the executable schema.
///
/// Every scalar of the registry is declared in the schema, and the registry is
/// attached as schema data so resolvers can run the coercion hooks.
pub fn build(registry: Arc<ScalarRegistry>, config: &GraphConfig) -> crate::Result<Schema> {
    let query = Object::new("Query")
        .field(
            Field::new("things", TypeRef::named(ObjectScalar::NAME), resolvers::things)
                .argument(InputValue::new("obj", TypeRef::named_nn(ObjectScalar::NAME)))
                .argument(InputValue::new("json", TypeRef::named_nn(JSONScalar::NAME)))
                .argument(InputValue::new("map", TypeRef::named_nn(MapScalar::NAME))),
        )
        .field(
            Field::new("long", TypeRef::named(LongScalar::NAME), resolvers::long)
                .argument(InputValue::new("x", TypeRef::named_nn(LongScalar::NAME)).default_value(10)),
        )
        .field(
            Field::new("complex", TypeRef::named(LongScalar::NAME), resolvers::complex).argument(
                InputValue::new("c", TypeRef::named_nn(resolvers::COMPLEX.name()))
                    .default_value(value!({"real": 1, "imaginary": 2})),
            ),
        )
        .field(
            Field::new("date", TypeRef::named(DateScalar::NAME), resolvers::date)
                .argument(InputValue::new("value", TypeRef::named_nn(DateScalar::NAME))),
        )
        .field(
            Field::new("time", TypeRef::named(TimeScalar::NAME), resolvers::time)
                .argument(InputValue::new("value", TypeRef::named_nn(TimeScalar::NAME))),
        )
        .field(Field::new("now", TypeRef::named(DateTimeScalar::NAME), resolvers::now))
        .field(Field::new("color", TypeRef::named("Color"), resolvers::color))
        .field(
            Field::new("ping", TypeRef::named(TypeRef::INT), resolvers::ping)
                .argument(InputValue::new("x", TypeRef::named_nn(TypeRef::INT)).default_value(42)),
        )
        .field(Field::new("books", TypeRef::named_nn_list_nn("Book"), resolvers::books));

    let book = Object::new("Book")
        .field(Field::new("title", TypeRef::named(TypeRef::STRING), resolvers::book_title))
        .field(Field::new("author", TypeRef::named(MapScalar::NAME), resolvers::book_author));

    let complex = input_object(resolvers::COMPLEX);

    let color = Enum::new("Color").item("RED").item("BLUE");

    let mut builder = Schema::build(query.type_name(), None, None)
        .register(query)
        .register(book)
        .register(complex)
        .register(color)
        .data(registry.clone());

    for scalar in registry.iter() {
        let mut definition = Scalar::new(scalar.name());

        if let Some(description) = scalar.description() {
            definition = definition.description(description);
        }

        if let Some(url) = scalar.specified_by() {
            definition = definition.specified_by_url(url);
        }

        builder = builder.register(definition);
    }

    if !config.introspection {
        builder = builder.disable_introspection();
    }

    builder
        .finish()
        .map_err(|error| crate::Error::SchemaValidationError(error.0))
}

/// Declares an input object from the same table the resolvers coerce with.
fn input_object(ty: InputType) -> InputObject {
    let fields: &[(&str, InputType)] = match ty {
        InputType::Object { fields, .. } => fields,
        InputType::Builtin(_) | InputType::Scalar(_) => &[],
    };

    fields
        .iter()
        .fold(InputObject::new(ty.name()), |object, (field, field_ty)| {
            object.field(InputValue::new(*field, field_ty.type_ref()))
        })
}
