//! Bridges the scalar registry into the dynamic resolvers.
//!
//! The engine substitutes variables before resolvers run, so the raw argument
//! from the document is inspected to tell values that came from variables
//! (input coercion) apart from values written inline (literal coercion).

use std::sync::Arc;

use async_graphql::{
    dynamic::{FieldFuture, FieldValue, ResolverContext, TypeRef},
    ErrorExtensions, Value,
};
use graphql_scalars::{CoercionError, ScalarRegistry, Value as Literal};

/// The type of an input position, as far as custom scalars are concerned.
#[derive(Debug, Clone, Copy)]
pub(crate) enum InputType {
    /// Built-in GraphQL types, left to the engine.
    Builtin(&'static str),
    Scalar(&'static str),
    Object {
        name: &'static str,
        fields: &'static [(&'static str, InputType)],
    },
}

impl InputType {
    pub(crate) fn name(self) -> &'static str {
        match self {
            InputType::Builtin(name) | InputType::Scalar(name) | InputType::Object { name, .. } => name,
        }
    }

    /// Nullable reference to the type, for schema declarations.
    pub(crate) fn type_ref(self) -> TypeRef {
        TypeRef::named(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid value for argument \"{path}\": {source}")]
pub(crate) struct InvalidArgument {
    path: String,
    #[source]
    source: CoercionError,
}

impl InvalidArgument {
    fn into_graphql_error(self) -> async_graphql::Error {
        with_code(self.to_string(), self.source.code())
    }
}

fn with_code(message: String, code: &'static str) -> async_graphql::Error {
    async_graphql::Error::new(message).extend_with(|_, extensions| extensions.set("code", code))
}

/// Runs a resolver whose failures are field errors.
///
/// The error is recorded with the path of the field and the field resolves to
/// null, so sibling fields of the operation still produce data.
pub(crate) fn resolve<'a, F>(ctx: ResolverContext<'a>, resolver: F) -> FieldFuture<'a>
where
    F: FnOnce(&ResolverContext<'a>) -> async_graphql::Result<Option<FieldValue<'a>>> + Send + 'a,
{
    FieldFuture::new(async move {
        match resolver(&ctx) {
            Ok(value) => Ok(value),
            Err(error) => {
                let error = ctx.ctx.set_error_path(error.into_server_error(ctx.ctx.item.pos));
                ctx.ctx.add_error(error);

                Ok(None)
            }
        }
    })
}

pub(crate) fn registry<'a>(ctx: &ResolverContext<'a>) -> async_graphql::Result<&'a ScalarRegistry> {
    ctx.ctx.data::<Arc<ScalarRegistry>>().map(|registry| registry.as_ref())
}

/// Reads and coerces an argument of the current field.
///
/// Values bound to a variable, or taken from the argument default, go through
/// `parse_value`. Values written in the document go through `parse_literal`.
pub(crate) fn argument(ctx: &ResolverContext<'_>, name: &str, ty: InputType) -> async_graphql::Result<Value> {
    let registry = registry(ctx)?;
    let literal = ctx.ctx.item.node.get_argument(name).map(|argument| &argument.node);
    let resolved = ctx
        .args
        .get(name)
        .map(|accessor| accessor.as_value().clone())
        .unwrap_or(Value::Null);

    coerce(registry, ty, literal, resolved, name).map_err(InvalidArgument::into_graphql_error)
}

fn coerce(
    registry: &ScalarRegistry,
    ty: InputType,
    literal: Option<&Literal>,
    resolved: Value,
    path: &str,
) -> Result<Value, InvalidArgument> {
    // Nullability belongs to the engine, scalars never see null.
    if matches!(literal, Some(Literal::Null)) || resolved == Value::Null {
        return Ok(Value::Null);
    }

    let invalid = |source| InvalidArgument {
        path: path.to_string(),
        source,
    };

    match ty {
        InputType::Builtin(_) => Ok(resolved),
        InputType::Scalar(scalar) => match literal {
            None | Some(Literal::Variable(_)) => registry.parse_value(scalar, resolved).map_err(invalid),
            Some(literal) => registry.parse_literal(scalar, literal).map_err(invalid),
        },
        InputType::Object { fields, .. } => {
            let Value::Object(mut values) = resolved else {
                return Ok(resolved);
            };

            let literal_fields = match literal {
                Some(Literal::Object(literal_fields)) => Some(literal_fields),
                _ => None,
            };

            for (field, field_ty) in fields {
                let Some(slot) = values.get_mut(*field) else {
                    continue;
                };

                let field_literal = literal_fields.and_then(|literal_fields| literal_fields.get(*field));
                let value = std::mem::replace(slot, Value::Null);

                *slot = coerce(registry, *field_ty, field_literal, value, &format!("{path}.{field}"))?;
            }

            Ok(Value::Object(values))
        }
    }
}

/// Runs result coercion on a resolver output typed with a custom scalar.
pub(crate) fn output<'a>(
    ctx: &ResolverContext<'_>,
    scalar: &str,
    value: Value,
) -> async_graphql::Result<Option<FieldValue<'a>>> {
    if value == Value::Null {
        return Ok(None);
    }

    registry(ctx)?
        .serialize(scalar, value)
        .map(|value| Some(FieldValue::value(value)))
        .map_err(|error| with_code(error.to_string(), error.code()))
}
