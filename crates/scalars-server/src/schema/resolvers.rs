use async_graphql::{
    dynamic::{FieldFuture, FieldValue, ResolverContext},
    Name, Value,
};
use chrono::Utc;
use graphql_scalars::scalars::{
    DateScalar, DateTimeScalar, JSONScalar, LongScalar, MapScalar, ObjectScalar, TimeScalar,
};

use super::coercion::{self, InputType};

/// The `Complex` input object, shared by the schema declaration and the resolver.
pub(super) const COMPLEX: InputType = InputType::Object {
    name: "Complex",
    fields: &[
        ("real", InputType::Scalar(LongScalar::NAME)),
        ("imaginary", InputType::Scalar(LongScalar::NAME)),
    ],
};

#[derive(Clone, Copy)]
struct Book {
    title: &'static str,
    author: &'static [(&'static str, &'static str)],
}

const BOOKS: &[Book] = &[
    Book {
        title: "Harry Potter and the Chamber of Secrets",
        author: &[("name", "J.K. Rowling"), ("country", "United Kingdom")],
    },
    Book {
        title: "Jurassic Park",
        author: &[("name", "Michael Crichton"), ("country", "United States")],
    },
];

/// Echoes the three JSON-like arguments back as a single object.
pub(super) fn things(ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    coercion::resolve(ctx, |ctx| {
        let obj = coercion::argument(ctx, "obj", InputType::Scalar(ObjectScalar::NAME))?;
        let json = coercion::argument(ctx, "json", InputType::Scalar(JSONScalar::NAME))?;
        let map = coercion::argument(ctx, "map", InputType::Scalar(MapScalar::NAME))?;

        let things = [("obj", obj), ("json", json), ("map", map)]
            .into_iter()
            .map(|(name, value)| (Name::new(name), value))
            .collect();

        coercion::output(ctx, ObjectScalar::NAME, Value::Object(things))
    })
}

pub(super) fn long(ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    coercion::resolve(ctx, |ctx| {
        let x = coercion::argument(ctx, "x", InputType::Scalar(LongScalar::NAME))?;
        coercion::output(ctx, LongScalar::NAME, x)
    })
}

/// Returns the real part of the complex number.
pub(super) fn complex(ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    coercion::resolve(ctx, |ctx| {
        let real = match coercion::argument(ctx, "c", COMPLEX)? {
            Value::Object(mut fields) => fields.shift_remove("real").unwrap_or(Value::Null),
            _ => Value::Null,
        };

        coercion::output(ctx, LongScalar::NAME, real)
    })
}

pub(super) fn date(ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    coercion::resolve(ctx, |ctx| {
        let value = coercion::argument(ctx, "value", InputType::Scalar(DateScalar::NAME))?;
        coercion::output(ctx, DateScalar::NAME, value)
    })
}

/// Returns the time, normalized to UTC by input coercion.
pub(super) fn time(ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    coercion::resolve(ctx, |ctx| {
        let value = coercion::argument(ctx, "value", InputType::Scalar(TimeScalar::NAME))?;
        coercion::output(ctx, TimeScalar::NAME, value)
    })
}

pub(super) fn now(ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    coercion::resolve(ctx, |ctx| {
        let now = Value::String(DateTimeScalar::format(Utc::now()));
        coercion::output(ctx, DateTimeScalar::NAME, now)
    })
}

pub(super) fn color(_: ResolverContext<'_>) -> FieldFuture<'_> {
    FieldFuture::from_value(Some(Value::Enum(Name::new("RED"))))
}

pub(super) fn ping(ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    FieldFuture::new(async move {
        let x = ctx.args.try_get("x")?.i64()?;
        Ok(Some(Value::from(x)))
    })
}

pub(super) fn books(_: ResolverContext<'_>) -> FieldFuture<'_> {
    FieldFuture::new(async move {
        let books = BOOKS.iter().map(|book| FieldValue::owned_any(*book));
        Ok(Some(FieldValue::list(books)))
    })
}

pub(super) fn book_title(ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    FieldFuture::new(async move {
        let book = ctx.parent_value.try_downcast_ref::<Book>()?;
        Ok(Some(Value::from(book.title)))
    })
}

pub(super) fn book_author(ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    coercion::resolve(ctx, |ctx| {
        let book = ctx.parent_value.try_downcast_ref::<Book>()?;

        let author = book
            .author
            .iter()
            .map(|(key, value)| (Name::new(key), Value::from(*value)))
            .collect();

        coercion::output(ctx, MapScalar::NAME, Value::Object(author))
    })
}
