use std::fmt::Write;

use async_graphql_value::{ConstValue, Value};

use crate::CoercionResult;

mod date;
pub use date::DateScalar;
mod datetime;
pub use datetime::DateTimeScalar;
mod json;
pub use json::JSONScalar;
mod long;
pub use long::LongScalar;
mod map;
pub use map::MapScalar;
mod object;
pub use object::ObjectScalar;
mod time;
pub use self::time::TimeScalar;

/// `CustomScalar` is implemented for every scalar the registry can hand to the engine.
///
/// The three coercion hooks mirror the custom scalar contract of GraphQL engines:
/// `serialize` runs on resolver output, `parse_value` on variable input and
/// `parse_literal` on values written inline in the document.
pub trait CustomScalar: Send + Sync {
    /// Name of the scalar, as referenced in the schema
    fn name(&self) -> &str;

    /// Description of the scalar
    fn description(&self) -> Option<&str> {
        None
    }

    /// Url to describe the scalar if needed
    fn specified_by(&self) -> Option<&str> {
        None
    }

    /// Result coercion
    fn serialize(&self, value: ConstValue) -> CoercionResult<ConstValue>;

    /// Input coercion of a value provided through variables
    fn parse_value(&self, value: ConstValue) -> CoercionResult<ConstValue>;

    /// Input coercion of a value written directly in the query document
    fn parse_literal(&self, literal: &Value) -> CoercionResult<ConstValue>;

    /// Write the scalar into SDL
    fn sdl(&self) -> String {
        let mut sdl = String::new();
        if let Some(desc) = self.description() {
            writeln!(sdl, "\"\"\"\n{desc}\n\"\"\"").ok();
        }
        let directive = self
            .specified_by()
            .map(|url| format!(" @specifiedBy(url: \"{url}\")"))
            .unwrap_or_default();
        writeln!(sdl, "scalar {}{directive}", self.name()).ok();
        sdl
    }
}
