//! Name derivation and scalar mapping.
//!
//! Member property names are the text after the first `.` of a
//! dot-qualified member name. Cube-level identifiers are derived from
//! titles with a pascal-case fold. Scalar kinds map to TypeScript
//! primitives, with `time` represented textually.

use crate::decl::Primitive;
use cube_records_core::{Error, Result, ScalarType};

/// Derives the property name from a dot-qualified member name.
///
/// Splits on the *first* dot only: a name with more than one dot keeps
/// everything after the first dot as a single property name.
///
/// # Errors
///
/// Returns [`Error::MalformedMemberName`] for a name without a dot.
///
/// # Examples
///
/// ```
/// use cube_records_codegen::member_property_name;
///
/// assert_eq!(member_property_name("Orders.count").unwrap(), "count");
/// assert_eq!(member_property_name("Schema.Orders.count").unwrap(), "Orders.count");
/// assert!(member_property_name("count").is_err());
/// ```
pub fn member_property_name(name: &str) -> Result<&str> {
    name.split_once('.')
        .map(|(_, rest)| rest)
        .ok_or_else(|| Error::MalformedMemberName {
            name: name.to_string(),
        })
}

/// Formats the given string in pascal-case fashion.
///
/// Splits on whitespace, hyphen, underscore, or period; lowercases each
/// segment; capitalizes its first character; concatenates with no
/// separator.
///
/// # Examples
///
/// ```
/// use cube_records_codegen::pascal_case;
///
/// assert_eq!(pascal_case("hello world"), "HelloWorld");
/// assert_eq!(pascal_case("va va boom"), "VaVaBoom");
/// assert_eq!(pascal_case("order_items"), "OrderItems");
/// ```
#[must_use]
pub fn pascal_case(input: &str) -> String {
    input
        .split(|c: char| c.is_whitespace() || matches!(c, '-' | '_' | '.'))
        .filter(|part| !part.is_empty())
        .map(|part| {
            let lower = part.to_lowercase();
            let mut chars = lower.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect()
}

/// Maps a scalar kind to its TypeScript primitive.
///
/// Temporal values are represented textually (`time` maps to `string`);
/// the original kind is preserved separately via the `__cubetype` tag so
/// consumers can distinguish a textual dimension from a true temporal one.
///
/// # Errors
///
/// Returns [`Error::UnknownScalarType`], naming the offending kind, for
/// anything outside `{number, string, time, boolean}`.
///
/// # Examples
///
/// ```
/// use cube_records_codegen::{Primitive, ts_primitive};
/// use cube_records_core::ScalarType;
///
/// assert_eq!(ts_primitive(&ScalarType::Time).unwrap(), Primitive::String);
/// assert!(ts_primitive(&ScalarType::Other("geo".to_string())).is_err());
/// ```
pub fn ts_primitive(kind: &ScalarType) -> Result<Primitive> {
    match kind {
        ScalarType::Number => Ok(Primitive::Number),
        ScalarType::String | ScalarType::Time => Ok(Primitive::String),
        ScalarType::Boolean => Ok(Primitive::Boolean),
        ScalarType::Other(kind) => Err(Error::UnknownScalarType { kind: kind.clone() }),
    }
}
