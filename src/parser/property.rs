//! Header property lines (`KEY = VALUE`).

use crate::error::{Error, Result};
use crate::model::PropertyValue;

/// Separator between a property key and its value.
pub const PROPERTY_SEPARATOR: char = '=';

/// Split a property line into its key and value.
///
/// The line must contain exactly one separator. `line_no` is only used to
/// locate the error.
pub fn parse_property(text: &str, line_no: usize) -> Result<(String, PropertyValue)> {
    let mut pieces = text.trim().split(PROPERTY_SEPARATOR);
    match (pieces.next(), pieces.next(), pieces.next()) {
        (Some(key), Some(value), None) => {
            Ok((key.trim().to_string(), PropertyValue::from_raw(value)))
        }
        _ => Err(Error::MalformedProperty {
            line: line_no,
            text: text.trim_end().to_string(),
        }),
    }
}
