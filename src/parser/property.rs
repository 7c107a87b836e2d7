//! `name-value` property segments of a `block` token.

use crate::types::{resolve_colour, BlockSpec, Colour};

use super::error::ParseError;

/// A validated block property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Property {
    Size(f64),
    Colour(Colour),
    Repeat(u32),
}

impl Property {
    /// Write this property into `spec`, replacing any earlier value.
    ///
    /// Repeated properties are last-write-wins: `block.size-2.size-3` has
    /// size 3 and is not an error.
    pub fn apply(self, spec: &mut BlockSpec) {
        match self {
            Property::Size(size) => spec.size = size,
            Property::Colour(colour) => spec.colour = colour,
            Property::Repeat(repeat) => spec.repeat = repeat,
        }
    }
}

/// Parse one property segment such as `size-2` or `color-red`.
///
/// The segment must split on `-` into exactly a name and a value, so
/// negative numbers (`size--1`) are a syntax error rather than a bad value.
/// Property names and colour values ignore case; diagnostics quote the
/// text as written.
pub fn parse_property(segment: &str) -> Result<Property, ParseError> {
    let parts: Vec<&str> = segment.split('-').collect();
    let [name, value] = parts.as_slice() else {
        return Err(ParseError::InvalidPropertySyntax(segment.to_string()));
    };

    match name.to_ascii_lowercase().as_str() {
        "size" => positive_size(value)
            .map(Property::Size)
            .ok_or_else(|| ParseError::InvalidSizeValue(value.to_string())),
        "color" => resolve_colour(value)
            .map(Property::Colour)
            .ok_or_else(|| ParseError::UnknownColour(value.to_string())),
        "repeat" => match value.parse::<u32>() {
            Ok(n) if n > 0 => Ok(Property::Repeat(n)),
            _ => Err(ParseError::InvalidRepeatValue(value.to_string())),
        },
        _ => Err(ParseError::UnknownProperty(name.to_string())),
    }
}

/// Parse a strictly positive, finite size.
pub(crate) fn positive_size(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|size| size.is_finite() && *size > 0.0)
}
