//! Named colour lookup.
//!
//! Scripts refer to colours by name (`block.color-red`). Names are matched
//! case-insensitively against a fixed table; synonyms share one value.

use palette::named;
use palette::Srgb;

use super::Colour;

/// Colour used by a `block` with no `color` property.
pub const DEFAULT_COLOUR: Colour = Colour::BLACK;

/// Every recognised colour name, in display order.
pub const NAMED_COLOURS: &[(&str, Srgb<u8>)] = &[
    ("red", named::RED),
    ("orange", named::ORANGE),
    ("yellow", named::YELLOW),
    ("green", named::GREEN),
    ("blue", named::BLUE),
    ("violet", named::PURPLE),
    ("purple", named::PURPLE),
    ("magenta", named::MAGENTA),
    ("pink", named::MAGENTA),
    ("brown", named::BROWN),
    ("gray", named::GRAY),
    ("grey", named::GRAY),
];

/// Resolve a colour name, ignoring case.
///
/// Returns `None` for names outside the table; the caller decides how to
/// report it (and should quote the name as the user wrote it).
pub fn resolve_colour(name: &str) -> Option<Colour> {
    NAMED_COLOURS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|&(_, value)| Colour::from(value))
}
