//! Parsed script commands.

use super::named::DEFAULT_COLOUR;
use super::Colour;

/// Fields of a `block` command.
///
/// `size` is always strictly positive and `repeat` at least one; the
/// parser never builds a spec that breaks either rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockSpec {
    pub size: f64,
    pub colour: Colour,
    pub repeat: u32,
}

impl Default for BlockSpec {
    fn default() -> Self {
        Self {
            size: 1.0,
            colour: DEFAULT_COLOUR,
            repeat: 1,
        }
    }
}

/// A single parsed token, ready for execution.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Draw `repeat` blocks of the given size and colour.
    Block(BlockSpec),
    /// Horizontal gap of the given width.
    Space { size: f64 },
    /// Start a new line.
    Newline,
    /// The token could not be parsed; `message` describes why.
    ParseError { message: String },
}

impl Command {
    pub fn is_error(&self) -> bool {
        matches!(self, Command::ParseError { .. })
    }
}
