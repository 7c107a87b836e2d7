//! Core domain types for blocks.
//!
//! - `Colour` - RGBA colour values
//! - `Command` - A parsed script token
//! - named colour lookup used by `block.color-<name>`

mod colour;
mod command;
mod named;

pub use colour::Colour;
pub use command::{BlockSpec, Command};
pub use named::{resolve_colour, DEFAULT_COLOUR, NAMED_COLOURS};
