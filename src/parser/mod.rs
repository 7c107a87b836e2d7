//! Parser for block scripts.
//!
//! # Script Structure
//!
//! A script is a list of lines. Each line holds space-separated tokens:
//! - `block`, optionally followed by `.size-N`, `.color-NAME`, `.repeat-N`
//! - `space-N` for a horizontal gap
//! - `end` for a line break
//!
//! Lines starting with `#` are comments. Every token is parsed on its own;
//! a malformed token becomes a `Command::ParseError` in its original
//! position and never affects its neighbours.
//!
//! # Usage
//!
//! ```
//! use blocks::parser::parse_script;
//!
//! let commands = parse_script("# row\nblock.color-red.repeat-2 space-1 block\nend");
//! assert_eq!(commands.len(), 4);
//! ```

mod command;
mod error;
mod property;
mod script;
pub mod span;

pub use command::parse_token;
pub use error::ParseError;
pub use property::{parse_property, Property};
pub use script::{parse_script, parse_script_spanned};
pub use span::{Location, Span, Spanned};
