//! Token-level parse errors.
//!
//! None of these abort a run. Each one turns the offending token into a
//! single `Command::ParseError` whose message is the `Display` text below.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid property syntax: {0}")]
    InvalidPropertySyntax(String),

    #[error("invalid size value: {0}")]
    InvalidSizeValue(String),

    #[error("invalid repeat value: {0}")]
    InvalidRepeatValue(String),

    #[error("unknown color: {0}")]
    UnknownColour(String),

    #[error("unknown property: {0}")]
    UnknownProperty(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("invalid space value: {0}")]
    InvalidSpaceValue(String),
}
