//! Single-token command parsing.
//!
//! A token is one of:
//! - `end` - line break
//! - `space-<number>` - horizontal gap
//! - `block[.<name>-<value>]*` - one or more blocks
//!
//! Anything else becomes a `Command::ParseError`.

use log::trace;

use crate::types::{BlockSpec, Command};

use super::error::ParseError;
use super::property::{parse_property, positive_size};

const SPACE_PREFIX: &str = "space-";

/// Parse one whitespace-free token into a command.
///
/// Returns `None` for a token that is empty after trimming. Errors never
/// escape: a bad token becomes `Command::ParseError`.
pub fn parse_token(token: &str) -> Option<Command> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    let command = match parse_command(token) {
        Ok(command) => command,
        Err(err) => Command::ParseError {
            message: err.to_string(),
        },
    };
    trace!("token {:?} -> {:?}", token, command);

    Some(command)
}

fn parse_command(token: &str) -> Result<Command, ParseError> {
    if let Some(result) = parse_space(token) {
        return result;
    }

    let mut segments = token.split('.');
    let keyword = segments.next().unwrap_or_default();

    match keyword {
        "end" => Ok(Command::Newline),
        "block" => {
            let mut spec = BlockSpec::default();
            for segment in segments {
                parse_property(segment)?.apply(&mut spec);
            }
            Ok(Command::Block(spec))
        }
        _ => Err(ParseError::UnknownCommand(keyword.to_string())),
    }
}

/// Try the `space-<number>` form.
///
/// Only a token that splits on `-` into exactly `space` and one value is
/// handled here. Other tokens that merely start with `space-` (such as
/// `space-4-5`) return `None` and go through keyword parsing, where they
/// end up as unknown commands.
fn parse_space(token: &str) -> Option<Result<Command, ParseError>> {
    if !token.starts_with(SPACE_PREFIX) {
        return None;
    }

    let parts: Vec<&str> = token.split('-').collect();
    match parts.as_slice() {
        ["space", value] => Some(
            positive_size(value)
                .map(|size| Command::Space { size })
                .ok_or_else(|| ParseError::InvalidSpaceValue(value.to_string())),
        ),
        _ => None,
    }
}
