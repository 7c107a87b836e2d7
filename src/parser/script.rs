//! Whole-script parsing.
//!
//! Scripts are read line by line. Blank lines and lines starting with `#`
//! are skipped; every other line is split on spaces into tokens which are
//! parsed left to right. Output order is line order, then token order.

use log::debug;

use crate::types::Command;

use super::command::parse_token;
use super::span::{Location, Span, Spanned};

/// Parse a script into commands, in source order.
pub fn parse_script(source: &str) -> Vec<Command> {
    parse_script_spanned(source)
        .into_iter()
        .map(|spanned| spanned.value)
        .collect()
}

/// Parse a script, keeping the source span of the token behind each command.
///
/// Positions are tracked while walking, so the cost is linear in the
/// length of the script.
pub fn parse_script_spanned(source: &str) -> Vec<Spanned<Command>> {
    let mut commands = Vec::new();
    let mut line_offset = 0;

    for (index, line) in source.split('\n').enumerate() {
        let line_start = Location::line_start(line_offset, line_number(index));
        line_offset += line.len() + 1;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let indent = &line[..line.len() - line.trim_start().len()];
        let mut at = line_start.advance(indent);

        for raw in trimmed.split(' ') {
            let token_start = at;
            at = at.advance(raw).advance(" ");

            let Some(command) = parse_token(raw) else {
                continue;
            };

            let body = raw.trim_start();
            let start = token_start.advance(&raw[..raw.len() - body.len()]);
            commands.push(Spanned::new(command, Span::new(start, body.trim_end().len())));
        }
    }

    debug!(
        "parsed {} command(s), {} error(s)",
        commands.len(),
        commands.iter().filter(|c| c.value.is_error()).count()
    );

    commands
}

fn line_number(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BlockSpec;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        assert!(parse_script("").is_empty());
        assert!(parse_script("   \n\t\n").is_empty());
        assert!(parse_script("# comment text").is_empty());
        assert!(parse_script("   # indented comment").is_empty());
    }

    #[test]
    fn test_tokens_in_source_order() {
        let commands = parse_script("block end\nspace-2 block");
        assert_eq!(
            commands,
            vec![
                Command::Block(BlockSpec::default()),
                Command::Newline,
                Command::Space { size: 2.0 },
                Command::Block(BlockSpec::default()),
            ]
        );
    }

    #[test]
    fn test_repeated_spaces_collapse() {
        assert_eq!(
            parse_script("  block     end  "),
            vec![Command::Block(BlockSpec::default()), Command::Newline]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(
            parse_script("block\r\nend\r\n"),
            vec![Command::Block(BlockSpec::default()), Command::Newline]
        );
    }

    #[test]
    fn test_inline_comment_is_not_supported() {
        let commands = parse_script("block # note");
        assert_eq!(commands.len(), 3);
        assert_eq!(
            commands[1],
            Command::ParseError {
                message: "unknown command: #".to_string()
            }
        );
    }

    #[test]
    fn test_errors_do_not_stop_the_line() {
        let commands = parse_script("block.size-0 end");
        assert!(commands[0].is_error());
        assert_eq!(commands[1], Command::Newline);
    }

    #[test]
    fn test_spans_point_at_tokens() {
        let commands = parse_script_spanned("# header\n  block  circle\nend");

        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0].span.start.line, 2);
        assert_eq!(commands[0].span.start.column, 3);
        assert_eq!(commands[1].span.start.column, 10);
        assert_eq!(commands[1].span.len, "circle".len());
        assert_eq!(commands[2].span.start.line, 3);
        assert_eq!(commands[2].span.start.column, 1);
    }

    #[test]
    fn test_spans_after_multibyte_text() {
        let commands = parse_script_spanned("block.color-ørød end");

        assert!(commands[0].value.is_error());
        assert_eq!(commands[1].span.start.offset, 19);
        assert_eq!(commands[1].span.start.column, 18);
    }

    #[test]
    fn test_large_script_positions() {
        let lines = 20_000;
        let source = "block.color-red space-1 block end x\n".repeat(lines);

        let commands = parse_script_spanned(&source);
        assert_eq!(commands.len(), lines * 5);

        let last = commands.last().unwrap();
        assert_eq!(last.span.start.line, lines as u32);
        assert_eq!(last.span.start.column, 35);
        assert_eq!(last.span.end_offset(), source.len() - 1);
    }

    #[test]
    fn test_parse_is_stateless() {
        let source = "block.repeat-2 space-1 nope\nend";
        assert_eq!(parse_script(source), parse_script(source));
    }
}
