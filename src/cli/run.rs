//! Run command implementation.
//!
//! Executes a single script and writes its draw events to stdout.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::Result;
use crate::exec::{run_script, script_events};
use crate::render::{events_to_json, TextWriter};

use super::read_script;

/// Event dump format.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One event per line
    #[default]
    Text,
    /// JSON array of events
    Json,
}

/// Run a script and print its draw events
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Script to run (`-` reads stdin)
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run(args: RunArgs) -> Result<()> {
    let source = read_script(&args.file)?;
    write_events(&source, args.format, BufWriter::new(io::stdout().lock()))
}

/// Execute `source` and write its events to `out`.
///
/// Text goes out event by event as the executor draws; JSON is collected
/// first since it is a single array.
pub fn write_events<W: Write>(source: &str, format: OutputFormat, mut out: W) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let mut writer = TextWriter::new(out);
            run_script(source, &mut writer);
            writer.finish()?;
        }
        OutputFormat::Json => {
            let json = events_to_json(&script_events(source))?;
            writeln!(out, "{}", json)?;
            out.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(source: &str, format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_events(source, format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_events_text() {
        let out = written("block.repeat-2 end", OutputFormat::Text);
        assert_eq!(out, "block 1 #000000\nblock 1 #000000\nend\n");
    }

    #[test]
    fn test_write_events_json_is_array() {
        let out = written("space-2 nope", OutputFormat::Json);
        assert!(out.ends_with("]\n"));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[1]["message"], "unknown command: nope");
    }
}
