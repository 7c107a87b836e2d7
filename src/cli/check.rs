//! Check command implementation.
//!
//! Parses scripts without rendering and reports every malformed token with
//! its position.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Manifest;
use crate::discovery::{find_scripts, source_paths};
use crate::error::{BlocksError, Result};
use crate::output::{count, display_path, Printer};
use crate::parser::{parse_script_spanned, Location};
use crate::types::Command;

use super::read_script;

/// Report every malformed token in scripts
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Script files or directories (default: manifest sources)
    pub paths: Vec<PathBuf>,
}

/// A malformed token found by `check`.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenProblem {
    pub location: Location,
    pub message: String,
}

pub fn run(args: CheckArgs, manifest: &Manifest, printer: &Printer) -> Result<()> {
    let scripts = find_scripts(&source_paths(&args.paths, manifest), manifest);
    let mut total = 0;

    for script in &scripts {
        let problems = check_script(script)?;
        for problem in &problems {
            printer.error(
                "error",
                &format!("{}:{}: {}", display_path(script), problem.location, problem.message),
            );
        }
        total += problems.len();
    }

    let checked = count(scripts.len(), "script");
    if total > 0 {
        return Err(BlocksError::Check {
            message: format!("{} in {}", count(total, "error"), checked),
            help: Some("Run `blocks colours` to list valid colour names".to_string()),
        });
    }

    printer.status("Checked", &format!("{}, no errors", checked));
    Ok(())
}

/// Collect the malformed tokens of one script.
pub fn check_script(path: &Path) -> Result<Vec<TokenProblem>> {
    let source = read_script(path)?;
    Ok(source_problems(&source))
}

fn source_problems(source: &str) -> Vec<TokenProblem> {
    parse_script_spanned(source)
        .into_iter()
        .filter_map(|spanned| match spanned.value {
            Command::ParseError { message } => Some(TokenProblem {
                location: spanned.span.start,
                message,
            }),
            _ => None,
        })
        .collect()
}
