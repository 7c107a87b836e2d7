//! Status lines for the blocks CLI.
//!
//! Every line is a right-aligned verb and a message, written to stderr so
//! stdout carries nothing but event dumps. Verbs are coloured by tone when
//! stderr is a terminal.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";

/// Column the verbs are right-aligned to.
const VERB_WIDTH: usize = 12;

/// How a status line reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Done,
    Note,
    Warn,
    Fail,
}

impl Tone {
    /// Bold plus the tone's colour.
    fn ansi(self) -> &'static str {
        match self {
            Tone::Done => "\x1b[1;32m",
            Tone::Note => "\x1b[1;36m",
            Tone::Warn => "\x1b[1;33m",
            Tone::Fail => "\x1b[1;31m",
        }
    }
}

#[derive(Debug)]
pub struct Printer {
    ansi: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            ansi: io::stderr().is_terminal(),
        }
    }

    /// Work finished, e.g. `    Rendered row.blocks`.
    pub fn status(&self, verb: &str, message: &str) {
        self.line(Tone::Done, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.line(Tone::Note, verb, message);
    }

    /// A script drew error placeholders; the command still succeeds.
    pub fn warning(&self, verb: &str, message: &str) {
        self.line(Tone::Warn, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.line(Tone::Fail, verb, message);
    }

    /// Secondary detail, such as image dimensions.
    pub fn detail(&self, text: &str) -> String {
        self.wrap(DIM, text)
    }

    /// A path, relative to the working directory when possible.
    pub fn path(&self, path: &Path) -> String {
        self.wrap(CYAN, &display_path(path))
    }

    fn wrap(&self, code: &str, text: &str) -> String {
        if self.ansi {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn line(&self, tone: Tone, verb: &str, message: &str) {
        let mut verb = format!("{verb:>VERB_WIDTH$}");
        if self.ansi {
            verb = format!("{}{verb}{RESET}", tone.ansi());
        }
        // Status output is best effort.
        let _ = writeln!(io::stderr().lock(), "{verb} {message}");
    }
}

/// `count(3, "block")` is "3 blocks". Only for nouns that take an `s`.
pub fn count(n: usize, noun: &str) -> String {
    let suffix = if n == 1 { "" } else { "s" };
    format!("{n} {noun}{suffix}")
}

/// `path` relative to the working directory, or as given when it is elsewhere.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count() {
        assert_eq!(count(1, "script"), "1 script");
        assert_eq!(count(0, "error"), "0 errors");
        assert_eq!(count(22, "block"), "22 blocks");
    }

    #[test]
    fn test_display_path_outside_cwd() {
        let p = Path::new("/nonexistent/path/to/file");
        assert_eq!(display_path(p), "/nonexistent/path/to/file");
    }

    #[test]
    fn test_display_path_cwd_itself() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(display_path(&cwd), ".");
        assert_eq!(display_path(&cwd.join("a.blocks")), "a.blocks");
    }

    #[test]
    fn test_plain_output_has_no_escapes() {
        let printer = Printer { ansi: false };
        assert_eq!(printer.detail("8x8"), "8x8");
        assert_eq!(printer.path(Path::new("/tmp/out.png")), "/tmp/out.png");
    }

    #[test]
    fn test_tones_are_bold() {
        for tone in [Tone::Done, Tone::Note, Tone::Warn, Tone::Fail] {
            assert!(tone.ansi().starts_with("\x1b[1;"));
        }
    }
}
