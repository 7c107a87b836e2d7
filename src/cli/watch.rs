//! Watch command implementation.
//!
//! Re-runs a script each time its file changes. Every run starts from the
//! file's current text; nothing carries over between runs.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use clap::Args;
use log::{debug, warn};
use notify::{Event, EventKind, RecursiveMode, Watcher};

use crate::error::{BlocksError, Result};
use crate::output::{display_path, Printer};

use super::read_script;
use super::run::{write_events, OutputFormat};

/// Time to let an editor finish writing before re-running.
const SETTLE: Duration = Duration::from_millis(50);

/// Re-run a script whenever it changes
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Script to watch
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run(args: WatchArgs, printer: &Printer) -> Result<()> {
    let file = args.file.clone();
    let dir = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let (tx, rx) = mpsc::channel::<notify::Result<Event>>();
    let mut watcher = notify::recommended_watcher(tx).map_err(|e| watch_error(&file, e))?;
    // Watch the directory; editors often replace the file instead of writing it.
    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .map_err(|e| watch_error(&dir, e))?;

    printer.info("Watching", &display_path(&file));
    run_once(&file, args.format, printer);

    for result in &rx {
        match result {
            Ok(event) if touches(&event, &file) => {
                std::thread::sleep(SETTLE);
                let skipped = rx.try_iter().count();
                debug!("change detected ({} more event(s) folded in)", skipped);
                run_once(&file, args.format, printer);
            }
            Ok(_) => {}
            Err(e) => warn!("watch error: {}", e),
        }
    }

    Ok(())
}

fn run_once(file: &Path, format: OutputFormat, printer: &Printer) {
    let result = read_script(file).and_then(|source| {
        printer.status("Running", &display_path(file));
        write_events(&source, format, io::stdout().lock())
    });
    if let Err(e) = result {
        printer.error("Error", &e.to_string());
    }
}

/// Whether a filesystem event concerns the watched file.
fn touches(event: &Event, file: &Path) -> bool {
    let relevant = matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_)
    );
    relevant
        && event
            .paths
            .iter()
            .any(|p| p.file_name().is_some() && p.file_name() == file.file_name())
}

fn watch_error(path: &Path, e: notify::Error) -> BlocksError {
    BlocksError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to watch: {}", e),
    }
}
