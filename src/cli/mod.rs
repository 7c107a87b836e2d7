pub mod build;
pub mod check;
pub mod colours;
pub mod completions;
pub mod init;
pub mod run;
pub mod watch;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::error::{BlocksError, Result};

/// blocks - Line-based block scripts to draw events and images
#[derive(Parser, Debug)]
#[command(name = "blocks")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Manifest to load instead of ./blocks.yaml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Show debug logging
    #[arg(long, short, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a script and print its draw events
    Run(run::RunArgs),

    /// Render scripts to PNG images
    Build(build::BuildArgs),

    /// Report every malformed token in scripts
    Check(check::CheckArgs),

    /// List the colour names scripts can use
    Colours(colours::ColoursArgs),

    /// Write a default blocks.yaml
    Init(init::InitArgs),

    /// Re-run a script whenever it changes
    Watch(watch::WatchArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Read a script from a file, or from stdin when the path is `-`.
pub fn read_script(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(|e| BlocksError::Io {
                path: path.to_path_buf(),
                message: format!("Failed to read stdin: {}", e),
            })?;
        return Ok(source);
    }

    std::fs::read_to_string(path).map_err(|e| BlocksError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })
}
