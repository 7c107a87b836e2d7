//! Build command implementation.
//!
//! Renders each discovered script to `<output>/<name>.png`. Malformed
//! tokens do not fail the build; they are drawn as placeholders and
//! reported as warnings.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Manifest;
use crate::discovery::{find_scripts, source_paths};
use crate::error::{BlocksError, Result};
use crate::exec::run_script;
use crate::output::{count, display_path, Printer};
use crate::render::{write_png, Canvas};
use crate::types::Colour;

use super::read_script;

/// Render scripts to PNG images
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Script files or directories (default: manifest sources)
    pub paths: Vec<PathBuf>,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Pixels per block size unit
    #[arg(long)]
    pub unit: Option<u32>,
}

/// Outcome of rendering one script.
#[derive(Debug)]
pub struct BuiltScript {
    pub output: PathBuf,
    pub width: usize,
    pub height: usize,
    pub blocks: usize,
    pub errors: Vec<String>,
}

pub fn run(args: BuildArgs, manifest: &Manifest, printer: &Printer) -> Result<()> {
    let output = args.output.clone().unwrap_or_else(|| manifest.output.clone());
    let unit = args.unit.unwrap_or(manifest.unit);
    if unit == 0 {
        return Err(BlocksError::Config {
            message: "--unit must be greater than zero".to_string(),
            help: None,
        });
    }
    let background = manifest.background_colour()?;

    let scripts = find_scripts(&source_paths(&args.paths, manifest), manifest);
    if scripts.is_empty() {
        return Err(BlocksError::Config {
            message: "No scripts found".to_string(),
            help: Some("Pass .blocks files or directories, or set sources in blocks.yaml".to_string()),
        });
    }

    if !output.exists() {
        fs::create_dir_all(&output).map_err(|e| BlocksError::Io {
            path: output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let mut warnings = 0;
    for script in &scripts {
        let built = build_script(script, &output, unit, background)?;
        printer.status(
            "Rendered",
            &format!(
                "{} {} {}",
                display_path(script),
                printer.detail(&format!("({}x{}, {})", built.width, built.height, count(built.blocks, "block"))),
                printer.path(&built.output),
            ),
        );
        for message in &built.errors {
            printer.warning("Warning", &format!("{}: {}", display_path(script), message));
        }
        warnings += built.errors.len();
    }

    let summary = format!(
        "{} to {}",
        count(scripts.len(), "script"),
        display_path(&output)
    );
    if warnings > 0 {
        printer.warning("Finished", &format!("{} ({})", summary, count(warnings, "warning")));
    } else {
        printer.status("Finished", &summary);
    }

    Ok(())
}

/// Render a single script to a PNG in `output_dir`.
pub fn build_script(
    path: &Path,
    output_dir: &Path,
    unit: u32,
    background: Colour,
) -> Result<BuiltScript> {
    let source = read_script(path)?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("script");

    let mut canvas = Canvas::new();
    run_script(&source, &mut canvas);
    let rendered = canvas.rasterise(name, unit, background)?;

    let output = output_dir.join(format!("{}.png", name));
    write_png(&rendered, &output)?;

    Ok(BuiltScript {
        output,
        width: rendered.width(),
        height: rendered.height(),
        blocks: canvas.block_count(),
        errors: canvas.errors().to_vec(),
    })
}
