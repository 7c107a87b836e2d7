//! Script discovery.
//!
//! Paths given on the command line may be script files or directories;
//! directories are walked recursively for `.blocks` files.

use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::config::Manifest;

/// File extension of block scripts.
pub const SCRIPT_EXTENSION: &str = "blocks";

/// Check whether a path looks like a block script.
pub fn is_script(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(SCRIPT_EXTENSION)
}

/// Collect script files from a list of files and directories.
///
/// Files named explicitly are kept whatever their extension. Directory
/// contents are filtered by extension and manifest excludes. The result is
/// sorted and free of duplicates.
pub fn find_scripts(paths: &[PathBuf], manifest: &Manifest) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for root in paths {
        if root.is_file() {
            found.push(root.clone());
            continue;
        }

        for entry in WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if entry.file_type().is_dir() || !is_script(path) || manifest.is_excluded(path) {
                continue;
            }
            found.push(path.to_path_buf());
        }
    }

    found.sort();
    found.dedup();
    debug!("discovered {} script(s)", found.len());
    found
}

/// Paths to scan: the explicit ones, or the manifest's sources.
pub fn source_paths(explicit: &[PathBuf], manifest: &Manifest) -> Vec<PathBuf> {
    if explicit.is_empty() {
        manifest.sources.iter().map(PathBuf::from).collect()
    } else {
        explicit.to_vec()
    }
}
