//! Project manifest (blocks.yaml) parsing.
//!
//! The manifest holds defaults for discovery and rasterising. Every field
//! is optional and command-line flags take precedence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BlocksError, Result};
use crate::types::Colour;

/// Manifest filename looked up in the working directory.
pub const MANIFEST_FILENAME: &str = "blocks.yaml";

/// Project manifest loaded from blocks.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directories or files scanned for scripts when none are given.
    pub sources: Vec<String>,

    /// Output directory for rendered images.
    pub output: PathBuf,

    /// Pixels per size unit.
    pub unit: u32,

    /// Canvas background as a hex colour.
    pub background: String,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![".".to_string()],
            output: PathBuf::from("dist"),
            unit: 16,
            background: "#FFFFFF".to_string(),
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a blocks.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BlocksError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `path` if given, else `blocks.yaml` from the working directory
    /// if it exists, else defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(MANIFEST_FILENAME);
                if default.exists() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse and validate a manifest from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Self = serde_yaml::from_str(content).map_err(|e| BlocksError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Serialise to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| BlocksError::Config {
            message: format!("Failed to serialise manifest: {}", e),
            help: None,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.unit == 0 {
            return Err(BlocksError::Config {
                message: "unit must be greater than zero".to_string(),
                help: Some("unit is the number of pixels per block size".to_string()),
            });
        }
        self.background_colour()?;
        Ok(())
    }

    pub fn background_colour(&self) -> Result<Colour> {
        Colour::from_hex(&self.background).map_err(|_| BlocksError::Config {
            message: format!("Invalid background colour: {}", self.background),
            help: Some("Use #RGB, #RRGGBB, or #RRGGBBAA format".to_string()),
        })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|pattern| matches_pattern(&path_str, pattern))
    }
}

/// Simple glob pattern matching.
///
/// Supports `*.ext` suffixes, `dir/*` prefixes, `**/name` anywhere, and
/// exact substrings.
fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(suffix) = pattern.strip_prefix("**/") {
        if let Some(dir) = suffix.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", dir)) || path.contains(&format!("/{}/", dir));
        }
        return path.contains(suffix);
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        if !pattern.contains('/') {
            return path.ends_with(suffix);
        }
    }

    if let Some(prefix) = pattern.strip_suffix("/*") {
        return path.starts_with(&format!("{}/", prefix)) || path.contains(&format!("/{}/", prefix));
    }

    path.contains(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_parse_empty_is_default() {
        assert_eq!(Manifest::parse("{}").unwrap(), Manifest::default());
    }

    #[test]
    fn test_parse_full() {
        let yaml = r##"
sources:
  - scripts
output: out
unit: 8
background: "#000"
excludes:
  - "*.draft.blocks"
"##;
        let m = Manifest::parse(yaml).unwrap();

        assert_eq!(m.sources, vec!["scripts".to_string()]);
        assert_eq!(m.output, PathBuf::from("out"));
        assert_eq!(m.unit, 8);
        assert_eq!(m.background_colour().unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_parse_rejects_zero_unit() {
        let err = Manifest::parse("unit: 0").unwrap_err();
        assert!(matches!(err, BlocksError::Config { .. }));
    }

    #[test]
    fn test_parse_rejects_bad_background() {
        let err = Manifest::parse("background: nope").unwrap_err();
        assert!(matches!(err, BlocksError::Config { .. }));
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = Manifest::parse("unit: [").unwrap_err();
        assert!(matches!(err, BlocksError::Parse { .. }));
    }

    #[test]
    fn test_roundtrip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILENAME);
        let manifest = Manifest {
            unit: 4,
            ..Manifest::default()
        };
        std::fs::write(&path, manifest.to_yaml().unwrap()).unwrap();

        assert_eq!(Manifest::load(&path).unwrap(), manifest);
        assert_eq!(Manifest::discover(Some(&path)).unwrap(), manifest);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Manifest::load(Path::new("/nonexistent/blocks.yaml")).unwrap_err();
        assert!(matches!(err, BlocksError::Io { .. }));
    }

    #[test]
    fn test_is_excluded() {
        let manifest = Manifest {
            excludes: vec![
                "*.draft.blocks".to_string(),
                "**/scratch/*".to_string(),
                "vendor/*".to_string(),
            ],
            ..Manifest::default()
        };

        assert!(manifest.is_excluded(Path::new("a/b.draft.blocks")));
        assert!(manifest.is_excluded(Path::new("x/scratch/y.blocks")));
        assert!(manifest.is_excluded(Path::new("vendor/z.blocks")));
        assert!(!manifest.is_excluded(Path::new("scripts/row.blocks")));
    }
}
