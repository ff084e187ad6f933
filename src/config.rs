//! kmap configuration
//!
//! Loaded from `.kmap.yaml` in the working directory, or from an explicit
//! path given on the command line. Every field has a default, so a missing
//! file is equivalent to an empty one.

use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up by [`Config::discover`]
pub const CONFIG_FILE: &str = ".kmap.yaml";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Highlight colors, indexed by implicant position modulo length
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,

    /// Input validation rules
    #[serde(default)]
    pub validation: ValidationConfig,
}

fn default_palette() -> Vec<String> {
    [
        "red", "blue", "green", "orange", "purple", "teal", "pink", "brown",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            validation: ValidationConfig::default(),
        }
    }
}

/// Validation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationConfig {
    /// Reject minterms listed in both the on-set and the don't-care set
    #[serde(default = "default_true")]
    pub check_disjoint: bool,

    /// Require each implicant's covered list to equal its pattern's minterms
    #[serde(default)]
    pub strict_patterns: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            check_disjoint: true,
            strict_patterns: false,
        }
    }
}

impl Config {
    /// Parse configuration from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_norway::from_str(yaml)?;
        config.check()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading config");
        Self::from_yaml(&content)
    }

    /// Load `.kmap.yaml` from `dir`, falling back to defaults
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            tracing::trace!(dir = %dir.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Color name for a palette index
    pub fn color(&self, index: usize) -> &str {
        if self.palette.is_empty() {
            return "";
        }
        &self.palette[index % self.palette.len()]
    }

    /// Reject configurations no solve can use
    pub fn check(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(Error::Config("palette must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_yaml() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.palette.len(), 8);
        assert!(config.validation.check_disjoint);
        assert!(!config.validation.strict_patterns);
    }

    #[test]
    fn test_partial_yaml() {
        let config = Config::from_yaml(
            r#"
palette: [gold, silver]
validation:
  strictPatterns: true
"#,
        )
        .unwrap();
        assert_eq!(config.palette, vec!["gold", "silver"]);
        assert!(config.validation.strict_patterns);
        assert!(config.validation.check_disjoint);
        assert_eq!(config.color(3), "silver");
    }

    #[test]
    fn test_empty_palette_rejected() {
        assert!(matches!(
            Config::from_yaml("palette: []"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_discover_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::discover(dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_discover_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "palette: [cyan]\n").unwrap();
        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.color(5), "cyan");
    }
}
