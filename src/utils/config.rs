// Configuration utilities and TOML parsing

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::day::DEFAULT_PREFIX;
use crate::utils::error::{Result, ScaffoldError};
use crate::utils::validation::{validate_dir_name, validate_prefix};

/// File name of the optional repository-local configuration
pub const CONFIG_FILE_NAME: &str = "aoc-scaffold.toml";

/// Repository-root marker used when the configuration does not name one
pub const DEFAULT_MARKER: &str = ".git";

/// Settings for a scaffold run. The defaults reproduce `cargo new --bin aocNN`
/// followed by `mkdir aocNN/input`, guarded by a `.git` marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Prefix of the generated project name
    pub prefix: String,
    /// File or directory that marks the repository root
    pub marker: String,
    /// Subdirectory created inside the new project
    pub input_dir: String,
    /// Generator program and its arguments; the project name is appended
    pub generator: Vec<String>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            marker: DEFAULT_MARKER.to_string(),
            input_dir: "input".to_string(),
            generator: vec!["cargo".to_string(), "new".to_string(), "--bin".to_string()],
        }
    }
}

impl ScaffoldConfig {
    pub fn validate(&self) -> Result<()> {
        validate_prefix(&self.prefix)?;
        validate_dir_name("marker", &self.marker)?;
        validate_dir_name("input_dir", &self.input_dir)?;

        match self.generator.first() {
            Some(program) if !program.trim().is_empty() => Ok(()),
            _ => Err(ScaffoldError::Config(
                "generator must name a program, e.g. generator = [\"cargo\", \"new\", \"--bin\"]"
                    .to_string(),
            )),
        }
    }
}

/// Configuration parsing and validation utilities
pub struct ConfigParser;

impl ConfigParser {
    /// Load the configuration from `dir`, falling back to defaults when no file exists
    pub fn load_or_default<P: AsRef<Path>>(dir: P) -> Result<ScaffoldConfig> {
        let path = get_config_path(dir.as_ref());

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(ScaffoldConfig::default());
        }

        Self::load_config(&path)
    }

    /// Load and validate a configuration file
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ScaffoldConfig> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|e| {
            ScaffoldError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration file");
        Self::parse_config(&content)
            .map_err(|e| match e {
                ScaffoldError::Config(msg) => {
                    ScaffoldError::Config(format!("{}: {}", path.display(), msg))
                }
                other => other,
            })
    }

    /// Parse configuration from a TOML string
    pub fn parse_config(content: &str) -> Result<ScaffoldConfig> {
        let config: ScaffoldConfig = toml::from_str(content)
            .map_err(|e| ScaffoldError::Config(format!("Invalid TOML syntax: {e}")))?;

        config.validate()?;

        Ok(config)
    }
}

pub fn get_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}
