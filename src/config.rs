use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Folders skipped by read mode when the user asks to ignore the usual suspects.
pub const DEFAULT_IGNORED_FOLDERS: &[&str] = &[
    "node_modules",
    "__pycache__",
    ".git",
    ".idea",
    ".vscode",
    "dist",
    "build",
    ".eggs",
    ".venv",
];

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub read: ReadConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadConfig {
    /// Folder names hidden (or shown collapsed) in read mode
    pub ignored_folders: Vec<String>,
    /// Descend into symlinked directories
    pub follow_symlinks: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File name of the saved diagram, relative to the diagrammed root
    pub tree_file: String,
    /// Use colors and bold text on the terminal
    pub color: bool,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            ignored_folders: DEFAULT_IGNORED_FOLDERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            follow_symlinks: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            tree_file: "TREE.md".to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// An explicit path must exist. The default location is optional; when it
    /// is absent the built-in defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.is_file() => p,
                _ => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        let config: Config =
            toml::from_str(&contents).map_err(|source| ConfigError::ParseError {
                path: path.clone(),
                source,
            })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config file");

        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/folderforge/config.toml` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("folderforge").join("config.toml"))
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !is_bare_name(&self.output.tree_file) {
            return Err(ConfigError::Invalid(format!(
                "output.tree_file must be a plain file name, got '{}'",
                self.output.tree_file
            )));
        }

        if let Some(bad) = self
            .read
            .ignored_folders
            .iter()
            .find(|name| !is_bare_name(name))
        {
            return Err(ConfigError::Invalid(format!(
                "read.ignored_folders entries must be plain folder names, got '{}'",
                bad
            )));
        }

        Ok(())
    }
}

fn is_bare_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}
