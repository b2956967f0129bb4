//! Configuration for rowops.
//!
//! Read from `~/.rowops/config.toml`, or from the file named by
//! `ROWOPS_CONFIG`. Every section and field is optional.
//!
//! ```toml
//! [display]
//! row_labels = true
//! min_column_width = 0
//!
//! [shell]
//! prompt = "> "
//! show_result = true
//! ```

use std::path::{Path, PathBuf};
use std::{env, fs};

use rowops_types::GridStyle;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "ROWOPS_CONFIG";

pub const DEFAULT_PROMPT: &str = "> ";

// Default value function for serde (bool::default() is false, so only true needs a fn)
const fn default_true() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
pub struct RowopsConfig {
    pub display: Option<DisplayConfig>,
    pub shell: Option<ShellConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

/// How matrices are laid out on screen.
#[derive(Debug, Deserialize)]
pub struct DisplayConfig {
    /// Prefix each row with `R1`, `R2`, ... Default: true.
    #[serde(default = "default_true")]
    pub row_labels: bool,
    /// Minimum width of every column. Default: 0 (fit to content).
    #[serde(default)]
    pub min_column_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            row_labels: true,
            min_column_width: 0,
        }
    }
}

/// Interactive prompt behaviour.
#[derive(Debug, Deserialize)]
pub struct ShellConfig {
    pub prompt: Option<String>,
    /// Print the matrix after every successful change. Default: true.
    #[serde(default = "default_true")]
    pub show_result: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: None,
            show_result: true,
        }
    }
}

impl RowopsConfig {
    /// Load the config file, if there is one.
    ///
    /// Returns `Ok(None)` when no path can be determined or the file does not exist.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_at(config_path())
    }

    /// Like [`RowopsConfig::load`] with an explicit location.
    ///
    /// `None` or a path that does not exist means "no config".
    pub fn load_at(path: Option<PathBuf>) -> Result<Option<Self>, ConfigError> {
        let Some(path) = path else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn grid_style(&self) -> GridStyle {
        let display = self.display.as_ref();
        GridStyle {
            row_labels: display.is_none_or(|d| d.row_labels),
            min_column_width: display.map_or(0, |d| d.min_column_width),
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        self.shell
            .as_ref()
            .and_then(|shell| shell.prompt.as_deref())
            .unwrap_or(DEFAULT_PROMPT)
    }

    #[must_use]
    pub fn show_result(&self) -> bool {
        self.shell.as_ref().is_none_or(|shell| shell.show_result)
    }
}

/// `$ROWOPS_CONFIG` if set and non-empty, else `~/.rowops/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    if let Ok(raw) = env::var(CONFIG_PATH_ENV)
        && !raw.trim().is_empty()
    {
        return Some(PathBuf::from(raw));
    }
    data_dir().map(|dir| dir.join("config.toml"))
}

/// `~/.rowops`, home of the config file and logs.
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".rowops"))
}
