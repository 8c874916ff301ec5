//! Startup configuration read from the environment.
//!
//! | Variable      | Default   | Meaning                                           |
//! |---------------|-----------|---------------------------------------------------|
//! | `HOST`        | `0.0.0.0` | Interface to bind.                                |
//! | `PORT`        | `5000`    | Port to bind.                                     |
//! | `TITLES_FILE` | unset     | Newline-separated titles replacing the defaults.  |

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::catalog::Catalog;
use crate::server::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig};

/// Why the environment could not be turned into an [`AppConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PORT` is not a `u16`.
    #[error("invalid PORT '{value}': {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },

    /// `TITLES_FILE` could not be read.
    #[error("failed to read titles from {}: {source}", .path.display())]
    TitlesFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Everything the binary needs to start serving.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    /// Address to bind.
    pub server: ServerConfig,
    /// Optional file of titles replacing the built-in collection.
    pub titles_file: Option<PathBuf>,
}

impl AppConfig {
    /// Reads `HOST`, `PORT` and `TITLES_FILE` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        let titles_file = lookup("TITLES_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            server: ServerConfig::new(host, port),
            titles_file,
        })
    }

    /// Loads the catalog to serve: `TITLES_FILE` if set, the built-in titles otherwise.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.titles_file {
            Some(path) => read_titles(path),
            None => Ok(Catalog::default()),
        }
    }
}

fn read_titles(path: &Path) -> Result<Catalog, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::TitlesFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_titles(&contents))
}

/// One title per line; surrounding whitespace is trimmed and blank lines are skipped.
pub fn parse_titles(contents: &str) -> Catalog {
    Catalog::new(
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty()),
    )
}
