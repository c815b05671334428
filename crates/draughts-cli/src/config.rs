//! Custom starting positions loaded from TOML.
//!
//! ```toml
//! factor = 4
//! light = ["C3", "E3"]
//! dark = ["D4"]
//! dark_kings = ["27"]
//! ```
//!
//! Squares are coordinates in either notation accepted by the board.

use std::path::{Path, PathBuf};

use draughts_engine::coord::parse_coord;
use draughts_engine::{BoardError, Setup};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse setup file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("bad square in {list}: {source}")]
    Square { list: &'static str, source: BoardError },
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SetupFile {
    pub factor: Option<usize>,
    #[serde(default)]
    pub light: Vec<String>,
    #[serde(default)]
    pub dark: Vec<String>,
    #[serde(default)]
    pub light_kings: Vec<String>,
    #[serde(default)]
    pub dark_kings: Vec<String>,
}

impl SetupFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Resolves every coordinate for a board of `factor`.
    pub fn to_setup(&self, factor: usize) -> Result<Setup, ConfigError> {
        let squares = |list: &'static str, coords: &[String]| {
            coords
                .iter()
                .map(|c| parse_coord(c, factor))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|source| ConfigError::Square { list, source })
        };
        Ok(Setup {
            light: squares("light", &self.light)?,
            dark: squares("dark", &self.dark)?,
            light_kings: squares("light_kings", &self.light_kings)?,
            dark_kings: squares("dark_kings", &self.dark_kings)?,
        })
    }
}
