#![forbid(unsafe_code)]

//! `shade.toml` parsing
//!
//! Every section and key is optional. Values here sit underneath the command
//! line: a flag always wins over the file.

use serde::Deserialize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the working directory
pub const CONFIG_FILE: &str = "shade.toml";

/// Errors that can occur while loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}'")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of a `shade.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub defaults: Defaults,
    pub fonts: Fonts,
    pub output: OutputConfig,
}

/// Defaults for the highlighting flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub style: Option<String>,
    pub language: Option<String>,
    pub outputs: Vec<String>,
    pub console: bool,
}

/// Font hints passed to the document renderers
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Fonts {
    pub html: Option<String>,
    pub rtf: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub color: ColorOption,
}

/// When to color diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorOption {
    /// Parses a `--color=` value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorOption::Auto),
            "always" => Some(ColorOption::Always),
            "never" => Some(ColorOption::Never),
            _ => None,
        }
    }

    /// Color choice for stderr; `Auto` colors only an interactive terminal
    pub fn to_color_choice(self) -> termcolor::ColorChoice {
        match self {
            ColorOption::Always => termcolor::ColorChoice::Always,
            ColorOption::Never => termcolor::ColorChoice::Never,
            ColorOption::Auto if std::io::stderr().is_terminal() => termcolor::ColorChoice::Auto,
            ColorOption::Auto => termcolor::ColorChoice::Never,
        }
    }
}

impl Config {
    /// Parses config file contents; `path` is only used for error messages
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads a config file that must exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Config::parse(&content, path)
    }

    /// Loads `shade.toml` from `dir`, or the defaults if there is none
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            Config::load(&path)
        } else {
            Ok(Config::default())
        }
    }
}
