//! Configuration file parsing

pub mod shade_toml;

pub use shade_toml::{CONFIG_FILE, ColorOption, Config, ConfigError, Defaults, Fonts, OutputConfig};
