//! Configuration module
//!
//! Loads `config.toml` from the user's config directory. A missing file
//! yields the defaults; a malformed one is reported.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{Config, PopperConfig, TooltipConfig};

use crate::error::HovertipError;

const CONFIG_DIR: &str = "hovertip";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the user config, or the defaults when there is none
pub fn load_config() -> Result<Config, HovertipError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_config_from(path: &Path) -> Result<Config, HovertipError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(e) => return Err(e.into()),
    };
    parse_config(&contents)
}

pub fn parse_config(content: &str) -> Result<Config, HovertipError> {
    toml::from_str(content).map_err(|e| HovertipError::Config(e.to_string()))
}
