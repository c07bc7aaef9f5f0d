//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/boxoffice/boxoffice.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `BOXOFFICE_*` prefix
//!
//! A scenario file overrides all of these for the run it describes.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::Amount;

/// House configuration for walk-up admissions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Fee for every ticket stocked when a house opens
    pub fee: Amount,
    /// Number of tickets stocked when a house opens
    pub tickets: usize,
    /// Opening till balance
    pub till: Amount,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fee: 10_000,
            tickets: 100,
            till: 0,
        }
    }
}

/// Get the XDG config directory for boxoffice.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "boxoffice").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("boxoffice.toml"))
}

fn config_error(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// The global file and the env vars are optional; an explicit `--config`
    /// file must exist.
    pub fn load(explicit: Option<&Path>) -> ApplicationResult<Self> {
        let mut builder = Config::builder();

        if let Some(path) = global_config_path() {
            builder = builder.add_source(File::from(path).required(false));
        }
        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        }
        builder = builder.add_source(Environment::with_prefix("BOXOFFICE"));

        let config = builder.build().map_err(config_error)?;
        config.try_deserialize().map_err(config_error)
    }
}
