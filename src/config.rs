//! Layered configuration for the command-line tools
//!
//! Values come from built-in defaults, then an optional TOML file, then
//! `TABLETOP_`-prefixed environment variables. Command-line flags are applied
//! on top by the binaries.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Config file read when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "tabletop.toml";

/// Prefix for environment overrides, e.g. `TABLETOP_SEED=7`
pub const ENV_PREFIX: &str = "TABLETOP_";

/// How much the tools print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Values only
    Quiet,
    #[default]
    Normal,
    /// Individual dice as well
    Verbose,
}

/// Tool configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,
    pub verbosity: Verbosity,
    /// Seed for reproducible rolls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Catalog files loaded when none are named on the command line
    pub catalogs: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "tabletop=info".to_string(),
            verbosity: Verbosity::Normal,
            seed: None,
            catalogs: Vec::new(),
        }
    }
}

impl Config {
    /// Provider stack for `path`, or [`DEFAULT_CONFIG_FILE`] if `None`.
    ///
    /// A missing file contributes nothing.
    pub fn figment(path: Option<&Path>) -> Figment {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load configuration
    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        let config: Config = Self::figment(path).extract()?;
        debug!("Resolved config: {:?}", config);
        Ok(config)
    }
}
