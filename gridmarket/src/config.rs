//! Application configuration management.
//!
//! Configuration is merged from default values, an optional configuration
//! file, and environment variables, in increasing order of precedence.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The full configuration of the command-line tools
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    /// How results are written
    #[serde(default)]
    pub output: OutputConfig,

    /// Where scenarios come from
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Formatting of the JSON documents we emit
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Extra scenarios to offer next to the built-in presets
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// A directory of scenario JSON files. A file whose scenario id matches a
    /// preset replaces that preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. The config file, if one is given
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern
    /// `GRIDMARKET_<SECTION>__<KEY>` to `<section>.<key>`, e.g.
    ///
    /// ```bash
    /// export GRIDMARKET_OUTPUT__PRETTY=false
    /// export GRIDMARKET_CATALOG__DIRECTORY=./scenarios
    /// ```
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        config = config.add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = path {
            if path.exists() {
                config = config.add_source(config::File::from(path))
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        config = config.add_source(
            config::Environment::with_prefix("GRIDMARKET")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }
}
