//! CLI configuration loading

use std::path::Path;

use integration_maplauncher::MapLauncherConfig;
use serde::{Deserialize, Serialize};

/// Default configuration file name (without extension), looked up in the working directory
const DEFAULT_CONFIG_NAME: &str = "maplauncher";

/// Environment variable prefix, e.g. `MAPLAUNCHER_LAUNCHER__NATIVE_MAPS=false`
const ENV_PREFIX: &str = "MAPLAUNCHER";

/// Top-level CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Launcher settings
    #[serde(default)]
    pub launcher: MapLauncherConfig,
}

impl CliConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// Without an explicit path, `maplauncher.toml` in the working directory is
    /// used if present. Environment variables override file values; list values
    /// such as `MAPLAUNCHER_LAUNCHER__INSTALLED_APPS` are comma-separated.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path)
                .format(config::FileFormat::Toml)
                .required(true),
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(file)
            // Override with environment variables
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("launcher.installed_apps")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Render the default configuration as TOML
    pub fn template() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&Self::default())
    }
}
