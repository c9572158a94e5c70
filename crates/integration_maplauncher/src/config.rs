//! Map launcher configuration

use domain::{DirectionsMode, MapApp};
use serde::{Deserialize, Serialize};

use crate::error::MapLauncherError;
use crate::registry::url_prefix;

/// Configuration for the map launcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapLauncherConfig {
    /// Open the built-in maps app with native map items
    ///
    /// When disabled, the built-in app falls back to a Google Maps web URL.
    #[serde(default = "default_native_maps")]
    pub native_maps: bool,

    /// Directions mode passed to the native maps launch
    #[serde(default)]
    pub directions_mode: DirectionsMode,

    /// Apps a [`ConfiguredSchemeProbe`](crate::ConfiguredSchemeProbe) reports as installed
    #[serde(default)]
    pub installed_apps: Vec<MapApp>,
}

const fn default_native_maps() -> bool {
    true
}

impl Default for MapLauncherConfig {
    fn default() -> Self {
        Self {
            native_maps: default_native_maps(),
            directions_mode: DirectionsMode::default(),
            installed_apps: Vec::new(),
        }
    }
}

impl MapLauncherConfig {
    /// Create a configuration suitable for testing
    ///
    /// Every app with a registered scheme is reported as installed.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            installed_apps: MapApp::all()
                .into_iter()
                .filter(|app| url_prefix(*app).is_some())
                .collect(),
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if an installed app has no URL scheme to probe
    /// or is listed twice.
    pub fn validate(&self) -> Result<(), MapLauncherError> {
        for (i, app) in self.installed_apps.iter().enumerate() {
            if app.is_built_in() {
                continue;
            }

            if url_prefix(*app).is_none() {
                return Err(MapLauncherError::ConfigurationError(format!(
                    "installed_apps contains {app}, which has no URL scheme"
                )));
            }

            if self.installed_apps[..i].contains(app) {
                return Err(MapLauncherError::ConfigurationError(format!(
                    "installed_apps lists {app} more than once"
                )));
            }
        }

        Ok(())
    }
}
