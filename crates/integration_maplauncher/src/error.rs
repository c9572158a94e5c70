//! Map launcher error types

use domain::MapApp;
use thiserror::Error;

/// Reasons a launch request could not be prepared
///
/// [`MapLauncher::launch_directions`](crate::MapLauncher::launch_directions)
/// collapses all of these to `false`; they are surfaced by
/// [`MapLauncher::prepare_launch`](crate::MapLauncher::prepare_launch) and by
/// configuration validation.
#[derive(Debug, Error)]
pub enum MapLauncherError {
    /// The app is not installed (its scheme probe answered no)
    #[error("{0} is not installed")]
    NotInstalled(MapApp),

    /// No URL scheme or builder is registered for the app
    #[error("No URL scheme registered for {0}")]
    UnsupportedApp(MapApp),

    /// The built launch URL does not parse
    #[error("Malformed launch URL {url}: {reason}")]
    MalformedUrl {
        /// The URL as built
        url: String,
        /// Parser message
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
