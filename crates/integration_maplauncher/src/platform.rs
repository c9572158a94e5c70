//! Host system collaborators
//!
//! The launcher never talks to the operating system directly. Probing for an
//! installed app, opening a URL and opening the built-in maps app are all
//! delegated through these traits so the dispatch logic can run anywhere.

use std::collections::HashSet;

use domain::{DirectionsMode, MapApp, MapPoint};
#[cfg(test)]
use mockall::automock;
use tracing::{debug, warn};

use crate::registry::url_prefix;

/// Answers whether a handler is registered for a URL scheme
#[cfg_attr(test, automock)]
pub trait SchemeProbe: Send + Sync {
    /// Check whether a URL with this scheme prefix (e.g. `waze://`) can be opened
    fn can_open(&self, scheme: &str) -> bool;
}

/// Opens a URL with whatever app handles its scheme
#[cfg_attr(test, automock)]
pub trait UrlOpener: Send + Sync {
    /// Open the URL, returning whether the host accepted it
    fn open(&self, url: &str) -> bool;
}

/// Opens the built-in maps app with directions between map items
#[cfg_attr(test, automock)]
pub trait NativeMapsLauncher: Send + Sync {
    /// Open directions through `items` in the given mode
    fn open_directions(&self, items: &[MapPoint], mode: DirectionsMode) -> bool;
}

/// Scheme probe backed by a fixed list of installed apps
///
/// Useful on hosts without a scheme registry, where the set of installed apps
/// comes from configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredSchemeProbe {
    schemes: HashSet<String>,
}

impl ConfiguredSchemeProbe {
    /// Create a probe that reports `apps` as installed
    ///
    /// Apps without a registered scheme are skipped.
    #[must_use]
    pub fn new(apps: &[MapApp]) -> Self {
        let schemes = apps
            .iter()
            .filter_map(|app| url_prefix(*app))
            .map(normalize_scheme)
            .collect();
        Self { schemes }
    }
}

impl SchemeProbe for ConfiguredSchemeProbe {
    fn can_open(&self, scheme: &str) -> bool {
        let found = self.schemes.contains(&normalize_scheme(scheme));
        debug!(%scheme, found, "Probed configured schemes");
        found
    }
}

fn normalize_scheme(scheme: &str) -> String {
    scheme.trim().trim_end_matches("://").to_ascii_lowercase()
}

/// Native maps launcher for hosts that have no built-in maps app
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedNativeMaps;

impl NativeMapsLauncher for UnsupportedNativeMaps {
    fn open_directions(&self, items: &[MapPoint], mode: DirectionsMode) -> bool {
        warn!(
            items = items.len(),
            %mode,
            "Native maps are not available on this host"
        );
        false
    }
}
