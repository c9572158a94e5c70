//! Map application identifier value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// A mapping or navigation application that can show directions
///
/// Identifiers serialize as kebab-case strings (`google-maps`, `transit-app`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MapApp {
    /// Preinstalled Apple Maps
    AppleMaps,
    /// Citymapper
    Citymapper,
    /// Standalone Google Maps app
    GoogleMaps,
    /// Navigon
    Navigon,
    /// The Transit App
    TransitApp,
    /// Moovit
    Moovit,
    /// Waze
    Waze,
    /// Yandex Navigator
    Yandex,
    /// Uber (no URL scheme registered)
    Uber,
}

impl MapApp {
    /// Get all identifiers in declaration order
    #[must_use]
    pub const fn all() -> [Self; 9] {
        [
            Self::AppleMaps,
            Self::Citymapper,
            Self::GoogleMaps,
            Self::Navigon,
            Self::TransitApp,
            Self::Moovit,
            Self::Waze,
            Self::Yandex,
            Self::Uber,
        ]
    }

    /// Machine-readable identifier, as used in config files and on the command line
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::AppleMaps => "apple-maps",
            Self::Citymapper => "citymapper",
            Self::GoogleMaps => "google-maps",
            Self::Navigon => "navigon",
            Self::TransitApp => "transit-app",
            Self::Moovit => "moovit",
            Self::Waze => "waze",
            Self::Yandex => "yandex",
            Self::Uber => "uber",
        }
    }

    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AppleMaps => "Apple Maps",
            Self::Citymapper => "Citymapper",
            Self::GoogleMaps => "Google Maps",
            Self::Navigon => "Navigon",
            Self::TransitApp => "Transit",
            Self::Moovit => "Moovit",
            Self::Waze => "Waze",
            Self::Yandex => "Yandex Navigator",
            Self::Uber => "Uber",
        }
    }

    /// Whether this app ships with the operating system
    #[must_use]
    pub const fn is_built_in(&self) -> bool {
        matches!(self, Self::AppleMaps)
    }
}

impl fmt::Display for MapApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for MapApp {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::all()
            .into_iter()
            .find(|app| app.id() == needle)
            .ok_or_else(|| DomainError::UnknownMapApp(s.to_string()))
    }
}
