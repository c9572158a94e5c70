//! Geographic location value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// A geographic location with latitude and longitude
///
/// Deserialization goes through [`GeoLocation::new`], so out-of-range input
/// is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoLocation")]
pub struct GeoLocation {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

/// Error type for invalid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCoordinates;

impl fmt::Display for InvalidCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180"
        )
    }
}

impl std::error::Error for InvalidCoordinates {}

#[derive(Deserialize)]
struct RawGeoLocation {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawGeoLocation> for GeoLocation {
    type Error = InvalidCoordinates;

    fn try_from(raw: RawGeoLocation) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl GeoLocation {
    /// Create a new location with validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinates);
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a location without validation (for trusted sources)
    ///
    /// Caller must ensure latitude is in [-90, 90] and longitude in [-180, 180]
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The null island coordinate (0, 0)
    ///
    /// Current-location points without a known fix carry this value.
    #[must_use]
    pub const fn origin() -> Self {
        Self::new_unchecked(0.0, 0.0)
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Whether both components are exactly zero
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_origin(&self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Parses `"lat,lon"` (whitespace around either component is ignored)
impl FromStr for GeoLocation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidCoordinates(s.to_string());

        let (lat, lon) = s.split_once(',').ok_or_else(invalid)?;
        let latitude: f64 = lat.trim().parse().map_err(|_| invalid())?;
        let longitude: f64 = lon.trim().parse().map_err(|_| invalid())?;

        Self::new(latitude, longitude).map_err(|_| invalid())
    }
}
