//! Directions endpoint value object

use serde::{Deserialize, Serialize};

use super::GeoLocation;

/// Label reported by [`MapPoint::name`] for current-location points
pub const CURRENT_LOCATION_LABEL: &str = "Current Location";

/// One end of a directions request
///
/// Either the device's current location (resolved by the target app) or a
/// fixed coordinate with an optional display name and address.
///
/// # Example
///
/// ```
/// use domain::{GeoLocation, MapPoint};
///
/// let big_ben = MapPoint::new(GeoLocation::new_unchecked(51.500755, -0.124626))
///     .with_name("Big Ben");
/// assert_eq!(big_ben.name(), Some("Big Ben"));
///
/// let here = MapPoint::current_location();
/// assert_eq!(here.name(), Some("Current Location"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    is_current_location: bool,
    coordinate: GeoLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,
}

impl MapPoint {
    /// Create a point at a fixed coordinate
    #[must_use]
    pub const fn new(coordinate: GeoLocation) -> Self {
        Self {
            is_current_location: false,
            coordinate,
            name: None,
            address: None,
        }
    }

    /// The device's current location, without a known fix
    ///
    /// The coordinate is [`GeoLocation::origin`].
    #[must_use]
    pub const fn current_location() -> Self {
        Self {
            is_current_location: true,
            coordinate: GeoLocation::origin(),
            name: None,
            address: None,
        }
    }

    /// The device's current location with its last known fix
    #[must_use]
    pub const fn current_location_at(coordinate: GeoLocation) -> Self {
        Self {
            is_current_location: true,
            coordinate,
            name: None,
            address: None,
        }
    }

    /// Set the display name
    ///
    /// The label is stored but [`Self::name`] keeps reporting
    /// [`CURRENT_LOCATION_LABEL`] for current-location points.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the free-text address
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Whether this point stands for the device's current location
    #[must_use]
    pub const fn is_current_location(&self) -> bool {
        self.is_current_location
    }

    /// Get the coordinate
    #[must_use]
    pub const fn coordinate(&self) -> GeoLocation {
        self.coordinate
    }

    /// The user-visible name
    ///
    /// Always `Some("Current Location")` for current-location points,
    /// otherwise the stored name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        if self.is_current_location {
            Some(CURRENT_LOCATION_LABEL)
        } else {
            self.name.as_deref()
        }
    }

    /// The name exactly as it was set, ignoring the current-location label
    #[must_use]
    pub fn stored_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the address
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big_ben() -> GeoLocation {
        GeoLocation::new_unchecked(51.500755, -0.124626)
    }

    #[test]
    fn test_fixed_point() {
        let point = MapPoint::new(big_ben())
            .with_name("Big Ben")
            .with_address("Westminster, London SW1A 0AA");

        assert!(!point.is_current_location());
        assert_eq!(point.coordinate(), big_ben());
        assert_eq!(point.name(), Some("Big Ben"));
        assert_eq!(point.address(), Some("Westminster, London SW1A 0AA"));
    }

    #[test]
    fn test_fixed_point_without_name() {
        let point = MapPoint::new(big_ben());
        assert_eq!(point.name(), None);
        assert_eq!(point.address(), None);
    }

    #[test]
    fn test_current_location_defaults_to_origin() {
        let point = MapPoint::current_location();
        assert!(point.is_current_location());
        assert!(point.coordinate().is_origin());
    }

    #[test]
    fn test_current_location_name_is_derived() {
        let point = MapPoint::current_location().with_name("Home");
        assert_eq!(point.name(), Some(CURRENT_LOCATION_LABEL));
        assert_eq!(point.stored_name(), Some("Home"));
    }

    #[test]
    fn test_current_location_at_keeps_fix() {
        let point = MapPoint::current_location_at(big_ben());
        assert!(point.is_current_location());
        assert_eq!(point.coordinate(), big_ben());
    }

    #[test]
    fn test_serialization() {
        let point = MapPoint::new(big_ben()).with_name("Big Ben");
        let json = serde_json::to_string(&point).expect("serialize");
        assert!(json.contains("\"name\":\"Big Ben\""));
        assert!(!json.contains("address"));

        let deserialized: MapPoint = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(point, deserialized);
    }

    #[test]
    fn test_deserialization_rejects_invalid_coordinate() {
        let json = r#"{"is_current_location":false,"coordinate":{"latitude":120.0,"longitude":0.0}}"#;
        assert!(serde_json::from_str::<MapPoint>(json).is_err());
    }
}
