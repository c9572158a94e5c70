//! Value Objects - Immutable, identity-less domain primitives

mod directions_mode;
mod geo_location;
mod map_app;
mod map_point;

pub use directions_mode::DirectionsMode;
pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use map_app::MapApp;
pub use map_point::{CURRENT_LOCATION_LABEL, MapPoint};
