//! Map app launching for MapLauncher
//!
//! Builds deep-link URLs that open third-party mapping and navigation apps
//! with directions between two [`MapPoint`]s, and checks whether each app is
//! installed by probing its URL scheme.
//!
//! # Architecture
//!
//! The crate follows the client-trait pattern of the other integration crates.
//! Everything that touches the host system sits behind the traits in
//! [`platform`]: [`SchemeProbe`] answers "is a handler registered for this
//! scheme", [`UrlOpener`] opens a URL and [`NativeMapsLauncher`] opens the
//! built-in maps app. [`MapLauncher`] wires them to the pure URL builders.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use domain::{GeoLocation, MapApp, MapPoint};
//! use integration_maplauncher::{MapLauncher, MapLauncherConfig};
//!
//! let launcher = MapLauncher::new(probe, opener, native, MapLauncherConfig::default());
//!
//! let big_ben = MapPoint::new(GeoLocation::new(51.500755, -0.124626)?).with_name("Big Ben");
//! let opened = launcher.launch_directions_to(MapApp::Citymapper, &big_ben);
//! ```
//!
//! [`MapPoint`]: domain::MapPoint

mod builders;
mod config;
mod encoding;
mod error;
mod launcher;
pub mod platform;
mod registry;

pub use builders::{
    LaunchRequest, build_launch_request, citymapper_url, google_maps_point, google_maps_url,
    google_maps_web_url, moovit_url, navigon_url, transit_app_url, waze_url, yandex_url,
};
pub use config::MapLauncherConfig;
pub use encoding::{coordinate_pair, encode_query_value, query_string};
pub use error::MapLauncherError;
pub use launcher::MapLauncher;
pub use platform::{
    ConfiguredSchemeProbe, NativeMapsLauncher, SchemeProbe, UnsupportedNativeMaps, UrlOpener,
};
pub use registry::{registered_apps, url_prefix};
