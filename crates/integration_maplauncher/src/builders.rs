//! Per-app launch request builders
//!
//! Each third-party app gets a pure function turning a start/end pair into the
//! deep link that app documents. Parameter names are an external contract:
//! renaming one breaks the hand-off to the app.

use domain::{DirectionsMode, MapApp, MapPoint};

use crate::config::MapLauncherConfig;
use crate::encoding::{coordinate_pair, encode_query_value, query_string};

/// What to hand to the host system to start directions
#[derive(Debug, Clone, PartialEq)]
pub enum LaunchRequest {
    /// Open the built-in maps app with two map items
    NativeMapItems {
        /// Start and end, in that order
        items: [MapPoint; 2],
        /// Requested travel mode
        mode: DirectionsMode,
    },
    /// Open a scheme URL
    SchemeUrl(String),
}

impl LaunchRequest {
    /// The URL to open, if this is a scheme URL request
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::SchemeUrl(url) => Some(url),
            Self::NativeMapItems { .. } => None,
        }
    }
}

type UrlBuilder = fn(&MapPoint, &MapPoint) -> String;

const URL_BUILDERS: [(MapApp, UrlBuilder); 7] = [
    (MapApp::Citymapper, citymapper_url),
    (MapApp::GoogleMaps, google_maps_url),
    (MapApp::Navigon, navigon_url),
    (MapApp::TransitApp, transit_app_url),
    (MapApp::Moovit, moovit_url),
    (MapApp::Waze, waze_url),
    (MapApp::Yandex, yandex_url),
];

/// Build the launch request for `app`
///
/// Returns `None` when no builder exists for the app.
#[must_use]
pub fn build_launch_request(
    app: MapApp,
    start: &MapPoint,
    end: &MapPoint,
    config: &MapLauncherConfig,
) -> Option<LaunchRequest> {
    if app.is_built_in() {
        return Some(built_in_request(start, end, config));
    }

    URL_BUILDERS
        .iter()
        .find(|(candidate, _)| *candidate == app)
        .map(|(_, build)| LaunchRequest::SchemeUrl(build(start, end)))
}

fn built_in_request(start: &MapPoint, end: &MapPoint, config: &MapLauncherConfig) -> LaunchRequest {
    if config.native_maps {
        LaunchRequest::NativeMapItems {
            items: [start.clone(), end.clone()],
            mode: config.directions_mode,
        }
    } else {
        LaunchRequest::SchemeUrl(google_maps_web_url(start, end))
    }
}

/// Describe a point the way Google Maps' `saddr`/`daddr` expect it
///
/// Empty for a current-location point without a fix, `lat,lon+name` for named
/// points and `lat, lon` otherwise.
#[must_use]
pub fn google_maps_point(point: &MapPoint) -> String {
    let coordinate = point.coordinate();
    if point.is_current_location() && coordinate.is_origin() {
        return String::new();
    }

    match point.name() {
        Some(name) => format!(
            "{}+{}",
            coordinate_pair(coordinate),
            encode_query_value(name)
        ),
        None => format!("{}, {}", coordinate.latitude(), coordinate.longitude()),
    }
}

/// `citymapper://directions?startcoord=..&startname=..&endcoord=..`
#[must_use]
pub fn citymapper_url(start: &MapPoint, end: &MapPoint) -> String {
    let mut params = Vec::new();
    push_citymapper_point(&mut params, start, ["startcoord", "startname", "startaddress"]);
    push_citymapper_point(&mut params, end, ["endcoord", "endname", "endaddress"]);

    format!("citymapper://directions?{}", query_string(&params))
}

fn push_citymapper_point(
    params: &mut Vec<(&'static str, String)>,
    point: &MapPoint,
    [coord_key, name_key, address_key]: [&'static str; 3],
) {
    if point.is_current_location() {
        return;
    }

    params.push((coord_key, coordinate_pair(point.coordinate())));
    if let Some(name) = point.name() {
        params.push((name_key, encode_query_value(name)));
    }
    if let Some(address) = point.address() {
        params.push((address_key, encode_query_value(address)));
    }
}

/// `comgooglemaps://?saddr=..&daddr=..`
#[must_use]
pub fn google_maps_url(start: &MapPoint, end: &MapPoint) -> String {
    format!(
        "comgooglemaps://?saddr={}&daddr={}",
        google_maps_point(start),
        google_maps_point(end)
    )
}

/// Web fallback for the built-in maps app
#[must_use]
pub fn google_maps_web_url(start: &MapPoint, end: &MapPoint) -> String {
    format!(
        "http://maps.google.com/maps?saddr={}&daddr={}",
        google_maps_point(start),
        google_maps_point(end)
    )
}

/// `transit://directions?from=lat,lon&to=lat,lon`
// http://thetransitapp.com/developers
#[must_use]
pub fn transit_app_url(start: &MapPoint, end: &MapPoint) -> String {
    let mut params = Vec::new();
    if !start.is_current_location() {
        params.push(("from", coordinate_pair(start.coordinate())));
    }
    if !end.is_current_location() {
        params.push(("to", coordinate_pair(end.coordinate())));
    }

    format!("transit://directions?{}", query_string(&params))
}

/// `moovit://directions?origin_lat=..&origin_lon=..&orig_name=..&dest_lat=..`
// http://developers.moovitapp.com
#[must_use]
pub fn moovit_url(start: &MapPoint, end: &MapPoint) -> String {
    let mut params = Vec::new();

    if !start.is_current_location() {
        let coordinate = start.coordinate();
        params.push(("origin_lat", coordinate.latitude().to_string()));
        params.push(("origin_lon", coordinate.longitude().to_string()));
        if let Some(name) = start.name() {
            params.push(("orig_name", encode_query_value(name)));
        }
    }

    if !end.is_current_location() {
        let coordinate = end.coordinate();
        params.push(("dest_lat", coordinate.latitude().to_string()));
        params.push(("dest_lon", coordinate.longitude().to_string()));
        if let Some(name) = end.name() {
            params.push(("dest_name", encode_query_value(name)));
        }
    }

    format!("moovit://directions?{}", query_string(&params))
}

/// `navigon://coordinate/<name>/<lat>/<lon>` for the destination
///
/// The name is inserted verbatim and defaults to `Destination`.
// http://www.navigon.com/portal/common/faq/files/NAVIGON_AppInteract.pdf
#[must_use]
pub fn navigon_url(_start: &MapPoint, end: &MapPoint) -> String {
    let coordinate = end.coordinate();
    format!(
        "navigon://coordinate/{}/{}/{}",
        end.name().unwrap_or("Destination"),
        coordinate.latitude(),
        coordinate.longitude()
    )
}

/// `waze://?ll=lat,lon&navigate=yes`; Waze always starts from the device location
// https://developers.google.com/waze/deeplinks
#[must_use]
pub fn waze_url(_start: &MapPoint, end: &MapPoint) -> String {
    format!(
        "waze://?ll={}&navigate=yes",
        coordinate_pair(end.coordinate())
    )
}

/// `yandexnavi://build_route_on_map?lat_to=..&lon_to=..[&lat_from=..&lon_from=..]`
#[must_use]
pub fn yandex_url(start: &MapPoint, end: &MapPoint) -> String {
    let to = end.coordinate();
    let mut params = vec![
        ("lat_to", to.latitude().to_string()),
        ("lon_to", to.longitude().to_string()),
    ];

    if !start.is_current_location() {
        let from = start.coordinate();
        params.push(("lat_from", from.latitude().to_string()));
        params.push(("lon_from", from.longitude().to_string()));
    }

    format!("yandexnavi://build_route_on_map?{}", query_string(&params))
}
