//! URL scheme registry

use domain::MapApp;

/// Scheme prefix probed for each third-party app
const SCHEMES: [(MapApp, &str); 7] = [
    (MapApp::Citymapper, "citymapper://"),
    (MapApp::GoogleMaps, "comgooglemaps://"),
    (MapApp::Navigon, "navigon://"),
    (MapApp::TransitApp, "transit://"),
    (MapApp::Moovit, "moovit://"),
    (MapApp::Waze, "waze://"),
    (MapApp::Yandex, "yandexnavi://"),
];

/// Get the URL scheme prefix registered for an app
///
/// Returns `None` for the built-in maps app and for apps without a scheme.
#[must_use]
pub fn url_prefix(app: MapApp) -> Option<&'static str> {
    SCHEMES
        .iter()
        .find(|(candidate, _)| *candidate == app)
        .map(|(_, prefix)| *prefix)
}

/// Apps with a registered scheme, in registry order
#[must_use]
pub fn registered_apps() -> impl Iterator<Item = MapApp> {
    SCHEMES.iter().map(|(app, _)| *app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_prefixes() {
        assert_eq!(url_prefix(MapApp::Citymapper), Some("citymapper://"));
        assert_eq!(url_prefix(MapApp::GoogleMaps), Some("comgooglemaps://"));
        assert_eq!(url_prefix(MapApp::Navigon), Some("navigon://"));
        assert_eq!(url_prefix(MapApp::TransitApp), Some("transit://"));
        assert_eq!(url_prefix(MapApp::Moovit), Some("moovit://"));
        assert_eq!(url_prefix(MapApp::Waze), Some("waze://"));
        assert_eq!(url_prefix(MapApp::Yandex), Some("yandexnavi://"));
    }

    #[test]
    fn test_unregistered_apps() {
        assert_eq!(url_prefix(MapApp::AppleMaps), None);
        assert_eq!(url_prefix(MapApp::Uber), None);
    }

    #[test]
    fn test_every_non_built_in_app_except_uber_is_registered() {
        let registered: Vec<MapApp> = registered_apps().collect();
        for app in MapApp::all() {
            let expected = !app.is_built_in() && app != MapApp::Uber;
            assert_eq!(registered.contains(&app), expected, "{app}");
        }
    }
}
