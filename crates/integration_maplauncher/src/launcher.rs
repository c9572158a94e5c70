//! Map launcher service

use std::sync::Arc;

use domain::{MapApp, MapPoint};
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::builders::{LaunchRequest, build_launch_request};
use crate::config::MapLauncherConfig;
use crate::error::MapLauncherError;
use crate::platform::{NativeMapsLauncher, SchemeProbe, UrlOpener};
use crate::registry::url_prefix;

/// Launches map apps with directions
///
/// Checks installation through a [`SchemeProbe`], builds the app's deep link
/// and hands it to a [`UrlOpener`] or, for the built-in maps app, a
/// [`NativeMapsLauncher`].
pub struct MapLauncher {
    probe: Arc<dyn SchemeProbe>,
    opener: Arc<dyn UrlOpener>,
    native: Arc<dyn NativeMapsLauncher>,
    config: MapLauncherConfig,
}

impl std::fmt::Debug for MapLauncher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapLauncher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl MapLauncher {
    /// Create a new map launcher
    pub fn new(
        probe: Arc<dyn SchemeProbe>,
        opener: Arc<dyn UrlOpener>,
        native: Arc<dyn NativeMapsLauncher>,
        config: MapLauncherConfig,
    ) -> Self {
        Self {
            probe,
            opener,
            native,
            config,
        }
    }

    /// Get the launcher configuration
    pub const fn config(&self) -> &MapLauncherConfig {
        &self.config
    }

    /// Determine whether the given map app is installed
    ///
    /// The built-in maps app is always installed; apps without a registered
    /// scheme never are.
    pub fn is_app_installed(&self, app: MapApp) -> bool {
        if app.is_built_in() {
            return true;
        }

        let Some(prefix) = url_prefix(app) else {
            debug!(%app, "No URL scheme registered");
            return false;
        };

        self.probe.can_open(prefix)
    }

    /// All installed apps, in declaration order
    pub fn installed_apps(&self) -> Vec<MapApp> {
        MapApp::all()
            .into_iter()
            .filter(|app| self.is_app_installed(*app))
            .collect()
    }

    /// Build the launch request for `app` without checking installation
    pub fn build_launch_request(
        &self,
        app: MapApp,
        start: &MapPoint,
        end: &MapPoint,
    ) -> Option<LaunchRequest> {
        build_launch_request(app, start, end, &self.config)
    }

    /// Check installation and build a launch request
    ///
    /// # Errors
    ///
    /// Returns an error if the app is not installed, has no builder, or its
    /// URL does not parse.
    pub fn prepare_launch(
        &self,
        app: MapApp,
        start: &MapPoint,
        end: &MapPoint,
    ) -> Result<LaunchRequest, MapLauncherError> {
        if !self.is_app_installed(app) {
            return Err(MapLauncherError::NotInstalled(app));
        }

        let request = self
            .build_launch_request(app, start, end)
            .ok_or(MapLauncherError::UnsupportedApp(app))?;

        if let LaunchRequest::SchemeUrl(url) = &request {
            Url::parse(url).map_err(|e| MapLauncherError::MalformedUrl {
                url: url.clone(),
                reason: e.to_string(),
            })?;
        }

        Ok(request)
    }

    /// Launch `app` with directions from `start` to `end`
    ///
    /// Returns true if the map app could be launched. Every failure (not
    /// installed, malformed URL, refused by the host) yields false.
    #[instrument(skip(self, app, start, end), fields(app = %app))]
    pub fn launch_directions(&self, app: MapApp, start: &MapPoint, end: &MapPoint) -> bool {
        let request = match self.prepare_launch(app, start, end) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Cannot launch map app");
                return false;
            },
        };

        let launched = match request {
            LaunchRequest::NativeMapItems { items, mode } => {
                debug!(%mode, "Opening native map items");
                self.native.open_directions(&items, mode)
            },
            LaunchRequest::SchemeUrl(url) => {
                debug!(%url, "Opening map app URL");
                self.opener.open(&url)
            },
        };

        if launched {
            info!("Map app launched");
        } else {
            warn!("Host refused to open map app");
        }
        launched
    }

    /// Launch `app` with directions from the current location to `end`
    pub fn launch_directions_to(&self, app: MapApp, end: &MapPoint) -> bool {
        self.launch_directions(app, &MapPoint::current_location(), end)
    }
}

#[cfg(test)]
mod tests {
    use domain::{DirectionsMode, GeoLocation};
    use mockall::predicate::eq;

    use super::*;
    use crate::platform::{MockNativeMapsLauncher, MockSchemeProbe, MockUrlOpener};

    fn big_ben() -> MapPoint {
        MapPoint::new(GeoLocation::new_unchecked(51.500755, -0.124626)).with_name("Big Ben")
    }

    fn launcher(
        probe: MockSchemeProbe,
        opener: MockUrlOpener,
        native: MockNativeMapsLauncher,
    ) -> MapLauncher {
        MapLauncher::new(
            Arc::new(probe),
            Arc::new(opener),
            Arc::new(native),
            MapLauncherConfig::default(),
        )
    }

    #[test]
    fn test_built_in_is_installed_without_probing() {
        let mut probe = MockSchemeProbe::new();
        probe.expect_can_open().never();

        let launcher = launcher(probe, MockUrlOpener::new(), MockNativeMapsLauncher::new());
        assert!(launcher.is_app_installed(MapApp::AppleMaps));
    }

    #[test]
    fn test_installed_follows_probe() {
        let mut probe = MockSchemeProbe::new();
        probe
            .expect_can_open()
            .with(eq("waze://"))
            .times(1)
            .return_const(true);
        probe
            .expect_can_open()
            .with(eq("moovit://"))
            .times(1)
            .return_const(false);

        let launcher = launcher(probe, MockUrlOpener::new(), MockNativeMapsLauncher::new());
        assert!(launcher.is_app_installed(MapApp::Waze));
        assert!(!launcher.is_app_installed(MapApp::Moovit));
    }

    #[test]
    fn test_unregistered_app_is_not_installed() {
        let mut probe = MockSchemeProbe::new();
        probe.expect_can_open().never();

        let launcher = launcher(probe, MockUrlOpener::new(), MockNativeMapsLauncher::new());
        assert!(!launcher.is_app_installed(MapApp::Uber));
    }

    #[test]
    fn test_installed_apps() {
        let mut probe = MockSchemeProbe::new();
        probe
            .expect_can_open()
            .returning(|scheme| scheme == "citymapper://" || scheme == "yandexnavi://");

        let launcher = launcher(probe, MockUrlOpener::new(), MockNativeMapsLauncher::new());
        assert_eq!(
            launcher.installed_apps(),
            vec![MapApp::AppleMaps, MapApp::Citymapper, MapApp::Yandex]
        );
    }

    #[test]
    fn test_launch_opens_url() {
        let mut probe = MockSchemeProbe::new();
        probe.expect_can_open().return_const(true);
        let mut opener = MockUrlOpener::new();
        opener
            .expect_open()
            .with(eq("waze://?ll=51.500755,-0.124626&navigate=yes"))
            .times(1)
            .return_const(true);

        let launcher = launcher(probe, opener, MockNativeMapsLauncher::new());
        assert!(launcher.launch_directions_to(MapApp::Waze, &big_ben()));
    }

    #[test]
    fn test_launch_reports_host_refusal() {
        let mut probe = MockSchemeProbe::new();
        probe.expect_can_open().return_const(true);
        let mut opener = MockUrlOpener::new();
        opener.expect_open().times(1).return_const(false);

        let launcher = launcher(probe, opener, MockNativeMapsLauncher::new());
        assert!(!launcher.launch_directions_to(MapApp::Citymapper, &big_ben()));
    }

    #[test]
    fn test_launch_not_installed_never_opens() {
        let mut probe = MockSchemeProbe::new();
        probe.expect_can_open().return_const(false);
        let mut opener = MockUrlOpener::new();
        opener.expect_open().never();

        let launcher = launcher(probe, opener, MockNativeMapsLauncher::new());
        assert!(!launcher.launch_directions_to(MapApp::GoogleMaps, &big_ben()));
    }

    #[test]
    fn test_launch_built_in_uses_native_maps() {
        let mut native = MockNativeMapsLauncher::new();
        native
            .expect_open_directions()
            .withf(|items, mode| {
                items.len() == 2
                    && items[0].is_current_location()
                    && items[1].name() == Some("Big Ben")
                    && *mode == DirectionsMode::Driving
            })
            .times(1)
            .return_const(true);
        let mut opener = MockUrlOpener::new();
        opener.expect_open().never();

        let launcher = launcher(MockSchemeProbe::new(), opener, native);
        assert!(launcher.launch_directions_to(MapApp::AppleMaps, &big_ben()));
    }

    #[test]
    fn test_launch_built_in_web_fallback_uses_opener() {
        let mut opener = MockUrlOpener::new();
        opener
            .expect_open()
            .withf(|url| url.starts_with("http://maps.google.com/maps?saddr=&daddr="))
            .times(1)
            .return_const(true);
        let mut native = MockNativeMapsLauncher::new();
        native.expect_open_directions().never();

        let launcher = MapLauncher::new(
            Arc::new(MockSchemeProbe::new()),
            Arc::new(opener),
            Arc::new(native),
            MapLauncherConfig {
                native_maps: false,
                ..Default::default()
            },
        );
        assert!(launcher.launch_directions_to(MapApp::AppleMaps, &big_ben()));
    }

    #[test]
    fn test_prepare_launch_errors() {
        let mut probe = MockSchemeProbe::new();
        probe.expect_can_open().return_const(false);

        let launcher = launcher(probe, MockUrlOpener::new(), MockNativeMapsLauncher::new());
        let here = MapPoint::current_location();

        assert!(matches!(
            launcher.prepare_launch(MapApp::Waze, &here, &big_ben()),
            Err(MapLauncherError::NotInstalled(MapApp::Waze))
        ));
        assert!(matches!(
            launcher.prepare_launch(MapApp::Uber, &here, &big_ben()),
            Err(MapLauncherError::NotInstalled(MapApp::Uber))
        ));
    }

    #[test]
    fn test_prepare_launch_returns_request() {
        let mut probe = MockSchemeProbe::new();
        probe.expect_can_open().return_const(true);

        let launcher = launcher(probe, MockUrlOpener::new(), MockNativeMapsLauncher::new());
        let request = launcher
            .prepare_launch(MapApp::TransitApp, &MapPoint::current_location(), &big_ben())
            .unwrap();
        assert_eq!(
            request.url(),
            Some("transit://directions?to=51.500755,-0.124626")
        );
    }
}
