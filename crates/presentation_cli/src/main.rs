//! MapLauncher CLI
//!
//! Command-line interface for building map app deep links and opening them.

#![allow(clippy::print_stdout)]

mod opener;
mod settings;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use domain::{GeoLocation, MapApp, MapPoint};
use integration_maplauncher::{
    ConfiguredSchemeProbe, LaunchRequest, MapLauncher, UnsupportedNativeMaps, url_prefix,
};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::opener::CommandUrlOpener;
use crate::settings::CliConfig;

/// MapLauncher CLI
#[derive(Parser)]
#[command(name = "maplauncher-cli")]
#[command(author, version, about = "Open directions in map and navigation apps", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: maplauncher.toml if present)
    #[arg(short, long, env = "MAPLAUNCHER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported apps, their URL schemes and whether they are installed
    Apps,

    /// Print the deep link for a route without opening it
    ///
    /// Example: maplauncher-cli url citymapper --to 51.500755,-0.124626 --to-name "Big Ben"
    Url(RouteArgs),

    /// Open a route in an installed app
    ///
    /// Installed apps come from `installed_apps` in the configuration.
    Launch(RouteArgs),

    /// Print the default configuration as TOML
    ConfigTemplate,
}

/// Route endpoints shared by `url` and `launch`
#[derive(Args)]
struct RouteArgs {
    /// App identifier (e.g. citymapper, google-maps, waze)
    app: MapApp,

    /// Destination as `lat,lon`
    #[arg(long, allow_hyphen_values = true)]
    to: GeoLocation,

    /// Destination display name
    #[arg(long)]
    to_name: Option<String>,

    /// Destination address
    #[arg(long)]
    to_address: Option<String>,

    /// Start as `lat,lon` (default: current location)
    #[arg(long, allow_hyphen_values = true)]
    from: Option<GeoLocation>,

    /// Start display name
    #[arg(long, requires = "from")]
    from_name: Option<String>,

    /// Start address
    #[arg(long, requires = "from")]
    from_address: Option<String>,
}

impl RouteArgs {
    /// Build the start and end points
    fn endpoints(&self) -> (MapPoint, MapPoint) {
        let start = self.from.map_or_else(MapPoint::current_location, |from| {
            with_labels(
                MapPoint::new(from),
                self.from_name.as_deref(),
                self.from_address.as_deref(),
            )
        });
        let end = with_labels(
            MapPoint::new(self.to),
            self.to_name.as_deref(),
            self.to_address.as_deref(),
        );
        (start, end)
    }
}

fn with_labels(mut point: MapPoint, name: Option<&str>, address: Option<&str>) -> MapPoint {
    if let Some(name) = name {
        point = point.with_name(name);
    }
    if let Some(address) = address {
        point = point.with_address(address);
    }
    point
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Describe a launch request for display
fn describe_request(request: &LaunchRequest) -> String {
    match request {
        LaunchRequest::SchemeUrl(url) => url.clone(),
        LaunchRequest::NativeMapItems { items, mode } => {
            let names: Vec<String> = items
                .iter()
                .map(|item| {
                    item.name()
                        .map_or_else(|| item.coordinate().to_string(), ToString::to_string)
                })
                .collect();
            format!("native maps: {} ({mode})", names.join(" → "))
        },
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if matches!(cli.command, Commands::ConfigTemplate) {
        print!("{}", CliConfig::template()?);
        return Ok(());
    }

    let config = CliConfig::load(cli.config.as_deref())?;
    config
        .launcher
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {e}"))?;
    debug!(?config, "Configuration loaded");

    let launcher = MapLauncher::new(
        Arc::new(ConfiguredSchemeProbe::new(&config.launcher.installed_apps)),
        Arc::new(CommandUrlOpener::system()),
        Arc::new(UnsupportedNativeMaps),
        config.launcher,
    );

    match cli.command {
        Commands::Apps => {
            println!("🗺️  Map apps:");
            for app in MapApp::all() {
                let marker = if launcher.is_app_installed(app) {
                    "✅"
                } else {
                    "  "
                };
                println!(
                    "{marker} {:<12} {:<18} {}",
                    app.id(),
                    app.label(),
                    url_prefix(app).unwrap_or("-")
                );
            }
        },

        Commands::Url(route) => {
            let (start, end) = route.endpoints();
            match launcher.build_launch_request(route.app, &start, &end) {
                Some(request) => println!("{}", describe_request(&request)),
                None => {
                    println!("❌ No URL scheme registered for {}", route.app);
                    std::process::exit(1);
                },
            }
        },

        Commands::Launch(route) => {
            let (start, end) = route.endpoints();
            if launcher.launch_directions(route.app, &start, &end) {
                println!("✅ Opened {}", route.app.label());
            } else {
                println!("❌ Could not open {}", route.app.label());
                std::process::exit(1);
            }
        },

        Commands::ConfigTemplate => {},
    }

    Ok(())
}
