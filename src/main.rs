mod components;
mod config;
mod filter;
mod forms;
mod hospitals;
mod navigation;
mod request;
mod session;
mod state;
mod theme;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;

const VERSION: &str = concat!(
    env!("HOSPITALS_NEARBY_BUILD_VERSION"),
    " (",
    compile_time::datetime_str!(),
    ")",
);

/// Hospitals Nearby: find hospitals by name or city
#[derive(Parser, Debug)]
#[command(
    version = VERSION,
    about,
    long_about = "Hospitals Nearby: find hospitals by name or city\n\n\
        Log in (any non-empty email and password are accepted) to browse a\n\
        directory of hospitals, search by name or city, and filter by city.",
    after_long_help = "Examples:\n\
        \x20 hospitals-nearby                          Launch with the default config\n\
        \x20 hospitals-nearby --config ./config.json   Use a specific config file"
)]
struct Cli {
    /// Path to a config.json overriding the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

const DEFAULT_LOGLEVEL: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "info"
};

fn main() {
    let cli = Cli::parse();

    // Load environment variables from .env file
    if let Ok(dotenv) = dotenvy::dotenv() {
        println!("Loaded .env file from: {}", dotenv.display());
    }
    init_tracing();

    config::init(cli.config.as_deref());

    launch();
}

#[cfg(feature = "desktop")]
fn launch() {
    use dioxus::desktop::tao::dpi::LogicalSize;
    use dioxus::desktop::{Config, WindowBuilder};

    let (width, height) = config::CONFIG.read().window.clamped_size();
    tracing::debug!(width, height, "Launching desktop window");

    let window = WindowBuilder::new()
        .with_title("Hospitals Nearby")
        .with_inner_size(LogicalSize::new(width, height));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(components::app::App);
}

#[cfg(not(feature = "desktop"))]
fn launch() {
    dioxus::launch(components::app::App);
}

fn init_tracing() {
    let silence_filter = tracing_subscriber::filter::filter_fn(|metadata| {
        // Filter out specific error from dioxus_core::properties:136
        // Known issue: https://github.com/DioxusLabs/dioxus/issues/3872
        metadata.target() != "dioxus_core::properties::__component_called_as_function"
    });

    let env_filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOGLEVEL));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .pretty()
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(silence_filter.clone());

    let registry = tracing_subscriber::registry()
        .with(env_filter_layer)
        .with(fmt_layer);

    // On macOS, log to Console.app via oslog
    #[cfg(target_os = "macos")]
    let registry = registry.with(
        tracing_oslog::OsLogger::new("dev.hospitals-nearby", "default")
            .with_filter(silence_filter),
    );

    registry.init();
}
