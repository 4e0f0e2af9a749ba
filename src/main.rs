//! PyME Dashboard - Main Entry Point
//!
//! Native financial dashboard for small and medium businesses in Argentina

use pyme_dashboard::app::application::run_app;
use pyme_dashboard::helpers::get_or_create_data_dir;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Daily rolling log file in the data directory
    let (file_layer, _guard, log_dir_error) = match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir.join("logs"), "pyme-dashboard.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard), None)
        }
        Err(e) => (None, None, Some(e)),
    };

    // Initialize tracing for logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_timer(fmt::time::LocalTime::rfc_3339()))
        .with(file_layer)
        .init();

    if let Some(e) = log_dir_error {
        tracing::warn!(error = %e, "File logging disabled");
    }

    tracing::info!("Starting PyME Dashboard...");

    // Run the GPUI application
    run_app();
}
