//! headlessd - headless DSB host daemon.
//!
//! Entry point: translates process startup into one task activation, runs
//! the startup shim over the mock adapter, and keeps the bridge up until
//! interrupted.

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use dsb_headlessd::{
    BackgroundTaskInstance, DsbBridgeFactory, HeadlessConfig, ShimState, StartupShim,
};
use mock_adapter::MockAdapterFactory;

/// Initializes the tracing/logging subsystem.
fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = HeadlessConfig::load_or_default(config_path.as_deref());
    init_logging(config.log_json);

    info!("--- Starting headlessd ---");

    let task = BackgroundTaskInstance::new("headlessd");
    let mut shim = StartupShim::new(
        Box::new(MockAdapterFactory::new(config.adapter_name.clone())),
        Box::new(DsbBridgeFactory),
    );

    let state = shim.run(&task).await;
    if !task.wait_completed(config.completion_timeout()).await {
        warn!("activation did not signal completion in time");
    }

    match state {
        ShimState::Running => {
            info!("headlessd initialization complete");
        }
        state => {
            error!(state = state.as_str(), "headlessd startup failed");
            return ExitCode::FAILURE;
        }
    }

    // Hold the bridge up until the process is asked to stop.
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("interrupt received, shutting down"),
        Err(err) => error!(%err, "failed to listen for shutdown signal"),
    }

    shim.shutdown().await;
    info!("headlessd exiting");
    ExitCode::SUCCESS
}
