//! Motion-Link: controller/display peer for paired-device motion
//! recording sessions.
//!
//! Sends start/stop commands to a sensor-bearing peer, receives the
//! captured payload as a file handoff, and publishes the parsed series
//! for inspection.

mod app;
mod app_command;
mod config;
mod console;
mod error;
mod link;
mod recording_state;
#[cfg(test)]
mod tests;
mod transfer;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    console::Console,
    error::{AppError, Result as AppResult},
    link::channel::SessionCommandChannel,
    recording_state::RecordingState,
    transfer::TransferReceiver,
};

use crate::{config::Config, link::sim::SimulatedSensorPeer};

use tokio::sync::{mpsc, watch};
use tracing::error;

/// Application entry point.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("motion_link=debug")
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let payload_dir = match config.payload_dir() {
        Ok(d) => d,
        Err(e) => {
            error!("Failed to resolve payload directory: {:?}", e);
            std::process::exit(1);
        }
    };

    let receiver = match TransferReceiver::new(payload_dir) {
        Ok(r) => r,
        Err(e) => {
            error!("Failed to prepare payload storage: {:?}", e);
            std::process::exit(1);
        }
    };

    let (command_tx, command_rx) = mpsc::channel(32);
    let (event_tx, event_rx) = mpsc::channel(64);
    let (request_tx, request_rx) = mpsc::channel(32);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let (recording_tx, recording_rx) = watch::channel(RecordingState::Idle);
    let (payload_tx, payload_rx) = watch::channel(None);
    let (error_tx, error_rx) = watch::channel(None);

    // The in-process stand-in for the sensor peer. A real transport task
    // would consume the same request queue and feed the same event queue.
    let peer = SimulatedSensorPeer::new(
        request_rx,
        event_tx.clone(),
        config.link.sample_period(),
        std::env::temp_dir(),
    );
    tokio::spawn(peer.run());

    let console = Console {
        command_tx,
        recording_rx,
        payload_rx,
        error_rx,
    };

    let app = App {
        channel: SessionCommandChannel::new(request_tx, event_tx.clone()),
        receiver,
        state: RecordingState::Idle,
        command_rx,
        event_rx,
        event_tx,
        recording_tx,
        payload_tx,
        error_tx,
        shutdown_tx,
    };

    tokio::join!(
        async {
            if let Err(e) = console.run(shutdown_rx).await {
                error!(error = ?e, "Console error");
            }
        },
        async {
            if let Err(e) = app.run().await {
                error!(error = ?e, "App error");
            }
        }
    );
}
