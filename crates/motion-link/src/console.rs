//! Console front end.
//!
//! Minimal stand-in for the excluded UI: turns stdin lines into app
//! commands, refuses commands that are invalid for the current recording
//! state (the "disabled button"), and prints published payloads and
//! error-slot changes as they arrive.

use crate::{AppCommand, AppError, AppResult, RecordingState, transfer::PayloadSnapshot};

use std::panic::Location;

use error_location::ErrorLocation;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::{mpsc, watch},
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Stdin-driven control surface and status printer.
pub struct Console {
    pub(crate) command_tx: mpsc::Sender<AppCommand>,
    pub(crate) recording_rx: watch::Receiver<RecordingState>,
    pub(crate) payload_rx: watch::Receiver<Option<PayloadSnapshot>>,
    pub(crate) error_rx: watch::Receiver<Option<String>>,
}

impl Console {
    /// Run the console loop until shutdown or end of input.
    #[instrument(skip(self, shutdown_rx))]
    pub(crate) async fn run(mut self, mut shutdown_rx: watch::Receiver<bool>) -> AppResult<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        println!("commands: start | stop | quit");

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Console shutting down");
                    break;
                }

                changed = self.payload_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let snapshot = self.payload_rx.borrow_and_update().clone();
                    if let Some(snapshot) = snapshot {
                        print_snapshot(&snapshot);
                    }
                }

                changed = self.error_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let message = self.error_rx.borrow_and_update().clone();
                    if let Some(message) = message {
                        println!("error: {message}");
                    }
                }

                line = lines.next_line() => match line {
                    Ok(Some(line)) => self.handle_line(line.trim()).await?,
                    Ok(None) => {
                        info!("End of input, requesting shutdown");
                        self.send(AppCommand::Shutdown).await?;
                        break;
                    }
                    Err(e) => return Err(e.into()),
                },
            }
        }

        Ok(())
    }

    async fn handle_line(&mut self, line: &str) -> AppResult<()> {
        match line {
            "start" => {
                if self.recording_rx.borrow().is_recording() {
                    println!("already recording");
                    return Ok(());
                }
                self.send(AppCommand::StartRecording {
                    session_id: Uuid::new_v4(),
                })
                .await
            }
            "stop" => {
                let Some(session_id) = self.recording_rx.borrow().session_id() else {
                    println!("not recording");
                    return Ok(());
                };
                self.send(AppCommand::StopRecording { session_id }).await
            }
            "quit" | "exit" => self.send(AppCommand::Shutdown).await,
            "" => Ok(()),
            other => {
                warn!(input = other, "Unknown console command");
                println!("commands: start | stop | quit");
                Ok(())
            }
        }
    }

    async fn send(&self, command: AppCommand) -> AppResult<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("console command rejected: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

/// Print a published payload the way the paired display shows it: the
/// raw text verbatim, then a one-line summary.
fn print_snapshot(snapshot: &PayloadSnapshot) {
    let peak = snapshot
        .series
        .iter()
        .map(|s| s.magnitude())
        .fold(0.0_f64, f64::max);

    println!("--- payload ---");
    print!("{}", snapshot.raw);
    println!(
        "--- {} samples, peak magnitude {peak:.3} ---",
        snapshot.series.len()
    );
}
