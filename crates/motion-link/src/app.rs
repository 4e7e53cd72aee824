use crate::{
    AppCommand, AppError, AppResult, RecordingState, SessionCommandChannel,
    link::{
        event::{IncomingTransfer, LinkEvent},
        protocol::{CommandReply, SessionCommand},
    },
    transfer::{PayloadSnapshot, TransferReceiver},
};

use std::{panic::Location, time::Instant};

use error_location::ErrorLocation;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// Main application state.
///
/// Sole owner of every piece of mutable published state: the recording
/// state, the latest payload snapshot, and the error slot. Transport
/// callbacks and background tasks never touch these directly; they
/// enqueue [`LinkEvent`]s and this loop applies them, so all mutation is
/// serialized onto one task.
pub struct App {
    pub(crate) channel: SessionCommandChannel,
    pub(crate) receiver: TransferReceiver,
    pub(crate) state: RecordingState,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) event_rx: mpsc::Receiver<LinkEvent>,
    pub(crate) event_tx: mpsc::Sender<LinkEvent>,
    pub(crate) recording_tx: watch::Sender<RecordingState>,
    pub(crate) payload_tx: watch::Sender<Option<PayloadSnapshot>>,
    pub(crate) error_tx: watch::Sender<Option<String>>,
    pub(crate) shutdown_tx: watch::Sender<bool>,
}

impl App {
    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Motion-Link starting");

        loop {
            tokio::select! {
                Some(event) = self.event_rx.recv() => {
                    self.handle_link_event(event).await;
                }

                Some(cmd) = self.command_rx.recv() => {
                    match cmd {
                        AppCommand::StartRecording { session_id } => {
                            self.start_recording(session_id).await;
                        }
                        AppCommand::StopRecording { session_id } => {
                            self.stop_recording(session_id).await;
                        }
                        AppCommand::Shutdown => {
                            info!("Shutdown requested");
                            break;
                        }
                    }
                }

                else => {
                    info!("All channels closed, shutting down");
                    break;
                }
            }
        }

        let _ = self.shutdown_tx.send(true);
        info!("Motion-Link shut down");

        Ok(())
    }

    /// Issue the start command, gated on the current state.
    ///
    /// The state itself does not move here; it moves when the
    /// acknowledgement comes back.
    #[instrument(skip(self))]
    pub(crate) async fn start_recording(&mut self, session_id: Uuid) {
        if self.state.is_recording() {
            warn!("Start refused, a recording is already in progress");
            return;
        }

        self.channel.send(SessionCommand::Start, session_id).await;
        info!(session_id = %session_id, "Start command issued");
    }

    /// Issue the stop command, gated on the current state.
    #[instrument(skip(self))]
    pub(crate) async fn stop_recording(&mut self, session_id: Uuid) {
        if !self.state.is_recording() {
            warn!("Stop refused, no recording is in progress");
            return;
        }

        self.channel.send(SessionCommand::Stop, session_id).await;
        info!(session_id = %session_id, "Stop command issued");
    }

    /// Apply one inbound event to the owned state.
    pub(crate) async fn handle_link_event(&mut self, event: LinkEvent) {
        match event {
            LinkEvent::ActivationCompleted => {
                info!("Peer link activated");
            }
            LinkEvent::MessageReceived { body } => {
                info!(%body, "Peer message received");
            }
            LinkEvent::ReplyReceived {
                command,
                session_id,
                reply,
            } => {
                self.handle_reply(command, session_id, reply);
            }
            LinkEvent::SendFailed {
                command,
                session_id,
                error: e,
            } => {
                error!(%command, session_id = %session_id, error = ?e, "Command not delivered");
                let _ = self.error_tx.send(Some(e.to_string()));
            }
            LinkEvent::FileReceived(transfer) => {
                self.ingest_transfer(transfer);
            }
            LinkEvent::TransferFinished(Ok(snapshot)) => {
                info!(rows = snapshot.series.len(), "Payload published");
                let _ = self.payload_tx.send(Some(snapshot));
                let _ = self.error_tx.send(None);
            }
            LinkEvent::TransferFinished(Err(e)) => {
                error!(error = ?e, "Transfer failed, previous payload retained");
                let _ = self.error_tx.send(Some(e.to_string()));
            }
        }
    }

    /// Map a reply onto the recording state machine.
    ///
    /// Only the command's designated acknowledgement moves the state.
    /// Any reply, recognized or not, clears the error slot.
    fn handle_reply(&mut self, command: SessionCommand, session_id: Uuid, reply: CommandReply) {
        let _ = self.error_tx.send(None);

        if !reply.acknowledges(command) {
            warn!(%command, reply = ?reply.command, "Reply token not recognized, state unchanged");
            return;
        }

        self.state = match command {
            SessionCommand::Start => RecordingState::Recording {
                started_at: Instant::now(),
                session_id,
            },
            SessionCommand::Stop => {
                if let RecordingState::Recording { started_at, .. } = self.state {
                    info!(
                        session_id = %session_id,
                        duration_ms = started_at.elapsed().as_millis(),
                        "Recording stopped"
                    );
                }
                RecordingState::Idle
            }
        };
        let _ = self.recording_tx.send(self.state);

        info!(session_id = %session_id, state = ?self.state, "Recording state updated");
    }

    /// Offload persist+decode+parse to a blocking task; the outcome
    /// re-enters the loop as [`LinkEvent::TransferFinished`] so the
    /// publish itself stays on this task.
    fn ingest_transfer(&self, transfer: IncomingTransfer) {
        let receiver = self.receiver.clone();
        let event_tx = self.event_tx.clone();

        tokio::spawn(async move {
            let outcome =
                match tokio::task::spawn_blocking(move || receiver.ingest(&transfer)).await {
                    Ok(outcome) => outcome,
                    Err(e) => Err(AppError::TransferPersistFailed {
                        reason: format!("ingest task aborted: {e}"),
                        location: ErrorLocation::from(Location::caller()),
                    }),
                };

            if event_tx
                .send(LinkEvent::TransferFinished(outcome))
                .await
                .is_err()
            {
                debug!("Event queue closed before ingest outcome was delivered");
            }
        });
    }
}
