//! In-process sensor peer.
//!
//! Implements the remote half of the protocol so the binary and the
//! end-to-end tests have something to talk to: answers `start`/`stop`
//! with their acknowledgements, captures a synthetic waveform while
//! recording, and hands the rendered payload off as a file when capture
//! stops.

use crate::link::{
    channel::LinkRequest,
    event::{IncomingTransfer, LinkEvent},
    protocol::{CommandReply, SessionCommand},
};

use std::{
    f64::consts::{PI, TAU},
    path::PathBuf,
    time::Duration,
};

use motion_link_core::{Sample, Series, render_series};
use tokio::{
    sync::mpsc,
    time::{MissedTickBehavior, interval},
};
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// Simulated sensor-bearing peer serving the command protocol in-process.
pub struct SimulatedSensorPeer {
    request_rx: mpsc::Receiver<LinkRequest>,
    event_tx: mpsc::Sender<LinkEvent>,
    sample_period: Duration,
    staging_dir: PathBuf,
}

impl SimulatedSensorPeer {
    /// Create a peer reading requests from `request_rx` and emitting
    /// transport events (activation, file handoffs) to `event_tx`.
    pub fn new(
        request_rx: mpsc::Receiver<LinkRequest>,
        event_tx: mpsc::Sender<LinkEvent>,
        sample_period: Duration,
        staging_dir: PathBuf,
    ) -> Self {
        Self {
            request_rx,
            event_tx,
            sample_period,
            staging_dir,
        }
    }

    /// Serve the protocol until the request queue closes.
    #[instrument(skip(self))]
    pub async fn run(mut self) {
        if self.event_tx.send(LinkEvent::ActivationCompleted).await.is_err() {
            debug!("Event queue closed before activation");
            return;
        }

        // One-way status message outside the command protocol.
        let hz = 1.0 / self.sample_period.as_secs_f64();
        let _ = self
            .event_tx
            .send(LinkEvent::MessageReceived {
                body: format!("sensor ready, sampling at {hz:.0} Hz"),
            })
            .await;

        let mut ticker = interval(self.sample_period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut recording = false;
        let mut captured: Series = Vec::new();
        let mut tick: u64 = 0;

        loop {
            tokio::select! {
                request = self.request_rx.recv() => {
                    let Some(LinkRequest { request, reply_tx }) = request else {
                        debug!("Request queue closed, sensor peer exiting");
                        break;
                    };

                    let reply = match request.command.as_str() {
                        "start" => {
                            recording = true;
                            captured.clear();
                            tick = 0;
                            info!("Remote capture started");
                            CommandReply::with_token(SessionCommand::Start.ack_token())
                        }
                        "stop" => {
                            recording = false;
                            info!(rows = captured.len(), "Remote capture stopped");
                            self.hand_off(&captured).await;
                            CommandReply::with_token(SessionCommand::Stop.ack_token())
                        }
                        other => {
                            warn!(token = other, "Unrecognized command token");
                            CommandReply::empty()
                        }
                    };

                    if reply_tx.send(Ok(reply)).is_err() {
                        debug!("Requester dropped before the reply was delivered");
                    }
                }
                _ = ticker.tick(), if recording => {
                    captured.push(synthetic_sample(tick, self.sample_period));
                    tick += 1;
                }
            }
        }
    }

    /// Stage the captured series as a file and announce the handoff.
    async fn hand_off(&self, captured: &[Sample]) {
        let text = render_series(captured);
        let file_name = format!("recording-{}.csv", Uuid::new_v4());
        let path = self.staging_dir.join(&file_name);

        if let Err(e) = std::fs::write(&path, &text) {
            error!(error = %e, path = %path.display(), "Failed to stage outgoing payload");
            return;
        }

        let transfer = IncomingTransfer { path, file_name };
        if self
            .event_tx
            .send(LinkEvent::FileReceived(transfer))
            .await
            .is_err()
        {
            debug!("Event queue closed, dropping file handoff");
        }
    }
}

/// Synthetic gravity-plus-wobble waveform, one sample per tick.
fn synthetic_sample(tick: u64, period: Duration) -> Sample {
    let t = tick as f64 * period.as_secs_f64();
    Sample::new(
        (t * TAU).sin() * 0.5,
        (t * TAU).cos() * 0.3,
        9.81 + (t * PI).sin() * 0.1,
    )
}
