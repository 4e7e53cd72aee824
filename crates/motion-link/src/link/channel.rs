//! Session command channel.
//!
//! Fires discrete command tokens at the remote peer over a request/reply
//! queue. Each send yields exactly one inbound [`LinkEvent`]: either the
//! peer's reply (recognized or not) or a channel-level failure. The
//! caller never waits on the reply; outcomes re-enter the app loop as
//! events like every other transport callback.

use crate::{
    AppError,
    link::{
        event::LinkEvent,
        protocol::{CommandReply, CommandRequest, SessionCommand},
    },
};

use std::panic::Location;

use error_location::ErrorLocation;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// One queued request to the transport task, answered through `reply_tx`.
///
/// Dropping `reply_tx` unanswered counts as the transport's failure
/// callback. There is no timeout: a transport that holds the sender
/// forever leaves the command unresolved.
#[derive(Debug)]
pub struct LinkRequest {
    /// The wire request to deliver.
    pub request: CommandRequest,
    /// Resolves with the peer's reply or a channel-level failure.
    pub reply_tx: oneshot::Sender<Result<CommandReply, AppError>>,
}

/// Sends command tokens to the peer and routes each outcome back onto
/// the inbound event queue.
#[derive(Debug, Clone)]
pub struct SessionCommandChannel {
    request_tx: mpsc::Sender<LinkRequest>,
    event_tx: mpsc::Sender<LinkEvent>,
}

impl SessionCommandChannel {
    /// Create a channel speaking to the transport behind `request_tx`.
    pub fn new(request_tx: mpsc::Sender<LinkRequest>, event_tx: mpsc::Sender<LinkEvent>) -> Self {
        Self {
            request_tx,
            event_tx,
        }
    }

    /// Fire one command at the peer.
    ///
    /// Returns as soon as the request is enqueued. Exactly one of
    /// [`LinkEvent::ReplyReceived`] or [`LinkEvent::SendFailed`] follows
    /// on the event queue, unless the transport never resolves the
    /// request at all.
    #[instrument(skip(self))]
    pub async fn send(&self, command: SessionCommand, session_id: Uuid) {
        let (reply_tx, reply_rx) = oneshot::channel();
        let request = LinkRequest {
            request: CommandRequest::new(command.token()),
            reply_tx,
        };

        if self.request_tx.send(request).await.is_err() {
            warn!(%command, "Peer link closed, request not delivered");
            self.emit(LinkEvent::SendFailed {
                command,
                session_id,
                error: link_failure("peer link is closed"),
            })
            .await;
            return;
        }

        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let event = match reply_rx.await {
                Ok(Ok(reply)) => LinkEvent::ReplyReceived {
                    command,
                    session_id,
                    reply,
                },
                Ok(Err(error)) => LinkEvent::SendFailed {
                    command,
                    session_id,
                    error,
                },
                Err(_) => LinkEvent::SendFailed {
                    command,
                    session_id,
                    error: link_failure("peer link dropped the request"),
                },
            };

            if event_tx.send(event).await.is_err() {
                debug!("Event queue closed before command outcome was delivered");
            }
        });
    }

    async fn emit(&self, event: LinkEvent) {
        if self.event_tx.send(event).await.is_err() {
            debug!("Event queue closed, dropping link event");
        }
    }
}

#[track_caller]
fn link_failure(reason: &str) -> AppError {
    AppError::LinkFailed {
        reason: reason.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
