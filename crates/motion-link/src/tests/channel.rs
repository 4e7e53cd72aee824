use crate::{
    AppError, SessionCommandChannel,
    link::{
        event::LinkEvent,
        protocol::{CommandReply, SessionCommand},
    },
};

use std::panic::Location;

use error_location::ErrorLocation;
use tokio::sync::mpsc;
use uuid::Uuid;

/// WHAT: A reply from the transport surfaces as exactly one ReplyReceived
/// WHY: The controller transitions on events, so each send must map to one
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_transport_reply_when_sending_then_reply_event_arrives() {
    // Given: A channel wired to a hand-driven transport
    let (request_tx, mut request_rx) = mpsc::channel(8);
    let (event_tx, mut event_rx) = mpsc::channel(8);
    let channel = SessionCommandChannel::new(request_tx, event_tx);

    // When: Sending start and answering it with start_ok
    channel.send(SessionCommand::Start, Uuid::new_v4()).await;

    let queued = request_rx.recv().await.unwrap();
    assert_eq!(queued.request.command, "start");
    queued
        .reply_tx
        .send(Ok(CommandReply::with_token("start_ok")))
        .unwrap();

    // Then: One ReplyReceived event carrying the acknowledgement
    let event = event_rx.recv().await.unwrap();
    assert!(matches!(
        &event,
        LinkEvent::ReplyReceived {
            command: SessionCommand::Start,
            reply,
            ..
        } if reply.acknowledges(SessionCommand::Start)
    ));
}

/// WHAT: A transport-reported failure surfaces as SendFailed
/// WHY: Channel failure is distinct from a reply and must say why
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_transport_error_when_sending_then_send_failed_event_arrives() {
    let (request_tx, mut request_rx) = mpsc::channel(8);
    let (event_tx, mut event_rx) = mpsc::channel(8);
    let channel = SessionCommandChannel::new(request_tx, event_tx);

    channel.send(SessionCommand::Stop, Uuid::new_v4()).await;

    let queued = request_rx.recv().await.unwrap();
    queued
        .reply_tx
        .send(Err(AppError::LinkFailed {
            reason: "peer unreachable".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }))
        .unwrap();

    let event = event_rx.recv().await.unwrap();
    assert!(matches!(
        &event,
        LinkEvent::SendFailed {
            command: SessionCommand::Stop,
            error,
            ..
        } if error.to_string().contains("peer unreachable")
    ));
}

/// WHAT: A dropped request resolves as SendFailed
/// WHY: The transport abandoning a request is its failure callback
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_dropped_request_when_sending_then_send_failed_event_arrives() {
    let (request_tx, mut request_rx) = mpsc::channel(8);
    let (event_tx, mut event_rx) = mpsc::channel(8);
    let channel = SessionCommandChannel::new(request_tx, event_tx);

    channel.send(SessionCommand::Start, Uuid::new_v4()).await;

    // When: The transport drops the request unanswered
    let queued = request_rx.recv().await.unwrap();
    drop(queued);

    let event = event_rx.recv().await.unwrap();
    assert!(matches!(&event, LinkEvent::SendFailed { .. }));
}

/// WHAT: A closed transport queue fails the send immediately
/// WHY: An unreachable peer must report, not hang or panic
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_closed_transport_when_sending_then_send_failed_event_arrives() {
    let (request_tx, request_rx) = mpsc::channel::<crate::link::channel::LinkRequest>(8);
    let (event_tx, mut event_rx) = mpsc::channel(8);
    let channel = SessionCommandChannel::new(request_tx, event_tx);

    // Given: The transport side is gone
    drop(request_rx);

    channel.send(SessionCommand::Start, Uuid::new_v4()).await;

    let event = event_rx.recv().await.unwrap();
    assert!(matches!(
        &event,
        LinkEvent::SendFailed { error, .. } if error.to_string().contains("closed")
    ));
}
