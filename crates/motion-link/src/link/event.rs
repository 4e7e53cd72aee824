use crate::{
    AppError, AppResult,
    link::protocol::{CommandReply, SessionCommand},
    transfer::PayloadSnapshot,
};

use std::path::PathBuf;

use uuid::Uuid;

/// A file handoff initiated by the peer: the staged bytes plus the name
/// the peer suggests for them.
#[derive(Debug, Clone)]
pub struct IncomingTransfer {
    /// Where the transport staged the received file.
    pub path: PathBuf,
    /// File name suggested by the sending peer.
    pub file_name: String,
}

/// Everything the transport side can tell the application, as one tagged
/// type on one queue.
///
/// Producers (the transport task, command-reply waiters, ingest tasks)
/// only enqueue these; all state mutation happens in the app loop that
/// consumes them.
#[derive(Debug)]
pub enum LinkEvent {
    /// The transport session finished activating.
    ActivationCompleted,
    /// The peer sent a one-way message outside the command protocol.
    MessageReceived {
        /// Message content, for the log.
        body: String,
    },
    /// A previously sent command got a reply, recognized or not.
    ReplyReceived {
        /// The command the reply belongs to.
        command: SessionCommand,
        /// Session ID the command was issued under.
        session_id: Uuid,
        /// The peer's reply.
        reply: CommandReply,
    },
    /// A previously sent command failed at the channel level.
    SendFailed {
        /// The command that failed.
        command: SessionCommand,
        /// Session ID the command was issued under.
        session_id: Uuid,
        /// What went wrong.
        error: AppError,
    },
    /// The peer handed off a file.
    FileReceived(IncomingTransfer),
    /// A background ingest of a received file finished.
    TransferFinished(AppResult<PayloadSnapshot>),
}
