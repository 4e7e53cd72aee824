//! Command wire protocol.
//!
//! Requests and replies each carry a single fixed key with an opaque
//! token value. The channel moving them is token-agnostic; only the
//! recording controller assigns meaning to `start`/`stop` and their
//! acknowledgements.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Commands the recording controller can issue to the peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Begin a remote recording session.
    Start,
    /// End the remote recording session.
    Stop,
}

impl SessionCommand {
    /// Token carried in the outbound request.
    pub fn token(self) -> &'static str {
        match self {
            SessionCommand::Start => "start",
            SessionCommand::Stop => "stop",
        }
    }

    /// Reply token that confirms this command was processed.
    pub fn ack_token(self) -> &'static str {
        match self {
            SessionCommand::Start => "start_ok",
            SessionCommand::Stop => "stop_ok",
        }
    }
}

impl fmt::Display for SessionCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Outbound command request: one fixed key, one token value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandRequest {
    /// The requested command token.
    pub command: String,
}

impl CommandRequest {
    /// Build a request around a command token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            command: token.into(),
        }
    }
}

/// Reply to a command request.
///
/// The token may be absent: the peer answered but said nothing this side
/// recognizes. That is distinct from a channel-level failure, which never
/// produces a reply at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandReply {
    /// The reply token, if the peer supplied one.
    pub command: Option<String>,
}

impl CommandReply {
    /// Reply carrying a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            command: Some(token.into()),
        }
    }

    /// Reply without a recognizable token.
    pub fn empty() -> Self {
        Self { command: None }
    }

    /// True when this reply is the designated acknowledgement for `command`.
    pub fn acknowledges(&self, command: SessionCommand) -> bool {
        self.command.as_deref() == Some(command.ack_token())
    }
}
